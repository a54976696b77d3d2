//! Keyword-table genre classification.
//!
//! Catalog APIs return free-text subject strings ("Fantasy fiction",
//! "Detective and mystery stories", "New York Times bestseller", ...).
//! [`classify`] maps such a list to a single shelf label using a fixed,
//! ordered keyword table. Earlier table entries win when subjects match
//! keywords from several genres.

/// Subject strings that carry no genre signal and are dropped before
/// matching. Compared against the full normalized subject.
const IGNORED_SUBJECTS: &[&str] = &[
    "fiction",
    "literature",
    "general",
    "novels",
    "large type books",
    "new york times bestseller",
    "reading level-grade 11",
    "reading level-grade 12",
];

/// Ordered genre table. The first genre whose keyword occurs in any
/// retained subject wins, so broader labels belong further down.
const GENRE_KEYWORDS: &[(&str, &[&str])] = &[
    ("Fantasy", &["fantasy", "magic", "dragons", "wizards", "fae", "mythology"]),
    (
        "Science Fiction",
        &["science fiction", "sci-fi", "space", "dystopia", "time travel", "aliens"],
    ),
    ("Romance", &["romance", "love stories"]),
    ("Mystery", &["mystery", "detective", "crime", "murder"]),
    ("Thriller", &["thriller", "suspense", "espionage"]),
    ("Horror", &["horror", "ghost", "vampires", "occult"]),
    ("Historical Fiction", &["historical fiction", "historical"]),
    ("Young Adult", &["young adult", "teen", "coming of age"]),
    ("Biography", &["biography", "autobiography", "memoir"]),
    ("History", &["history", "world war"]),
    ("Self-Help", &["self-help", "self-improvement", "personal development"]),
    ("Poetry", &["poetry", "poems"]),
    ("Classics", &["classics", "classic"]),
];

/// Label used when no subject yields a genre.
pub const DEFAULT_GENRE: &str = "Fiction";

/// Longest subject string accepted as a fallback label. Catalog subjects
/// can be whole sentences; those make useless shelf labels.
const MAX_FALLBACK_LEN: usize = 30;

/// Classify a list of free-text subject strings into a shelf genre label.
///
/// Subjects are lowercased and trimmed, uninformative ones dropped, then
/// matched against [`GENRE_KEYWORDS`] in table order. When nothing
/// matches, the first retained subject is title-cased and used verbatim,
/// unless it is too long to make a sensible label, in which case
/// [`DEFAULT_GENRE`] is returned.
pub fn classify<S: AsRef<str>>(subjects: &[S]) -> String {
    let retained: Vec<String> = subjects
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty() && !IGNORED_SUBJECTS.contains(&s.as_str()))
        .collect();

    for (label, keywords) in GENRE_KEYWORDS {
        for subject in &retained {
            if keywords.iter().any(|kw| subject.contains(kw)) {
                return (*label).to_string();
            }
        }
    }

    match retained.first() {
        Some(subject) if subject.len() <= MAX_FALLBACK_LEN => title_case(subject),
        _ => DEFAULT_GENRE.to_string(),
    }
}

/// Uppercase the first letter of each whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
