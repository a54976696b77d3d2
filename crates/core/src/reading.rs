//! Reading-status derivation and annual goal progress.
//!
//! A book's place on the shelf is derived entirely from its two date
//! fields; nothing else is stored. Finishing a book never requires
//! clearing the start date, and vice versa.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Where a book sits in the reading lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    /// No start or finish date recorded.
    ToRead,
    /// Started but not finished.
    Reading,
    /// Finish date recorded. A finish date alone is enough; the start
    /// date may legitimately be missing for books logged after the fact.
    Finished,
}

/// Derive the reading status from the two optional date fields.
pub fn reading_status(
    date_started: Option<NaiveDate>,
    date_finished: Option<NaiveDate>,
) -> ReadingStatus {
    match (date_started, date_finished) {
        (_, Some(_)) => ReadingStatus::Finished,
        (Some(_), None) => ReadingStatus::Reading,
        (None, None) => ReadingStatus::ToRead,
    }
}

/// Progress toward an annual reading goal.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GoalProgress {
    /// Configured number of books for the year.
    pub goal: u32,
    /// Books finished so far this year.
    pub finished: u32,
    /// Whole-number percentage, capped at 100.
    pub percent: u32,
}

/// Compute goal progress from a finished-this-year count.
///
/// A goal of zero reports 100% once anything is finished, 0% otherwise,
/// rather than dividing by zero.
pub fn goal_progress(goal: u32, finished: u32) -> GoalProgress {
    let percent = if goal == 0 {
        if finished > 0 { 100 } else { 0 }
    } else {
        (finished * 100 / goal).min(100)
    };
    GoalProgress {
        goal,
        finished,
        percent,
    }
}

/// Whether a finish date falls in the given calendar year.
pub fn finished_in_year(date_finished: Option<NaiveDate>, year: i32) -> bool {
    date_finished.is_some_and(|d| d.year() == year)
}
