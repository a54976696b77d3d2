pub mod books;
pub mod search;
pub mod shelf;
pub mod stats;
