//! Domain logic for the shelfmark book tracker.
//!
//! Pure, I/O-free building blocks shared by the database and API crates:
//! genre classification, reading-status derivation, and goal progress.

pub mod error;
pub mod genre;
pub mod reading;
pub mod types;
