/// Database primary-key type. SQLite rowids are 64-bit integers.
pub type DbId = i64;

/// Timestamp type used for audit columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
