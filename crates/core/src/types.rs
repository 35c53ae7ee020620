/// Record identifiers are SQLite `INTEGER PRIMARY KEY` values assigned by the backend.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
