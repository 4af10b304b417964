/// Todo ids are sequential integers allocated by the store, starting at 1.
pub type TodoId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
