/// All entity ids are sequential 64-bit integers assigned by the store.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
