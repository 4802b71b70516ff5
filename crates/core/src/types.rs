/// All entity identifiers are server-assigned strings
/// (e.g. `CLT-20251109-170052` for clients).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
