use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One generated or scanned payload in a user's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,       // unix millis at creation, unique per user
    pub data: String,  // encoded payload
    pub scanned: bool, // true when produced by a scan
    #[serde(with = "crate::clock::iso_millis")]
    pub date: OffsetDateTime,
}
