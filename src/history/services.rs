use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use crate::auth::services::normalize_email;
use crate::clock;
use crate::error::AppResult;
use crate::history::repo::{list_by_user, save_for_user};
use crate::history::repo_types::HistoryEntry;
use crate::storage::KeyValueStore;

/// Next entry id: the creation time in millis, bumped past the newest
/// existing id so ids stay unique within one clock tick.
pub(crate) fn next_id(now: OffsetDateTime, newest: Option<i64>) -> i64 {
    let millis = (now.unix_timestamp_nanos() / 1_000_000) as i64;
    match newest {
        Some(id) if id >= millis => id + 1,
        _ => millis,
    }
}

/// Per-user, newest-first record of QR payloads.
#[derive(Clone)]
pub struct HistoryLedger {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryLedger {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn append(&self, email: &str, data: &str, scanned: bool) -> AppResult<HistoryEntry> {
        let email = normalize_email(email);
        let mut entries = list_by_user(self.store.as_ref(), &email).await?;

        let now = clock::now();
        let entry = HistoryEntry {
            id: next_id(now, entries.first().map(|e| e.id)),
            data: data.to_string(),
            scanned,
            date: now,
        };
        entries.insert(0, entry.clone());
        save_for_user(self.store.as_ref(), &email, &entries).await?;

        info!(%email, id = entry.id, scanned, "history entry added");
        Ok(entry)
    }

    pub async fn list(&self, email: &str) -> AppResult<Vec<HistoryEntry>> {
        Ok(list_by_user(self.store.as_ref(), &normalize_email(email)).await?)
    }

    pub async fn count(&self, email: &str) -> AppResult<usize> {
        Ok(self.list(email).await?.len())
    }

    /// Deleting an unknown id leaves the history untouched.
    #[instrument(skip(self))]
    pub async fn remove(&self, email: &str, id: i64) -> AppResult<()> {
        let email = normalize_email(email);
        let mut entries = list_by_user(self.store.as_ref(), &email).await?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            debug!(%email, id, "history entry not found; nothing to delete");
            return Ok(());
        }
        save_for_user(self.store.as_ref(), &email, &entries).await?;
        info!(%email, id, "history entry deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, email: &str) -> AppResult<()> {
        let email = normalize_email(email);
        save_for_user(self.store.as_ref(), &email, &[]).await?;
        info!(%email, "history cleared");
        Ok(())
    }
}
