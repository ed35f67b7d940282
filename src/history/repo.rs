use crate::error::StorageError;
use crate::history::repo_types::HistoryEntry;
use crate::storage::{get_json, keys, set_json, KeyValueStore};

/// Newest-first entries for `email`; empty when nothing was recorded.
pub async fn list_by_user(
    store: &dyn KeyValueStore,
    email: &str,
) -> Result<Vec<HistoryEntry>, StorageError> {
    Ok(get_json::<Vec<HistoryEntry>>(store, &keys::history(email))
        .await?
        .unwrap_or_default())
}

pub async fn save_for_user(
    store: &dyn KeyValueStore,
    email: &str,
    entries: &[HistoryEntry],
) -> Result<(), StorageError> {
    set_json(store, &keys::history(email), entries).await
}
