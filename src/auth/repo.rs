use std::collections::BTreeMap;

use crate::auth::repo_types::UserRecord;
use crate::error::StorageError;
use crate::storage::{get_json, keys, set_json, KeyValueStore};

pub type UserMap = BTreeMap<String, UserRecord>;

impl UserRecord {
    /// Load every account, keyed by lowercase email.
    pub async fn load_all(store: &dyn KeyValueStore) -> Result<UserMap, StorageError> {
        Ok(get_json::<UserMap>(store, keys::USERS)
            .await?
            .unwrap_or_default())
    }

    /// Find a user by (already normalized) email.
    pub async fn find_by_email(
        store: &dyn KeyValueStore,
        email: &str,
    ) -> Result<Option<UserRecord>, StorageError> {
        let mut users = Self::load_all(store).await?;
        Ok(users.remove(email))
    }

    /// Write back the full account map.
    pub async fn save_all(store: &dyn KeyValueStore, users: &UserMap) -> Result<(), StorageError> {
        set_json(store, keys::USERS, users).await
    }
}
