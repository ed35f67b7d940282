use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::auth::repo_types::UserRecord;
use crate::error::StorageError;
use crate::storage::{get_json, keys, set_json, KeyValueStore};

/// The authenticated identity for this device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: UserRecord,
}

impl Session {
    pub fn user(&self) -> &UserRecord {
        &self.user
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }

    pub fn into_user(self) -> UserRecord {
        self.user
    }
}

/// Single-slot session persisted under `currentUser`.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Replaces any existing session.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn start(&self, user: &UserRecord) -> Result<Session, StorageError> {
        set_json(self.store.as_ref(), keys::CURRENT_USER, user).await?;
        info!("session started");
        Ok(Session { user: user.clone() })
    }

    pub async fn current(&self) -> Result<Option<Session>, StorageError> {
        let user = get_json::<UserRecord>(self.store.as_ref(), keys::CURRENT_USER).await?;
        Ok(user.map(|user| Session { user }))
    }

    pub async fn end(&self) -> Result<(), StorageError> {
        self.store.remove(keys::CURRENT_USER).await?;
        debug!("session cleared");
        Ok(())
    }
}
