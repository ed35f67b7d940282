use std::sync::Arc;

use crate::admin::AdminAggregator;
use crate::auth::{CredentialStore, SessionManager};
use crate::config::AppConfig;
use crate::history::HistoryLedger;
use crate::qr::QrActions;
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn KeyValueStore>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let store = if config.in_memory {
            Arc::new(MemoryStore::new()) as Arc<dyn KeyValueStore>
        } else {
            Arc::new(SqliteStore::connect(&config.database_url).await?) as Arc<dyn KeyValueStore>
        };

        Ok(Self { config, store })
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Arc<dyn KeyValueStore>) -> Self {
        Self { config, store }
    }

    pub fn in_memory() -> Self {
        let config = Arc::new(AppConfig {
            in_memory: true,
            ..AppConfig::default()
        });
        Self {
            config,
            store: Arc::new(MemoryStore::new()),
        }
    }

    pub fn credentials(&self) -> CredentialStore {
        CredentialStore::new(self.store.clone())
    }

    pub fn sessions(&self) -> SessionManager {
        SessionManager::new(self.store.clone())
    }

    pub fn history(&self) -> HistoryLedger {
        HistoryLedger::new(self.store.clone())
    }

    pub fn admin(&self) -> AdminAggregator {
        AdminAggregator::new(self.credentials(), self.history())
    }

    pub fn qr(&self) -> QrActions {
        QrActions::new(self.sessions(), self.history())
    }
}
