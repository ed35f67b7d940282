use time::{Duration, OffsetDateTime};
use tracing::{debug, instrument, warn};

use crate::admin::dto::{AdminStats, UserSummary};
use crate::auth::CredentialStore;
use crate::error::AppResult;
use crate::history::HistoryLedger;

pub const NEW_USER_WINDOW: Duration = Duration::days(7);

/// Read-only rollup across every account.
#[derive(Clone)]
pub struct AdminAggregator {
    credentials: CredentialStore,
    history: HistoryLedger,
}

impl AdminAggregator {
    pub fn new(credentials: CredentialStore, history: HistoryLedger) -> Self {
        Self {
            credentials,
            history,
        }
    }

    pub async fn compute_stats(&self) -> AppResult<AdminStats> {
        self.compute_stats_at(OffsetDateTime::now_utc()).await
    }

    /// History that cannot be read for a user is logged and left out of
    /// `total_qr_codes`.
    #[instrument(skip(self))]
    pub async fn compute_stats_at(&self, now: OffsetDateTime) -> AppResult<AdminStats> {
        let users = self.credentials.list_all().await?;
        let cutoff = now - NEW_USER_WINDOW;

        let new_users_this_week = users.iter().filter(|u| u.signup_date > cutoff).count();

        let mut total_qr_codes = 0;
        for user in &users {
            match self.history.count(&user.email).await {
                Ok(n) => total_qr_codes += n,
                Err(e) => {
                    warn!(email = %user.email, error = %e, "skipping unreadable history");
                }
            }
        }

        let stats = AdminStats {
            total_users: users.len(),
            new_users_this_week,
            total_qr_codes,
        };
        debug!(?stats, "admin stats computed");
        Ok(stats)
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserSummary>> {
        Ok(self
            .credentials
            .list_all()
            .await?
            .into_iter()
            .map(UserSummary::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use serde_json::json;
    use time::macros::datetime;

    use super::*;
    use crate::storage::{keys, KeyValueStore, MemoryStore};

    fn user_json(name: &str, email: &str, signup: &str) -> serde_json::Value {
        json!({
            "name": name,
            "email": email,
            "passwordHash": "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaA",
            "signupDate": signup,
        })
    }

    fn history_json(n: usize) -> String {
        let entries: Vec<_> = (0..n)
            .map(|i| {
                json!({
                    "id": 1_700_000_000_000i64 + i as i64,
                    "data": format!("payload {i}"),
                    "scanned": i % 2 == 0,
                    "date": "2024-05-01T10:00:00.000Z",
                })
            })
            .collect();
        serde_json::to_string(&entries).unwrap()
    }

    async fn seed(store: &MemoryStore) {
        let mut users = BTreeMap::new();
        users.insert("old@example.com", user_json("Old", "old@example.com", "2024-04-21T12:00:00.000Z"));
        users.insert("a@example.com", user_json("A", "a@example.com", "2024-04-30T12:00:00.000Z"));
        users.insert("b@example.com", user_json("B", "b@example.com", "2024-04-30T18:30:00.000Z"));
        store
            .set(keys::USERS, &serde_json::to_string(&users).unwrap())
            .await
            .unwrap();
        store.set(&keys::history("old@example.com"), &history_json(4)).await.unwrap();
        store.set(&keys::history("a@example.com"), &history_json(3)).await.unwrap();
    }

    fn aggregator(store: Arc<MemoryStore>) -> AdminAggregator {
        AdminAggregator::new(
            CredentialStore::new(store.clone()),
            HistoryLedger::new(store),
        )
    }

    #[tokio::test]
    async fn stats_count_users_new_signups_and_codes() {
        let store = Arc::new(MemoryStore::new());
        seed(&store).await;
        let stats = aggregator(store)
            .compute_stats_at(datetime!(2024-05-01 12:00 UTC))
            .await
            .unwrap();
        assert_eq!(
            stats,
            AdminStats {
                total_users: 3,
                new_users_this_week: 2,
                total_qr_codes: 7,
            }
        );
    }

    #[tokio::test]
    async fn signup_exactly_at_cutoff_is_not_new() {
        let store = Arc::new(MemoryStore::new());
        seed(&store).await;
        // "old" signed up exactly seven days before this instant.
        let stats = aggregator(store)
            .compute_stats_at(datetime!(2024-04-28 12:00 UTC))
            .await
            .unwrap();
        assert_eq!(stats.new_users_this_week, 2);
    }

    #[tokio::test]
    async fn unreadable_history_is_skipped() {
        let store = Arc::new(MemoryStore::new());
        seed(&store).await;
        store
            .set(&keys::history("a@example.com"), "[{broken")
            .await
            .unwrap();
        let stats = aggregator(store)
            .compute_stats_at(datetime!(2024-05-01 12:00 UTC))
            .await
            .unwrap();
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.total_qr_codes, 4);
    }

    #[tokio::test]
    async fn orphaned_history_is_not_counted() {
        let store = Arc::new(MemoryStore::new());
        seed(&store).await;
        store
            .set(&keys::history("ghost@example.com"), &history_json(10))
            .await
            .unwrap();
        let stats = aggregator(store)
            .compute_stats_at(datetime!(2024-05-01 12:00 UTC))
            .await
            .unwrap();
        assert_eq!(stats.total_qr_codes, 7);
    }

    #[tokio::test]
    async fn user_directory_is_oldest_first_without_hashes() {
        let store = Arc::new(MemoryStore::new());
        seed(&store).await;
        let users = aggregator(store).list_users().await.unwrap();
        let emails: Vec<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, ["old@example.com", "a@example.com", "b@example.com"]);
        let json = serde_json::to_string(&users[0]).unwrap();
        assert!(!json.contains("passwordHash"));
        assert!(json.contains("signupDate"));
    }

    #[tokio::test]
    async fn empty_store_gives_zeroes() {
        let stats = aggregator(Arc::new(MemoryStore::new()))
            .compute_stats()
            .await
            .unwrap();
        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.new_users_this_week, 0);
        assert_eq!(stats.total_qr_codes, 0);
    }
}
