use std::sync::Arc;

use qrkit::auth::{LoginRequest, SignupRequest};
use qrkit::config::AppConfig;
use qrkit::storage::{KeyValueStore, SqliteStore};
use qrkit::AppState;

async fn state_for(url: &str) -> AppState {
    let store = SqliteStore::connect(url).await.expect("connect sqlite");
    AppState::from_parts(
        Arc::new(AppConfig {
            database_url: url.to_string(),
            in_memory: false,
        }),
        Arc::new(store),
    )
}

#[tokio::test]
async fn sqlite_upserts_and_removes() {
    let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), None);
    store.set("k", "one").await.unwrap();
    store.set("k", "two").await.unwrap();
    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("two"));
    store.remove("k").await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), None);
}

#[tokio::test]
async fn session_and_history_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("qrkit.db").display());

    {
        let state = state_for(&url).await;
        state
            .credentials()
            .signup(SignupRequest::new("Jane", "jane@example.com", "secret1"))
            .await
            .unwrap();
        state
            .credentials()
            .login(&state.sessions(), LoginRequest::new("jane@example.com", "secret1"))
            .await
            .unwrap();
        state
            .history()
            .append("jane@example.com", "persisted", false)
            .await
            .unwrap();
    }

    let state = state_for(&url).await;
    let session = state
        .sessions()
        .current()
        .await
        .unwrap()
        .expect("session restored");
    assert_eq!(session.email(), "jane@example.com");

    let history = state.history().list(session.email()).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].data, "persisted");

    let stats = state.admin().compute_stats().await.unwrap();
    assert_eq!(stats.total_users, 1);
    assert_eq!(stats.new_users_this_week, 1);
    assert_eq!(stats.total_qr_codes, 1);
}
