use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::auth::dto::{LoginRequest, SignupRequest};
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo_types::UserRecord;
use crate::auth::session::{Session, SessionManager};
use crate::clock;
use crate::error::{AppError, AppResult};
use crate::storage::KeyValueStore;

pub const MIN_PASSWORD_LEN: usize = 6;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Accounts keyed by lowercase email.
#[derive(Clone)]
pub struct CredentialStore {
    store: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, payload), fields(email = %payload.email))]
    pub async fn signup(&self, mut payload: SignupRequest) -> AppResult<UserRecord> {
        payload.name = payload.name.trim().to_string();
        payload.email = normalize_email(&payload.email);

        if payload.name.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
            warn!("signup with missing fields");
            return Err(AppError::validation("Please fill in all fields."));
        }

        if !is_valid_email(&payload.email) {
            warn!(email = %payload.email, "invalid email");
            return Err(AppError::validation("Please enter a valid email address."));
        }

        if payload.password.chars().count() < MIN_PASSWORD_LEN {
            warn!("password too short");
            return Err(AppError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            )));
        }

        let mut users = UserRecord::load_all(self.store.as_ref()).await?;
        if users.contains_key(&payload.email) {
            warn!(email = %payload.email, "email already registered");
            return Err(AppError::DuplicateAccount(payload.email));
        }

        let user = UserRecord {
            name: payload.name,
            email: payload.email,
            password_hash: hash_password(&payload.password)?,
            signup_date: clock::now(),
        };
        users.insert(user.email.clone(), user.clone());
        UserRecord::save_all(self.store.as_ref(), &users).await?;

        info!(email = %user.email, "user registered");
        Ok(user)
    }

    /// Verifies the credentials and starts a session for the account.
    #[instrument(skip(self, sessions, payload), fields(email = %payload.email))]
    pub async fn login(
        &self,
        sessions: &SessionManager,
        mut payload: LoginRequest,
    ) -> AppResult<Session> {
        payload.email = normalize_email(&payload.email);

        if payload.email.is_empty() || payload.password.is_empty() {
            return Err(AppError::validation("Please fill in all fields."));
        }

        if !is_valid_email(&payload.email) {
            warn!(email = %payload.email, "invalid email");
            return Err(AppError::validation("Please enter a valid email address."));
        }

        let user = match UserRecord::find_by_email(self.store.as_ref(), &payload.email).await? {
            Some(u) => u,
            None => {
                warn!(email = %payload.email, "login unknown email");
                return Err(AppError::NotFound(payload.email));
            }
        };

        if !verify_password(&payload.password, &user.password_hash)? {
            warn!(email = %payload.email, "login invalid password");
            return Err(AppError::InvalidCredentials);
        }

        let session = sessions.start(&user).await?;
        info!(email = %user.email, "user logged in");
        Ok(session)
    }

    pub async fn find(&self, email: &str) -> AppResult<Option<UserRecord>> {
        Ok(UserRecord::find_by_email(self.store.as_ref(), &normalize_email(email)).await?)
    }

    /// All accounts, oldest signup first.
    pub async fn list_all(&self) -> AppResult<Vec<UserRecord>> {
        let mut users: Vec<UserRecord> = UserRecord::load_all(self.store.as_ref())
            .await?
            .into_values()
            .collect();
        users.sort_by(|a, b| {
            a.signup_date
                .cmp(&b.signup_date)
                .then_with(|| a.email.cmp(&b.email))
        });
        Ok(users)
    }
}
