use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

use crate::error::{AppError, AppResult};

pub fn hash_password(plain: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            AppError::Hashing(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        AppError::Hashing(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo_types::UserRecord;
    use crate::auth::services::MIN_PASSWORD_LEN;
    use crate::clock;

    #[test]
    fn shortest_allowed_password_verifies() {
        let password = "a".repeat(MIN_PASSWORD_LEN);
        let hash = hash_password(&password).unwrap();
        assert!(verify_password(&password, &hash).unwrap());
        assert!(!verify_password(&password[1..], &hash).unwrap());
    }

    #[test]
    fn hash_read_back_from_stored_record_verifies() {
        let record = UserRecord {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            password_hash: hash_password("secret1").unwrap(),
            signup_date: clock::now(),
        };
        let stored = serde_json::to_string(&record).unwrap();
        let loaded: UserRecord = serde_json::from_str(&stored).unwrap();
        assert!(verify_password("secret1", &loaded.password_hash).unwrap());
        assert!(!verify_password("Secret1", &loaded.password_hash).unwrap());
    }

    #[test]
    fn non_ascii_password_is_hashed_as_utf8() {
        let hash = hash_password("pässwörd").unwrap();
        assert!(verify_password("pässwörd", &hash).unwrap());
        assert!(!verify_password("passwort", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_password("hunter22").unwrap();
        let b = hash_password("hunter22").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2id$"));
    }

    #[test]
    fn verify_errors_on_legacy_encoding() {
        // base64 of "secret1", the old reversible scheme
        let err = verify_password("secret1", "c2VjcmV0MQ==").unwrap_err();
        assert!(matches!(err, AppError::Hashing(_)));
    }
}
