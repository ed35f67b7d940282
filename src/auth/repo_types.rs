use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Registered account as persisted in the `users` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,                 // display name
    pub email: String,                // lowercase, unique key
    pub password_hash: String,        // Argon2 PHC string
    #[serde(with = "crate::clock::iso_millis")]
    pub signup_date: OffsetDateTime,  // creation timestamp
}
