use serde::Serialize;
use time::OffsetDateTime;

use crate::auth::UserRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: usize,
    pub new_users_this_week: usize,
    #[serde(rename = "totalQRCodes")]
    pub total_qr_codes: usize,
}

/// Directory row for the admin screen; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub name: String,
    pub email: String,
    #[serde(with = "crate::clock::iso_millis")]
    pub signup_date: OffsetDateTime,
}

impl From<UserRecord> for UserSummary {
    fn from(u: UserRecord) -> Self {
        Self {
            name: u.name,
            email: u.email,
            signup_date: u.signup_date,
        }
    }
}
