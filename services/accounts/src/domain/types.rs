use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account record as seen by the core. `password_hash` never leaves the service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile attributes, 1:1 with a user and mutable only by its owner.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Server-side session record, stored in Redis under `session:{token}`.
/// The role flag is captured at login so admin checks skip the user store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub is_admin: bool,
}

/// OTP entry time-to-live in seconds.
pub const OTP_TTL_SECS: u64 = 300;

/// OTP code length in digits.
pub const OTP_LEN: usize = 6;

/// Session time-to-live in seconds (14 days).
pub const SESSION_TTL_SECS: u64 = 1_209_600;

/// Session token length in characters.
pub const SESSION_TOKEN_LEN: usize = 32;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Username rules: 3–30 chars, ASCII letters, digits, `-` or `_`.
pub fn validate_username(username: &str) -> bool {
    (3..=30).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Format check only; deliverability is the mail provider's problem.
pub fn validate_email(email: &str) -> bool {
    if email.len() > 254 || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
