#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Session, User, UserProfile};
use crate::error::AccountsServiceError;

/// Repository for account records (the credential store).
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, AccountsServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountsServiceError>;

    async fn find_by_username(&self, username: &str)
    -> Result<Option<User>, AccountsServiceError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountsServiceError>;

    /// Insert the user and its profile atomically (same transaction).
    async fn create_with_profile(
        &self,
        user: &User,
        profile: &UserProfile,
    ) -> Result<(), AccountsServiceError>;

    async fn update_identity(
        &self,
        id: Uuid,
        username: &str,
        email: &str,
        updated_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), AccountsServiceError>;

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AccountsServiceError>;
}

/// Repository for user profiles.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, AccountsServiceError>;

    async fn update(
        &self,
        id: Uuid,
        full_name: &str,
        bio: Option<&str>,
        updated_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), AccountsServiceError>;
}

/// Key-value cache for pending OTP codes, one live entry per recipient.
/// `put` overwrites unconditionally; expiry is the store's job (per-key TTL).
pub trait OtpCache: Send + Sync {
    async fn put(
        &self,
        email: &str,
        code: &str,
        ttl_secs: u64,
    ) -> Result<(), AccountsServiceError>;

    /// `None` means expired or never issued; the caller cannot tell the two apart.
    async fn get(&self, email: &str) -> Result<Option<String>, AccountsServiceError>;

    async fn delete(&self, email: &str) -> Result<(), AccountsServiceError>;
}

/// Store for login sessions (Redis, TTL-bound).
pub trait SessionStore: Send + Sync {
    async fn create(
        &self,
        token: &str,
        session: &Session,
        ttl_secs: u64,
    ) -> Result<(), AccountsServiceError>;

    async fn find(&self, token: &str) -> Result<Option<Session>, AccountsServiceError>;

    async fn delete(&self, token: &str) -> Result<(), AccountsServiceError>;
}
