use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;

use crate::domain::repository::{OtpCache, SessionStore};
use crate::domain::types::Session;
use crate::error::AccountsServiceError;

fn otp_key(email: &str) -> String {
    format!("otp:{email}")
}

fn session_key(token: &str) -> String {
    format!("session:{token}")
}

// ── OTP cache ────────────────────────────────────────────────────────────────

/// `SET EX` replaces any live entry for the key, which is exactly the
/// "latest code wins" contract. Expiry is Redis's job; no manual sweep.
#[derive(Clone)]
pub struct RedisOtpCache {
    pub pool: Pool,
}

impl OtpCache for RedisOtpCache {
    async fn put(
        &self,
        email: &str,
        code: &str,
        ttl_secs: u64,
    ) -> Result<(), AccountsServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AccountsServiceError::Internal(e.into()))?;
        let (): () = conn
            .set_ex(otp_key(email), code, ttl_secs)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| {
                AccountsServiceError::Internal(e.into())
            })?;
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<String>, AccountsServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AccountsServiceError::Internal(e.into()))?;
        let value: Option<String> = conn
            .get(otp_key(email))
            .await
            .map_err(|e| AccountsServiceError::Internal(e.into()))?;
        Ok(value)
    }

    async fn delete(&self, email: &str) -> Result<(), AccountsServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AccountsServiceError::Internal(e.into()))?;
        let (): () = conn
            .del(otp_key(email))
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| {
                AccountsServiceError::Internal(e.into())
            })?;
        Ok(())
    }
}

// ── Session store ────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct RedisSessionStore {
    pub pool: Pool,
}

impl SessionStore for RedisSessionStore {
    async fn create(
        &self,
        token: &str,
        session: &Session,
        ttl_secs: u64,
    ) -> Result<(), AccountsServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AccountsServiceError::Internal(e.into()))?;
        let value =
            serde_json::to_string(session).map_err(|e| AccountsServiceError::Internal(e.into()))?;
        let (): () = conn
            .set_ex(session_key(token), value, ttl_secs)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| {
                AccountsServiceError::Internal(e.into())
            })?;
        Ok(())
    }

    async fn find(&self, token: &str) -> Result<Option<Session>, AccountsServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AccountsServiceError::Internal(e.into()))?;
        let value: Option<String> = conn
            .get(session_key(token))
            .await
            .map_err(|e| AccountsServiceError::Internal(e.into()))?;
        match value {
            Some(json) => {
                let session = serde_json::from_str(&json)
                    .map_err(|e| AccountsServiceError::Internal(e.into()))?;
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, token: &str) -> Result<(), AccountsServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AccountsServiceError::Internal(e.into()))?;
        let (): () = conn
            .del(session_key(token))
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| {
                AccountsServiceError::Internal(e.into())
            })?;
        Ok(())
    }
}
