use rand::RngExt;

use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::types::{SESSION_TOKEN_LEN, SESSION_TTL_SECS, Session};
use crate::error::AccountsServiceError;
use crate::password::verify_password;

/// Charset for session tokens (alphanumeric, both cases).
const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

fn generate_session_token() -> String {
    let mut rng = rand::rng();
    (0..SESSION_TOKEN_LEN)
        .map(|_| TOKEN_CHARSET[rng.random_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
    pub username: String,
}

pub struct LoginUseCase<U: UserRepository, S: SessionStore> {
    pub users: U,
    pub sessions: S,
}

impl<U: UserRepository, S: SessionStore> LoginUseCase<U, S> {
    /// Unknown user and wrong password are indistinguishable to the caller.
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, AccountsServiceError> {
        let user = self
            .users
            .find_by_username(&input.username)
            .await?
            .ok_or(AccountsServiceError::InvalidCredentials)?;

        if !verify_password(&input.password, &user.password_hash)? {
            return Err(AccountsServiceError::InvalidCredentials);
        }

        let token = generate_session_token();
        let session = Session {
            user_id: user.id,
            is_admin: user.is_admin,
        };
        self.sessions
            .create(&token, &session, SESSION_TTL_SECS)
            .await?;

        Ok(LoginOutput {
            token,
            username: user.username,
        })
    }
}

// ── Logout ───────────────────────────────────────────────────────────────────

pub struct LogoutUseCase<S: SessionStore> {
    pub sessions: S,
}

impl<S: SessionStore> LogoutUseCase<S> {
    pub async fn execute(&self, token: &str) -> Result<(), AccountsServiceError> {
        self.sessions.delete(token).await
    }
}
