use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::{User, validate_email, validate_username};
use crate::error::{AccountsServiceError, FieldErrors};

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, AccountsServiceError> {
        self.repo.list().await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, AccountsServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AccountsServiceError::UserNotFound)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserInput {
    pub username: String,
    pub email: String,
}

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateUserInput,
    ) -> Result<User, AccountsServiceError> {
        let mut user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(AccountsServiceError::UserNotFound)?;

        let mut errors = FieldErrors::new();
        if !validate_username(&input.username) {
            errors.push("username", "3-30 characters: letters, digits, '-' or '_'");
        }
        if !validate_email(&input.email) {
            errors.push("email", "enter a valid email address");
        }

        // Uniqueness excluding the target itself, so a no-op rename passes.
        if errors.is_empty() {
            if let Some(existing) = self.repo.find_by_username(&input.username).await? {
                if existing.id != user_id {
                    errors.push("username", "already taken");
                }
            }
            if let Some(existing) = self.repo.find_by_email(&input.email).await? {
                if existing.id != user_id {
                    errors.push("email", "already registered");
                }
            }
        }
        errors.into_result()?;

        let now = Utc::now();
        self.repo
            .update_identity(user_id, &input.username, &input.email, now)
            .await?;

        user.username = input.username;
        user.email = input.email;
        user.updated_at = now;
        Ok(user)
    }
}
