use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::{
    MIN_PASSWORD_LEN, User, UserProfile, validate_email, validate_username,
};
use crate::error::{AccountsServiceError, FieldErrors};
use crate::password::hash_password;

pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub full_name: String,
    pub bio: Option<String>,
}

pub struct RegisterUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> RegisterUseCase<U> {
    /// Validation runs to completion before any write, so a rejected
    /// registration leaves the store untouched.
    pub async fn execute(&self, input: RegisterInput) -> Result<(), AccountsServiceError> {
        let mut errors = FieldErrors::new();
        if !validate_username(&input.username) {
            errors.push("username", "3-30 characters: letters, digits, '-' or '_'");
        }
        if !validate_email(&input.email) {
            errors.push("email", "enter a valid email address");
        }
        if input.password.len() < MIN_PASSWORD_LEN {
            errors.push("password", "must be at least 8 characters");
        }
        if input.password != input.password_confirm {
            errors.push("password_confirm", "passwords do not match");
        }
        if input.full_name.trim().is_empty() {
            errors.push("full_name", "this field is required");
        }

        // Uniqueness only makes sense for well-formed identifiers.
        if errors.is_empty() {
            if self.users.find_by_username(&input.username).await?.is_some() {
                errors.push("username", "already taken");
            }
            if self.users.find_by_email(&input.email).await?.is_some() {
                errors.push("email", "already registered");
            }
        }
        errors.into_result()?;

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            username: input.username,
            email: input.email,
            password_hash: hash_password(&input.password)?,
            is_admin: false,
            created_at: now,
            updated_at: now,
        };
        let profile = UserProfile {
            id: Uuid::now_v7(),
            user_id: user.id,
            full_name: input.full_name,
            bio: input.bio,
            created_at: now,
            updated_at: now,
        };
        self.users.create_with_profile(&user, &profile).await
    }
}
