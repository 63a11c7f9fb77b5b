use crate::domain::repository::UserRepository;
use crate::domain::types::{MIN_PASSWORD_LEN, validate_email};
use crate::error::{AccountsServiceError, FieldErrors};
use crate::password::hash_password;

pub struct ChangePasswordInput {
    pub email: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Not bound to a session or a validated OTP; the OTP flow and this endpoint
/// are independent.
pub struct ChangePasswordUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> ChangePasswordUseCase<U> {
    pub async fn execute(&self, input: ChangePasswordInput) -> Result<(), AccountsServiceError> {
        let mut errors = FieldErrors::new();
        if !validate_email(&input.email) {
            errors.push("email", "enter a valid email address");
        }
        if input.new_password.len() < MIN_PASSWORD_LEN {
            errors.push("new_password", "must be at least 8 characters");
        }
        if input.new_password != input.confirm_password {
            errors.push("confirm_password", "passwords do not match");
        }
        errors.into_result()?;

        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or_else(|| {
                AccountsServiceError::validation("email", "no account with this email")
            })?;

        let hash = hash_password(&input.new_password)?;
        self.users.update_password(user.id, &hash).await
    }
}
