use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ProfileRepository;
use crate::domain::types::UserProfile;
use crate::error::{AccountsServiceError, FieldErrors};

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> GetProfileUseCase<R> {
    pub async fn execute(&self, profile_id: Uuid) -> Result<UserProfile, AccountsServiceError> {
        self.repo
            .find_by_id(profile_id)
            .await?
            .ok_or(AccountsServiceError::ProfileNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub full_name: String,
    pub bio: Option<String>,
}

pub struct UpdateProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> UpdateProfileUseCase<R> {
    pub async fn execute(
        &self,
        profile_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<UserProfile, AccountsServiceError> {
        let mut profile = self
            .repo
            .find_by_id(profile_id)
            .await?
            .ok_or(AccountsServiceError::ProfileNotFound)?;

        let mut errors = FieldErrors::new();
        if input.full_name.trim().is_empty() {
            errors.push("full_name", "this field is required");
        }
        errors.into_result()?;

        let now = Utc::now();
        self.repo
            .update(profile_id, &input.full_name, input.bio.as_deref(), now)
            .await?;

        profile.full_name = input.full_name;
        profile.bio = input.bio;
        profile.updated_at = now;
        Ok(profile)
    }
}
