use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::authz::{self, Access, SessionToken};
use crate::domain::types::UserProfile;
use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::profile::{
    GetProfileUseCase, UpdateProfileInput, UpdateProfileUseCase,
};

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub full_name: String,
    pub bio: Option<String>,
    #[serde(serialize_with = "aegis_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "aegis_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            full_name: profile.full_name,
            bio: profile.bio,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

// ── GET /profiles/{id} ───────────────────────────────────────────────────────

pub async fn get_profile(
    token: SessionToken,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AccountsServiceError> {
    let caller = authz::authenticate(&state.session_store(), &token).await?;
    authz::require_owner_or_read_only(&caller, id, Access::Read)?;

    let usecase = GetProfileUseCase {
        repo: state.profile_repo(),
    };
    let profile = usecase.execute(id).await?;
    Ok(Json(ProfileResponse::from(profile)))
}

// ── PUT /profiles/{id} ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: String,
    pub bio: Option<String>,
}

pub async fn update_profile(
    token: SessionToken,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AccountsServiceError> {
    let caller = authz::authenticate(&state.session_store(), &token).await?;

    // A profile's owner is only known after the fetch; the write itself is
    // still gated before any mutation.
    let usecase = GetProfileUseCase {
        repo: state.profile_repo(),
    };
    let profile = usecase.execute(id).await?;
    authz::require_owner_or_read_only(&caller, profile.user_id, Access::Write)?;

    let usecase = UpdateProfileUseCase {
        repo: state.profile_repo(),
    };
    let profile = usecase
        .execute(
            id,
            UpdateProfileInput {
                full_name: body.full_name,
                bio: body.bio,
            },
        )
        .await?;
    Ok(Json(ProfileResponse::from(profile)))
}
