use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::authz::{self, SessionToken, clear_session_cookie, set_session_cookie};
use crate::error::AccountsServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::auth::{LoginInput, LoginUseCase, LogoutUseCase};
use crate::usecase::password::{ChangePasswordInput, ChangePasswordUseCase};
use crate::usecase::register::{RegisterInput, RegisterUseCase};

// ── POST /login ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub username: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AccountsServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        sessions: state.session_store(),
    };
    let out = usecase
        .execute(LoginInput {
            username: body.username,
            password: body.password,
        })
        .await?;
    let jar = set_session_cookie(jar, out.token, state.cookie_domain.clone());
    Ok((
        jar,
        Json(LoginResponse {
            message: "Login successful",
            username: out.username,
        }),
    ))
}

// ── POST /logout ─────────────────────────────────────────────────────────────

pub async fn logout(
    token: SessionToken,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), AccountsServiceError> {
    authz::authenticate(&state.session_store(), &token).await?;
    let usecase = LogoutUseCase {
        sessions: state.session_store(),
    };
    usecase.execute(&token.0).await?;
    let jar = clear_session_cookie(jar, state.cookie_domain.clone());
    Ok((jar, StatusCode::NO_CONTENT))
}

// ── POST /register ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub full_name: String,
    pub bio: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AccountsServiceError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
    };
    usecase
        .execute(RegisterInput {
            username: body.username,
            email: body.email,
            password: body.password,
            password_confirm: body.password_confirm,
            full_name: body.full_name,
            bio: body.bio,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Register successful",
        }),
    ))
}

// ── POST /password/change ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub email: String,
    pub new_password: String,
    pub confirm_password: String,
}

pub async fn change_password(
    State(state): State<AppState>,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AccountsServiceError> {
    let usecase = ChangePasswordUseCase {
        users: state.user_repo(),
    };
    usecase
        .execute(ChangePasswordInput {
            email: body.email,
            new_password: body.new_password,
            confirm_password: body.confirm_password,
        })
        .await?;
    Ok(Json(MessageResponse {
        message: "Password changed successfully.",
    }))
}
