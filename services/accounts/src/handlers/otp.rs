use axum::{Json, extract::State};
use serde::Deserialize;

use crate::error::AccountsServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::otp::{
    IssueOtpInput, IssueOtpUseCase, ValidateOtpInput, ValidateOtpUseCase,
};

// ── POST /otp/send ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

pub async fn send_otp(
    State(state): State<AppState>,
    Json(body): Json<SendOtpRequest>,
) -> Result<Json<MessageResponse>, AccountsServiceError> {
    let usecase = IssueOtpUseCase {
        cache: state.otp_cache(),
        delivery: state.delivery.clone(),
    };
    usecase.execute(IssueOtpInput { email: body.email }).await?;
    Ok(Json(MessageResponse {
        message: "OTP sent to email",
    }))
}

// ── POST /otp/validate ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ValidateOtpRequest {
    pub email: String,
    pub code: String,
}

pub async fn validate_otp(
    State(state): State<AppState>,
    Json(body): Json<ValidateOtpRequest>,
) -> Result<Json<MessageResponse>, AccountsServiceError> {
    let usecase = ValidateOtpUseCase {
        cache: state.otp_cache(),
    };
    usecase
        .execute(ValidateOtpInput {
            email: body.email,
            code: body.code,
        })
        .await?;
    Ok(Json(MessageResponse {
        message: "OTP verified successfully.",
    }))
}
