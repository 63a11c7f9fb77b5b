use serde::Serialize;

pub mod auth;
pub mod otp;
pub mod profile;
pub mod user;

/// Plain `{"message": ...}` response body.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
