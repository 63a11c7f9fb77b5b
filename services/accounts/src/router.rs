use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use aegis_core::health::{healthz, readyz};
use aegis_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{change_password, login, logout, register},
    otp::{send_otp, validate_otp},
    profile::{get_profile, update_profile},
    user::{get_user, list_users, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}", put(update_user))
        // Profiles
        .route("/profiles/{id}", get(get_profile))
        .route("/profiles/{id}", put(update_profile))
        // Session
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/register", post(register))
        // OTP
        .route("/otp/send", post(send_otp))
        .route("/otp/validate", post(validate_otp))
        // Password
        .route("/password/change", post(change_password))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
