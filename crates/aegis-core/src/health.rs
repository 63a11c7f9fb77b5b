use axum::http::StatusCode;

/// Handler for `GET /healthz` (liveness).
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` (readiness, override per service as needed).
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
