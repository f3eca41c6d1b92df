use axum::http::StatusCode;

/// Liveness probe: 200 with no body, no business logic exercised.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
