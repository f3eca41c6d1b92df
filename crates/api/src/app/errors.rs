use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use roster_infra::user_store::RepositoryError;

pub fn repository_error_to_response(err: RepositoryError) -> axum::response::Response {
    tracing::error!(error = %err, "user store failure");

    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "store_error",
        err.to_string(),
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
