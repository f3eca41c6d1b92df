use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use roster_core::UserId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_user).get(list_users))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.users.get(&UserId::new(id)) {
        Ok(Some(user)) => (StatusCode::OK, Json(user)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found"),
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.users.list() {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::UserBody>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_json", rejection.body_text())
        }
    };

    let user = body.into_user();
    match services.users.create(user.clone()) {
        Ok(()) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UserBody>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_json", rejection.body_text())
        }
    };

    // Path id wins over whatever the payload carried.
    let user = body.into_user_with_id(UserId::new(id));
    match services.users.update(user.clone()) {
        Ok(()) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.users.delete(&UserId::new(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}
