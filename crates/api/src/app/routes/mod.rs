use axum::Router;

pub mod system;
pub mod users;

/// Router for the resource endpoints.
pub fn router() -> Router {
    Router::new().nest("/users", users::router())
}
