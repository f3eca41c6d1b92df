use serde::Deserialize;

use roster_core::{User, UserId};

// -------------------------
// Request DTOs
// -------------------------

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// Missing fields decode as empty strings; only malformed JSON is rejected.
#[derive(Debug, Deserialize)]
pub struct UserBody {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl UserBody {
    /// Materialize a `User` keyed by the body's own id (create path).
    pub fn into_user(self) -> User {
        User {
            id: UserId::new(self.id),
            username: self.username,
            email: self.email,
        }
    }

    /// Materialize a `User` keyed by `id`, discarding any id in the body.
    ///
    /// The resource identity comes from the URL, not the payload.
    pub fn into_user_with_id(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
        }
    }
}
