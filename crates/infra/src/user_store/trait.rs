use std::sync::Arc;

use thiserror::Error;

use roster_core::{User, UserId};

/// Repository operation error.
///
/// These are **infrastructure errors** (storage failures). "Record absent" is
/// not an error: reads report it as `Ok(None)` so callers can tell not-found
/// apart from a broken store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store's lock was poisoned by a panicking writer.
    #[error("user store lock poisoned")]
    LockPoisoned,

    /// Backend failure (disk, connection loss). Unreachable for the
    /// in-memory store; reserved for persistent implementations.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Keyed store of `User` records.
///
/// ## Write Semantics
///
/// `create` and `update` are both upserts by id: insert if absent, overwrite
/// if present, with no distinct "already exists" failure and no existence
/// check. `delete` is idempotent — removing an id that was never stored
/// succeeds.
///
/// ## Implementation Requirements
///
/// Implementations must be safe to call from concurrent request handlers:
/// writes racing on distinct ids must all persist.
pub trait UserRepository: Send + Sync {
    /// The stored record for `id`, or `Ok(None)` when absent.
    fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Every stored record, in unspecified order.
    fn get_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Insert or overwrite the record keyed by `user.id`.
    fn create(&self, user: User) -> Result<(), RepositoryError>;

    /// Overwrite the record keyed by `user.id` (no existence check).
    fn update(&self, user: User) -> Result<(), RepositoryError>;

    /// Remove the record for `id` if present.
    fn delete(&self, id: &UserId) -> Result<(), RepositoryError>;
}

impl<S> UserRepository for Arc<S>
where
    S: UserRepository + ?Sized,
{
    fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        (**self).get_all()
    }

    fn create(&self, user: User) -> Result<(), RepositoryError> {
        (**self).create(user)
    }

    fn update(&self, user: User) -> Result<(), RepositoryError> {
        (**self).update(user)
    }

    fn delete(&self, id: &UserId) -> Result<(), RepositoryError> {
        (**self).delete(id)
    }
}
