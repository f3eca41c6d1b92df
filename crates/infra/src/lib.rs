//! Infrastructure layer: storage backends for the domain.

pub mod user_store;

/// Database adapters (future persistent repository backends).
pub mod db {}
