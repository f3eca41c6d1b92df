//! User storage boundary.
//!
//! This module defines the repository abstraction for storing and retrieving
//! `User` records without making any storage assumptions.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryUserRepository;
pub use r#trait::{RepositoryError, UserRepository};
