use std::sync::Arc;

use roster_core::{User, UserId};
use roster_infra::user_store::{InMemoryUserRepository, RepositoryError, UserRepository};

/// Pass-through business layer over the user repository.
///
/// Carries no rules today; request validation and business policies belong
/// here, between transport and storage, without touching either side.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub fn get(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        self.repo.get_by_id(id)
    }

    pub fn list(&self) -> Result<Vec<User>, RepositoryError> {
        self.repo.get_all()
    }

    pub fn create(&self, user: User) -> Result<(), RepositoryError> {
        self.repo.create(user)
    }

    pub fn update(&self, user: User) -> Result<(), RepositoryError> {
        self.repo.update(user)
    }

    pub fn delete(&self, id: &UserId) -> Result<(), RepositoryError> {
        self.repo.delete(id)
    }
}

/// Application service container injected into handlers.
#[derive(Clone)]
pub struct AppServices {
    pub users: UserService,
}

/// Wire the default (in-memory) service graph.
pub fn build_services() -> AppServices {
    let repo = Arc::new(InMemoryUserRepository::new());

    AppServices {
        users: UserService::new(repo),
    }
}
