use std::collections::HashMap;
use std::sync::RwLock;

use roster_core::{User, UserId};

use super::r#trait::{RepositoryError, UserRepository};

/// In-memory user repository.
///
/// The map is reachable only through the trait operations; concurrent request
/// handlers share the read lock and serialize on the write lock.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let users = self
            .users
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(users.get(id).cloned())
    }

    fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        let users = self
            .users
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(users.values().cloned().collect())
    }

    fn create(&self, user: User) -> Result<(), RepositoryError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        users.insert(user.id.clone(), user);
        Ok(())
    }

    fn update(&self, user: User) -> Result<(), RepositoryError> {
        // Same upsert as `create`: an absent id is silently created.
        let mut users = self
            .users
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        users.insert(user.id.clone(), user);
        Ok(())
    }

    fn delete(&self, id: &UserId) -> Result<(), RepositoryError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        users.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::*;

    fn user(id: &str, username: &str) -> User {
        User {
            id: UserId::new(id),
            username: username.to_string(),
            email: format!("{username}@example.com"),
        }
    }

    #[test]
    fn create_then_get_returns_the_stored_record() {
        let repo = InMemoryUserRepository::new();
        let u = user("1", "alice");

        repo.create(u.clone()).unwrap();

        assert_eq!(repo.get_by_id(&UserId::new("1")).unwrap(), Some(u));
    }

    #[test]
    fn create_with_an_existing_id_overwrites() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("1", "alice")).unwrap();

        let replacement = user("1", "bob");
        repo.create(replacement.clone()).unwrap();

        assert_eq!(
            repo.get_by_id(&UserId::new("1")).unwrap(),
            Some(replacement)
        );
        assert_eq!(repo.get_all().unwrap().len(), 1);
    }

    #[test]
    fn update_without_a_prior_record_creates_it() {
        let repo = InMemoryUserRepository::new();
        let u = user("ghost", "casper");

        repo.update(u.clone()).unwrap();

        assert_eq!(repo.get_by_id(&UserId::new("ghost")).unwrap(), Some(u));
    }

    #[test]
    fn delete_is_idempotent() {
        let repo = InMemoryUserRepository::new();

        // Never-created id: still a success.
        repo.delete(&UserId::new("1")).unwrap();

        repo.create(user("1", "alice")).unwrap();
        repo.delete(&UserId::new("1")).unwrap();
        repo.delete(&UserId::new("1")).unwrap();

        assert_eq!(repo.get_by_id(&UserId::new("1")).unwrap(), None);
    }

    #[test]
    fn get_all_returns_every_record_order_independent() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("1", "alice")).unwrap();
        repo.create(user("2", "bob")).unwrap();
        repo.create(user("3", "carol")).unwrap();

        let mut all = repo.get_all().unwrap();
        all.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));

        let ids: Vec<&str> = all.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn concurrent_creates_with_distinct_ids_all_persist() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let repo = Arc::clone(&repo);
                std::thread::spawn(move || {
                    for i in 0..16 {
                        repo.create(user(&format!("u{t}-{i}"), "writer")).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(repo.get_all().unwrap().len(), 8 * 16);
    }

    proptest! {
        #[test]
        fn last_write_for_an_id_wins(
            id in "[a-z0-9-]{1,16}",
            first in "[a-z]{1,8}",
            second in "[a-z]{1,8}",
        ) {
            let repo = InMemoryUserRepository::new();
            repo.create(user(&id, &first)).unwrap();

            let latest = user(&id, &second);
            repo.update(latest.clone()).unwrap();

            prop_assert_eq!(repo.get_by_id(&UserId::new(id)).unwrap(), Some(latest));
        }
    }
}
