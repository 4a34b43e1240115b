//! User service — use-cases for user accounts.

use barzmap_domain::error::BarzError;
use barzmap_domain::id::UserId;
use barzmap_domain::user::{NewUser, User, UserPatch};

use crate::ports::UserRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fetch one user wrapped in a list when `id` is given, all users otherwise.
    ///
    /// # Errors
    ///
    /// Returns a store error propagated from the repository.
    pub async fn get_users(&self, id: Option<UserId>) -> Result<Vec<User>, BarzError> {
        match id {
            Some(id) => Ok(self.repo.get_by_id(id).await?.into_iter().collect()),
            None => self.repo.get_all().await,
        }
    }

    /// Insert a new user after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`BarzError::Validation`] if invariants fail, or a store
    /// error propagated from the repository.
    pub async fn create_user(&self, user: NewUser) -> Result<Vec<User>, BarzError> {
        user.validate()?;
        self.repo.create(user).await
    }

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`BarzError::Validation`] if the patch is empty or invalid,
    /// or a store error from the repository.
    pub async fn update_user(&self, patch: UserPatch) -> Result<Vec<User>, BarzError> {
        patch.validate()?;
        self.repo.update(patch).await
    }

    /// Delete the user with `id`, returning what was removed.
    ///
    /// # Errors
    ///
    /// Returns a store error propagated from the repository.
    pub async fn delete_user(&self, id: UserId) -> Result<Vec<User>, BarzError> {
        self.repo.delete(id).await
    }
}
