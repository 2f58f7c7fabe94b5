use std::sync::Arc;

use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Business logic for user management
///
/// Validates input and coordinates the repository. The repository is shared
/// behind an `Arc` so the service clones cheaply into handler state.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate input and create a new user
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        self.repository.create(User::from_create(input)).await
    }

    /// Fetch a user by id
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> UserResult<Option<User>> {
        self.repository.get_by_id(id).await
    }

    /// Fetch all users
    #[instrument(skip(self))]
    pub async fn get_all_users(&self) -> UserResult<Vec<User>> {
        self.repository.get_all().await
    }

    /// Apply a partial update to an existing user
    ///
    /// Returns `Ok(None)` when no user exists with the given id.
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: &str, input: UpdateUser) -> UserResult<Option<User>> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let Some(mut existing) = self.repository.get_by_id(id).await? else {
            return Ok(None);
        };

        existing.apply_update(input);
        self.repository.update(id, existing).await
    }

    /// Delete a user by id, reporting whether anything was removed
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> UserResult<bool> {
        self.repository.delete(id).await
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
