use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::User;

/// Persistence operations for users
///
/// Lookup methods take the string form of the id. An id that does not refer
/// to any stored user (including one that is not a valid identifier at all)
/// yields `Ok(None)` or `Ok(false)`, never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, assigning its id and timestamps
    async fn create(&self, user: User) -> UserResult<User>;

    /// Fetch a user by id
    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>>;

    /// Fetch all users
    async fn get_all(&self) -> UserResult<Vec<User>>;

    /// Persist the given state for an existing user, refreshing `updated_at`
    async fn update(&self, id: &str, user: User) -> UserResult<Option<User>>;

    /// Delete a user by id, reporting whether a document was removed
    async fn delete(&self, id: &str) -> UserResult<bool>;
}
