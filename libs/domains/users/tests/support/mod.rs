//! In-memory repository fake for handler tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use domain_users::{User, UserRepository, UserResult};
use mongodb::bson::oid::ObjectId;

/// In-memory [`UserRepository`] with the same id and timestamp semantics as
/// the MongoDB implementation.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> UserResult<User> {
        let now = Utc::now();
        let id = ObjectId::new().to_hex();
        user.id = Some(id.clone());
        user.created_at = Some(now);
        user.updated_at = Some(now);

        self.users.lock().unwrap().insert(id, user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn get_all(&self) -> UserResult<Vec<User>> {
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, id: &str, user: User) -> UserResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        let Some(existing) = users.get_mut(id) else {
            return Ok(None);
        };

        existing.name = user.name;
        existing.email = user.email;
        existing.age = user.age;
        existing.updated_at = Some(Utc::now());
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: &str) -> UserResult<bool> {
        Ok(self.users.lock().unwrap().remove(id).is_some())
    }
}
