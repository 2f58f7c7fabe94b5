//! MongoDB-backed implementation of [`UserRepository`]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, doc, to_bson};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::UserResult;
use crate::models::User;
use crate::repository::UserRepository;

/// Storage shape of a user document
///
/// Keeps the `ObjectId` type at the persistence boundary so the domain model
/// only ever sees hex-encoded string ids.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    age: i32,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserDocument {
    fn from(user: User) -> Self {
        Self {
            id: user.id.and_then(|id| ObjectId::parse_str(&id).ok()),
            name: user.name,
            email: user.email,
            age: user.age,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id.map(|oid| oid.to_hex()),
            name: doc.name,
            email: doc.email,
            age: doc.age,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

/// Parse a string id into an ObjectId
///
/// Malformed ids are treated as referring to nothing rather than as errors.
fn parse_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

/// MongoDB repository for users
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Create a repository backed by the `users` collection
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<UserDocument>("users"),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create(&self, user: User) -> UserResult<User> {
        let now = Utc::now();
        let mut doc = UserDocument::from(user);
        doc.id = None;
        doc.created_at = Some(now);
        doc.updated_at = Some(now);

        let result = self.collection.insert_one(&doc).await?;
        doc.id = result.inserted_id.as_object_id();

        let user = User::from(doc);
        if let Some(ref id) = user.id {
            tracing::info!(user_id = %id, "User created successfully");
        }
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };

        let found = self.collection.find_one(doc! {"_id": oid}).await?;
        Ok(found.map(User::from))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> UserResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<UserDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self, user))]
    async fn update(&self, id: &str, user: User) -> UserResult<Option<User>> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };

        let now = Utc::now();
        let update = doc! {
            "$set": {
                "name": &user.name,
                "email": &user.email,
                "age": user.age,
                "updated_at": to_bson(&now).unwrap_or(Bson::Null),
            }
        };

        let result = self
            .collection
            .update_one(doc! {"_id": oid}, update)
            .await?;
        if result.matched_count == 0 {
            return Ok(None);
        }

        tracing::info!(user_id = %id, "User updated successfully");

        let found = self.collection.find_one(doc! {"_id": oid}).await?;
        Ok(found.map(User::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> UserResult<bool> {
        let Some(oid) = parse_id(id) else {
            return Ok(false);
        };

        let result = self.collection.delete_one(doc! {"_id": oid}).await?;
        let deleted = result.deleted_count > 0;
        if deleted {
            tracing::info!(user_id = %id, "User deleted successfully");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_valid_object_id() {
        let oid = ObjectId::new();
        assert_eq!(parse_id(&oid.to_hex()), Some(oid));
    }

    #[test]
    fn test_parse_id_rejects_malformed_input() {
        assert!(parse_id("not-an-id").is_none());
        assert!(parse_id("").is_none());
    }

    #[test]
    fn test_document_conversion_round_trip() {
        let oid = ObjectId::new();
        let user = User {
            id: Some(oid.to_hex()),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            age: 30,
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        };

        let doc = UserDocument::from(user.clone());
        assert_eq!(doc.id, Some(oid));

        let back = User::from(doc);
        assert_eq!(back.id, user.id);
        assert_eq!(back.name, user.name);
        assert_eq!(back.email, user.email);
        assert_eq!(back.age, user.age);
    }

    #[test]
    fn test_document_from_user_drops_malformed_id() {
        let user = User {
            id: Some("garbage".to_string()),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            age: 30,
            created_at: None,
            updated_at: None,
        };

        let doc = UserDocument::from(user);
        assert!(doc.id.is_none());
    }
}
