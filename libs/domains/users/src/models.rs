use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User entity
///
/// The `id` and timestamps are assigned by the repository on insert, so a
/// freshly built user carries `None` in those fields until it is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier (hex-encoded ObjectId), absent before persistence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Age in years
    pub age: i32,

    /// Creation timestamp (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a new user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// Display name (required, non-empty)
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    /// Email address (required, must be valid)
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Age in years
    pub age: i32,
}

/// Input for updating an existing user
///
/// All fields are optional; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub age: Option<i32>,
}

impl User {
    /// Build a user from creation input
    ///
    /// The id and timestamps stay unset; the repository fills them on insert.
    pub fn from_create(input: CreateUser) -> Self {
        Self {
            id: None,
            name: input.name,
            email: input.email,
            age: input.age,
            created_at: None,
            updated_at: None,
        }
    }

    /// Overlay update fields onto this user
    ///
    /// Only the provided fields change. Timestamps are left untouched; the
    /// repository refreshes `updated_at` when the change is persisted.
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_create() -> CreateUser {
        CreateUser {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            age: 30,
        }
    }

    #[test]
    fn test_from_create_leaves_id_and_timestamps_unset() {
        let user = User::from_create(sample_create());
        assert!(user.id.is_none());
        assert!(user.created_at.is_none());
        assert!(user.updated_at.is_none());
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.age, 30);
    }

    #[test]
    fn test_apply_update_overlays_only_provided_fields() {
        let mut user = User::from_create(sample_create());

        user.apply_update(UpdateUser {
            age: Some(31),
            ..Default::default()
        });

        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.age, 31);
    }

    #[test]
    fn test_apply_update_all_fields() {
        let mut user = User::from_create(sample_create());

        user.apply_update(UpdateUser {
            name: Some("Bob".to_string()),
            email: Some("bob@example.com".to_string()),
            age: Some(42),
        });

        assert_eq!(user.name, "Bob");
        assert_eq!(user.email, "bob@example.com");
        assert_eq!(user.age, 42);
    }

    #[test]
    fn test_apply_update_empty_is_noop() {
        let mut user = User::from_create(sample_create());
        let before = user.clone();

        user.apply_update(UpdateUser::default());

        assert_eq!(user.name, before.name);
        assert_eq!(user.email, before.email);
        assert_eq!(user.age, before.age);
    }

    #[test]
    fn test_user_serialization_skips_absent_id() {
        let user = User::from_create(sample_create());
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("id").is_none());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["name"], "Alice");
    }

    #[test]
    fn test_create_user_validation_rejects_empty_name() {
        let input = CreateUser {
            name: String::new(),
            email: "alice@example.com".to_string(),
            age: 30,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_user_validation_rejects_bad_email() {
        let input = CreateUser {
            name: "Alice".to_string(),
            email: "not-an-email".to_string(),
            age: 30,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_update_user_validation_rejects_bad_email() {
        let input = UpdateUser {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_update_user_validation_accepts_empty_update() {
        assert!(UpdateUser::default().validate().is_ok());
    }
}
