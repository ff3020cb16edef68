//! User Model
//!
//! Core user data structures and type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User representation for external API responses
///
/// This struct represents a user record without sensitive information like the
/// password hash. All datetime fields use UTC. Wire field names are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier assigned by storage on creation
    pub id: Uuid,

    /// Unique login name
    pub username: String,

    /// User's display name
    pub name: String,

    /// Self-reported gender
    pub gender: String,

    /// Postal address
    pub address: String,

    /// Postal code
    pub pincode: String,

    /// User's email address (unique, normalized)
    pub email: String,

    /// Contact phone number
    pub phone_number: String,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Internal user representation including the password hash
///
/// Used by storage implementations; never exposed in API responses.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub gender: String,
    pub address: String,
    pub pincode: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    /// Strips the password hash so it is never exposed in API responses
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            name: row.name,
            gender: row.gender,
            address: row.address,
            pincode: row.pincode,
            email: row.email,
            phone_number: row.phone_number,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Field set persisted when creating a new user
///
/// The password arrives already hashed; identifier and timestamps are assigned
/// by the storage implementation.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub gender: String,
    pub address: String,
    pub pincode: String,
    pub email: String,
    pub phone_number: String,
}

/// Partial field set applied when updating a user
///
/// `None` fields are left untouched by the storage implementation.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password_hash: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub pincode: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            username: "ann".to_string(),
            name: "Ann".to_string(),
            password_hash: "hashed".to_string(),
            gender: "f".to_string(),
            address: "1 Rd".to_string(),
            pincode: "00000".to_string(),
            email: "a@b.com".to_string(),
            phone_number: "555".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_row_conversion_drops_password_hash() {
        let row = sample_row();
        let id = row.id;
        let user: User = row.into();

        assert_eq!(user.id, id);
        assert_eq!(user.username, "ann");
        assert_eq!(user.phone_number, "555");
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user: User = sample_row().into();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["phoneNumber"], "555");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
    }
}
