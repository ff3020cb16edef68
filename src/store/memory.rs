//! In-Memory Store
//!
//! [`UserStore`] implementation over an insertion-ordered `Vec`, mirroring the
//! PostgreSQL store's semantics: storage-assigned identifiers, unique username
//! and email, partial updates, and insertion-order listing. Used by tests and
//! available for running the service without a database.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, StoreResult, UserStore};
use crate::models::{NewUser, User, UserChanges, UserRow};

/// In-memory user store with the same constraints as the PostgreSQL schema
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<UserRow>>,
    operations: AtomicUsize,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store operations performed, for asserting that a code path
    /// never reached storage
    pub fn operations(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    fn record_operation(&self) {
        self.operations.fetch_add(1, Ordering::SeqCst);
    }

    fn unique_conflict(users: &[UserRow], skip_id: Option<Uuid>, field: &str, value: &str) -> bool {
        users.iter().any(|row| {
            if Some(row.id) == skip_id {
                return false;
            }
            match field {
                "username" => row.username == value,
                "email" => row.email == value,
                _ => false,
            }
        })
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: NewUser) -> StoreResult<User> {
        self.record_operation();
        let mut users = self.users.write().await;

        if Self::unique_conflict(&users, None, "username", &user.username) {
            return Err(StoreError::Conflict("users_username_key".to_string()));
        }
        if Self::unique_conflict(&users, None, "email", &user.email) {
            return Err(StoreError::Conflict("users_email_key".to_string()));
        }

        let now = Utc::now();
        let row = UserRow {
            id: Uuid::new_v4(),
            username: user.username,
            name: user.name,
            password_hash: user.password_hash,
            gender: user.gender,
            address: user.address,
            pincode: user.pincode,
            email: user.email,
            phone_number: user.phone_number,
            created_at: now,
            updated_at: now,
        };
        users.push(row.clone());

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        self.record_operation();
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .map(User::from))
    }

    async fn find_all(&self) -> StoreResult<Vec<User>> {
        self.record_operation();
        let users = self.users.read().await;
        Ok(users.iter().cloned().map(User::from).collect())
    }

    async fn update_by_id(&self, id: Uuid, changes: UserChanges) -> StoreResult<Option<User>> {
        self.record_operation();
        let mut users = self.users.write().await;

        if let Some(username) = &changes.username {
            if Self::unique_conflict(&users, Some(id), "username", username) {
                return Err(StoreError::Conflict("users_username_key".to_string()));
            }
        }
        if let Some(email) = &changes.email {
            if Self::unique_conflict(&users, Some(id), "email", email) {
                return Err(StoreError::Conflict("users_email_key".to_string()));
            }
        }

        let Some(row) = users.iter_mut().find(|row| row.id == id) else {
            return Ok(None);
        };

        if let Some(username) = changes.username {
            row.username = username;
        }
        if let Some(name) = changes.name {
            row.name = name;
        }
        if let Some(password_hash) = changes.password_hash {
            row.password_hash = password_hash;
        }
        if let Some(gender) = changes.gender {
            row.gender = gender;
        }
        if let Some(address) = changes.address {
            row.address = address;
        }
        if let Some(pincode) = changes.pincode {
            row.pincode = pincode;
        }
        if let Some(email) = changes.email {
            row.email = email;
        }
        if let Some(phone_number) = changes.phone_number {
            row.phone_number = phone_number;
        }
        row.updated_at = Utc::now();

        Ok(Some(row.clone().into()))
    }

    async fn delete_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        self.record_operation();
        let mut users = self.users.write().await;
        let position = users.iter().position(|row| row.id == id);
        Ok(position.map(|index| users.remove(index).into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            name: "Test User".to_string(),
            password_hash: "hashed".to_string(),
            gender: "f".to_string(),
            address: "1 Rd".to_string(),
            pincode: "00000".to_string(),
            email: email.to_string(),
            phone_number: "555".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_identifier() {
        let store = MemoryUserStore::new();
        let user = store.create(new_user("ann", "a@b.com")).await.unwrap();

        assert!(!user.id.is_nil());
        assert_eq!(user.username, "ann");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_username() {
        let store = MemoryUserStore::new();
        store.create(new_user("ann", "a@b.com")).await.unwrap();

        let result = store.create(new_user("ann", "other@b.com")).await;
        assert!(matches!(result, Err(StoreError::Conflict(c)) if c.contains("username")));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let store = MemoryUserStore::new();
        store.create(new_user("ann", "a@b.com")).await.unwrap();

        let result = store.create(new_user("bob", "a@b.com")).await;
        assert!(matches!(result, Err(StoreError::Conflict(c)) if c.contains("email")));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = MemoryUserStore::new();
        let created = store.create(new_user("ann", "a@b.com")).await.unwrap();

        let found = store.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));

        let missing = store.find_by_id(Uuid::new_v4()).await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_find_all_insertion_order() {
        let store = MemoryUserStore::new();
        store.create(new_user("ann", "a@b.com")).await.unwrap();
        store.create(new_user("bob", "b@b.com")).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].username, "ann");
        assert_eq!(all[1].username, "bob");
    }

    #[tokio::test]
    async fn test_update_applies_only_present_fields() {
        let store = MemoryUserStore::new();
        let created = store.create(new_user("ann", "a@b.com")).await.unwrap();

        let changes = UserChanges {
            name: Some("Ann Updated".to_string()),
            ..Default::default()
        };
        let updated = store
            .update_by_id(created.id, changes)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Ann Updated");
        assert_eq!(updated.username, created.username);
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let store = MemoryUserStore::new();
        let result = store
            .update_by_id(Uuid::new_v4(), UserChanges::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_rejects_email_taken_by_other_user() {
        let store = MemoryUserStore::new();
        store.create(new_user("ann", "a@b.com")).await.unwrap();
        let bob = store.create(new_user("bob", "b@b.com")).await.unwrap();

        let changes = UserChanges {
            email: Some("a@b.com".to_string()),
            ..Default::default()
        };
        let result = store.update_by_id(bob.id, changes).await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_keeping_own_unique_fields_is_allowed() {
        let store = MemoryUserStore::new();
        let ann = store.create(new_user("ann", "a@b.com")).await.unwrap();

        let changes = UserChanges {
            username: Some("ann".to_string()),
            email: Some("a@b.com".to_string()),
            ..Default::default()
        };
        let updated = store.update_by_id(ann.id, changes).await.unwrap();
        assert!(updated.is_some());
    }

    #[tokio::test]
    async fn test_delete_returns_prior_contents() {
        let store = MemoryUserStore::new();
        let created = store.create(new_user("ann", "a@b.com")).await.unwrap();

        let deleted = store.delete_by_id(created.id).await.unwrap();
        assert_eq!(deleted, Some(created.clone()));

        let missing = store.find_by_id(created.id).await.unwrap();
        assert_eq!(missing, None);

        let again = store.delete_by_id(created.id).await.unwrap();
        assert_eq!(again, None);
    }

    #[tokio::test]
    async fn test_operation_counter() {
        let store = MemoryUserStore::new();
        assert_eq!(store.operations(), 0);

        store.create(new_user("ann", "a@b.com")).await.unwrap();
        store.find_all().await.unwrap();
        assert_eq!(store.operations(), 2);
    }
}
