//! User Service Implementation
//!
//! Core business logic for user record management. The service owns request
//! validation, email normalization, and password hashing; storage access goes
//! through the injected [`UserStore`] collaborator.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::models::{CreateUserRequest, NewUser, UpdateUserRequest, User, UserChanges};
use crate::store::{StoreError, UserStore};
use crate::utils::{
    error::AppError,
    security::{hash_password_with_cost, DEFAULT_BCRYPT_COST},
    validation::normalize_email,
};

/// Custom error types for the user service
#[derive(Error, Debug)]
pub enum UserServiceError {
    /// No record matched the given identifier
    #[error("User not found")]
    UserNotFound,

    /// The collection is empty
    #[error("No users found")]
    NoUsersFound,

    /// Attempted to use a username that already exists
    #[error("Username already exists")]
    UsernameAlreadyExists,

    /// Attempted to use an email that already exists
    #[error("Email already exists")]
    EmailAlreadyExists,

    /// Input validation failed with detailed error message
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Storage operation failed
    #[error("Storage error: {0}")]
    StoreError(StoreError),

    /// Password hashing operation failed
    #[error("Password hashing error: {0}")]
    HashingError(#[from] bcrypt::BcryptError),
}

impl From<UserServiceError> for AppError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::UserNotFound => AppError::NotFound("User not found".to_string()),
            UserServiceError::NoUsersFound => AppError::NotFound("No users found".to_string()),
            UserServiceError::UsernameAlreadyExists => {
                AppError::Conflict("Username already exists".to_string())
            }
            UserServiceError::EmailAlreadyExists => {
                AppError::Conflict("Email already exists".to_string())
            }
            UserServiceError::ValidationError(msg) => AppError::Validation(msg),
            UserServiceError::StoreError(StoreError::Database(e)) => AppError::Database(e),
            UserServiceError::StoreError(StoreError::Conflict(c)) => AppError::Conflict(c),
            UserServiceError::HashingError(e) => AppError::Hashing(e),
        }
    }
}

impl From<StoreError> for UserServiceError {
    /// Translates storage conflicts into the field-specific variants
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(constraint) if constraint.contains("username") => {
                UserServiceError::UsernameAlreadyExists
            }
            StoreError::Conflict(constraint) if constraint.contains("email") => {
                UserServiceError::EmailAlreadyExists
            }
            other => UserServiceError::StoreError(other),
        }
    }
}

/// Result type for user service operations
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// Core user service providing CRUD operations over an injected store
#[derive(Clone)]
pub struct UserService {
    /// Storage collaborator
    store: Arc<dyn UserStore>,

    /// bcrypt cost factor for password hashing
    bcrypt_cost: u32,
}

impl UserService {
    /// Creates a new UserService over the given store
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }

    /// Creates a UserService with a custom bcrypt cost
    pub fn with_bcrypt_cost(store: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    /// Creates a new user record with the provided information
    pub async fn add_user(&self, request: CreateUserRequest) -> UserServiceResult<User> {
        request
            .validate()
            .map_err(|e| UserServiceError::ValidationError(format!("Invalid user data: {}", e)))?;

        let password_hash = hash_password_with_cost(&request.password, self.bcrypt_cost)?;

        let user = self
            .store
            .create(NewUser {
                username: request.username,
                name: request.name,
                password_hash,
                gender: request.gender,
                address: request.address,
                pincode: request.pincode,
                email: normalize_email(&request.email),
                phone_number: request.phone_number,
            })
            .await?;

        Ok(user)
    }

    /// Retrieves a user by their unique identifier
    pub async fn get_user(&self, user_id: Uuid) -> UserServiceResult<User> {
        self.store
            .find_by_id(user_id)
            .await?
            .ok_or(UserServiceError::UserNotFound)
    }

    /// Retrieves every user record
    ///
    /// An empty collection is reported as `NoUsersFound` rather than an empty
    /// list, matching the external contract.
    pub async fn get_all_users(&self) -> UserServiceResult<Vec<User>> {
        let users = self.store.find_all().await?;
        if users.is_empty() {
            return Err(UserServiceError::NoUsersFound);
        }
        Ok(users)
    }

    /// Applies a partial field set to an existing user record
    ///
    /// Fields absent from the request are left untouched; present fields run
    /// the same validators as creation.
    pub async fn update_user(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> UserServiceResult<User> {
        request.validate().map_err(|e| {
            UserServiceError::ValidationError(format!("Invalid update data: {}", e))
        })?;

        let password_hash = match &request.password {
            Some(password) => Some(hash_password_with_cost(password, self.bcrypt_cost)?),
            None => None,
        };

        let changes = UserChanges {
            username: request.username,
            name: request.name,
            password_hash,
            gender: request.gender,
            address: request.address,
            pincode: request.pincode,
            email: request.email.as_deref().map(normalize_email),
            phone_number: request.phone_number,
        };

        self.store
            .update_by_id(user_id, changes)
            .await?
            .ok_or(UserServiceError::UserNotFound)
    }

    /// Removes a user record and returns its prior contents
    pub async fn delete_user(&self, user_id: Uuid) -> UserServiceResult<User> {
        self.store
            .delete_by_id(user_id)
            .await?
            .ok_or(UserServiceError::UserNotFound)
    }
}
