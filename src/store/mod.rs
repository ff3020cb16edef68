//! Storage Layer
//!
//! The [`UserStore`] trait is the storage collaborator boundary: the service
//! layer depends on it rather than on a concrete database handle, so the core
//! stays testable without a live database. [`PgUserStore`] is the production
//! implementation; [`MemoryUserStore`] backs tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewUser, User, UserChanges};

// Re-export store implementations
pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

/// Errors surfaced by storage implementations
#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique constraint was violated; carries the constraint name
    #[error("unique constraint violation: {0}")]
    Conflict(String),

    /// Any other driver-level failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage collaborator for the user collection
///
/// Identifiers are assigned by the store on creation and are immutable.
/// `update_by_id` applies only the fields present in `changes`; `find_by_id`,
/// `update_by_id`, and `delete_by_id` return `None` when no record matches.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new user and returns the stored record with its identifier
    async fn create(&self, user: NewUser) -> StoreResult<User>;

    /// Looks up a single user by identifier
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Retrieves every user in storage order
    async fn find_all(&self) -> StoreResult<Vec<User>>;

    /// Applies the given fields to the matching record and returns it
    async fn update_by_id(&self, id: Uuid, changes: UserChanges) -> StoreResult<Option<User>>;

    /// Removes the matching record and returns its prior contents
    async fn delete_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;
}
