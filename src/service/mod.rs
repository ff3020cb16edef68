//! Service Layer
//!
//! Business logic between the HTTP handlers and the storage collaborator.

pub mod user;

// Re-export services
pub use user::{UserService, UserServiceError, UserServiceResult};
