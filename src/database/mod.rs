//! Database Module
//!
//! Database connection management for the user registry service.

pub mod connection;

// Re-export commonly used types
pub use connection::{DatabaseConfig, DatabasePool};
