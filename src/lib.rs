//! User Registry Service Library
//!
//! A user record management service providing CRUD operations over HTTP,
//! backed by PostgreSQL. Designed so the HTTP layer, business logic, and
//! storage stay independently testable.
//!
//! # Features
//!
//! - **User Management**: Create, read, update, and delete user records with
//!   input validation
//! - **Uniform Responses**: Every success is wrapped in a `{ message, data }`
//!   envelope; every failure renders as `{ message, statusCode }`
//! - **Injected Storage**: Handlers depend on the [`store::UserStore`] trait,
//!   so the core runs against PostgreSQL in production and an in-memory store
//!   in tests
//! - **Flexible Router**: Configurable endpoints via the RouterBuilder pattern
//! - **Password Security**: bcrypt hashing; hashes never leave the storage
//!   layer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use user_registry_service::{
//!     api::{AppState, RouterBuilder},
//!     service::UserService,
//!     store::PgUserStore,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = sqlx::PgPool::connect("postgres://localhost/user_registry").await?;
//!     let store = Arc::new(PgUserStore::new(pool));
//!     let user_service = Arc::new(UserService::new(store));
//!
//!     let app = RouterBuilder::with_all_routes()
//!         .build()
//!         .with_state(AppState { user_service });
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **API Layer**: HTTP handlers and configurable route definitions
//! - **Service Layer**: Business logic, validation, and password hashing
//! - **Store**: The storage collaborator trait and its implementations
//! - **Models**: Data structures and typed request payloads
//! - **Database**: Connection management
//! - **Utils**: Error handling, validation, and security helpers

/// HTTP API layer with handlers and configurable routing
pub mod api;

/// Configuration management loaded from the environment
pub mod config;

/// Database connection management
pub mod database;

/// Data models and request structures
pub mod models;

/// Business logic for user record management
pub mod service;

/// Storage collaborator trait and implementations
pub mod store;

/// Shared utilities for errors, validation, and security
pub mod utils;

// Re-export commonly used types for convenient access
pub use api::{create_routes, ApiResponse, AppState, RouterBuilder};
pub use config::{AppConfig, DatabaseSettings, ServerConfig};
pub use database::{DatabaseConfig, DatabasePool};
pub use models::{CreateUserRequest, UpdateUserRequest, User};
pub use service::{UserService, UserServiceError};
pub use store::{MemoryUserStore, PgUserStore, StoreError, UserStore};
pub use utils::error::{AppError, AppResult, ErrorResponse};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
