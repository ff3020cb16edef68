//! API Layer
//!
//! HTTP endpoints and request handling for the user registry service.

pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::{ApiResponse, AppState};
pub use routes::{create_routes, RouterBuilder};
