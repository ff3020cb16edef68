//! API Route Definitions
//!
//! HTTP routes and their handlers, assembled through a builder that allows
//! selective enabling of endpoints for different deployment scenarios, such as
//! read-only directories or monitoring-only instances.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    add_user, delete_user, get_all_users, get_user_details, health_check, update_user, AppState,
};

/// Builder for creating API routes with configurable endpoints
#[derive(Default)]
pub struct RouterBuilder {
    /// Whether to enable the health check endpoint (GET /health)
    health_check: bool,
    /// Whether to enable user creation (POST /users)
    add_user: bool,
    /// Whether to enable single-user retrieval (GET /users/{id})
    get_user: bool,
    /// Whether to enable collection retrieval (GET /users)
    get_all_users: bool,
    /// Whether to enable user update (PUT /users/{id})
    update_user: bool,
    /// Whether to enable user deletion (DELETE /users/{id})
    delete_user: bool,
}

impl RouterBuilder {
    /// Creates a builder with all routes disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with every endpoint enabled
    pub fn with_all_routes() -> Self {
        Self {
            health_check: true,
            add_user: true,
            get_user: true,
            get_all_users: true,
            update_user: true,
            delete_user: true,
        }
    }

    /// Creates a builder with read-only endpoints
    ///
    /// Suitable for user directory deployments that must never mutate the
    /// collection.
    pub fn with_readonly_routes() -> Self {
        Self {
            health_check: true,
            add_user: false,
            get_user: true,
            get_all_users: true,
            update_user: false,
            delete_user: false,
        }
    }

    /// Creates a builder with only the health check endpoint
    pub fn with_minimal_routes() -> Self {
        Self {
            health_check: true,
            ..Self::default()
        }
    }

    /// Enables or disables the health check endpoint
    pub fn health_check(mut self, enabled: bool) -> Self {
        self.health_check = enabled;
        self
    }

    /// Enables or disables user creation
    pub fn add_user(mut self, enabled: bool) -> Self {
        self.add_user = enabled;
        self
    }

    /// Enables or disables single-user retrieval
    pub fn get_user(mut self, enabled: bool) -> Self {
        self.get_user = enabled;
        self
    }

    /// Enables or disables collection retrieval
    pub fn get_all_users(mut self, enabled: bool) -> Self {
        self.get_all_users = enabled;
        self
    }

    /// Enables or disables user update
    pub fn update_user(mut self, enabled: bool) -> Self {
        self.update_user = enabled;
        self
    }

    /// Enables or disables user deletion
    pub fn delete_user(mut self, enabled: bool) -> Self {
        self.delete_user = enabled;
        self
    }

    /// Builds the router with the configured endpoints
    pub fn build(self) -> Router<AppState> {
        let mut router = Router::new();

        if self.health_check {
            router = router.route("/health", get(health_check));
        }
        if self.add_user {
            router = router.route("/users", post(add_user));
        }
        if self.get_all_users {
            router = router.route("/users", get(get_all_users));
        }
        if self.get_user {
            router = router.route("/users/:user_id", get(get_user_details));
        }
        if self.update_user {
            router = router.route("/users/:user_id", put(update_user));
        }
        if self.delete_user {
            router = router.route("/users/:user_id", delete(delete_user));
        }

        router
    }
}

/// Creates a router with every endpoint enabled
pub fn create_routes() -> Router<AppState> {
    RouterBuilder::with_all_routes().build()
}
