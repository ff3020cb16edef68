//! User Registry Development Server
//!
//! Development server for the user registry service library. Runs the full
//! HTTP API against PostgreSQL with permissive CORS and request tracing.
//! For custom router configurations, use the RouterBuilder from your own
//! application.

use std::sync::Arc;

use dotenv::dotenv;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use user_registry_service::{
    api::{AppState, RouterBuilder},
    database::DatabaseConfig,
    service::UserService,
    store::PgUserStore,
    AppConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv().ok();

    env_logger::init();

    log::info!(
        "Starting user registry service v{}",
        user_registry_service::VERSION
    );

    // Load configuration from environment
    let config = AppConfig::from_env()?;
    config.validate()?;

    // Database connection and migrations
    let db_config = DatabaseConfig::from(config.database.clone());
    let pool = db_config.create_pool().await?;

    log::info!("Running database migrations");
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Wire the storage collaborator into the service layer
    let store = Arc::new(PgUserStore::new(pool));
    let user_service = Arc::new(UserService::new(store));
    let app_state = AppState { user_service };

    let app = RouterBuilder::with_all_routes()
        .build()
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any) // Permissive CORS for development
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .into_inner(),
        );

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    log::info!("API endpoints:");
    log::info!("  GET    /health - Health check");
    log::info!("  POST   /users - Create user");
    log::info!("  GET    /users - List all users");
    log::info!("  GET    /users/:id - Get user details");
    log::info!("  PUT    /users/:id - Update user");
    log::info!("  DELETE /users/:id - Delete user");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    log::info!("Server listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
