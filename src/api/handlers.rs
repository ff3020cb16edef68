//! HTTP Request Handlers
//!
//! Axum handlers for the user CRUD endpoints. Each handler validates its path
//! identifier where applicable, delegates to the service, and wraps the result
//! in the uniform response envelope. Failures propagate as [`AppError`] through
//! the `?` operator and are rendered by its `IntoResponse` implementation, so
//! no handler intercepts errors inline.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::service::UserService;
use crate::utils::{
    error::{AppError, AppResult},
    validation::is_valid_user_id,
};
use crate::VERSION;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

/// Uniform success response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: &str, data: T) -> Self {
        Self {
            message: message.to_string(),
            data,
        }
    }
}

/// Response payload for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

/// Rejects syntactically invalid identifiers before storage is consulted
fn parse_user_id(raw: &str) -> AppResult<Uuid> {
    if !is_valid_user_id(raw) {
        return Err(AppError::InvalidId("Invalid User ID".to_string()));
    }
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidId("Invalid User ID".to_string()))
}

/// Create a new user record
pub async fn add_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let user = state.user_service.add_user(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("User added successfully", user)),
    ))
}

/// Get details of a specific user by identifier
pub async fn get_user_details(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user_id = parse_user_id(&user_id)?;
    let user = state.user_service.get_user(user_id).await?;
    Ok(Json(ApiResponse::new(
        "User details retrieved successfully",
        user,
    )))
}

/// Get every user record
pub async fn get_all_users(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<User>>>> {
    let users = state.user_service.get_all_users().await?;
    Ok(Json(ApiResponse::new(
        "All users retrieved successfully",
        users,
    )))
}

/// Update a user record by identifier
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user_id = parse_user_id(&user_id)?;
    let user = state.user_service.update_user(user_id, request).await?;
    Ok(Json(ApiResponse::new("User updated successfully", user)))
}

/// Delete a user record by identifier
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user_id = parse_user_id(&user_id)?;
    let user = state.user_service.delete_user(user_id).await?;
    Ok(Json(ApiResponse::new("User deleted successfully", user)))
}

/// Health check endpoint
pub async fn health_check() -> Json<ApiResponse<HealthCheckResponse>> {
    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: VERSION.to_string(),
    };

    Json(ApiResponse::new("Service is healthy", response))
}
