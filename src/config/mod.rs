//! Configuration Module
//!
//! Centralized configuration management for the user registry service, loaded
//! from environment variables.

use crate::utils::error::{AppError, AppResult};

/// Environment variable helpers
pub mod env {
    use std::env;

    /// Get environment variable as string with default
    pub fn get_string(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get environment variable as u16 with default
    pub fn get_u16(key: &str, default: u16) -> u16 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u32 with default
    pub fn get_u32(key: &str, default: u32) -> u32 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u64 with default
    pub fn get_u64(key: &str, default: u64) -> u64 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Check if environment variable is set
    pub fn is_set(key: &str) -> bool {
        env::var(key).is_ok()
    }
}

/// Application configuration combining all service settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseSettings,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_seconds: u64,
    pub idle_timeout_seconds: u64,
    pub max_lifetime_seconds: u64,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        let url = std::env::var("DATABASE_URL").map_err(|_| {
            AppError::Configuration("DATABASE_URL environment variable is not set".to_string())
        })?;

        Ok(Self {
            server: ServerConfig {
                host: env::get_string("HOST", "0.0.0.0"),
                port: env::get_u16("PORT", 3000),
            },
            database: DatabaseSettings {
                url,
                max_connections: env::get_u32("DB_MAX_CONNECTIONS", 20),
                min_connections: env::get_u32("DB_MIN_CONNECTIONS", 1),
                connect_timeout_seconds: env::get_u64("DB_CONNECT_TIMEOUT", 30),
                idle_timeout_seconds: env::get_u64("DB_IDLE_TIMEOUT", 600),
                max_lifetime_seconds: env::get_u64("DB_MAX_LIFETIME", 3600),
            },
        })
    }

    /// Validate the loaded configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "PORT must be a nonzero port number".to_string(),
            ));
        }
        if self.database.url.is_empty() {
            return Err(AppError::Configuration(
                "DATABASE_URL must not be empty".to_string(),
            ));
        }
        if self.database.max_connections < self.database.min_connections {
            return Err(AppError::Configuration(
                "DB_MAX_CONNECTIONS must be at least DB_MIN_CONNECTIONS".to_string(),
            ));
        }
        Ok(())
    }
}
