//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_RUNNER_MAX_RETRIES,
    DEFAULT_RUNNER_RETRY_BACKOFF_MS, DEFAULT_RUNNER_TIMEOUT_SECONDS, DEFAULT_RUNNER_URL,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub runner: RunnerConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// JWT verification configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

/// Remote code runner configuration
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Execute endpoint of the runner service
    pub url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Retries after a retryable failure before the result is recorded as failed
    pub max_retries: u32,
    /// Base backoff between retries (multiplied by attempt number)
    pub retry_backoff: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            redis: RedisConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            runner: RunnerConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
        })
    }
}

impl RunnerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let timeout_seconds: u64 = env::var("RUNNER_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| DEFAULT_RUNNER_TIMEOUT_SECONDS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("RUNNER_TIMEOUT_SECONDS".to_string()))?;
        let retry_backoff_ms: u64 = env::var("RUNNER_RETRY_BACKOFF_MS")
            .unwrap_or_else(|_| DEFAULT_RUNNER_RETRY_BACKOFF_MS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("RUNNER_RETRY_BACKOFF_MS".to_string()))?;

        Ok(Self {
            url: env::var("RUNNER_URL").unwrap_or_else(|_| DEFAULT_RUNNER_URL.to_string()),
            timeout: Duration::from_secs(timeout_seconds),
            max_retries: env::var("RUNNER_MAX_RETRIES")
                .unwrap_or_else(|_| DEFAULT_RUNNER_MAX_RETRIES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RUNNER_MAX_RETRIES".to_string()))?,
            retry_backoff: Duration::from_millis(retry_backoff_ms),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_runner_defaults() {
        let runner = RunnerConfig {
            url: DEFAULT_RUNNER_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_RUNNER_TIMEOUT_SECONDS),
            max_retries: DEFAULT_RUNNER_MAX_RETRIES,
            retry_backoff: Duration::from_millis(DEFAULT_RUNNER_RETRY_BACKOFF_MS),
        };
        assert!(runner.url.ends_with("/execute"));
        assert_eq!(runner.max_retries, 2);
    }
}
