//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor. Every external
//! service client is created once at process startup and carried here;
//! handlers never construct clients of their own.

use std::sync::Arc;

use redis::aio::ConnectionManager;
use sqlx::PgPool;

use crate::config::Config;
use crate::runner::CodeRunner;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    db: PgPool,

    /// Redis connection manager (rate limiting)
    redis: ConnectionManager,

    /// Remote code runner client
    runner: Arc<dyn CodeRunner>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        db: PgPool,
        redis: ConnectionManager,
        runner: Arc<dyn CodeRunner>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                redis,
                runner,
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a clone of the Redis connection manager
    pub fn redis(&self) -> ConnectionManager {
        self.inner.redis.clone()
    }

    /// Get a reference to the code runner client
    pub fn runner(&self) -> &dyn CodeRunner {
        self.inner.runner.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
