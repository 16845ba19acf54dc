//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod execute;
pub mod grading;
pub mod health;
pub mod submissions;
pub mod violations;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(execute::routes())
        .merge(grading::routes())
        .merge(violations::routes())
        .nest("/submissions", submissions::routes())
}
