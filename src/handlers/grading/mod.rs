//! Grading handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Grading routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/run", post(handler::run))
        .route("/submit", post(handler::submit))
        .route("/admin/impersonate", post(handler::impersonate))
}
