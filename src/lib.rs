//! CodeGrade - Contest Grading Service
//!
//! This library provides the core functionality for the CodeGrade service:
//! it grades coding-contest submissions by executing user code against a
//! question's ordered test cases via a remote execution sandbox, compares
//! trimmed output, aggregates a verdict, and records an auditable,
//! append-only submission history.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Runner**: Remote execution client
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod runner;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
