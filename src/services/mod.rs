//! Business logic services

pub mod auth_service;
pub mod grading_service;

pub use auth_service::AuthService;
pub use grading_service::{GradeRequest, GradingService};
