//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod submission;
pub mod test_case;
pub mod violation;

pub use submission::*;
pub use test_case::*;
pub use violation::*;
