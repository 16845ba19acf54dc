//! Utility functions

pub mod text;

pub use text::{TRUNCATION_MARKER, truncate};
