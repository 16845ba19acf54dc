//! Remote code execution
//!
//! This module talks to the external runner service that compiles and
//! executes submitted code. Everything past the [`CodeRunner`] seam works
//! with the normalized [`RunOutput`] shape.

pub mod client;
pub mod types;

pub use client::{CodeRunner, PistonClient};
pub use types::{ExecutePayload, RunOutput, RunnerError, SourceFile};

#[cfg(test)]
pub use client::MockCodeRunner;
