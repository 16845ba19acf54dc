//! Wire types for the remote code runner
//!
//! The runner's response shape is not perfectly uniform across deployments:
//! stdout may appear under `run.stdout`, `run.output`, or at the top level.
//! `RawExecuteResponse::normalize` resolves that ambiguity at the boundary
//! so grading logic only ever sees a fixed [`RunOutput`] shape.

use serde::{Deserialize, Serialize};

/// Execution request sent to the runner's execute endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ExecutePayload {
    pub language: String,
    pub version: String,
    pub files: Vec<SourceFile>,
    pub stdin: String,
}

/// One source file in an execution request
#[derive(Debug, Clone, Serialize)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

/// Runner response as it appears on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawExecuteResponse {
    pub run: Option<RawRunBlock>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

/// Nested `run` block of a runner response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRunBlock {
    pub stdout: Option<String>,
    pub output: Option<String>,
    pub stderr: Option<String>,
}

/// Normalized execution output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: Option<String>,
}

impl RawExecuteResponse {
    /// Normalize the loose wire shape into a fixed [`RunOutput`].
    ///
    /// Fails with [`RunnerError::MalformedResponse`] when none of the
    /// recognized stdout fields is present at all. An empty stdout string
    /// is a valid output (the program printed nothing), not a malformed
    /// response.
    pub fn normalize(self) -> Result<RunOutput, RunnerError> {
        let (run_stdout, run_output, run_stderr) = match self.run {
            Some(block) => (block.stdout, block.output, block.stderr),
            None => (None, None, None),
        };

        let stdout = run_stdout
            .or(run_output)
            .or(self.stdout)
            .ok_or(RunnerError::MalformedResponse)?;

        Ok(RunOutput {
            stdout,
            stderr: run_stderr.or(self.stderr),
        })
    }
}

/// Failures talking to the runner service
///
/// These are always isolated to the test case being executed: grading
/// records them and moves on to the next test case.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RunnerError {
    /// Runner answered with a non-success HTTP status
    #[error("Runner error {0}")]
    Status(u16),

    #[error("Runner returned invalid JSON")]
    InvalidJson,

    /// Response parsed but carried none of the recognized output fields
    #[error("Runner response missing output fields")]
    MalformedResponse,

    /// Network-level failure (connect, timeout, ...)
    #[error("Runner request failed: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawExecuteResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_normalize_prefers_run_stdout() {
        let out = raw(r#"{"run":{"stdout":"5\n","stderr":""},"stdout":"ignored"}"#)
            .normalize()
            .unwrap();
        assert_eq!(out.stdout, "5\n");
        assert_eq!(out.stderr.as_deref(), Some(""));
    }

    #[test]
    fn test_normalize_falls_back_to_run_output() {
        let out = raw(r#"{"run":{"output":"5\n"}}"#).normalize().unwrap();
        assert_eq!(out.stdout, "5\n");
        assert_eq!(out.stderr, None);
    }

    #[test]
    fn test_normalize_falls_back_to_top_level_stdout() {
        let out = raw(r#"{"stdout":"5","stderr":"warn"}"#).normalize().unwrap();
        assert_eq!(out.stdout, "5");
        assert_eq!(out.stderr.as_deref(), Some("warn"));
    }

    #[test]
    fn test_normalize_rejects_unrecognized_shape() {
        let err = raw(r#"{"message":"queued"}"#).normalize().unwrap_err();
        assert!(matches!(err, RunnerError::MalformedResponse));
    }

    #[test]
    fn test_empty_stdout_is_valid_output() {
        let out = raw(r#"{"run":{"stdout":""}}"#).normalize().unwrap();
        assert_eq!(out.stdout, "");
    }

    #[test]
    fn test_status_error_message_carries_status_code() {
        assert_eq!(RunnerError::Status(500).to_string(), "Runner error 500");
    }
}
