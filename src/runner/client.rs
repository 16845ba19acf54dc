//! HTTP client for the remote code runner
//!
//! The runner is treated as best-effort and unreliable: non-success
//! statuses and malformed bodies surface as [`RunnerError`] values, never
//! as panics. Retryable failures (connect errors, 5xx) are retried a
//! bounded number of times with linear backoff before the error is
//! returned to the caller.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::RunnerConfig;

use super::types::{ExecutePayload, RawExecuteResponse, RunOutput, RunnerError};

/// Remote execution seam used by grading and the one-off execute endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeRunner: Send + Sync {
    /// Execute one payload and return its normalized output
    async fn execute(&self, payload: &ExecutePayload) -> Result<RunOutput, RunnerError>;
}

/// Piston-compatible runner client
pub struct PistonClient {
    http: reqwest::Client,
    url: String,
    max_retries: u32,
    retry_backoff: std::time::Duration,
}

impl PistonClient {
    /// Build a client from configuration. Called once at startup; the
    /// client is shared through application state.
    pub fn new(config: &RunnerConfig) -> Result<Self, RunnerError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RunnerError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            url: config.url.clone(),
            max_retries: config.max_retries,
            retry_backoff: config.retry_backoff,
        })
    }

    async fn execute_once(&self, payload: &ExecutePayload) -> Result<RunOutput, RunnerError> {
        let response = self
            .http
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| RunnerError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RunnerError::Status(status.as_u16()));
        }

        let raw: RawExecuteResponse = response
            .json()
            .await
            .map_err(|_| RunnerError::InvalidJson)?;

        raw.normalize()
    }
}

#[async_trait]
impl CodeRunner for PistonClient {
    async fn execute(&self, payload: &ExecutePayload) -> Result<RunOutput, RunnerError> {
        let mut attempt = 0;
        loop {
            match self.execute_once(payload).await {
                Ok(output) => return Ok(output),
                Err(err) if attempt < self.max_retries && is_retryable(&err) => {
                    attempt += 1;
                    let backoff = self.retry_backoff * attempt;
                    warn!(
                        language = %payload.language,
                        attempt,
                        error = %err,
                        "Runner call failed, retrying after {:?}",
                        backoff
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(err) => {
                    debug!(language = %payload.language, error = %err, "Runner call failed");
                    return Err(err);
                }
            }
        }
    }
}

/// Whether a failure is worth retrying. Client errors and malformed
/// responses are deterministic, only server-side and network failures
/// may clear up on a retry.
fn is_retryable(err: &RunnerError) -> bool {
    match err {
        RunnerError::Status(status) => *status >= 500,
        RunnerError::Transport(_) => true,
        RunnerError::InvalidJson | RunnerError::MalformedResponse => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_failures_are_retryable() {
        assert!(is_retryable(&RunnerError::Status(500)));
        assert!(is_retryable(&RunnerError::Status(503)));
        assert!(is_retryable(&RunnerError::Transport("connect refused".to_string())));
    }

    #[test]
    fn test_deterministic_failures_are_not_retried() {
        assert!(!is_retryable(&RunnerError::Status(400)));
        assert!(!is_retryable(&RunnerError::Status(429)));
        assert!(!is_retryable(&RunnerError::InvalidJson));
        assert!(!is_retryable(&RunnerError::MalformedResponse));
    }
}
