//! One-off code execution handler
//!
//! Runs code against the remote runner with caller-supplied stdin, without
//! grading and without persisting anything. This backs the editor's "try
//! it" flow. Unlike per-test-case failures during grading, a runner
//! failure here surfaces to the caller as 502.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    constants::{MAX_REQUEST_CODE_CHARS, RUNNER_ANY_VERSION, RUNNER_SOURCE_FILE_NAME},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    middleware::json::JsonBody,
    runner::{ExecutePayload, SourceFile},
    state::AppState,
};

/// One-off execution request
#[derive(Debug, Deserialize, Validate)]
pub struct ExecuteRequest {
    #[validate(length(min = 1, max = 40))]
    pub language: String,

    #[validate(length(min = 1, max = MAX_REQUEST_CODE_CHARS))]
    pub code: String,

    #[serde(default)]
    pub stdin: String,

    /// Runtime version selector; defaults to any available version
    pub version: Option<String>,
}

/// Normalized execution output
#[derive(Debug, Serialize)]
pub struct ExecuteResponse {
    pub stdout: String,
    pub stderr: Option<String>,
}

/// Execute code once and return its output
async fn execute(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    JsonBody(payload): JsonBody<ExecuteRequest>,
) -> AppResult<Json<ExecuteResponse>> {
    payload.validate()?;

    let output = state
        .runner()
        .execute(&ExecutePayload {
            language: payload.language,
            version: payload
                .version
                .unwrap_or_else(|| RUNNER_ANY_VERSION.to_string()),
            files: vec![SourceFile {
                name: RUNNER_SOURCE_FILE_NAME.to_string(),
                content: payload.code,
            }],
            stdin: payload.stdin,
        })
        .await?;

    Ok(Json(ExecuteResponse {
        stdout: output.stdout,
        stderr: output.stderr,
    }))
}

/// Execute routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/execute", post(execute))
}
