//! Grading request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::MAX_REQUEST_CODE_CHARS;

/// Body shared by the run and submit endpoints
#[derive(Debug, Deserialize, Validate)]
pub struct RunRequest {
    pub contest_id: Uuid,

    pub question_id: Uuid,

    /// Runner language identifier, e.g. "python3", "javascript"
    #[validate(length(min = 1, max = 40))]
    pub language: String,

    /// Source code
    #[validate(length(min = 1, max = MAX_REQUEST_CODE_CHARS))]
    pub code: String,

    /// Grade against the first test case only (fast smoke-check)
    #[serde(default)]
    pub quick: bool,
}

/// Body of the admin impersonation endpoint
#[derive(Debug, Deserialize, Validate)]
pub struct ImpersonateRequest {
    /// User the submission will be recorded for
    pub target_user_id: Uuid,

    pub contest_id: Uuid,

    pub question_id: Uuid,

    #[validate(length(min = 1, max = 40))]
    pub language: String,

    #[validate(length(min = 1, max = MAX_REQUEST_CODE_CHARS))]
    pub code: String,

    #[serde(default)]
    pub quick: bool,
}
