//! Submission model
//!
//! A submission is the persisted outcome of one grading call. Records are
//! append-only: they are created exactly once and never mutated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// Outcome of a single test case execution, stored inline on the submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Trimmed, truncated stdout; None when the runner call itself failed
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub passed: bool,
    /// Transport-level failure description, None on a completed execution
    pub error: Option<String>,
}

/// Aggregated pass/fail counts for a grading call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSummary {
    pub passed_count: i32,
    pub total: i32,
}

/// Final verdict of a grading call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Correct,
    Incorrect,
}

impl SubmissionStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "correct" => Some(Self::Correct),
            "incorrect" => Some(Self::Incorrect),
            _ => None,
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Submission database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub question_id: Uuid,
    /// User the submission is recorded for (the impersonation target when
    /// an admin graded on someone's behalf)
    pub user_id: Uuid,
    #[serde(skip_serializing)]
    pub code: String,
    pub language: String,
    pub status: String,
    pub passed_count: i32,
    pub total: i32,
    pub results: Json<Vec<ExecutionResult>>,
    pub quick: bool,
    /// Authenticated caller that triggered the grading
    pub triggered_by: Uuid,
    /// Set when an admin graded on behalf of another user
    pub created_by_admin: Option<Uuid>,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn summary(&self) -> TestSummary {
        TestSummary {
            passed_count: self.passed_count,
            total: self.total,
        }
    }
}

/// Fields for inserting a new submission record
#[derive(Debug)]
pub struct NewSubmission {
    pub contest_id: Uuid,
    pub question_id: Uuid,
    pub user_id: Uuid,
    pub code: String,
    pub language: String,
    pub status: SubmissionStatus,
    pub passed_count: i32,
    pub total: i32,
    pub results: Vec<ExecutionResult>,
    pub quick: bool,
    pub triggered_by: Uuid,
    pub created_by_admin: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(SubmissionStatus::from_str("correct"), Some(SubmissionStatus::Correct));
        assert_eq!(SubmissionStatus::from_str("incorrect"), Some(SubmissionStatus::Incorrect));
        assert_eq!(SubmissionStatus::from_str("pending"), None);
        assert_eq!(SubmissionStatus::Correct.as_str(), "correct");
    }
}
