//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::handlers::grading::response::TestCaseOutput;
use crate::models::{Submission, TestSummary};

/// Stored submission record (source code excluded)
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub question_id: Uuid,
    pub user_id: Uuid,
    pub language: String,
    pub status: String,
    pub test_summary: TestSummary,
    pub outputs: Vec<TestCaseOutput>,
    pub quick: bool,
    pub triggered_by: Uuid,
    pub created_by_admin: Option<Uuid>,
    pub submitted_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        let test_summary = submission.summary();
        let outputs = submission
            .results
            .0
            .into_iter()
            .enumerate()
            .map(|(index, r)| TestCaseOutput {
                index,
                stdout: r.stdout,
                stderr: r.stderr,
                passed: r.passed,
                error: r.error,
            })
            .collect();

        Self {
            id: submission.id,
            contest_id: submission.contest_id,
            question_id: submission.question_id,
            user_id: submission.user_id,
            language: submission.language,
            status: submission.status,
            test_summary,
            outputs,
            quick: submission.quick,
            triggered_by: submission.triggered_by,
            created_by_admin: submission.created_by_admin,
            submitted_at: submission.submitted_at,
        }
    }
}
