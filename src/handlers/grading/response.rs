//! Grading response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::{Submission, TestSummary};

/// Response of a grading call
#[derive(Debug, Serialize)]
pub struct GradeResponse {
    pub submission_id: Uuid,
    pub status: String,
    pub test_summary: TestSummary,
    pub outputs: Vec<TestCaseOutput>,
}

/// Per-test-case output, indexed in execution order
#[derive(Debug, Serialize)]
pub struct TestCaseOutput {
    pub index: usize,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub passed: bool,
    pub error: Option<String>,
}

impl GradeResponse {
    pub fn from_submission(submission: Submission) -> Self {
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
            submission_id: submission.id,
            status: submission.status,
            test_summary,
            outputs,
        }
    }
}
