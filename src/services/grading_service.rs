//! Grading workflow
//!
//! One grading call loads a question's ordered test cases, executes the
//! submitted code against each through the remote runner, compares trimmed
//! output, aggregates a verdict, and persists a single append-only
//! submission record. All three entry points (run, submit, admin
//! impersonation) go through [`GradingService::grade`]; they differ only
//! in authorization policy and audit identities.

use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    constants::{MAX_STORED_CODE_CHARS, MAX_STORED_OUTPUT_CHARS, RUNNER_SOURCE_FILE_NAME},
    db::repositories::{SubmissionRepository, TestCaseRepository},
    error::{AppError, AppResult},
    models::{ExecutionResult, NewSubmission, Submission, SubmissionStatus, TestCase, TestSummary},
    runner::{CodeRunner, ExecutePayload, SourceFile},
    utils::truncate,
};

/// One grading call, fully parameterized
///
/// `user_id` is the user the submission is recorded for; `triggered_by` is
/// the authenticated caller. They differ only under admin impersonation,
/// in which case `created_by_admin` carries the admin's identity.
#[derive(Debug, Clone)]
pub struct GradeRequest {
    pub contest_id: Uuid,
    pub question_id: Uuid,
    pub language: String,
    pub code: String,
    /// Restrict grading to the first test case (fast smoke-check)
    pub quick: bool,
    pub user_id: Uuid,
    pub triggered_by: Uuid,
    pub created_by_admin: Option<Uuid>,
}

/// Grading service for business logic
pub struct GradingService;

impl GradingService {
    /// Grade a submission request and persist the outcome.
    ///
    /// Structural failures (no test cases, database errors) abort before
    /// anything is written. Per-test-case runner failures never abort the
    /// call; they are recorded inline and grading continues. Persistence is
    /// the last step, so an aborted call leaves no partial record.
    pub async fn grade(
        pool: &PgPool,
        runner: &dyn CodeRunner,
        request: GradeRequest,
    ) -> AppResult<Submission> {
        let test_cases = TestCaseRepository::list_for_question(
            pool,
            &request.contest_id,
            &request.question_id,
        )
        .await?;

        if test_cases.is_empty() {
            warn!(
                contest_id = %request.contest_id,
                question_id = %request.question_id,
                "Grading requested for a question without test cases"
            );
            return Err(AppError::NoTestCases);
        }

        let selected = select_test_cases(&test_cases, request.quick);
        let results = run_test_cases(runner, &request.language, &request.code, selected).await;
        let (summary, status) = aggregate(&results);

        let submission = SubmissionRepository::create(
            pool,
            NewSubmission {
                contest_id: request.contest_id,
                question_id: request.question_id,
                user_id: request.user_id,
                code: truncate(&request.code, MAX_STORED_CODE_CHARS),
                language: request.language,
                status,
                passed_count: summary.passed_count,
                total: summary.total,
                results,
                quick: request.quick,
                triggered_by: request.triggered_by,
                created_by_admin: request.created_by_admin,
            },
        )
        .await?;

        info!(
            submission_id = %submission.id,
            user_id = %submission.user_id,
            status = %status,
            passed = summary.passed_count,
            total = summary.total,
            "Submission saved"
        );

        Ok(submission)
    }
}

/// Pick the test cases a grading call will execute.
///
/// Quick runs use only the first test case; order is significant and the
/// input sequence is already sorted ascending by `order`.
fn select_test_cases(test_cases: &[TestCase], quick: bool) -> &[TestCase] {
    if quick && !test_cases.is_empty() {
        &test_cases[..1]
    } else {
        test_cases
    }
}

/// Execute the selected test cases strictly sequentially.
///
/// A failed runner call is recorded as a failed result and execution moves
/// on to the next test case.
async fn run_test_cases(
    runner: &dyn CodeRunner,
    language: &str,
    code: &str,
    test_cases: &[TestCase],
) -> Vec<ExecutionResult> {
    let mut results = Vec::with_capacity(test_cases.len());

    for test_case in test_cases {
        let payload = ExecutePayload {
            language: language.to_string(),
            version: test_case.version_selector().to_string(),
            files: vec![SourceFile {
                name: RUNNER_SOURCE_FILE_NAME.to_string(),
                content: code.to_string(),
            }],
            stdin: test_case.input.clone(),
        };

        let result = match runner.execute(&payload).await {
            Ok(output) => {
                let actual = output.stdout.trim();
                ExecutionResult {
                    stdout: Some(truncate(actual, MAX_STORED_OUTPUT_CHARS)),
                    stderr: Some(truncate(
                        output.stderr.as_deref().unwrap_or(""),
                        MAX_STORED_OUTPUT_CHARS,
                    )),
                    passed: outputs_match(actual, &test_case.expected_output),
                    error: None,
                }
            }
            Err(err) => {
                warn!(
                    order = test_case.order,
                    error = %err,
                    "Test case execution failed, continuing with remaining test cases"
                );
                ExecutionResult {
                    stdout: None,
                    stderr: None,
                    passed: false,
                    error: Some(err.to_string()),
                }
            }
        };

        results.push(result);
    }

    results
}

/// Strict equality on whitespace-trimmed output.
///
/// A test case with empty trimmed expected output never passes. This
/// guards against misconfigured test cases silently always-passing.
fn outputs_match(actual_trimmed: &str, expected: &str) -> bool {
    let expected = expected.trim();
    !expected.is_empty() && actual_trimmed == expected
}

/// Aggregate per-test results into a summary and final status.
///
/// A submission is correct iff every selected test case passed and at
/// least one was executed.
fn aggregate(results: &[ExecutionResult]) -> (TestSummary, SubmissionStatus) {
    let passed_count = results.iter().filter(|r| r.passed).count() as i32;
    let total = results.len() as i32;

    let status = if total > 0 && passed_count == total {
        SubmissionStatus::Correct
    } else {
        SubmissionStatus::Incorrect
    };

    (TestSummary { passed_count, total }, status)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::runner::{MockCodeRunner, RunOutput, RunnerError};

    use super::*;

    fn test_case(order: i32, input: &str, expected: &str) -> TestCase {
        TestCase {
            id: Uuid::new_v4(),
            contest_id: Uuid::new_v4(),
            question_id: Uuid::new_v4(),
            input: input.to_string(),
            expected_output: expected.to_string(),
            runner_version: None,
            order,
            created_at: Utc::now(),
        }
    }

    fn sum_question() -> Vec<TestCase> {
        vec![test_case(0, "2 3", "5"), test_case(1, "10 20", "30")]
    }

    /// A runner that behaves like code summing the integers on stdin
    fn summing_runner() -> MockCodeRunner {
        let mut runner = MockCodeRunner::new();
        runner.expect_execute().returning(|payload| {
            let sum: i64 = payload
                .stdin
                .split_whitespace()
                .map(|n| n.parse::<i64>().unwrap())
                .sum();
            Ok(RunOutput {
                stdout: format!("{}\n", sum),
                stderr: Some(String::new()),
            })
        });
        runner
    }

    #[tokio::test]
    async fn test_all_passing_tests_yield_correct() {
        let runner = summing_runner();
        let results = run_test_cases(&runner, "python3", "sum code", &sum_question()).await;

        let (summary, status) = aggregate(&results);
        assert_eq!(status, SubmissionStatus::Correct);
        assert_eq!(summary.passed_count, 2);
        assert_eq!(summary.total, 2);
        assert!(results.iter().all(|r| r.error.is_none()));
    }

    #[tokio::test]
    async fn test_wrong_output_yields_incorrect() {
        let mut runner = MockCodeRunner::new();
        runner.expect_execute().returning(|_| {
            Ok(RunOutput {
                stdout: "0\n".to_string(),
                stderr: None,
            })
        });

        let results = run_test_cases(&runner, "python3", "print(0)", &sum_question()).await;

        let (summary, status) = aggregate(&results);
        assert_eq!(status, SubmissionStatus::Incorrect);
        assert_eq!(summary.passed_count, 0);
        assert_eq!(summary.total, 2);
    }

    #[tokio::test]
    async fn test_quick_runs_only_the_first_test_case() {
        let runner = summing_runner();
        let test_cases = sum_question();

        let selected = select_test_cases(&test_cases, true);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].order, 0);

        let results = run_test_cases(&runner, "python3", "sum code", selected).await;
        assert_eq!(results.len(), 1);
        assert!(results[0].passed);
    }

    #[test]
    fn test_full_run_selects_every_test_case() {
        let test_cases = sum_question();
        assert_eq!(select_test_cases(&test_cases, false).len(), 2);
    }

    #[tokio::test]
    async fn test_runner_failure_is_isolated_to_its_test_case() {
        // First test case hits a runner 500, the second still executes
        let mut runner = MockCodeRunner::new();
        runner.expect_execute().returning(|payload| {
            if payload.stdin == "2 3" {
                Err(RunnerError::Status(500))
            } else {
                Ok(RunOutput {
                    stdout: "30".to_string(),
                    stderr: None,
                })
            }
        });

        let results = run_test_cases(&runner, "python3", "sum code", &sum_question()).await;

        assert_eq!(results.len(), 2);
        assert!(!results[0].passed);
        assert_eq!(results[0].error.as_deref(), Some("Runner error 500"));
        assert_eq!(results[0].stdout, None);
        assert!(results[1].passed);

        let (summary, status) = aggregate(&results);
        assert_eq!(status, SubmissionStatus::Incorrect);
        assert_eq!(summary.passed_count, 1);
    }

    #[tokio::test]
    async fn test_version_selector_reaches_the_runner() {
        let mut test_cases = vec![test_case(0, "2 3", "5")];
        test_cases[0].runner_version = Some("3.11".to_string());

        let mut runner = MockCodeRunner::new();
        runner
            .expect_execute()
            .withf(|payload| payload.version == "3.11" && payload.files[0].name == "Main")
            .returning(|_| {
                Ok(RunOutput {
                    stdout: "5".to_string(),
                    stderr: None,
                })
            });

        let results = run_test_cases(&runner, "python3", "sum code", &test_cases).await;
        assert!(results[0].passed);
    }

    #[test]
    fn test_comparison_ignores_leading_and_trailing_whitespace() {
        assert!(outputs_match("5", " 5 \n"));
        assert!(outputs_match("a b", "a b"));
        // internal whitespace is significant
        assert!(!outputs_match("a  b", "a b"));
    }

    #[test]
    fn test_empty_expected_output_never_passes() {
        assert!(!outputs_match("", ""));
        assert!(!outputs_match("anything", "   \n"));
    }

    #[test]
    fn test_zero_results_can_never_be_correct() {
        let (summary, status) = aggregate(&[]);
        assert_eq!(status, SubmissionStatus::Incorrect);
        assert_eq!(summary.total, 0);
    }

    #[tokio::test]
    async fn test_oversized_stdout_is_truncated_before_storage() {
        let mut runner = MockCodeRunner::new();
        runner.expect_execute().returning(|_| {
            Ok(RunOutput {
                stdout: "x".repeat(MAX_STORED_OUTPUT_CHARS + 100),
                stderr: None,
            })
        });

        let results =
            run_test_cases(&runner, "python3", "spam code", &[test_case(0, "", "5")]).await;

        let stdout = results[0].stdout.as_deref().unwrap();
        assert!(stdout.ends_with("...[truncated]"));
        assert!(!results[0].passed);
    }
}
