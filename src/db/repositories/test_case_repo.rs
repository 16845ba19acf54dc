//! Test case repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::TestCase};

/// Repository for test case database operations
pub struct TestCaseRepository;

impl TestCaseRepository {
    /// List the test cases of a question, ordered ascending by `order`.
    ///
    /// Grading depends on this ordering: the lowest-order test case is the
    /// one selected by quick runs.
    pub async fn list_for_question(
        pool: &PgPool,
        contest_id: &Uuid,
        question_id: &Uuid,
    ) -> AppResult<Vec<TestCase>> {
        let test_cases = sqlx::query_as::<_, TestCase>(
            r#"
            SELECT * FROM test_cases
            WHERE contest_id = $1 AND question_id = $2
            ORDER BY "order" ASC
            "#,
        )
        .bind(contest_id)
        .bind(question_id)
        .fetch_all(pool)
        .await?;

        Ok(test_cases)
    }
}
