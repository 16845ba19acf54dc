//! Submission repository

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{NewSubmission, Submission},
};

/// Repository for submission database operations
///
/// Submissions are append-only: there are no update or delete operations,
/// and identifiers are generated by the database on insert. Concurrent
/// grading calls insert independently without coordination.
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new submission record
    pub async fn create(pool: &PgPool, new: NewSubmission) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (
                contest_id, question_id, user_id, code, language,
                status, passed_count, total, results, quick,
                triggered_by, created_by_admin
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(new.contest_id)
        .bind(new.question_id)
        .bind(new.user_id)
        .bind(&new.code)
        .bind(&new.language)
        .bind(new.status.as_str())
        .bind(new.passed_count)
        .bind(new.total)
        .bind(Json(&new.results))
        .bind(new.quick)
        .bind(new.triggered_by)
        .bind(new.created_by_admin)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(submission)
    }
}
