//! Violation repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Violation};

/// Repository for proctoring violation records (append-only)
pub struct ViolationRepository;

impl ViolationRepository {
    /// Record a proctoring incident
    pub async fn create(
        pool: &PgPool,
        contest_id: Option<&Uuid>,
        user_id: Option<&Uuid>,
        tab_id: Option<&str>,
        kind: &str,
        detail: Option<&str>,
        client_ts: Option<DateTime<Utc>>,
        ip: Option<&str>,
    ) -> AppResult<Violation> {
        let violation = sqlx::query_as::<_, Violation>(
            r#"
            INSERT INTO contest_violations (
                contest_id, user_id, tab_id, kind, detail, client_ts, ip
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(contest_id)
        .bind(user_id)
        .bind(tab_id)
        .bind(kind)
        .bind(detail)
        .bind(client_ts)
        .bind(ip)
        .fetch_one(pool)
        .await?;

        Ok(violation)
    }
}
