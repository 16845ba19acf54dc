//! Proctoring violation handler
//!
//! The contest client reports tab switches, focus loss and similar events
//! here. Reports are accepted even without a valid bearer token: an
//! anonymous report with a user id in the body is still worth recording.

use axum::{
    Json, Router,
    extract::State,
    http::HeaderMap,
    routing::post,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    db::repositories::ViolationRepository,
    error::AppResult,
    middleware::auth::OptionalAuth,
    middleware::json::JsonBody,
    state::AppState,
};

/// Violation report from the contest client
#[derive(Debug, Deserialize)]
pub struct ViolationReport {
    pub contest_id: Option<Uuid>,
    /// Fallback identity for unauthenticated reports; the verified token
    /// identity wins when both are present
    pub user_id: Option<Uuid>,
    pub tab_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub detail: Option<String>,
    /// Client-side timestamp of the event
    pub ts: Option<DateTime<Utc>>,
}

/// Record a proctoring incident
async fn record_violation(
    State(state): State<AppState>,
    OptionalAuth(auth_user): OptionalAuth,
    headers: HeaderMap,
    JsonBody(report): JsonBody<ViolationReport>,
) -> AppResult<Json<Value>> {
    let user_id = auth_user.map(|u| u.id).or(report.user_id);

    let ip = headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string());

    ViolationRepository::create(
        state.db(),
        report.contest_id.as_ref(),
        user_id.as_ref(),
        report.tab_id.as_deref(),
        report.kind.as_deref().unwrap_or("unknown"),
        report.detail.as_deref(),
        report.ts,
        ip.as_deref(),
    )
    .await?;

    Ok(Json(json!({ "ok": true })))
}

/// Violation routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/violations", post(record_violation))
}
