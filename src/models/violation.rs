//! Proctoring violation model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Proctoring incident reported by the contest client (tab switch, focus
/// loss, fullscreen exit). Append-only; reports are accepted even without
/// an authenticated identity.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Violation {
    pub id: Uuid,
    pub contest_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub tab_id: Option<String>,
    pub kind: String,
    pub detail: Option<String>,
    /// Timestamp reported by the client, as opposed to `recorded_at`
    pub client_ts: Option<DateTime<Utc>>,
    pub ip: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
