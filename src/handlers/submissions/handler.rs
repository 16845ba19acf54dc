//! Submission handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    db::repositories::SubmissionRepository,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    state::AppState,
};

use super::response::SubmissionResponse;

/// Get a stored submission record
pub async fn get_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = SubmissionRepository::find_by_id(state.db(), &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

    // Users can only view their own submissions (unless admin)
    if submission.user_id != auth_user.id && !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Cannot view other users' submissions".to_string(),
        ));
    }

    Ok(Json(SubmissionResponse::from(submission)))
}
