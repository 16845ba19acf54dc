//! Grading handler implementations
//!
//! Three thin adapters over [`GradingService::grade`] that differ only in
//! authorization policy and audit identities. Note that /run is not a
//! dry-run: every grading call persists a submission record.

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    middleware::json::JsonBody,
    services::{GradeRequest, GradingService},
    state::AppState,
};

use super::{
    request::{ImpersonateRequest, RunRequest},
    response::GradeResponse,
};

/// Grade as the caller, honoring the quick flag
pub async fn run(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    JsonBody(payload): JsonBody<RunRequest>,
) -> AppResult<Json<GradeResponse>> {
    payload.validate()?;

    let submission = GradingService::grade(
        state.db(),
        state.runner(),
        GradeRequest {
            contest_id: payload.contest_id,
            question_id: payload.question_id,
            language: payload.language,
            code: payload.code,
            quick: payload.quick,
            user_id: auth_user.id,
            triggered_by: auth_user.id,
            created_by_admin: None,
        },
    )
    .await?;

    Ok(Json(GradeResponse::from_submission(submission)))
}

/// Final submission by the caller (same grading core as run)
pub async fn submit(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    JsonBody(payload): JsonBody<RunRequest>,
) -> AppResult<Json<GradeResponse>> {
    run(State(state), auth_user, JsonBody(payload)).await
}

/// Grade on behalf of another user; admin role required.
///
/// The persisted record carries both identities: the target as `user_id`
/// and the admin as `created_by_admin`.
pub async fn impersonate(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    JsonBody(payload): JsonBody<ImpersonateRequest>,
) -> AppResult<Json<GradeResponse>> {
    ensure_admin(&auth_user)?;
    payload.validate()?;

    let submission = GradingService::grade(
        state.db(),
        state.runner(),
        GradeRequest {
            contest_id: payload.contest_id,
            question_id: payload.question_id,
            language: payload.language,
            code: payload.code,
            quick: payload.quick,
            user_id: payload.target_user_id,
            triggered_by: auth_user.id,
            created_by_admin: Some(auth_user.id),
        },
    )
    .await?;

    Ok(Json(GradeResponse::from_submission(submission)))
}

/// Impersonation requires the caller's role claim to equal "admin"
fn ensure_admin(user: &AuthenticatedUser) -> AppResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden("Admin role required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::constants::roles;

    use super::*;

    fn user_with_role(role: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            username: "carol".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_non_admin_cannot_impersonate() {
        let err = ensure_admin(&user_with_role(roles::USER)).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn test_admin_role_claim_allows_impersonation() {
        assert!(ensure_admin(&user_with_role(roles::ADMIN)).is_ok());
    }
}
