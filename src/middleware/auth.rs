//! Authentication extractors
//!
//! Bearer tokens are verified directly in the extractors, so any handler
//! taking an [`AuthenticatedUser`] argument rejects unauthenticated
//! requests with 401 before its body runs.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{constants::roles, error::AppError, services::AuthService, state::AppState};

/// Authenticated user extracted from a verified bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }
}

fn verify_bearer(parts: &Parts, state: &AppState) -> Result<AuthenticatedUser, AppError> {
    let path = parts.uri.path();

    let auth_header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            debug!(path = %path, "Auth failed: No Authorization header");
            AppError::Unauthorized
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        debug!(path = %path, "Auth failed: Invalid Authorization format (expected 'Bearer <token>')");
        AppError::Unauthorized
    })?;

    let claims = AuthService::verify_token(token, &state.config().jwt.secret).map_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: Token verification failed");
        e
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        debug!(path = %path, sub = %claims.sub, "Auth failed: Invalid user ID in token");
        AppError::InvalidToken
    })?;

    debug!(path = %path, user_id = %user_id, role = %claims.role, "User authenticated");

    Ok(AuthenticatedUser {
        id: user_id,
        username: claims.username,
        role: claims.role,
    })
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        verify_bearer(parts, state)
    }
}

/// Optional authenticated user wrapper (never fails)
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(verify_bearer(parts, state).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_check_is_exact() {
        let mut user = AuthenticatedUser {
            id: Uuid::new_v4(),
            username: "carol".to_string(),
            role: roles::ADMIN.to_string(),
        };
        assert!(user.is_admin());

        user.role = roles::USER.to_string();
        assert!(!user.is_admin());

        // close-but-wrong role strings must not pass
        user.role = "Admin".to_string();
        assert!(!user.is_admin());
    }
}
