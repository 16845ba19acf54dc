//! Authentication service
//!
//! Token issuance lives in the identity provider; this service only
//! verifies bearer tokens presented to the grading endpoints.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};

    use crate::error::AppError;

    use super::*;

    const SECRET: &str = "test-secret";

    fn token(expires_in: Duration) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            username: "alice".to_string(),
            role: "user".to_string(),
            exp: (now + expires_in).timestamp(),
            iat: now.timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_round_trips() {
        let claims = AuthService::verify_token(&token(Duration::hours(1)), SECRET).unwrap();
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, "user");
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let err = AuthService::verify_token(&token(Duration::hours(-1)), SECRET).unwrap_err();
        assert!(matches!(err, AppError::TokenExpired));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let err = AuthService::verify_token(&token(Duration::hours(1)), "other").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }
}
