//! Rate limiting middleware
//!
//! Fixed-window counters in Redis, keyed by client IP and endpoint group.
//! Grading endpoints get the tightest budget since every request fans out
//! into remote runner calls. Fails open when Redis is unavailable.

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use redis::AsyncCommands;
use std::net::SocketAddr;

use crate::{constants::rate_limits, state::AppState};

/// Rate limit middleware
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, impl IntoResponse> {
    let ip = addr.ip().to_string();
    let path = request.uri().path().to_string();

    let (limit, window) = get_rate_limit(&path);

    let key = format!("rate_limit:{}:{}", ip, path_bucket(&path));
    let mut redis = state.redis();

    let count: i64 = redis.incr(&key, 1).await.unwrap_or(0);

    if count == 1 {
        // Set expiry on first request
        let _: () = redis.expire(&key, window).await.unwrap_or(());
    }

    if count > limit {
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            format!("Rate limit exceeded. Try again in {} seconds.", window),
        ));
    }

    Ok(next.run(request).await)
}

/// Get rate limit for a path
fn get_rate_limit(path: &str) -> (i64, i64) {
    match path_bucket(path) {
        "grading" => (
            rate_limits::GRADING_MAX_REQUESTS,
            rate_limits::GRADING_WINDOW_SECS,
        ),
        "execute" => (
            rate_limits::EXECUTE_MAX_REQUESTS,
            rate_limits::EXECUTE_WINDOW_SECS,
        ),
        _ => (
            rate_limits::GENERAL_MAX_REQUESTS,
            rate_limits::GENERAL_WINDOW_SECS,
        ),
    }
}

/// Get bucket for path (for grouping similar endpoints)
fn path_bucket(path: &str) -> &'static str {
    if path.starts_with("/api/v1/run")
        || path.starts_with("/api/v1/submit")
        || path.starts_with("/api/v1/admin/impersonate")
    {
        "grading"
    } else if path.starts_with("/api/v1/execute") {
        "execute"
    } else {
        "general"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grading_endpoints_share_the_tight_bucket() {
        assert_eq!(path_bucket("/api/v1/run"), "grading");
        assert_eq!(path_bucket("/api/v1/submit"), "grading");
        assert_eq!(path_bucket("/api/v1/admin/impersonate"), "grading");
        assert_eq!(path_bucket("/api/v1/execute"), "execute");
        assert_eq!(path_bucket("/api/v1/health"), "general");
    }

    #[test]
    fn test_grading_budget_is_the_tightest() {
        let (grading, _) = get_rate_limit("/api/v1/run");
        let (general, _) = get_rate_limit("/api/v1/health");
        assert!(grading < general);
    }
}
