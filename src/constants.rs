//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// REMOTE RUNNER DEFAULTS
// =============================================================================

/// Default execute endpoint of the remote code runner
pub const DEFAULT_RUNNER_URL: &str = "https://emkc.org/api/v2/piston/execute";

/// Default per-request timeout against the runner, in seconds
pub const DEFAULT_RUNNER_TIMEOUT_SECONDS: u64 = 30;

/// Default number of retries after a retryable runner failure
pub const DEFAULT_RUNNER_MAX_RETRIES: u32 = 2;

/// Default base backoff between runner retries, in milliseconds
pub const DEFAULT_RUNNER_RETRY_BACKOFF_MS: u64 = 250;

/// File name the runner compiles the submitted code under
pub const RUNNER_SOURCE_FILE_NAME: &str = "Main";

/// Runner version selector meaning "any available version"
pub const RUNNER_ANY_VERSION: &str = "*";

// =============================================================================
// STORAGE BOUNDS
// =============================================================================

/// Maximum characters of source code kept on a submission record
pub const MAX_STORED_CODE_CHARS: usize = 200_000;

/// Maximum characters of stdout/stderr kept per test case result
pub const MAX_STORED_OUTPUT_CHARS: usize = 10_000;

/// Maximum accepted source code length in a request body
pub const MAX_REQUEST_CODE_CHARS: u64 = 1_048_576;

// =============================================================================
// ROLES
// =============================================================================

/// Role identifiers carried in bearer token claims
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const USER: &str = "user";
}

// =============================================================================
// RATE LIMITS
// =============================================================================

/// Rate limits (requests per window) by endpoint group
pub mod rate_limits {
    /// Grading endpoints fan out to the remote runner, one round-trip per
    /// test case, so they get the tightest budget.
    pub const GRADING_MAX_REQUESTS: i64 = 10;
    pub const GRADING_WINDOW_SECS: i64 = 60;

    /// One-off execute calls cost a single runner round-trip
    pub const EXECUTE_MAX_REQUESTS: i64 = 30;
    pub const EXECUTE_WINDOW_SECS: i64 = 60;

    pub const GENERAL_MAX_REQUESTS: i64 = 120;
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}
