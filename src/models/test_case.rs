//! Test case model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::RUNNER_ANY_VERSION;

/// Test case database model
///
/// Test cases are immutable once authored and belong to a question,
/// ordered ascending by `order`. The first test case (lowest `order`)
/// is the one used for quick smoke-check runs.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestCase {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub question_id: Uuid,
    pub input: String,
    pub expected_output: String,
    /// Runtime version selector for the remote runner; None means any
    pub runner_version: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

impl TestCase {
    /// Version selector to send to the runner for this test case
    pub fn version_selector(&self) -> &str {
        self.runner_version.as_deref().unwrap_or(RUNNER_ANY_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_case(version: Option<&str>) -> TestCase {
        TestCase {
            id: Uuid::new_v4(),
            contest_id: Uuid::new_v4(),
            question_id: Uuid::new_v4(),
            input: "2 3".to_string(),
            expected_output: "5".to_string(),
            runner_version: version.map(String::from),
            order: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_version_selector_falls_back_to_wildcard() {
        assert_eq!(test_case(None).version_selector(), "*");
        assert_eq!(test_case(Some("3.11")).version_selector(), "3.11");
    }
}
