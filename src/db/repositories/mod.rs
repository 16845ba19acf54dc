//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod submission_repo;
pub mod test_case_repo;
pub mod violation_repo;

pub use submission_repo::SubmissionRepository;
pub use test_case_repo::TestCaseRepository;
pub use violation_repo::ViolationRepository;
