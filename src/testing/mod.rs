//! Shared testing utilities for quiz-server
//!
//! Available to unit tests and, with the `testing` feature, to integration tests.
//!
//! ```rust,ignore
//! use quiz_server::testing::TestFixtures;
//!
//! let login = TestFixtures::successful_login();
//! assert!(login.is_authenticated());
//! ```

pub mod fixtures;

pub use fixtures::TestFixtures;

/// Common test constants
pub mod constants {
    /// Id of the fixture teacher account
    pub const TEST_TEACHER_ID: i64 = 1;

    /// Username of the fixture teacher account
    pub const TEST_TEACHER_USERNAME: &str = "alice";

    /// Id of the fixture student account
    pub const TEST_STUDENT_ID: i64 = 2;

    /// Username of the fixture student account
    pub const TEST_STUDENT_USERNAME: &str = "bob";
}
