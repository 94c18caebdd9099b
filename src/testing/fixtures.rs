//! Test fixtures providing pre-built accounts and login results

use crate::models::auth::LoginResponse;
use crate::models::QuizUser;

use super::constants::{
    TEST_STUDENT_ID, TEST_STUDENT_USERNAME, TEST_TEACHER_ID, TEST_TEACHER_USERNAME,
};

/// Central fixture provider for all test data
pub struct TestFixtures;

impl TestFixtures {
    #[must_use]
    pub fn teacher() -> QuizUser {
        QuizUser::teacher(TEST_TEACHER_ID, TEST_TEACHER_USERNAME)
    }

    #[must_use]
    pub fn student() -> QuizUser {
        QuizUser::student(TEST_STUDENT_ID, TEST_STUDENT_USERNAME)
    }

    /// Authenticated login for the fixture teacher
    #[must_use]
    pub fn successful_login() -> LoginResponse {
        LoginResponse::authenticated(Self::teacher())
    }

    #[must_use]
    pub fn rejected_login() -> LoginResponse {
        LoginResponse::rejected()
    }
}
