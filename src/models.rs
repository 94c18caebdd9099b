use serde::{Deserialize, Serialize};

pub mod auth;

/// What the response layer needs to know about an identity carried by an
/// [`auth::AuthResult`]
pub trait AccountIdentity {
    /// Name used when logging the login outcome
    fn account_name(&self) -> &str;
}

/// Role of a quiz-server account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Teacher,
    Student,
}

/// Account entity returned to the client after a login
/// Carries no credential material
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QuizUser {
    pub id: i64,
    pub username: String,
    pub is_teacher: bool,
}

impl QuizUser {
    #[must_use]
    pub fn new(id: i64, username: impl Into<String>, is_teacher: bool) -> Self {
        Self {
            id,
            username: username.into(),
            is_teacher,
        }
    }

    /// Create a teacher account
    #[must_use]
    pub fn teacher(id: i64, username: impl Into<String>) -> Self {
        Self::new(id, username, true)
    }

    /// Create a student account
    #[must_use]
    pub fn student(id: i64, username: impl Into<String>) -> Self {
        Self::new(id, username, false)
    }

    #[must_use]
    pub fn role(&self) -> UserRole {
        if self.is_teacher {
            UserRole::Teacher
        } else {
            UserRole::Student
        }
    }
}

impl AccountIdentity for QuizUser {
    fn account_name(&self) -> &str {
        &self.username
    }
}
