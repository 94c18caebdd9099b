#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![deny(warnings)]
#![allow(clippy::multiple_crate_versions)]

/// Version of the quiz-server crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod errors;
pub mod models;
pub mod settings;
pub mod utils;

// Shared fixtures for unit tests and feature-gated integration tests
#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Re-export commonly used items
pub use errors::SettingsError;
pub use models::auth::{AuthResult, LoginResponse};
pub use models::{AccountIdentity, QuizUser, UserRole};
pub use settings::QuizServerSettings;
