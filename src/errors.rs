//! Error types for quiz-server configuration
//!
//! Login outcomes are never errors; a rejected login is an
//! [`AuthResult`](crate::models::auth::AuthResult) with `authenticated == false`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading settings or initializing logging
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file exists but could not be read
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for the settings schema
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: basic_toml::Error,
    },

    /// `.env` file exists but contains a line that is not `KEY=VALUE`
    #[error("Failed to load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    /// A global logger was already installed
    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
