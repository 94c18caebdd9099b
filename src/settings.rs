use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::SettingsError;
use crate::utils::logging::LoggingHelper;

/// Settings file name looked up in the working and secrets directories
pub const SETTINGS_FILE: &str = "Settings.toml";

/// Dotenv file read from the working directory before settings are resolved
pub const ENV_FILE: &str = ".env";

/// Environment variable naming a directory whose `Settings.toml` takes precedence
pub const SECRETS_DIR_ENV: &str = "QUIZ_SERVER_SECRETS_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct QuizServerSettings {
    pub logging: LoggingSettings,
    pub responses: ResponseSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    /// `env_logger` filter string, e.g. `info` or `quiz_server=debug`
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResponseSettings {
    /// HTTP status sent with a rejected login
    pub rejected_status: u16,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for ResponseSettings {
    fn default() -> Self {
        Self {
            rejected_status: 401,
        }
    }
}

impl ResponseSettings {
    /// Configured status for a rejected login
    ///
    /// Only `4xx` codes are honoured; anything else yields `401`.
    #[must_use]
    pub fn rejected_status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.rejected_status)
            .ok()
            .filter(StatusCode::is_client_error)
            .unwrap_or(StatusCode::UNAUTHORIZED)
    }
}

/// Where the base settings came from, reported once logging is up
#[derive(Debug, Clone, PartialEq, Eq)]
enum SettingsSource {
    Defaults,
    File(PathBuf),
    SecretsDir(PathBuf),
}

impl QuizServerSettings {
    /// Load settings from configuration files and environment variables,
    /// then initialize logging from the result
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A `.env` file exists but cannot be parsed
    /// - A settings file exists but cannot be read or parsed
    /// - Logger initialization fails
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_env_file(Path::new(ENV_FILE))?;

        let (mut settings, source) = Self::load_base_settings()?;
        settings.apply_env_overrides();

        init_logging(&settings.logging)?;
        match source {
            SettingsSource::Defaults => log::info!("ℹ No {SETTINGS_FILE} found, using defaults"),
            SettingsSource::File(path) => LoggingHelper::log_settings_loaded(&path),
            SettingsSource::SecretsDir(path) => LoggingHelper::log_settings_override(&path),
        }

        Ok(settings)
    }

    /// Parse a single settings file, without environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let toml_content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        basic_toml::from_str(&toml_content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load base settings from TOML file(s) or use defaults
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables (applied separately after loading base settings)
    /// 2. Settings.toml in `QUIZ_SERVER_SECRETS_DIR` (if specified and exists)
    /// 3. Settings.toml in current directory (if exists)
    /// 4. Default settings
    fn load_base_settings() -> Result<(Self, SettingsSource), SettingsError> {
        let mut settings = Self::default();
        let mut source = SettingsSource::Defaults;

        let default_config_path = PathBuf::from(SETTINGS_FILE);
        if default_config_path.exists() {
            settings = Self::load_from_path(&default_config_path)?;
            source = SettingsSource::File(default_config_path);
        }

        // Secrets dir replaces the working-directory file whole
        if let Ok(secrets_dir) = std::env::var(SECRETS_DIR_ENV) {
            let secrets_path = Path::new(&secrets_dir).join(SETTINGS_FILE);
            if secrets_path.exists() {
                settings = Self::load_from_path(&secrets_path)?;
                source = SettingsSource::SecretsDir(secrets_path);
            }
        }

        Ok((settings, source))
    }

    /// Apply environment variable overrides to settings
    pub fn apply_env_overrides(&mut self) {
        Self::apply_logging_env_overrides(&mut self.logging);
        Self::apply_response_env_overrides(&mut self.responses);
    }

    /// Apply environment overrides for logging settings
    fn apply_logging_env_overrides(logging_settings: &mut LoggingSettings) {
        if let Ok(log_level) = std::env::var("RUST_LOG") {
            logging_settings.level = log_level;
        }
    }

    /// Apply environment overrides for response settings
    fn apply_response_env_overrides(response_settings: &mut ResponseSettings) {
        if let Ok(status_str) = std::env::var("QUIZ_REJECTED_STATUS") {
            if let Ok(status) = status_str.parse::<u16>() {
                response_settings.rejected_status = status;
            }
        }
    }

    /// Load environment variables from a dotenv file
    /// Variables already present in the process environment are kept
    fn load_env_file(path: &Path) -> Result<(), SettingsError> {
        match dotenvy::from_path(path) {
            Ok(()) => Ok(()),
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Initialize the global logger from logging settings
///
/// # Errors
///
/// Returns an error if a logger has already been installed
pub fn init_logging(logging: &LoggingSettings) -> Result<(), SettingsError> {
    LoggingHelper::init(logging)
}
