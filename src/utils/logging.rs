// Centralized logging utilities for login results and settings
use log::{info, warn};
use std::path::Path;

use crate::errors::SettingsError;
use crate::models::auth::AuthResult;
use crate::models::AccountIdentity;
use crate::settings::LoggingSettings;

pub struct LoggingHelper;

impl LoggingHelper {
    /// Initialize `env_logger` with the configured filter string
    ///
    /// # Errors
    ///
    /// Returns an error if a logger has already been installed
    pub fn init(logging: &LoggingSettings) -> Result<(), SettingsError> {
        env_logger::Builder::new()
            .parse_filters(&logging.level)
            .try_init()?;
        Ok(())
    }

    /// Log the outcome of a login attempt
    pub fn log_login_result<U: AccountIdentity>(result: &AuthResult<U>) {
        match (result.is_authenticated(), result.identity()) {
            (true, Some(identity)) => {
                info!("✅ Login succeeded for user: {}", identity.account_name());
            }
            (true, None) => {
                warn!("Login marked authenticated but no user was attached");
            }
            (false, _) => {
                warn!("❌ Login rejected");
            }
        }
    }

    /// Log that base settings were read from a file
    pub fn log_settings_loaded(path: &Path) {
        info!("✓ Loaded base settings from {}", path.display());
    }

    /// Log that settings from the secrets directory replaced the base settings
    pub fn log_settings_override(path: &Path) {
        info!("✓ Overriding settings from {}", path.display());
    }
}
