use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::profile::{builtin_profile, load_profile, StoreProfile};
use crate::ConfigError;

/// Default cap on pasted input, in bytes.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("STORELD_LOG_LEVEL", "info");
    let profile_path = lookup("STORELD_PROFILE_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let max_input_bytes = parse_usize(
        "STORELD_MAX_INPUT_BYTES",
        &DEFAULT_MAX_INPUT_BYTES.to_string(),
    )?;
    if max_input_bytes == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "STORELD_MAX_INPUT_BYTES".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        profile_path,
        max_input_bytes,
    })
}

impl AppConfig {
    /// The configured store profile, falling back to the embedded one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `profile_path` is set and cannot be loaded.
    pub fn store_profile(&self) -> Result<StoreProfile, ConfigError> {
        match &self.profile_path {
            Some(path) => load_profile(path),
            None => Ok(builtin_profile()),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
