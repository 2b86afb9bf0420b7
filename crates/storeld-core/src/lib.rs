//! Shared model for storeld: the two-locale field set, the store profile
//! fixture that backs it, and environment-driven configuration.

pub mod app_config;
pub mod config;
pub mod fields;
pub mod profile;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_MAX_INPUT_BYTES};
pub use fields::{FieldKey, FieldSet, Locale, LocalizedValue};
pub use profile::{builtin_profile, load_profile, parse_profile, StoreProfile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("unknown locale: {0:?}")]
    UnknownLocale(String),

    #[error("failed to read profile file {path}: {source}")]
    ProfileFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile: {0}")]
    ProfileFileParse(#[from] serde_yaml::Error),

    #[error("profile validation failed: {0}")]
    Validation(String),
}
