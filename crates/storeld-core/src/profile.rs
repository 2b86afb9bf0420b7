use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, FieldSet};

/// The built-in reference store, embedded at compile time.
pub const BUILTIN_PROFILE_YAML: &str = include_str!("../defaults/atwater.yaml");

/// Defaults and brand-wide constants for one store.
///
/// `fields` backfills anything the extractor does not recognise. `image`
/// and `same_as` are emitted verbatim in every generated schema, for both
/// locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreProfile {
    pub fields: FieldSet,
    pub image: String,
    pub same_as: Vec<String>,
}

/// The embedded reference profile.
///
/// # Panics
///
/// Panics if the embedded fixture is malformed, which the unit tests rule out.
#[must_use]
pub fn builtin_profile() -> StoreProfile {
    parse_profile(BUILTIN_PROFILE_YAML).expect("embedded store profile is valid")
}

/// Parse and validate a profile from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML does not describe a complete profile or
/// fails validation.
pub fn parse_profile(yaml: &str) -> Result<StoreProfile, ConfigError> {
    let profile: StoreProfile = serde_yaml::from_str(yaml)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Load and validate a store profile from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_profile(path: &Path) -> Result<StoreProfile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfileFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_profile(&content)
}

fn validate_profile(profile: &StoreProfile) -> Result<(), ConfigError> {
    if profile.image.trim().is_empty() {
        return Err(ConfigError::Validation(
            "profile image must be non-empty".to_string(),
        ));
    }

    for link in &profile.same_as {
        if !(link.starts_with("https://") || link.starts_with("http://")) {
            return Err(ConfigError::Validation(format!(
                "same_as entry '{link}' must be an http(s) URL"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
