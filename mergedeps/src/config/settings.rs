//! Settings file parsing.

use super::{validate_api_url, validate_bot_user_id, validate_merge_command, ConfigError};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Optional overrides loaded from a TOML settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Comment posted to trigger a merge.
    pub merge_command: Option<String>,

    /// User id of the upgrade bot whose pull requests are processed.
    pub bot_user_id: Option<u64>,

    /// Base URL of the GitHub API.
    pub api_url: Option<String>,
}

impl Settings {
    /// Loads and validates a settings file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing or unreadable, not valid
    /// TOML, or holds invalid values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings = Self::parse(&content, path)?;
        debug!(path = %path.display(), ?settings, "Loaded settings");
        Ok(settings)
    }

    /// Parses and validates settings from TOML text. `path` is used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for invalid TOML or invalid values.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let origin = path.display().to_string();
        let settings: Self = toml::from_str(content).map_err(|e| ConfigError::Malformed {
            path: origin.clone(),
            source: e,
        })?;

        if let Some(command) = &settings.merge_command {
            validate_merge_command(&origin, command)?;
        }
        if let Some(id) = settings.bot_user_id {
            validate_bot_user_id(&origin, id)?;
        }
        if let Some(api_url) = &settings.api_url {
            validate_api_url(&origin, api_url)?;
        }

        Ok(settings)
    }
}
