//! Configuration error types.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading or validating run settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read. A missing file has kind
    /// [`io::ErrorKind::NotFound`].
    #[error("Cannot read settings file '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The settings file is not valid TOML or has unknown keys.
    #[error("Settings file '{path}' is malformed: {source}")]
    Malformed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A setting has an unusable value.
    #[error("Invalid {key} from {origin}: {message}")]
    InvalidValue {
        /// Settings file path, or `command line`.
        origin: String,
        key: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Returns true if the settings file does not exist.
    #[must_use]
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::Unreadable { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
