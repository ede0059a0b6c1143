//! Run configuration.
//!
//! A run is configured from command line values, optionally layered over a
//! TOML settings file:
//!
//! ```toml
//! merge_command = "@dependabot squash and merge"
//! bot_user_id = 49699333
//! api_url = "https://github.example.com/api/v3"
//! ```

mod error;
mod merger;
mod settings;

pub use error::ConfigError;
pub use merger::{MergerConfig, DEFAULT_BOT_USER_ID, DEFAULT_BUFFER_SIZE};
pub use settings::Settings;

/// Checks that a merge command is usable.
pub(crate) fn validate_merge_command(origin: &str, command: &str) -> Result<(), ConfigError> {
    if command.trim().is_empty() {
        return Err(invalid(origin, "merge_command", "must not be empty"));
    }
    Ok(())
}

/// Checks that a bot user id is usable.
pub(crate) fn validate_bot_user_id(origin: &str, id: u64) -> Result<(), ConfigError> {
    if id == 0 {
        return Err(invalid(origin, "bot_user_id", "must not be 0"));
    }
    Ok(())
}

/// Checks that an API base URL is an absolute http(s) URL.
pub(crate) fn validate_api_url(origin: &str, api_url: &str) -> Result<(), ConfigError> {
    let url = url::Url::parse(api_url).map_err(|e| invalid(origin, "api_url", e))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            origin,
            "api_url",
            format!("unsupported scheme '{scheme}'"),
        )),
    }
}

fn invalid(origin: &str, key: &'static str, message: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        origin: origin.to_string(),
        key,
        message: message.to_string(),
    }
}
