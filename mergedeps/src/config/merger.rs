//! Run configuration.

use super::{
    validate_api_url, validate_bot_user_id, validate_merge_command, ConfigError, Settings,
};
use crate::merge::DEFAULT_MERGE_COMMAND;

/// GitHub user id of `dependabot[bot]`.
pub const DEFAULT_BOT_USER_ID: u64 = 49699333;

/// Capacity of the channel between discovery and the coordinator.
pub const DEFAULT_BUFFER_SIZE: usize = 64;

/// Configuration for a merge run.
#[derive(Debug, Clone)]
pub struct MergerConfig {
    /// Organization whose repositories are scanned.
    organization: String,
    /// GitHub token used for API calls.
    token: String,
    /// Comment posted to trigger a merge.
    merge_command: String,
    /// User id of the upgrade bot.
    bot_user_id: u64,
    /// Base URL of the GitHub API, if not api.github.com.
    api_url: Option<String>,
    /// Whether to report merges without posting comments.
    dry_run: bool,
    /// Capacity of the discovery channel.
    buffer_size: usize,
}

impl MergerConfig {
    /// Creates a configuration with default settings.
    pub fn new(organization: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            token: token.into(),
            merge_command: DEFAULT_MERGE_COMMAND.to_string(),
            bot_user_id: DEFAULT_BOT_USER_ID,
            api_url: None,
            dry_run: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Applies values from a settings file.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        if let Some(command) = settings.merge_command {
            self.merge_command = command;
        }
        if let Some(id) = settings.bot_user_id {
            self.bot_user_id = id;
        }
        if settings.api_url.is_some() {
            self.api_url = settings.api_url;
        }
        self
    }

    /// Sets the merge command.
    pub fn with_merge_command(mut self, merge_command: impl Into<String>) -> Self {
        self.merge_command = merge_command.into();
        self
    }

    /// Sets the upgrade bot user id.
    pub fn with_bot_user_id(mut self, bot_user_id: u64) -> Self {
        self.bot_user_id = bot_user_id;
        self
    }

    /// Sets the GitHub API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sets the discovery channel capacity. Zero is raised to one.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    /// Validates values that may have come from the command line.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty organization or
    /// merge command, a zero bot id, or an invalid API URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let origin = "command line";

        if self.organization.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                origin: origin.to_string(),
                key: "organization",
                message: "must not be empty".to_string(),
            });
        }
        validate_merge_command(origin, &self.merge_command)?;
        validate_bot_user_id(origin, self.bot_user_id)?;
        if let Some(api_url) = &self.api_url {
            validate_api_url(origin, api_url)?;
        }
        Ok(())
    }

    /// Returns the organization name.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the merge command.
    pub fn merge_command(&self) -> &str {
        &self.merge_command
    }

    /// Returns the upgrade bot user id.
    pub fn bot_user_id(&self) -> u64 {
        self.bot_user_id
    }

    /// Returns the GitHub API base URL, if set.
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the discovery channel capacity.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}
