//! Platform error types.

use thiserror::Error;

/// Errors returned by a hosting platform.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// GitHub API error. `target` names the organization, repository or pull
    /// request the call was about.
    #[error("GitHub API error for {target}: {source}")]
    GitHubError {
        target: String,
        #[source]
        source: octocrab::Error,
    },

    /// The platform rejected a request.
    ///
    /// For [`HostingPlatform`](super::HostingPlatform) implementations that
    /// have no client error type of their own to wrap.
    #[error("Request for {target} failed: {message}")]
    RequestFailed { target: String, message: String },
}

impl PlatformError {
    /// Returns the organization, repository or pull request the failure is about.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::GitHubError { target, .. } | Self::RequestFailed { target, .. } => target,
        }
    }
}
