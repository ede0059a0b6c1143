//! Pipeline error types.

use crate::config::ConfigError;
use crate::platform::PlatformError;
use crate::prompt::PromptError;
use crate::upgrade::UpgradeError;
use tokio::task::JoinError;

/// Fatal errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// A pull request title could not be parsed.
    #[error(transparent)]
    Upgrade(#[from] UpgradeError),

    /// Listing repositories or pull requests, or posting a comment, failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// The operator prompt failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A pipeline task panicked or was aborted.
    #[error("Pipeline task failed: {0}")]
    Task(#[from] JoinError),

    /// The run was cancelled because another stage failed.
    #[error("Run cancelled")]
    Cancelled,
}

impl MergeError {
    /// Returns true for errors caused by cancellation rather than a real failure.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        match self {
            Self::Cancelled => true,
            Self::Task(e) => e.is_cancelled(),
            _ => false,
        }
    }
}

/// Keeps the first error that is not an echo of cancellation.
#[derive(Debug, Default)]
pub(crate) struct FirstFailure {
    error: Option<MergeError>,
}

impl FirstFailure {
    /// Records an error unless a primary failure is already held.
    pub(crate) fn record(&mut self, error: MergeError) {
        match &self.error {
            Some(held) if !held.is_cancellation() => {}
            _ => self.error = Some(error),
        }
    }

    /// Returns `value`, or the recorded error if there is one.
    pub(crate) fn into_result<T>(self, value: T) -> Result<T, MergeError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(value),
        }
    }
}

/// Flattens the result of a joined task.
pub(crate) fn joined<T>(
    result: Result<Result<T, MergeError>, JoinError>,
) -> Result<T, MergeError> {
    result.map_err(MergeError::from).and_then(|inner| inner)
}
