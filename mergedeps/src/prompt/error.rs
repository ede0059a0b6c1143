//! Prompt error types.

use thiserror::Error;

/// Errors that can occur while asking the operator.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Reading the answer from the terminal failed.
    #[error("Failed to read confirmation: {0}")]
    Terminal(#[from] dialoguer::Error),
}
