//! Upgrade identity error types.

use thiserror::Error;

/// Errors that can occur while deriving an upgrade identity.
#[derive(Debug, Error)]
pub enum UpgradeError {
    /// The title does not follow the `Bump <package> from <old> to <new>` format.
    #[error("PR title did not match expected pattern: {title}")]
    TitleMismatch { title: String },
}
