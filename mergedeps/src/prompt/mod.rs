//! Operator prompts.

mod error;
mod terminal;

pub use error::PromptError;
pub use terminal::TerminalPrompter;

use crate::upgrade::UpgradeIdentity;

/// Asks the operator whether an upgrade may be merged.
///
/// Implementations block until an answer is available. The pipeline calls
/// them from a blocking task, one question at a time.
pub trait Prompter: Send + Sync {
    /// Returns true if the operator approves the upgrade.
    fn confirm(&self, identity: &UpgradeIdentity) -> Result<bool, PromptError>;
}
