//! Interactive terminal prompts.

use super::{PromptError, Prompter};
use crate::upgrade::UpgradeIdentity;
use dialoguer::Confirm;

/// Prompts on the controlling terminal with a `[y/n]` question.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, identity: &UpgradeIdentity) -> Result<bool, PromptError> {
        println!();
        let approved = Confirm::new()
            .with_prompt(prompt_text(identity))
            .wait_for_newline(true)
            .interact()?;
        println!();
        Ok(approved)
    }
}

fn prompt_text(identity: &UpgradeIdentity) -> String {
    format!("Update {} to {}?", identity.package(), identity.version())
}
