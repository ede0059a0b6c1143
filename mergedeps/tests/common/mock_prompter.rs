//! Scripted operator for tests.

use mergedeps::{PromptError, Prompter, UpgradeIdentity};
use std::collections::HashMap;
use std::sync::Mutex;

/// Answers prompts from a fixed script and records every question.
///
/// Identities without a scripted answer are declined.
#[derive(Default)]
pub struct MockPrompter {
    answers: HashMap<String, bool>,
    asked: Mutex<Vec<String>>,
}

impl MockPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the answer for `package@version`.
    pub fn answer(mut self, identity: &str, approved: bool) -> Self {
        self.answers.insert(identity.to_string(), approved);
        self
    }

    /// Identities asked about, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Prompter for MockPrompter {
    fn confirm(&self, identity: &UpgradeIdentity) -> Result<bool, PromptError> {
        let key = identity.to_string();
        self.asked.lock().unwrap().push(key.clone());
        Ok(self.answers.get(&key).copied().unwrap_or(false))
    }
}
