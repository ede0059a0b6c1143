//! Operator decisions of a run.

use crate::upgrade::UpgradeIdentity;
use std::collections::HashMap;

/// Append-only map of upgrade identity to the operator's verdict.
///
/// A recorded verdict never changes for the rest of the run.
#[derive(Debug, Default)]
pub struct DecisionTable {
    verdicts: HashMap<UpgradeIdentity, bool>,
}

impl DecisionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the verdict for `identity`, if one was recorded.
    #[must_use]
    pub fn verdict(&self, identity: &UpgradeIdentity) -> Option<bool> {
        self.verdicts.get(identity).copied()
    }

    /// Records a verdict and returns the verdict in effect.
    ///
    /// An earlier verdict for the same identity wins.
    pub fn record(&mut self, identity: UpgradeIdentity, approved: bool) -> bool {
        *self.verdicts.entry(identity).or_insert(approved)
    }

    /// Number of distinct identities decided.
    #[must_use]
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}
