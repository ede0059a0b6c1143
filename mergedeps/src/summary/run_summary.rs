//! Run summary types.

use super::outcome::Outcome;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories scanned.
    pub repositories_scanned: usize,

    /// Number of upgrade pull requests seen by the coordinator.
    pub pull_requests_seen: usize,

    /// Number of distinct upgrades the operator approved.
    pub upgrades_approved: usize,

    /// Number of distinct upgrades the operator declined.
    pub upgrades_declined: usize,

    /// Outcome of every pull request, in processing order.
    pub outcomes: Vec<Outcome>,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Records an operator decision.
    pub fn record_decision(&mut self, approved: bool) {
        if approved {
            self.upgrades_approved += 1;
        } else {
            self.upgrades_declined += 1;
        }
    }

    /// Records the outcome of a pull request.
    pub fn record_outcome(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    /// Number of merges dispatched. Only a successful run guarantees every
    /// one of them was posted.
    #[must_use]
    pub fn merges_triggered(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_merge()).count()
    }

    /// Number of pull requests skipped.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.merges_triggered()
    }
}
