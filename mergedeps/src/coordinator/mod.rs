//! Decision and merge coordination.
//!
//! The coordinator is the single consumer of discovered pull requests. It
//! handles one item at a time: derive the upgrade identity, ask the operator
//! on first sight of that identity, then either spawn a merge trigger or
//! record a skip. Because intake is strictly sequential the decision table
//! needs no locking, and every identity is asked about exactly once no matter
//! how many repositories carry it.

mod decisions;

pub use decisions::DecisionTable;

use crate::error::{joined, FirstFailure, MergeError};
use crate::merge::MergeTrigger;
use crate::platform::PullRequest;
use crate::prompt::Prompter;
use crate::runner::CancelScope;
use crate::summary::{Outcome, RunSummary};
use crate::upgrade::UpgradeIdentity;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Consumes discovered pull requests and dispatches merges.
pub struct Coordinator {
    prompter: Arc<dyn Prompter>,
    trigger: MergeTrigger,
    scope: CancelScope,
    decisions: DecisionTable,
    merges: JoinSet<Result<(), MergeError>>,
    summary: RunSummary,
}

impl Coordinator {
    pub fn new(
        prompter: Arc<dyn Prompter>,
        trigger: MergeTrigger,
        scope: CancelScope,
        dry_run: bool,
    ) -> Self {
        Self {
            prompter,
            trigger,
            scope,
            decisions: DecisionTable::new(),
            merges: JoinSet::new(),
            summary: RunSummary::new(dry_run),
        }
    }

    /// Processes `receiver` until it closes, then waits for all merges.
    ///
    /// # Errors
    ///
    /// Returns the first title mismatch, prompt failure or merge failure, or
    /// [`MergeError::Cancelled`] if another stage cancelled the scope. Any
    /// error cancels the scope; merges already triggered are not undone.
    pub async fn run(
        mut self,
        mut receiver: mpsc::Receiver<PullRequest>,
    ) -> Result<RunSummary, MergeError> {
        let mut failure = FirstFailure::default();

        if let Err(e) = self.intake(&mut receiver).await {
            self.scope.cancel();
            failure.record(e);
        }
        drop(receiver);

        debug!(in_flight = self.merges.len(), "Draining merges");
        while let Some(result) = self.merges.join_next().await {
            if let Err(e) = joined(result) {
                self.scope.cancel();
                failure.record(e);
            }
        }

        failure.into_result(self.summary)
    }

    async fn intake(&mut self, receiver: &mut mpsc::Receiver<PullRequest>) -> Result<(), MergeError> {
        loop {
            let next = tokio::select! {
                biased;
                Some(result) = self.merges.join_next() => {
                    joined(result)?;
                    continue;
                }
                () = self.scope.cancelled() => return Err(MergeError::Cancelled),
                next = receiver.recv() => next,
            };

            let Some(pr) = next else {
                // Discovery cancels before closing the channel when it fails.
                if self.scope.is_cancelled() {
                    return Err(MergeError::Cancelled);
                }
                info!(
                    seen = self.summary.pull_requests_seen,
                    decided = self.decisions.len(),
                    "All pull requests processed"
                );
                return Ok(());
            };

            self.process(pr).await?;
        }
    }

    async fn process(&mut self, pr: PullRequest) -> Result<(), MergeError> {
        self.summary.pull_requests_seen += 1;

        let identity = UpgradeIdentity::from_title(&pr.title)?;
        let approved = self.decide(identity).await?;

        // The prompt may have blocked for a long time.
        if self.scope.is_cancelled() {
            return Err(MergeError::Cancelled);
        }

        self.dispatch(pr, approved);
        Ok(())
    }

    async fn decide(&mut self, identity: UpgradeIdentity) -> Result<bool, MergeError> {
        if let Some(approved) = self.decisions.verdict(&identity) {
            return Ok(approved);
        }

        let prompter = Arc::clone(&self.prompter);
        let question = identity.clone();
        let approved =
            tokio::task::spawn_blocking(move || prompter.confirm(&question)).await??;

        info!(%identity, approved, "Upgrade decided");
        self.summary.record_decision(approved);
        Ok(self.decisions.record(identity, approved))
    }

    fn dispatch(&mut self, pr: PullRequest, approved: bool) {
        // Printed on dispatch; the comment is posted by the spawned task.
        let outcome = Outcome::for_verdict(&pr, approved);
        println!("{outcome}");
        self.summary.record_outcome(outcome);

        if !approved {
            debug!(pr = %pr.reference(), "Upgrade declined, skipping");
            return;
        }

        let trigger = self.trigger.clone();
        let scope = self.scope.clone();
        self.merges.spawn(async move {
            let result = match scope.run(trigger.trigger(&pr)).await {
                Ok(posted) => posted.map_err(MergeError::from),
                Err(cancelled) => Err(cancelled),
            };
            if let Err(e) = &result {
                if !e.is_cancellation() {
                    warn!(pr = %pr.reference(), error = %e, "Failed to trigger merge");
                }
            }
            scope.fail_on_error(result)
        });
    }
}
