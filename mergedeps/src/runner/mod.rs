//! Orchestrates a merge run.
//!
//! Two stages run concurrently under one [`CancelScope`]: discovery feeds
//! pull requests into a channel, and the coordinator consumes them. The first
//! real failure of either stage cancels the scope and becomes the result of
//! the run; cancellation errors it causes elsewhere are discarded.

mod scope;

pub use scope::CancelScope;

use crate::config::MergerConfig;
use crate::coordinator::Coordinator;
use crate::discovery::discover;
use crate::error::{joined, FirstFailure, MergeError};
use crate::merge::MergeTrigger;
use crate::platform::{GitHubPlatform, SharedPlatform};
use crate::prompt::{Prompter, TerminalPrompter};
use crate::summary::RunSummary;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::info;

/// Result of one pipeline stage.
enum StageReport {
    Discovery { repositories: usize },
    Coordination(RunSummary),
}

/// Runs discovery, decisions and merges for one organization.
pub struct Runner {
    config: MergerConfig,
    platform: SharedPlatform,
    prompter: Arc<dyn Prompter>,
}

impl Runner {
    /// Builds a runner talking to GitHub and prompting on the terminal.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Config`] for invalid configuration and
    /// [`MergeError::Platform`] if the GitHub client cannot be built.
    pub fn new(config: MergerConfig) -> Result<Self, MergeError> {
        config.validate()?;
        let platform = GitHubPlatform::new(config.token(), config.api_url())?;
        Ok(Self::with_collaborators(
            config,
            Arc::new(platform),
            Arc::new(TerminalPrompter),
        ))
    }

    /// Builds a runner from explicit platform and prompt services.
    pub fn with_collaborators(
        config: MergerConfig,
        platform: SharedPlatform,
        prompter: Arc<dyn Prompter>,
    ) -> Self {
        Self {
            config,
            platform,
            prompter,
        }
    }

    /// Executes the full run.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error of any stage. Merges triggered before the
    /// failure stay triggered.
    pub async fn run(&self) -> Result<RunSummary, MergeError> {
        info!(
            org = %self.config.organization(),
            dry_run = self.config.dry_run(),
            "Starting merge run"
        );

        let scope = CancelScope::new();
        let (sender, receiver) = mpsc::channel(self.config.buffer_size());
        let mut stages: JoinSet<Result<StageReport, MergeError>> = JoinSet::new();

        let discovery = discover(
            Arc::clone(&self.platform),
            self.config.organization().to_string(),
            self.config.bot_user_id(),
            sender,
            scope.clone(),
        );
        stages.spawn(async move {
            let repositories = discovery.await?;
            Ok(StageReport::Discovery { repositories })
        });

        let coordinator = Coordinator::new(
            Arc::clone(&self.prompter),
            MergeTrigger::new(
                Arc::clone(&self.platform),
                self.config.merge_command(),
                self.config.dry_run(),
            ),
            scope.clone(),
            self.config.dry_run(),
        );
        stages.spawn(async move { coordinator.run(receiver).await.map(StageReport::Coordination) });

        let mut repositories_scanned = 0;
        let mut summary = None;
        let mut failure = FirstFailure::default();

        while let Some(result) = stages.join_next().await {
            match joined(result) {
                Ok(StageReport::Discovery { repositories }) => repositories_scanned = repositories,
                Ok(StageReport::Coordination(report)) => summary = Some(report),
                Err(e) => {
                    scope.cancel();
                    failure.record(e);
                }
            }
        }

        failure.into_result(())?;

        let mut summary = summary.unwrap_or_else(|| RunSummary::new(self.config.dry_run()));
        summary.repositories_scanned = repositories_scanned;

        info!(
            repositories = summary.repositories_scanned,
            merges = summary.merges_triggered(),
            skipped = summary.skipped(),
            "Merge run complete"
        );
        Ok(summary)
    }
}
