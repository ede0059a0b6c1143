//! Merge triggering.
//!
//! Merging is delegated to Dependabot: a `@dependabot merge` comment asks it to
//! merge the pull request once its required checks pass. Nothing here waits for
//! or verifies the merge itself.

use crate::platform::{PlatformError, PullRequest, SharedPlatform};
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

/// Comment that instructs Dependabot to merge a pull request.
pub const DEFAULT_MERGE_COMMAND: &str = "@dependabot merge";

/// Posts the merge command on approved pull requests.
#[derive(Clone)]
pub struct MergeTrigger {
    platform: SharedPlatform,
    command: Arc<str>,
    dry_run: bool,
}

impl MergeTrigger {
    /// Creates a trigger posting `command`. In dry-run mode nothing is posted.
    pub fn new(platform: SharedPlatform, command: &str, dry_run: bool) -> Self {
        Self {
            platform,
            command: Arc::from(command),
            dry_run,
        }
    }

    /// Instructs the merge service to merge `pr`.
    ///
    /// Returns once the platform has accepted the comment.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the comment is rejected. Failures are not
    /// retried: a comment that failed from our side may still have been posted.
    pub async fn trigger(&self, pr: &PullRequest) -> Result<(), PlatformError> {
        let span = info_span!("merge", pr = %pr.reference());

        async {
            if self.dry_run {
                info!("Dry run, merge command not posted");
                return Ok(());
            }

            self.platform
                .post_comment(&pr.repository, pr.number, &self.command)
                .await?;
            info!("Merge command posted");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
