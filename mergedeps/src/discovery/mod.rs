//! Discovery of upgrade pull requests across an organization.
//!
//! Repositories are enumerated once. Every repository gets its own task that
//! enumerates its pull requests and forwards them onto a single channel, so a
//! slow repository never holds back the others. Items from different
//! repositories arrive in no particular order.

mod pull_requests;
mod repositories;

pub use pull_requests::pull_requests;
pub use repositories::repositories;

use crate::error::{joined, MergeError};
use crate::platform::{PullRequest, Repository, SharedPlatform};
use crate::runner::CancelScope;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, info_span, Instrument};

/// Discovers every upgrade pull request of `organization` and sends it to `sender`.
///
/// The channel closes once the repository listing is exhausted and every
/// per-repository task has finished. On failure the scope is cancelled before
/// the channel closes, so the consumer can tell a failed discovery from a
/// clean end of data.
///
/// # Returns
///
/// The number of repositories scanned.
///
/// # Errors
///
/// Returns the first enumeration failure. Remaining per-repository tasks are
/// aborted.
pub async fn discover(
    platform: SharedPlatform,
    organization: String,
    bot_user_id: u64,
    sender: mpsc::Sender<PullRequest>,
    scope: CancelScope,
) -> Result<usize, MergeError> {
    let span = info_span!("discover", org = %organization);

    let result = fan_out(platform, organization, bot_user_id, &sender, &scope)
        .instrument(span)
        .await;

    // Cancel while `sender` is still alive.
    let result = scope.fail_on_error(result);
    drop(sender);
    result
}

async fn fan_out(
    platform: SharedPlatform,
    organization: String,
    bot_user_id: u64,
    sender: &mpsc::Sender<PullRequest>,
    scope: &CancelScope,
) -> Result<usize, MergeError> {
    info!("Starting pull request discovery");

    let mut repositories = repositories(Arc::clone(&platform), organization);
    let mut tasks: JoinSet<Result<(), MergeError>> = JoinSet::new();
    let mut scanned = 0;

    loop {
        tokio::select! {
            Some(result) = tasks.join_next() => joined(result)?,
            next = scope.run(repositories.next()) => {
                let Some(repository) = next? else {
                    break;
                };
                let repository = repository?;
                scanned += 1;

                tasks.spawn(forward_pull_requests(
                    Arc::clone(&platform),
                    repository,
                    bot_user_id,
                    sender.clone(),
                    scope.clone(),
                ));
            }
        }
    }

    while let Some(result) = tasks.join_next().await {
        joined(result)?;
    }

    info!(repositories = scanned, "Discovery complete");
    Ok(scanned)
}

/// Forwards every upgrade pull request of one repository.
async fn forward_pull_requests(
    platform: SharedPlatform,
    repository: Repository,
    bot_user_id: u64,
    sender: mpsc::Sender<PullRequest>,
    scope: CancelScope,
) -> Result<(), MergeError> {
    let span = info_span!("repository", repo = %repository.name);

    async move {
        let mut pull_requests = pull_requests(platform, repository, bot_user_id);
        let mut forwarded = 0usize;

        while let Some(pr) = scope.run(pull_requests.next()).await? {
            let pr = pr?;
            debug!(number = pr.number, title = %pr.title, "Discovered upgrade pull request");

            // A closed channel means the consumer has stopped.
            scope
                .run(sender.send(pr))
                .await?
                .map_err(|_| MergeError::Cancelled)?;
            forwarded += 1;
        }

        debug!(count = forwarded, "Repository scanned");
        Ok(())
    }
    .instrument(span)
    .await
}
