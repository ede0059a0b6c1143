//! Pull request enumeration.

use crate::platform::{PlatformError, PullRequest, Repository, SharedPlatform, FIRST_PAGE};
use futures::future;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use std::sync::Arc;
use tracing::debug;

/// Lists the repository's open upgrade pull requests.
///
/// Only pull requests authored by `bot_user_id` and targeting the default
/// branch are yielded. Pages are fetched lazily; the first failing page ends
/// the stream with that error.
pub fn pull_requests(
    platform: SharedPlatform,
    repository: Repository,
    bot_user_id: u64,
) -> BoxStream<'static, Result<PullRequest, PlatformError>> {
    let default_branch = repository.default_branch.clone();
    let repository = Arc::new(repository);

    stream::try_unfold(Some(FIRST_PAGE), move |page| {
        fetch_page(Arc::clone(&platform), Arc::clone(&repository), page)
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<_, PlatformError>)))
    .try_flatten()
    .try_filter(move |pr| {
        future::ready(pr.author_id == bot_user_id && pr.base_branch == default_branch)
    })
    .boxed()
}

async fn fetch_page(
    platform: SharedPlatform,
    repository: Arc<Repository>,
    page: Option<u32>,
) -> Result<Option<(Vec<PullRequest>, Option<u32>)>, PlatformError> {
    let Some(page) = page else {
        return Ok(None);
    };

    let listing = platform.list_pull_requests(&repository, page).await?;
    debug!(
        repo = %repository.name,
        page,
        count = listing.items.len(),
        "Fetched pull request page"
    );

    Ok(Some((listing.items, listing.next_page)))
}
