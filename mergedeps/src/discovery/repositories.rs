//! Repository enumeration.

use crate::platform::{PlatformError, Repository, SharedPlatform, FIRST_PAGE};
use futures::future;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use std::sync::Arc;
use tracing::debug;

/// Lists the organization's repositories that accept merges from us.
///
/// Pages are fetched lazily as the stream is polled. Archived repositories and
/// repositories without push access are left out. The first failing page ends
/// the stream with that error; pagination is never resumed.
pub fn repositories(
    platform: SharedPlatform,
    organization: String,
) -> BoxStream<'static, Result<Repository, PlatformError>> {
    stream::try_unfold(Some(FIRST_PAGE), move |page| {
        fetch_page(Arc::clone(&platform), organization.clone(), page)
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<_, PlatformError>)))
    .try_flatten()
    .try_filter(|repo| future::ready(repo.accepts_merges()))
    .boxed()
}

async fn fetch_page(
    platform: SharedPlatform,
    organization: String,
    page: Option<u32>,
) -> Result<Option<(Vec<Repository>, Option<u32>)>, PlatformError> {
    let Some(page) = page else {
        return Ok(None);
    };

    let listing = platform.list_repositories(&organization, page).await?;
    debug!(
        org = %organization,
        page,
        count = listing.items.len(),
        "Fetched repository page"
    );

    Ok(Some((listing.items, listing.next_page)))
}
