//! Hosting platform services.
//!
//! The pipeline only ever talks to the platform through [`HostingPlatform`],
//! one page at a time. Pagination is driven by the enumerators in
//! [`crate::discovery`].

mod error;
mod github;
mod types;

pub use error::PlatformError;
pub use github::GitHubPlatform;
pub use types::{Listing, PullRequest, Repository, RepositoryName};

use async_trait::async_trait;
use std::sync::Arc;

/// Shared handle to a platform service, cloned into every spawned task.
pub type SharedPlatform = Arc<dyn HostingPlatform>;

/// Page number of the first page of any listing.
pub const FIRST_PAGE: u32 = 1;

/// Repository, pull request and comment operations used by the pipeline.
#[async_trait]
pub trait HostingPlatform: Send + Sync {
    /// Lists one page of the organization's repositories.
    async fn list_repositories(
        &self,
        organization: &str,
        page: u32,
    ) -> Result<Listing<Repository>, PlatformError>;

    /// Lists one page of open pull requests targeting the repository's
    /// default branch.
    async fn list_pull_requests(
        &self,
        repository: &Repository,
        page: u32,
    ) -> Result<Listing<PullRequest>, PlatformError>;

    /// Posts a comment on a pull request.
    async fn post_comment(
        &self,
        repository: &RepositoryName,
        number: u64,
        body: &str,
    ) -> Result<(), PlatformError>;
}
