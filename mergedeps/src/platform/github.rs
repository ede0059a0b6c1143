//! GitHub platform service using octocrab.

use super::{HostingPlatform, Listing, PlatformError, PullRequest, Repository, RepositoryName};
use async_trait::async_trait;
use octocrab::models::pulls::PullRequest as GitHubPullRequest;
use octocrab::models::Repository as GitHubRepository;
use octocrab::params::State;
use octocrab::{Octocrab, Page};
use std::fmt;
use tracing::{debug, warn};

/// Results per page for repository and pull request listings.
const RESULTS_PER_PAGE: u8 = 100;

/// Branch assumed when GitHub omits the default branch.
const FALLBACK_DEFAULT_BRANCH: &str = "main";

/// GitHub service backed by an authenticated octocrab client.
pub struct GitHubPlatform {
    client: Octocrab,
}

impl GitHubPlatform {
    /// Creates a client authenticated with a personal access token.
    ///
    /// `api_url` points the client at a GitHub Enterprise instance instead of
    /// `api.github.com`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the client cannot be built.
    pub fn new(token: &str, api_url: Option<&str>) -> Result<Self, PlatformError> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if let Some(url) = api_url {
            builder = builder.base_uri(url).map_err(api_error(url))?;
        }

        Ok(Self {
            client: builder.build().map_err(api_error("client setup"))?,
        })
    }
}

#[async_trait]
impl HostingPlatform for GitHubPlatform {
    async fn list_repositories(
        &self,
        organization: &str,
        page: u32,
    ) -> Result<Listing<Repository>, PlatformError> {
        debug!(org = organization, page, "Listing repositories");

        let response = self
            .client
            .orgs(organization)
            .list_repos()
            .per_page(RESULTS_PER_PAGE)
            .page(page)
            .send()
            .await
            .map_err(api_error(organization))?;

        let next_page = next_page(&response, page);
        let items = response
            .items
            .into_iter()
            .map(|repo| convert_repository(organization, repo))
            .collect();

        Ok(Listing { items, next_page })
    }

    async fn list_pull_requests(
        &self,
        repository: &Repository,
        page: u32,
    ) -> Result<Listing<PullRequest>, PlatformError> {
        debug!(repo = %repository.name, page, "Listing pull requests");

        let response = self
            .client
            .pulls(&repository.name.owner, &repository.name.name)
            .list()
            .state(State::Open)
            .base(repository.default_branch.clone())
            .per_page(RESULTS_PER_PAGE)
            .page(page)
            .send()
            .await
            .map_err(api_error(&repository.name))?;

        let next_page = next_page(&response, page);
        let items = response
            .items
            .into_iter()
            .map(|pr| convert_pull_request(&repository.name, pr))
            .collect();

        Ok(Listing { items, next_page })
    }

    async fn post_comment(
        &self,
        repository: &RepositoryName,
        number: u64,
        body: &str,
    ) -> Result<(), PlatformError> {
        self.client
            .issues(&repository.owner, &repository.name)
            .create_comment(number, body)
            .await
            .map_err(api_error(format!("{repository}#{number}")))?;
        Ok(())
    }
}

/// Tags an octocrab error with what the call was about.
fn api_error(target: impl fmt::Display) -> impl FnOnce(octocrab::Error) -> PlatformError {
    let target = target.to_string();
    move |source| PlatformError::GitHubError { target, source }
}

fn next_page<T>(response: &Page<T>, page: u32) -> Option<u32> {
    response.next.as_ref().map(|_| page + 1)
}

fn convert_repository(organization: &str, repo: GitHubRepository) -> Repository {
    let owner = match repo.owner {
        Some(owner) => owner.login,
        None => {
            warn!(repo = %repo.name, "Repository has no owner, assuming organization");
            organization.to_string()
        }
    };

    Repository {
        name: RepositoryName::new(owner, repo.name),
        default_branch: repo
            .default_branch
            .unwrap_or_else(|| FALLBACK_DEFAULT_BRANCH.to_string()),
        archived: repo.archived.unwrap_or(false),
        // Listings without a permissions block carry no push rights for us.
        can_push: repo.permissions.is_some_and(|p| p.push),
    }
}

fn convert_pull_request(repository: &RepositoryName, pr: GitHubPullRequest) -> PullRequest {
    PullRequest {
        repository: repository.clone(),
        number: pr.number,
        title: pr.title.unwrap_or_default(),
        author_id: pr.user.map(|user| user.id.0).unwrap_or_default(),
        base_branch: pr.base.ref_field,
    }
}
