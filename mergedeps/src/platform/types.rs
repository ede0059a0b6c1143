//! Platform data types.

use serde::Serialize;
use std::fmt;

/// Owner and name of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RepositoryName {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepositoryName {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A repository of the organization being processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    /// Owner and name.
    pub name: RepositoryName,

    /// Default branch name (e.g., "main").
    pub default_branch: String,

    /// Whether the repository is archived.
    pub archived: bool,

    /// Whether the authenticated user can push to the repository.
    pub can_push: bool,
}

impl Repository {
    /// Returns true if pull requests in this repository can be merged by us.
    #[must_use]
    pub fn accepts_merges(&self) -> bool {
        !self.archived && self.can_push
    }
}

/// An open pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequest {
    /// Repository the pull request belongs to.
    pub repository: RepositoryName,

    /// Pull request number.
    pub number: u64,

    /// Pull request title.
    pub title: String,

    /// User id of the author.
    pub author_id: u64,

    /// Branch the pull request targets.
    pub base_branch: String,
}

impl PullRequest {
    /// Returns the `owner/name#number` reference.
    #[must_use]
    pub fn reference(&self) -> String {
        format!("{}#{}", self.repository, self.number)
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    /// Items on this page.
    pub items: Vec<T>,

    /// Number of the next page, if there is one.
    pub next_page: Option<u32>,
}
