//! In-memory hosting platform for tests.

use async_trait::async_trait;
use mergedeps::{
    HostingPlatform, Listing, PlatformError, PullRequest, Repository, RepositoryName,
};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Mutex;

/// Call record for `post_comment`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CommentCall {
    pub repository: String,
    pub number: u64,
    pub body: String,
}

/// Mock platform serving fixed repositories and pull requests.
///
/// Features:
/// - Pagination with a configurable page size
/// - Call tracking for verification
/// - Error injection per repository or pull request
pub struct MockPlatform {
    page_size: usize,
    repositories: Vec<Repository>,
    pull_requests: HashMap<String, Vec<PullRequest>>,
    // Call tracking
    repository_pages: Mutex<Vec<u32>>,
    pull_request_pages: Mutex<Vec<(String, u32)>>,
    comments: Mutex<Vec<CommentCall>>,
    // Error injection
    fail_repository_page: Mutex<Option<u32>>,
    fail_pull_requests_for: Mutex<HashSet<String>>,
    fail_comment_on: Mutex<HashSet<(String, u64)>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            page_size: 100,
            repositories: Vec::new(),
            pull_requests: HashMap::new(),
            repository_pages: Mutex::new(Vec::new()),
            pull_request_pages: Mutex::new(Vec::new()),
            comments: Mutex::new(Vec::new()),
            fail_repository_page: Mutex::new(None),
            fail_pull_requests_for: Mutex::new(HashSet::new()),
            fail_comment_on: Mutex::new(HashSet::new()),
        }
    }

    /// Serves listings in pages of `page_size` items.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Adds a repository with its open pull requests.
    pub fn with_repository(mut self, repository: Repository, pull_requests: Vec<PullRequest>) -> Self {
        self.pull_requests
            .insert(repository.name.to_string(), pull_requests);
        self.repositories.push(repository);
        self
    }

    // === Error injection methods ===

    /// Make the given repository page fail.
    pub fn fail_repository_page(&self, page: u32) {
        *self.fail_repository_page.lock().unwrap() = Some(page);
    }

    /// Make pull request listing fail for `owner/name`.
    pub fn fail_pull_requests_for(&self, full_name: &str) {
        self.fail_pull_requests_for
            .lock()
            .unwrap()
            .insert(full_name.to_string());
    }

    /// Make commenting on `owner/name#number` fail.
    pub fn fail_comment_on(&self, full_name: &str, number: u64) {
        self.fail_comment_on
            .lock()
            .unwrap()
            .insert((full_name.to_string(), number));
    }

    // === Call inspection methods ===

    /// Posted comments, sorted.
    pub fn comments(&self) -> Vec<CommentCall> {
        let mut comments = self.comments.lock().unwrap().clone();
        comments.sort();
        comments
    }

    /// `owner/name#number` of every commented pull request.
    pub fn commented_references(&self) -> BTreeSet<String> {
        self.comments()
            .into_iter()
            .map(|c| format!("{}#{}", c.repository, c.number))
            .collect()
    }

    /// Repository pages requested, in order.
    pub fn repository_pages(&self) -> Vec<u32> {
        self.repository_pages.lock().unwrap().clone()
    }

    /// Repositories whose pull requests were listed.
    pub fn listed_repositories(&self) -> BTreeSet<String> {
        self.pull_request_pages
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn page<T: Clone>(&self, items: &[T], page: u32) -> Listing<T> {
        let start = (page as usize - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());
        let items_on_page = if start < items.len() {
            items[start..end].to_vec()
        } else {
            Vec::new()
        };
        let next_page = (end < items.len()).then_some(page + 1);

        Listing {
            items: items_on_page,
            next_page,
        }
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostingPlatform for MockPlatform {
    async fn list_repositories(
        &self,
        organization: &str,
        page: u32,
    ) -> Result<Listing<Repository>, PlatformError> {
        self.repository_pages.lock().unwrap().push(page);

        if *self.fail_repository_page.lock().unwrap() == Some(page) {
            return Err(PlatformError::RequestFailed {
                target: organization.to_string(),
                message: format!("repository page {page} unavailable"),
            });
        }

        Ok(self.page(&self.repositories, page))
    }

    async fn list_pull_requests(
        &self,
        repository: &Repository,
        page: u32,
    ) -> Result<Listing<PullRequest>, PlatformError> {
        let full_name = repository.name.to_string();
        self.pull_request_pages
            .lock()
            .unwrap()
            .push((full_name.clone(), page));

        if self.fail_pull_requests_for.lock().unwrap().contains(&full_name) {
            return Err(PlatformError::RequestFailed {
                target: full_name,
                message: "pull request listing unavailable".to_string(),
            });
        }

        let pull_requests = self
            .pull_requests
            .get(&full_name)
            .cloned()
            .unwrap_or_default();
        Ok(self.page(&pull_requests, page))
    }

    async fn post_comment(
        &self,
        repository: &RepositoryName,
        number: u64,
        body: &str,
    ) -> Result<(), PlatformError> {
        let full_name = repository.to_string();

        if self
            .fail_comment_on
            .lock()
            .unwrap()
            .contains(&(full_name.clone(), number))
        {
            return Err(PlatformError::RequestFailed {
                target: format!("{full_name}#{number}"),
                message: "comment rejected".to_string(),
            });
        }

        self.comments.lock().unwrap().push(CommentCall {
            repository: full_name,
            number,
            body: body.to_string(),
        });
        Ok(())
    }
}
