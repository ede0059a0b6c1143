//! Shared test utilities.

#![allow(dead_code)]

mod mock_platform;
mod mock_prompter;

pub use mock_platform::{CommentCall, MockPlatform};
pub use mock_prompter::MockPrompter;

use mergedeps::{PullRequest, Repository, RepositoryName};

/// User id the mock platform's upgrade bot uses.
pub const BOT_ID: u64 = 49699333;

/// Creates a pushable, unarchived repository in the `acme` organization.
pub fn repo(name: &str) -> Repository {
    Repository {
        name: RepositoryName::new("acme", name),
        default_branch: "main".to_string(),
        archived: false,
        can_push: true,
    }
}

/// Creates a bot pull request against the repository's default branch.
pub fn bot_pr(repository: &Repository, number: u64, title: &str) -> PullRequest {
    PullRequest {
        repository: repository.name.clone(),
        number,
        title: title.to_string(),
        author_id: BOT_ID,
        base_branch: repository.default_branch.clone(),
    }
}
