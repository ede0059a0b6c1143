//! Approves and merges Dependabot upgrade pull requests across every
//! repository of a GitHub organization.
//!
//! Open upgrade pull requests are discovered concurrently, the operator is
//! asked once per distinct `package@version`, and every pull request of an
//! approved upgrade gets a `@dependabot merge` comment.

pub mod config;
pub mod coordinator;
pub mod discovery;
pub mod error;
pub mod merge;
pub mod platform;
pub mod prompt;
pub mod runner;
pub mod summary;
pub mod upgrade;

pub use config::{ConfigError, MergerConfig, Settings};
pub use coordinator::{Coordinator, DecisionTable};
pub use discovery::{discover, pull_requests, repositories};
pub use error::MergeError;
pub use merge::{MergeTrigger, DEFAULT_MERGE_COMMAND};
pub use platform::{
    GitHubPlatform, HostingPlatform, Listing, PlatformError, PullRequest, Repository,
    RepositoryName, SharedPlatform,
};
pub use prompt::{PromptError, Prompter, TerminalPrompter};
pub use runner::{CancelScope, Runner};
pub use summary::{Outcome, RunSummary};
pub use upgrade::{UpgradeError, UpgradeIdentity};
