//! Upgrade identity parsing.
//!
//! Every Dependabot pull request title names a package and the version it
//! bumps to. Pull requests sharing that pair share one operator decision.

mod error;
mod identity;

pub use error::UpgradeError;
pub use identity::UpgradeIdentity;
