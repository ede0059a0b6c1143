//! Upgrade identity derived from a pull request title.

use super::UpgradeError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Canonical `(package, target version)` key of an upgrade.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpgradeIdentity {
    package: String,
    version: String,
}

impl UpgradeIdentity {
    /// Creates an identity from its parts.
    pub fn new(package: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            version: version.into(),
        }
    }

    /// Parses a title of the form `Bump <package> from <old> to <new>`.
    ///
    /// # Errors
    ///
    /// Returns [`UpgradeError::TitleMismatch`] for any other title. The caller
    /// is expected to abort: a changed title format means the bot changed and
    /// approving blindly is unsafe.
    pub fn from_title(title: &str) -> Result<Self, UpgradeError> {
        static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();

        let re = TITLE_REGEX.get_or_init(|| {
            Regex::new(r"^Bump (.+) from .+ to (.+)$").expect("title pattern is valid")
        });

        let mismatch = || UpgradeError::TitleMismatch {
            title: title.to_string(),
        };
        let captures = re.captures(title).ok_or_else(mismatch)?;
        let package = captures.get(1).ok_or_else(mismatch)?.as_str();
        let version = captures.get(2).ok_or_else(mismatch)?.as_str();

        Ok(Self::new(package, version))
    }

    /// Package being upgraded.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Version the package is upgraded to.
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for UpgradeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.package, self.version)
    }
}
