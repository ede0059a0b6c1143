//! Per pull request outcomes.

use crate::platform::PullRequest;
use std::fmt;

/// What happened to a single discovered pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The upgrade was approved and a merge trigger was dispatched.
    ///
    /// Recorded before the merge command is posted. If the run fails, the
    /// command may never have reached the platform.
    Merge {
        /// `owner/name#number` reference.
        reference: String,
        /// Pull request title.
        title: String,
    },

    /// The upgrade was declined.
    Skip {
        /// `owner/name#number` reference.
        reference: String,
        /// Pull request title.
        title: String,
    },
}

impl Outcome {
    /// Builds the outcome of `pr` for the operator's verdict.
    pub fn for_verdict(pr: &PullRequest, approved: bool) -> Self {
        let reference = pr.reference();
        let title = pr.title.clone();
        if approved {
            Self::Merge { reference, title }
        } else {
            Self::Skip { reference, title }
        }
    }

    /// Returns the `owner/name#number` reference.
    pub fn reference(&self) -> &str {
        match self {
            Self::Merge { reference, .. } | Self::Skip { reference, .. } => reference,
        }
    }

    /// Returns true for dispatched merges.
    #[must_use]
    pub fn is_merge(&self) -> bool {
        matches!(self, Self::Merge { .. })
    }
}

/// Formats the operator-facing progress line.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Merge { reference, title } => write!(f, "    MERGE {reference:<30}  {title}"),
            Self::Skip { reference, title } => write!(f, "    SKIP  {reference:<30}  {title}"),
        }
    }
}
