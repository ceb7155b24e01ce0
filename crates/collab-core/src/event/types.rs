//! Interaction kind enum covering the collaboration event vocabulary.
//!
//! The string representation is the snake_case tag used in extracted
//! interaction logs (`issue_comment`, `pr_merge`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six interaction kinds recorded between two users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InteractionKind {
    /// Comment on an issue opened by the target.
    IssueComment,
    /// Comment on a pull request opened by the target.
    PrComment,
    /// Issue opener answering a commenter on their own issue.
    IssueOpenedCommented,
    /// Issue opened by the target and closed by the source.
    IssueClosed,
    /// Review of a pull request opened by the target.
    PrReview,
    /// Merge of a pull request opened by the target.
    PrMerge,
}

/// Error returned when parsing an unknown interaction kind string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownInteractionKind {
    /// The unrecognised input string.
    pub raw: String,
}

impl fmt::Display for UnknownInteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown interaction kind '{}': expected one of issue_comment, pr_comment, \
             issue_opened_commented, issue_closed, pr_review, pr_merge",
            self.raw
        )
    }
}

impl std::error::Error for UnknownInteractionKind {}

impl InteractionKind {
    /// All known kinds in catalog order.
    pub const ALL: [Self; 6] = [
        Self::IssueComment,
        Self::PrComment,
        Self::IssueOpenedCommented,
        Self::IssueClosed,
        Self::PrReview,
        Self::PrMerge,
    ];

    /// Comments on issues and pull requests.
    pub const COMMENTS: [Self; 2] = [Self::IssueComment, Self::PrComment];

    /// Issues closed by someone other than their author.
    pub const CLOSURES: [Self; 1] = [Self::IssueClosed];

    /// Pull-request reviews and merges.
    pub const REVIEWS_AND_MERGES: [Self; 2] = [Self::PrReview, Self::PrMerge];

    /// Return the canonical snake_case tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IssueComment => "issue_comment",
            Self::PrComment => "pr_comment",
            Self::IssueOpenedCommented => "issue_opened_commented",
            Self::IssueClosed => "issue_closed",
            Self::PrReview => "pr_review",
            Self::PrMerge => "pr_merge",
        }
    }

    /// Weight this kind contributes to the integrated graph by default.
    #[must_use]
    pub const fn default_weight(self) -> u32 {
        match self {
            Self::IssueComment | Self::PrComment => 2,
            Self::IssueOpenedCommented | Self::IssueClosed => 3,
            Self::PrReview => 4,
            Self::PrMerge => 5,
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionKind {
    type Err = UnknownInteractionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "issue_comment" => Ok(Self::IssueComment),
            "pr_comment" => Ok(Self::PrComment),
            "issue_opened_commented" => Ok(Self::IssueOpenedCommented),
            "issue_closed" => Ok(Self::IssueClosed),
            "pr_review" => Ok(Self::PrReview),
            "pr_merge" => Ok(Self::PrMerge),
            _ => Err(UnknownInteractionKind { raw: s.to_string() }),
        }
    }
}

// Custom serde: serialize as the snake_case tag.
impl Serialize for InteractionKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InteractionKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
