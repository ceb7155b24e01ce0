use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::event::InteractionKind;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "collab.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub weights: WeightConfig,
    #[serde(default)]
    pub pagerank: PageRankSettings,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Integrated-graph weight per interaction kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    #[serde(default = "default_comment_weight")]
    pub issue_comment: f64,
    #[serde(default = "default_comment_weight")]
    pub pr_comment: f64,
    #[serde(default = "default_issue_weight")]
    pub issue_opened_commented: f64,
    #[serde(default = "default_issue_weight")]
    pub issue_closed: f64,
    #[serde(default = "default_review_weight")]
    pub pr_review: f64,
    #[serde(default = "default_merge_weight")]
    pub pr_merge: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            issue_comment: default_comment_weight(),
            pr_comment: default_comment_weight(),
            issue_opened_commented: default_issue_weight(),
            issue_closed: default_issue_weight(),
            pr_review: default_review_weight(),
            pr_merge: default_merge_weight(),
        }
    }
}

impl WeightConfig {
    /// Weight contributed by one event of `kind`.
    #[must_use]
    pub const fn weight(&self, kind: InteractionKind) -> f64 {
        match kind {
            InteractionKind::IssueComment => self.issue_comment,
            InteractionKind::PrComment => self.pr_comment,
            InteractionKind::IssueOpenedCommented => self.issue_opened_commented,
            InteractionKind::IssueClosed => self.issue_closed,
            InteractionKind::PrReview => self.pr_review,
            InteractionKind::PrMerge => self.pr_merge,
        }
    }
}

/// PageRank knobs as they appear in `collab.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRankSettings {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for PageRankSettings {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            max_iter: default_max_iter(),
            tolerance: default_tolerance(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Rows per ranking table and ranking CSV.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Decimal places for metric values in CSV exports.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            precision: default_precision(),
        }
    }
}

/// Load `path`, falling back to defaults when it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<ProjectConfig> {
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ProjectConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn default_comment_weight() -> f64 {
    f64::from(InteractionKind::IssueComment.default_weight())
}

fn default_issue_weight() -> f64 {
    f64::from(InteractionKind::IssueClosed.default_weight())
}

fn default_review_weight() -> f64 {
    f64::from(InteractionKind::PrReview.default_weight())
}

fn default_merge_weight() -> f64 {
    f64::from(InteractionKind::PrMerge.default_weight())
}

const fn default_damping() -> f64 {
    0.85
}

const fn default_max_iter() -> usize {
    100
}

const fn default_tolerance() -> f64 {
    1.0e-6
}

const fn default_top_n() -> usize {
    10
}

const fn default_precision() -> usize {
    6
}
