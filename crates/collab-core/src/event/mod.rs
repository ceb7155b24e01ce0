//! Interaction events between users and the log document that carries them.
//!
//! # Format
//!
//! The log is a JSON object produced by an upstream extraction step:
//!
//! ```json
//! {
//!   "events": [
//!     {"type": "pr_review", "source": "alice", "target": "bob"},
//!     {"type": "issue_comment", "source": "carol", "target": "alice"}
//!   ],
//!   "users": ["dave"]
//! }
//! ```
//!
//! `users` is optional and lists handles that should become vertices even
//! without any interaction. Records with an unknown `type` or a missing
//! endpoint are skipped (logged at debug level), not rejected; their
//! non-empty endpoints are appended to `users`.

pub mod types;

pub use types::{InteractionKind, UnknownInteractionKind};

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One typed interaction from `source` towards `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub source: String,
    pub target: String,
}

/// A whole extracted interaction log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InteractionLog {
    pub events: Vec<InteractionEvent>,
    pub users: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawLog {
    #[serde(default)]
    events: Vec<RawEvent>,
    #[serde(default)]
    users: Vec<Option<String>>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: Option<String>,
    source: Option<String>,
    target: Option<String>,
}

impl InteractionLog {
    /// Parse a log from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of the expected
    /// shape. Individual unusable records are skipped.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: RawLog = serde_json::from_str(text).context("invalid interaction log JSON")?;

        let total = raw.events.len();
        let mut users: Vec<String> = raw.users.into_iter().flatten().collect();
        let mut events = Vec::with_capacity(total);

        for e in raw.events {
            let source = e.source.filter(|s| !s.is_empty());
            let target = e.target.filter(|s| !s.is_empty());
            let kind = match e.kind.as_deref().map(str::parse::<InteractionKind>) {
                Some(Ok(kind)) => Some(kind),
                Some(Err(err)) => {
                    debug!(%err, "skipping interaction");
                    None
                }
                None => {
                    debug!("skipping interaction without type");
                    None
                }
            };
            match (kind, source, target) {
                (Some(kind), Some(source), Some(target)) => {
                    events.push(InteractionEvent {
                        kind,
                        source,
                        target,
                    });
                }
                // Participants of unusable records are still users.
                (_, source, target) => users.extend(source.into_iter().chain(target)),
            }
        }

        if events.len() < total {
            debug!(
                kept = events.len(),
                skipped = total - events.len(),
                "filtered interaction records"
            );
        }

        Ok(Self { events, users })
    }

    /// Read and parse a log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let log = Self::from_json_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        info!(events = log.events.len(), "loaded interaction log");
        Ok(log)
    }

    /// Number of events of each kind, in catalog order.
    #[must_use]
    pub fn counts_by_kind(&self) -> Vec<(InteractionKind, usize)> {
        InteractionKind::ALL
            .iter()
            .map(|&kind| (kind, self.events.iter().filter(|e| e.kind == kind).count()))
            .collect()
    }
}
