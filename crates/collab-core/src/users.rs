//! Bijection between user handles and dense vertex ids.
//!
//! Handles are deduplicated and sorted before numbering, so the same set of
//! users always produces the same ids regardless of event order.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::event::InteractionLog;
use crate::graph::VertexId;

/// Sorted distinct user handles mapped injectively onto `0..len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserIndex {
    handles: Vec<String>,
    #[serde(skip)]
    by_handle: HashMap<String, VertexId>,
}

impl UserIndex {
    /// Build an index from arbitrary handles. Duplicates and empty strings
    /// are dropped.
    pub fn from_handles<I, S>(handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sorted: BTreeSet<String> = handles
            .into_iter()
            .map(|h| h.as_ref().to_string())
            .filter(|h| !h.is_empty())
            .collect();

        let handles: Vec<String> = sorted.into_iter().collect();
        let by_handle = handles
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), i))
            .collect();

        Self { handles, by_handle }
    }

    /// Every event endpoint plus the log's extra `users` list.
    #[must_use]
    pub fn from_log(log: &InteractionLog) -> Self {
        let endpoints = log
            .events
            .iter()
            .flat_map(|e| [e.source.as_str(), e.target.as_str()]);
        Self::from_handles(endpoints.chain(log.users.iter().map(String::as_str)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Vertex id of `handle`, if known.
    #[must_use]
    pub fn vertex(&self, handle: &str) -> Option<VertexId> {
        self.by_handle.get(handle).copied()
    }

    /// Handle of vertex `v`, if in range.
    #[must_use]
    pub fn handle(&self, v: VertexId) -> Option<&str> {
        self.handles.get(v).map(String::as_str)
    }

    /// All handles in vertex-id order.
    #[must_use]
    pub fn handles(&self) -> &[String] {
        &self.handles
    }
}
