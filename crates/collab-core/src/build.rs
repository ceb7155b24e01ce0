//! Graph construction from an interaction log.
//!
//! # Overview
//!
//! Every builder produces one vertex per [`UserIndex`] entry, so all graphs
//! built from the same log share vertex ids and can be compared directly.
//!
//! ## Edge Direction
//!
//! An edge `u → v` means "user `u` acted on something owned by user `v`":
//! commented on their issue, reviewed or merged their pull request, closed
//! their issue.
//!
//! ## Layers vs the integrated graph
//!
//! - A **layer** ([`build_layer`]) keeps only the listed kinds and records
//!   each ordered pair once with weight 1.0.
//! - The **integrated** graph ([`build_integrated`]) keeps every kind and
//!   sums the configured weight of each event into its ordered pair.
//!
//! Self-interactions and handles absent from the index are skipped.

use tracing::{debug, instrument};

use crate::config::WeightConfig;
use crate::error::GraphError;
use crate::event::{InteractionEvent, InteractionKind, InteractionLog};
use crate::graph::{AdjacencyListGraph, Graph, VertexId};
use crate::users::UserIndex;

/// The three single-purpose layers plus the weighted union.
#[derive(Debug, Clone)]
pub struct GraphSet {
    pub comments: AdjacencyListGraph,
    pub issue_closures: AdjacencyListGraph,
    pub reviews_merges: AdjacencyListGraph,
    pub integrated: AdjacencyListGraph,
}

impl GraphSet {
    /// Build every graph from `log`.
    ///
    /// # Errors
    ///
    /// Propagates graph-contract violations (not expected for a consistent
    /// index).
    pub fn build(
        log: &InteractionLog,
        users: &UserIndex,
        weights: &WeightConfig,
    ) -> Result<Self, GraphError> {
        Ok(Self {
            comments: build_layer(log, users, &InteractionKind::COMMENTS)?,
            issue_closures: build_layer(log, users, &InteractionKind::CLOSURES)?,
            reviews_merges: build_layer(log, users, &InteractionKind::REVIEWS_AND_MERGES)?,
            integrated: build_integrated(log, users, weights)?,
        })
    }

    /// `(export name, graph)` pairs in a stable order.
    #[must_use]
    pub fn named(&self) -> [(&'static str, &AdjacencyListGraph); 4] {
        [
            ("graph1_comments", &self.comments),
            ("graph2_issue_closures", &self.issue_closures),
            ("graph3_reviews_merges", &self.reviews_merges),
            ("graph_integrated", &self.integrated),
        ]
    }
}

/// Resolve both endpoints of `event`, or `None` when it cannot become an
/// edge.
fn endpoints(event: &InteractionEvent, users: &UserIndex) -> Option<(VertexId, VertexId)> {
    let Some(u) = users.vertex(&event.source) else {
        debug!(handle = %event.source, "source not in user index");
        return None;
    };
    let Some(v) = users.vertex(&event.target) else {
        debug!(handle = %event.target, "target not in user index");
        return None;
    };
    (u != v).then_some((u, v))
}

/// Unweighted graph of the events whose kind is in `kinds`.
///
/// # Errors
///
/// Propagates graph-contract violations.
#[instrument(skip(log, users))]
pub fn build_layer(
    log: &InteractionLog,
    users: &UserIndex,
    kinds: &[InteractionKind],
) -> Result<AdjacencyListGraph, GraphError> {
    let mut graph = AdjacencyListGraph::new(users.len());

    for event in log.events.iter().filter(|e| kinds.contains(&e.kind)) {
        if let Some((u, v)) = endpoints(event, users) {
            graph.add_edge(u, v)?;
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "built layer graph"
    );
    Ok(graph)
}

/// Weighted graph of every event, summing per-kind weights per ordered pair.
///
/// # Errors
///
/// Propagates graph-contract violations.
#[instrument(skip(log, users, weights))]
pub fn build_integrated(
    log: &InteractionLog,
    users: &UserIndex,
    weights: &WeightConfig,
) -> Result<AdjacencyListGraph, GraphError> {
    let mut graph = AdjacencyListGraph::new(users.len());

    for event in &log.events {
        let Some((u, v)) = endpoints(event, users) else {
            continue;
        };
        let w = weights.weight(event.kind);
        if graph.has_edge(u, v)? {
            let current = graph.edge_weight(u, v)?;
            graph.set_edge_weight(u, v, current + w)?;
        } else {
            graph.add_edge(u, v)?;
            graph.set_edge_weight(u, v, w)?;
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "built integrated graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: InteractionKind, source: &str, target: &str) -> InteractionEvent {
        InteractionEvent {
            kind,
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    fn sample_log() -> InteractionLog {
        InteractionLog {
            events: vec![
                event(InteractionKind::IssueComment, "bob", "alice"),
                event(InteractionKind::PrComment, "bob", "alice"),
                event(InteractionKind::PrReview, "carol", "bob"),
                event(InteractionKind::PrMerge, "carol", "bob"),
                event(InteractionKind::IssueClosed, "alice", "carol"),
                event(InteractionKind::IssueComment, "alice", "alice"),
            ],
            users: vec!["dave".to_string()],
        }
    }

    #[test]
    fn integrated_sums_weights_per_pair() {
        let log = sample_log();
        let users = UserIndex::from_log(&log);
        let g = build_integrated(&log, &users, &WeightConfig::default()).expect("build");

        // alice=0, bob=1, carol=2, dave=3
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edge_weight(1, 0), Ok(4.0));
        assert_eq!(g.edge_weight(2, 1), Ok(9.0));
        assert_eq!(g.edge_weight(0, 2), Ok(3.0));
        assert_eq!(g.out_degree(3), Ok(0));
    }

    #[test]
    fn integrated_respects_configured_weights() {
        let log = sample_log();
        let users = UserIndex::from_log(&log);
        let weights = WeightConfig {
            pr_merge: 10.0,
            ..WeightConfig::default()
        };
        let g = build_integrated(&log, &users, &weights).expect("build");
        assert_eq!(g.edge_weight(2, 1), Ok(14.0));
    }

    #[test]
    fn layers_keep_only_their_kinds() {
        let log = sample_log();
        let users = UserIndex::from_log(&log);
        let set = GraphSet::build(&log, &users, &WeightConfig::default()).expect("build");

        assert_eq!(set.comments.edge_count(), 1);
        assert_eq!(set.comments.edge_weight(1, 0), Ok(1.0));
        assert_eq!(set.issue_closures.edge_count(), 1);
        assert!(set.issue_closures.has_edge(0, 2).expect("query"));
        assert_eq!(set.reviews_merges.edge_count(), 1);
        assert_eq!(set.reviews_merges.edge_weight(2, 1), Ok(1.0));
        assert_eq!(set.integrated.edge_count(), 3);
    }

    #[test]
    fn unknown_handles_are_skipped() {
        let log = sample_log();
        let users = UserIndex::from_handles(["alice", "bob"]);
        let g = build_integrated(&log, &users, &WeightConfig::default()).expect("build");
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn named_graphs_are_stable() {
        let log = sample_log();
        let users = UserIndex::from_log(&log);
        let set = GraphSet::build(&log, &users, &WeightConfig::default()).expect("build");
        let names: Vec<_> = set.named().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "graph1_comments",
                "graph2_issue_closures",
                "graph3_reviews_merges",
                "graph_integrated"
            ]
        );
    }
}
