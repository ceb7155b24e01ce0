//! Static graph metrics: degree centrality and density.
//!
//! # Overview
//!
//! These are the cheap metrics: one pass over the edge export, O(n + m).
//! They feed the summary export and the degree assortativity.

use collab_core::Graph;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Degree Centrality
// ---------------------------------------------------------------------------

/// Per-vertex degree counts, each indexed by vertex id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeCentrality {
    /// In-degree per vertex (how many people acted on this user).
    pub in_degree: Vec<usize>,
    /// Out-degree per vertex (how many people this user acted on).
    pub out_degree: Vec<usize>,
    /// Total degree per vertex (in + out).
    pub total_degree: Vec<usize>,
}

/// Compute in, out and total degree for every vertex.
#[must_use]
pub fn compute_degrees<G: Graph + ?Sized>(graph: &G) -> DegreeCentrality {
    let n = graph.vertex_count();
    let mut in_degree = vec![0; n];
    let mut out_degree = vec![0; n];

    for edge in graph.edges() {
        out_degree[edge.source] += 1;
        in_degree[edge.target] += 1;
    }

    let total_degree = in_degree
        .iter()
        .zip(&out_degree)
        .map(|(i, o)| i + o)
        .collect();

    DegreeCentrality {
        in_degree,
        out_degree,
        total_degree,
    }
}

// ---------------------------------------------------------------------------
// Graph Density
// ---------------------------------------------------------------------------

/// Density of a directed simple graph.
///
/// Density = edges / (nodes * (nodes - 1)).
/// Returns 0.0 for graphs with fewer than 2 nodes.
#[must_use]
pub fn density<G: Graph + ?Sized>(graph: &G) -> f64 {
    let n = graph.vertex_count();
    if n < 2 {
        return 0.0;
    }
    let max_edges = (n * (n - 1)) as f64;
    graph.edge_count() as f64 / max_edges
}
