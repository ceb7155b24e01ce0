//! Whole-graph statistics for an interaction graph.
//!
//! # Statistics Provided
//!
//! - **vertex_count**: Number of users (vertices).
//! - **edge_count**: Number of distinct ordered interaction pairs.
//! - **density**: `edge_count / (vertex_count * (vertex_count - 1))`. A
//!   graph where everyone acted on everyone has density 1.0. An empty or
//!   single-vertex graph has density 0.0.
//! - **assortativity**: Degree assortativity, see
//!   [`crate::metrics::assortativity`].
//! - **component_count**: Number of weakly connected components
//!   ("communities").
//! - **isolated_vertex_count**: Users with no interaction in either
//!   direction.
//! - **max_in_degree** / **max_out_degree**: Largest number of distinct
//!   people acting on one user / one user acted on.
//! - **is_connected**: Whether the undirected view forms one component.

use collab_core::Graph;
use serde::Serialize;
use tracing::instrument;

use super::components::weak_components;
use crate::metrics::assortativity::degree_assortativity;
use crate::metrics::basic::{compute_degrees, density};

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Summary statistics for an interaction graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of directed edges.
    pub edge_count: usize,
    /// Directed density, zero for graphs with 0 or 1 vertex.
    pub density: f64,
    /// Degree assortativity coefficient.
    pub assortativity: f64,
    /// Number of weakly connected components.
    pub component_count: usize,
    /// Number of vertices with no in-edges and no out-edges.
    pub isolated_vertex_count: usize,
    /// Maximum in-degree over all vertices.
    pub max_in_degree: usize,
    /// Maximum out-degree over all vertices.
    pub max_out_degree: usize,
    /// Whether the graph is weakly connected (`false` when empty).
    pub is_connected: bool,
}

impl GraphStats {
    /// Compute statistics for `graph`.
    #[must_use]
    #[instrument(skip(graph))]
    pub fn from_graph<G: Graph + ?Sized>(graph: &G) -> Self {
        let degrees = compute_degrees(graph);
        let component_count = weak_components(graph).len();

        let isolated_vertex_count = degrees.total_degree.iter().filter(|&&d| d == 0).count();
        let max_in_degree = degrees.in_degree.iter().copied().max().unwrap_or(0);
        let max_out_degree = degrees.out_degree.iter().copied().max().unwrap_or(0);

        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            density: density(graph),
            assortativity: degree_assortativity(graph),
            component_count,
            isolated_vertex_count,
            max_in_degree,
            max_out_degree,
            is_connected: component_count == 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use collab_core::AdjacencyListGraph;

    #[test]
    fn empty_graph_stats() {
        let stats = GraphStats::from_graph(&AdjacencyListGraph::new(0));
        assert_eq!(stats.vertex_count, 0);
        assert_eq!(stats.edge_count, 0);
        assert_eq!(stats.component_count, 0);
        assert_eq!(stats.max_in_degree, 0);
        assert!(!stats.is_connected);
        assert!(stats.density.abs() < f64::EPSILON);
    }

    #[test]
    fn split_graph_with_isolated_user() {
        // 0 -> 1, 2 -> 1, 3 <-> 4, 5 alone.
        let g = AdjacencyListGraph::from_edges(6, [(0, 1), (2, 1), (3, 4), (4, 3)])
            .expect("build");
        let stats = GraphStats::from_graph(&g);
        assert_eq!(stats.vertex_count, 6);
        assert_eq!(stats.edge_count, 4);
        assert_eq!(stats.component_count, 3);
        assert_eq!(stats.isolated_vertex_count, 1);
        assert_eq!(stats.max_in_degree, 2);
        assert_eq!(stats.max_out_degree, 1);
        assert!(!stats.is_connected);
        assert!((stats.density - 4.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn connected_flag_matches_graph_contract() {
        let g = AdjacencyListGraph::from_edges(3, [(0, 1), (2, 1)]).expect("build");
        let stats = GraphStats::from_graph(&g);
        assert!(stats.is_connected);
        assert_eq!(stats.is_connected, g.is_connected());
    }
}
