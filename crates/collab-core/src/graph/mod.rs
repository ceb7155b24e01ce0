//! Directed weighted simple-graph contract and its storage variants.
//!
//! # Overview
//!
//! [`Graph`] is the capability set every representation satisfies: edge
//! existence, insert/remove, in/out degree, vertex and edge weights, a
//! weak-connectivity test, and a bulk edge export. Analysis code only ever
//! sees `&dyn Graph` (or `&impl Graph`), so the sparse
//! [`AdjacencyListGraph`] and the dense [`AdjacencyMatrixGraph`] are
//! interchangeable.
//!
//! ## Invariants
//!
//! - Vertex ids are dense and zero-based: `0..vertex_count()`.
//! - No self-loops; at most one edge per ordered pair.
//! - `edge_count() == Σ out_degree(v) == Σ in_degree(v)`.
//!
//! ## Pipeline
//!
//! ```text
//! InteractionLog + UserIndex
//!        ↓  build::build_integrated()
//! AdjacencyListGraph (weights summed per ordered pair)
//!        ↓  collab_metrics::report::AnalysisReport::compute()
//! per-vertex metric maps + whole-graph scalars
//! ```

pub mod export;
pub mod list;
pub mod matrix;

pub use list::AdjacencyListGraph;
pub use matrix::AdjacencyMatrixGraph;

use serde::Serialize;

use crate::error::GraphError;

/// Dense, zero-based vertex identifier.
pub type VertexId = usize;

/// Weight given to an edge when it is first inserted.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// One directed edge as produced by [`Graph::edges`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: f64,
}

/// Capability set of a directed, weighted, simple graph.
///
/// Every method that takes a vertex fails with [`GraphError::OutOfRange`]
/// when the id is outside `[0, vertex_count())`. Methods that take an edge
/// additionally fail with [`GraphError::InvalidEdge`] when `u == v`.
pub trait Graph {
    /// Number of vertices, fixed at construction.
    fn vertex_count(&self) -> usize;

    /// Number of edges currently present.
    fn edge_count(&self) -> usize;

    /// Whether the edge `u -> v` exists.
    ///
    /// # Errors
    ///
    /// `OutOfRange` or `InvalidEdge` on bad arguments.
    fn has_edge(&self, u: VertexId, v: VertexId) -> Result<bool, GraphError>;

    /// Insert `u -> v` with weight [`DEFAULT_EDGE_WEIGHT`]. Inserting an
    /// existing edge is a no-op and leaves its weight untouched.
    ///
    /// # Errors
    ///
    /// `OutOfRange` or `InvalidEdge` on bad arguments.
    fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError>;

    /// Remove `u -> v`.
    ///
    /// # Errors
    ///
    /// `MissingEdge` if the edge is absent, plus the usual argument checks.
    fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError>;

    /// Number of edges ending at `v`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `v` is not a vertex.
    fn in_degree(&self, v: VertexId) -> Result<usize, GraphError>;

    /// Number of edges starting at `v`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `v` is not a vertex.
    fn out_degree(&self, v: VertexId) -> Result<usize, GraphError>;

    /// # Errors
    ///
    /// `OutOfRange` if `v` is not a vertex.
    fn vertex_weight(&self, v: VertexId) -> Result<f64, GraphError>;

    /// # Errors
    ///
    /// `OutOfRange` if `v` is not a vertex.
    fn set_vertex_weight(&mut self, v: VertexId, weight: f64) -> Result<(), GraphError>;

    /// # Errors
    ///
    /// `MissingEdge` if `u -> v` is absent, plus the usual argument checks.
    fn edge_weight(&self, u: VertexId, v: VertexId) -> Result<f64, GraphError>;

    /// Overwrite the weight of an existing edge.
    ///
    /// # Errors
    ///
    /// `MissingEdge` if `u -> v` is absent, plus the usual argument checks.
    fn set_edge_weight(&mut self, u: VertexId, v: VertexId, weight: f64)
    -> Result<(), GraphError>;

    /// True iff the graph is a single component when edge direction is
    /// ignored. The empty graph (`n == 0`) is not connected.
    fn is_connected(&self) -> bool;

    /// Every edge, sorted by `(source, target)`.
    fn edges(&self) -> Vec<Edge>;

    /// `u -> v` exists.
    ///
    /// # Errors
    ///
    /// `OutOfRange` or `InvalidEdge` on bad arguments.
    fn is_successor(&self, u: VertexId, v: VertexId) -> Result<bool, GraphError> {
        self.has_edge(u, v)
    }

    /// `v -> u` exists.
    ///
    /// # Errors
    ///
    /// `OutOfRange` or `InvalidEdge` on bad arguments.
    fn is_predecessor(&self, u: VertexId, v: VertexId) -> Result<bool, GraphError> {
        self.has_edge(v, u)
    }

    /// Both edges exist and leave the same vertex towards different targets.
    ///
    /// # Errors
    ///
    /// `OutOfRange` or `InvalidEdge` on either pair.
    fn is_divergent(
        &self,
        (u1, v1): (VertexId, VertexId),
        (u2, v2): (VertexId, VertexId),
    ) -> Result<bool, GraphError> {
        let first = self.has_edge(u1, v1)?;
        let second = self.has_edge(u2, v2)?;
        Ok(first && second && u1 == u2 && v1 != v2)
    }

    /// Both edges exist and arrive at the same vertex from different sources.
    ///
    /// # Errors
    ///
    /// `OutOfRange` or `InvalidEdge` on either pair.
    fn is_convergent(
        &self,
        (u1, v1): (VertexId, VertexId),
        (u2, v2): (VertexId, VertexId),
    ) -> Result<bool, GraphError> {
        let first = self.has_edge(u1, v1)?;
        let second = self.has_edge(u2, v2)?;
        Ok(first && second && v1 == v2 && u1 != u2)
    }

    /// `u -> v` exists and `x` is one of its endpoints.
    ///
    /// # Errors
    ///
    /// `OutOfRange` or `InvalidEdge` on bad arguments, including `x`.
    fn is_incident(&self, u: VertexId, v: VertexId, x: VertexId) -> Result<bool, GraphError> {
        validate_vertex(self.vertex_count(), x)?;
        if !self.has_edge(u, v)? {
            return Ok(false);
        }
        Ok(x == u || x == v)
    }

    /// No edges at all.
    fn is_empty_graph(&self) -> bool {
        self.edge_count() == 0
    }

    /// Every ordered pair of distinct vertices is an edge.
    fn is_complete_graph(&self) -> bool {
        let n = self.vertex_count();
        self.edge_count() == n * n.saturating_sub(1)
    }
}

/// Check that `v` is a vertex of a graph with `vertex_count` vertices.
///
/// # Errors
///
/// [`GraphError::OutOfRange`] when `v >= vertex_count`.
pub const fn validate_vertex(vertex_count: usize, v: VertexId) -> Result<(), GraphError> {
    if v >= vertex_count {
        return Err(GraphError::OutOfRange {
            vertex: v,
            vertex_count,
        });
    }
    Ok(())
}

/// Check both endpoints and reject self-loops.
///
/// # Errors
///
/// [`GraphError::OutOfRange`] for either endpoint, then
/// [`GraphError::InvalidEdge`] when `u == v`.
pub const fn validate_edge(vertex_count: usize, u: VertexId, v: VertexId) -> Result<(), GraphError> {
    if let Err(e) = validate_vertex(vertex_count, u) {
        return Err(e);
    }
    if let Err(e) = validate_vertex(vertex_count, v) {
        return Err(e);
    }
    if u == v {
        return Err(GraphError::InvalidEdge { vertex: u });
    }
    Ok(())
}
