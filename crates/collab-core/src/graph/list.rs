//! Sparse adjacency-list store.
//!
//! Each vertex owns an ordered map from successor id to edge weight, so
//! out-degree is O(1) and traversal order is deterministic. In-degrees are
//! cached and maintained on every insert/remove.

use std::collections::BTreeMap;

use fixedbitset::FixedBitSet;

use super::{DEFAULT_EDGE_WEIGHT, Edge, Graph, VertexId, validate_edge, validate_vertex};
use crate::error::GraphError;

/// Directed weighted simple graph backed by per-vertex successor maps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyListGraph {
    adjacency: Vec<BTreeMap<VertexId, f64>>,
    in_degrees: Vec<usize>,
    vertex_weights: Vec<f64>,
    edge_count: usize,
}

impl AdjacencyListGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![BTreeMap::new(); vertex_count],
            in_degrees: vec![0; vertex_count],
            vertex_weights: vec![0.0; vertex_count],
            edge_count: 0,
        }
    }

    /// Build a graph from an edge list, ignoring duplicate pairs.
    ///
    /// # Errors
    ///
    /// Propagates the first contract violation in `edges`.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Successors of `v` with their edge weights, in ascending id order.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `v` is not a vertex.
    pub fn successors(
        &self,
        v: VertexId,
    ) -> Result<impl Iterator<Item = (VertexId, f64)> + '_, GraphError> {
        validate_vertex(self.vertex_count(), v)?;
        Ok(self.adjacency[v].iter().map(|(&w, &weight)| (w, weight)))
    }
}

impl Graph for AdjacencyListGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_edge(&self, u: VertexId, v: VertexId) -> Result<bool, GraphError> {
        validate_edge(self.vertex_count(), u, v)?;
        Ok(self.adjacency[u].contains_key(&v))
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError> {
        if self.has_edge(u, v)? {
            return Ok(());
        }
        self.adjacency[u].insert(v, DEFAULT_EDGE_WEIGHT);
        self.in_degrees[v] += 1;
        self.edge_count += 1;
        Ok(())
    }

    fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError> {
        validate_edge(self.vertex_count(), u, v)?;
        if self.adjacency[u].remove(&v).is_none() {
            return Err(GraphError::MissingEdge { from: u, to: v });
        }
        self.in_degrees[v] -= 1;
        self.edge_count -= 1;
        Ok(())
    }

    fn in_degree(&self, v: VertexId) -> Result<usize, GraphError> {
        validate_vertex(self.vertex_count(), v)?;
        Ok(self.in_degrees[v])
    }

    fn out_degree(&self, v: VertexId) -> Result<usize, GraphError> {
        validate_vertex(self.vertex_count(), v)?;
        Ok(self.adjacency[v].len())
    }

    fn vertex_weight(&self, v: VertexId) -> Result<f64, GraphError> {
        validate_vertex(self.vertex_count(), v)?;
        Ok(self.vertex_weights[v])
    }

    fn set_vertex_weight(&mut self, v: VertexId, weight: f64) -> Result<(), GraphError> {
        validate_vertex(self.vertex_count(), v)?;
        self.vertex_weights[v] = weight;
        Ok(())
    }

    fn edge_weight(&self, u: VertexId, v: VertexId) -> Result<f64, GraphError> {
        validate_edge(self.vertex_count(), u, v)?;
        self.adjacency[u]
            .get(&v)
            .copied()
            .ok_or(GraphError::MissingEdge { from: u, to: v })
    }

    fn set_edge_weight(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: f64,
    ) -> Result<(), GraphError> {
        validate_edge(self.vertex_count(), u, v)?;
        let slot = self.adjacency[u]
            .get_mut(&v)
            .ok_or(GraphError::MissingEdge { from: u, to: v })?;
        *slot = weight;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        let n = self.vertex_count();
        if n == 0 {
            return false;
        }

        let mut predecessors: Vec<Vec<VertexId>> = vec![Vec::new(); n];
        for (u, successors) in self.adjacency.iter().enumerate() {
            for &v in successors.keys() {
                predecessors[v].push(u);
            }
        }

        let mut visited = FixedBitSet::with_capacity(n);
        visited.insert(0);
        let mut stack = vec![0];

        while let Some(u) = stack.pop() {
            let outgoing = self.adjacency[u].keys().copied();
            let incoming = predecessors[u].iter().copied();
            for v in outgoing.chain(incoming) {
                if !visited.put(v) {
                    stack.push(v);
                }
            }
        }

        visited.count_ones(..) == n
    }

    fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, successors)| {
                successors.iter().map(move |(&target, &weight)| Edge {
                    source,
                    target,
                    weight,
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
