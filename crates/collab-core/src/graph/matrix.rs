//! Dense adjacency-matrix store.
//!
//! A flat `n × n` table of optional weights. Degree queries scan a row or a
//! column (O(n)); memory is O(n²) regardless of edge count, so this variant
//! suits small, dense interaction graphs.

use fixedbitset::FixedBitSet;

use super::{DEFAULT_EDGE_WEIGHT, Edge, Graph, VertexId, validate_edge, validate_vertex};
use crate::error::GraphError;

/// Directed weighted simple graph backed by a dense weight matrix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyMatrixGraph {
    vertex_count: usize,
    cells: Vec<Option<f64>>,
    vertex_weights: Vec<f64>,
    edge_count: usize,
}

impl AdjacencyMatrixGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            cells: vec![None; vertex_count * vertex_count],
            vertex_weights: vec![0.0; vertex_count],
            edge_count: 0,
        }
    }

    const fn cell(&self, u: VertexId, v: VertexId) -> usize {
        u * self.vertex_count + v
    }
}

impl Graph for AdjacencyMatrixGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_edge(&self, u: VertexId, v: VertexId) -> Result<bool, GraphError> {
        validate_edge(self.vertex_count, u, v)?;
        Ok(self.cells[self.cell(u, v)].is_some())
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError> {
        if self.has_edge(u, v)? {
            return Ok(());
        }
        let idx = self.cell(u, v);
        self.cells[idx] = Some(DEFAULT_EDGE_WEIGHT);
        self.edge_count += 1;
        Ok(())
    }

    fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError> {
        validate_edge(self.vertex_count, u, v)?;
        let idx = self.cell(u, v);
        if self.cells[idx].take().is_none() {
            return Err(GraphError::MissingEdge { from: u, to: v });
        }
        self.edge_count -= 1;
        Ok(())
    }

    fn in_degree(&self, v: VertexId) -> Result<usize, GraphError> {
        validate_vertex(self.vertex_count, v)?;
        Ok((0..self.vertex_count)
            .filter(|&u| self.cells[self.cell(u, v)].is_some())
            .count())
    }

    fn out_degree(&self, v: VertexId) -> Result<usize, GraphError> {
        validate_vertex(self.vertex_count, v)?;
        let row = self.cell(v, 0);
        Ok(self.cells[row..row + self.vertex_count]
            .iter()
            .filter(|c| c.is_some())
            .count())
    }

    fn vertex_weight(&self, v: VertexId) -> Result<f64, GraphError> {
        validate_vertex(self.vertex_count, v)?;
        Ok(self.vertex_weights[v])
    }

    fn set_vertex_weight(&mut self, v: VertexId, weight: f64) -> Result<(), GraphError> {
        validate_vertex(self.vertex_count, v)?;
        self.vertex_weights[v] = weight;
        Ok(())
    }

    fn edge_weight(&self, u: VertexId, v: VertexId) -> Result<f64, GraphError> {
        validate_edge(self.vertex_count, u, v)?;
        self.cells[self.cell(u, v)].ok_or(GraphError::MissingEdge { from: u, to: v })
    }

    fn set_edge_weight(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: f64,
    ) -> Result<(), GraphError> {
        validate_edge(self.vertex_count, u, v)?;
        let idx = self.cell(u, v);
        let slot = self.cells[idx]
            .as_mut()
            .ok_or(GraphError::MissingEdge { from: u, to: v })?;
        *slot = weight;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        let n = self.vertex_count;
        if n == 0 {
            return false;
        }

        let mut visited = FixedBitSet::with_capacity(n);
        visited.insert(0);
        let mut stack = vec![0];

        while let Some(u) = stack.pop() {
            for v in 0..n {
                let linked =
                    self.cells[self.cell(u, v)].is_some() || self.cells[self.cell(v, u)].is_some();
                if linked && !visited.put(v) {
                    stack.push(v);
                }
            }
        }

        visited.count_ones(..) == n
    }

    fn edges(&self) -> Vec<Edge> {
        let n = self.vertex_count;
        let mut edges = Vec::with_capacity(self.edge_count);
        for source in 0..n {
            for target in 0..n {
                if let Some(weight) = self.cells[self.cell(source, target)] {
                    edges.push(Edge {
                        source,
                        target,
                        weight,
                    });
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraph;

    /// Apply the same mutation script to any store and return it.
    fn script<G: Graph>(mut g: G) -> G {
        g.add_edge(0, 1).expect("add");
        g.add_edge(1, 2).expect("add");
        g.add_edge(2, 0).expect("add");
        g.add_edge(3, 2).expect("add");
        g.add_edge(0, 1).expect("duplicate add");
        g.set_edge_weight(1, 2, 5.0).expect("weight");
        g.remove_edge(2, 0).expect("remove");
        g.set_vertex_weight(3, 2.5).expect("vertex weight");
        g
    }

    #[test]
    fn matches_adjacency_list() {
        let dense = script(AdjacencyMatrixGraph::new(5));
        let sparse = script(AdjacencyListGraph::new(5));

        assert_eq!(dense.edge_count(), sparse.edge_count());
        assert_eq!(dense.edges(), sparse.edges());
        for v in 0..5 {
            assert_eq!(dense.in_degree(v), sparse.in_degree(v));
            assert_eq!(dense.out_degree(v), sparse.out_degree(v));
            assert_eq!(dense.vertex_weight(v), sparse.vertex_weight(v));
        }
        assert_eq!(dense.is_connected(), sparse.is_connected());
    }

    #[test]
    fn contract_errors() {
        let mut g = AdjacencyMatrixGraph::new(2);
        assert_eq!(g.add_edge(0, 0), Err(GraphError::InvalidEdge { vertex: 0 }));
        assert_eq!(
            g.has_edge(0, 5),
            Err(GraphError::OutOfRange {
                vertex: 5,
                vertex_count: 2
            })
        );
        assert_eq!(
            g.remove_edge(0, 1),
            Err(GraphError::MissingEdge { from: 0, to: 1 })
        );
        assert_eq!(
            g.edge_weight(1, 0),
            Err(GraphError::MissingEdge { from: 1, to: 0 })
        );
    }

    #[test]
    fn connectivity() {
        assert!(!AdjacencyMatrixGraph::new(0).is_connected());
        assert!(AdjacencyMatrixGraph::new(1).is_connected());

        let mut g = AdjacencyMatrixGraph::new(3);
        g.add_edge(1, 0).expect("add");
        assert!(!g.is_connected());
        g.add_edge(2, 1).expect("add");
        assert!(g.is_connected());
    }

    #[test]
    fn complete_graph() {
        let mut g = AdjacencyMatrixGraph::new(3);
        for u in 0..3 {
            for v in 0..3 {
                if u != v {
                    g.add_edge(u, v).expect("add");
                }
            }
        }
        assert!(g.is_complete_graph());
        assert_eq!(g.out_degree(1), Ok(2));
        assert_eq!(g.in_degree(1), Ok(2));
    }
}
