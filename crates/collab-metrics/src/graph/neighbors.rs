//! Out-neighbor lists and the undirected neighbor view.

use std::collections::BTreeSet;

use collab_core::{Graph, VertexId};

/// Out-neighbor lists indexed by vertex id, in ascending target order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successors {
    lists: Vec<Vec<VertexId>>,
}

impl Successors {
    /// Snapshot the outgoing edges of `graph`.
    #[must_use]
    pub fn from_graph<G: Graph + ?Sized>(graph: &G) -> Self {
        let mut lists = vec![Vec::new(); graph.vertex_count()];
        for edge in graph.edges() {
            lists[edge.source].push(edge.target);
        }
        Self { lists }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// Successors of `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a vertex of the snapshot.
    #[must_use]
    pub fn of(&self, v: VertexId) -> &[VertexId] {
        &self.lists[v]
    }

    /// Out-degree of `v`.
    #[must_use]
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.lists[v].len()
    }
}

/// For each vertex, the union of its successors and predecessors.
///
/// No vertex appears in its own set since the graph has no self-loops.
#[must_use]
pub fn undirected_neighbors<G: Graph + ?Sized>(graph: &G) -> Vec<BTreeSet<VertexId>> {
    let mut neighbors = vec![BTreeSet::new(); graph.vertex_count()];
    for edge in graph.edges() {
        neighbors[edge.source].insert(edge.target);
        neighbors[edge.target].insert(edge.source);
    }
    neighbors
}
