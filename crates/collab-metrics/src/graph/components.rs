//! Weakly connected components ("communities").
//!
//! Seeds are tried in ascending vertex id; each unvisited seed starts a new
//! component that an explicit stack grows over the undirected neighbor view.
//! Components are returned in seed order with their members sorted.

use collab_core::{Graph, VertexId};
use fixedbitset::FixedBitSet;
use tracing::{debug, instrument};

use super::neighbors::undirected_neighbors;

/// Partition the vertices of `graph` into weakly connected components.
#[must_use]
#[instrument(skip(graph))]
pub fn weak_components<G: Graph + ?Sized>(graph: &G) -> Vec<Vec<VertexId>> {
    let n = graph.vertex_count();
    let neighbors = undirected_neighbors(graph);

    let mut visited = FixedBitSet::with_capacity(n);
    let mut components = Vec::new();

    for seed in 0..n {
        if visited.put(seed) {
            continue;
        }

        let mut component = Vec::new();
        let mut stack = vec![seed];

        while let Some(u) = stack.pop() {
            component.push(u);
            for &w in &neighbors[u] {
                if !visited.put(w) {
                    stack.push(w);
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    debug!(count = components.len(), "computed weak components");
    components
}
