//! Closeness centrality over outgoing hops.
//!
//! For a source `s`, a BFS along outgoing edges gives the hop distance to
//! every reachable vertex. With `R` the reachable set (including `s`):
//!
//! ```text
//! closeness(s) = (|R| - 1) / Σ_{v ∈ R} dist(s, v)     if |R| > 1
//!              = 0.0                                   otherwise
//! ```
//!
//! Only the reachable part of the graph contributes, so a vertex that
//! reaches one neighbor at distance 1 scores 1.0 even in a large graph.
//! Complexity: O(n · (n + m)).

use std::collections::VecDeque;

use collab_core::{Graph, VertexId};
use tracing::instrument;

use super::per_source;
use crate::graph::neighbors::Successors;

/// Compute closeness centrality for every vertex.
#[must_use]
#[instrument(skip(graph))]
pub fn closeness_centrality<G: Graph + ?Sized>(graph: &G) -> Vec<f64> {
    let succ = Successors::from_graph(graph);
    per_source(succ.vertex_count(), |s| closeness_from(&succ, s))
}

/// Hop distances from `source`; `None` for unreachable vertices.
#[must_use]
pub fn bfs_distances(succ: &Successors, source: VertexId) -> Vec<Option<usize>> {
    let mut dist = vec![None; succ.vertex_count()];
    dist[source] = Some(0);

    let mut queue = VecDeque::from([source]);
    while let Some(u) = queue.pop_front() {
        let next = dist[u].map_or(0, |d| d + 1);
        for &v in succ.of(u) {
            if dist[v].is_none() {
                dist[v] = Some(next);
                queue.push_back(v);
            }
        }
    }

    dist
}

fn closeness_from(succ: &Successors, source: VertexId) -> f64 {
    let dist = bfs_distances(succ, source);

    let (reached, total) = dist
        .iter()
        .flatten()
        .fold((0usize, 0usize), |(count, sum), &d| (count + 1, sum + d));

    if reached <= 1 {
        return 0.0;
    }
    (reached - 1) as f64 / total as f64
}
