//! Betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness centrality measures how often a vertex lies on shortest paths
//! between other pairs of vertices. High-betweenness contributors are the
//! "brokers" of a project: remove them and other people drift apart.
//!
//! # Algorithm
//!
//! We implement Brandes' algorithm (2001) for unweighted directed graphs:
//!
//! 1. For each source vertex `s`, run BFS to compute shortest-path counts
//!    and distances.
//! 2. Accumulate dependency scores in reverse BFS order (farthest first).
//! 3. Sum the dependency scores across all source vertices.
//!
//! Complexity: O(V * E) for unweighted graphs.
//!
//! # Output
//!
//! A `Vec<f64>` indexed by vertex id. For `n > 2` every score is scaled by
//! `1 / ((n-1)(n-2))`; graphs with two or fewer vertices keep the raw sums
//! (which are always zero there).

use std::collections::VecDeque;

use collab_core::{Graph, VertexId};
use tracing::instrument;

use crate::graph::neighbors::Successors;

/// Compute scaled betweenness centrality for every vertex.
///
/// Vertices with no shortest paths through them receive 0.0.
#[must_use]
#[instrument(skip(graph))]
pub fn betweenness_centrality<G: Graph + ?Sized>(graph: &G) -> Vec<f64> {
    let mut cb = raw_betweenness(graph);
    let n = cb.len();

    if n > 2 {
        let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
        for score in &mut cb {
            *score *= scale;
        }
    }

    cb
}

/// Unscaled Brandes sums: for every vertex `v`, the sum over ordered pairs
/// `(s, t)` with `s ≠ v ≠ t` of the fraction of shortest `s → t` paths
/// through `v`.
#[must_use]
pub fn raw_betweenness<G: Graph + ?Sized>(graph: &G) -> Vec<f64> {
    let succ = Successors::from_graph(graph);
    let n = succ.vertex_count();
    accumulate_sources(&succ, n)
}

#[cfg(not(feature = "parallel"))]
fn accumulate_sources(succ: &Successors, n: usize) -> Vec<f64> {
    let mut cb = vec![0.0; n];
    for s in 0..n {
        single_source_dependencies(succ, s, &mut cb);
    }
    cb
}

// Floating-point sums may differ from the sequential order in the last ulp.
#[cfg(feature = "parallel")]
fn accumulate_sources(succ: &Successors, n: usize) -> Vec<f64> {
    use rayon::prelude::*;
    (0..n)
        .into_par_iter()
        .fold(
            || vec![0.0; n],
            |mut cb, s| {
                single_source_dependencies(succ, s, &mut cb);
                cb
            },
        )
        .reduce(
            || vec![0.0; n],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        )
}

/// One Brandes pass from `s`, adding each `δ[w]` (`w ≠ s`) into `cb`.
fn single_source_dependencies(succ: &Successors, s: VertexId, cb: &mut [f64]) {
    let n = succ.vertex_count();

    // Stack: vertices in order of discovery (farthest popped first).
    let mut stack: Vec<VertexId> = Vec::with_capacity(n);

    // predecessors[w] = vertices that immediately precede w on shortest
    // paths from s.
    let mut predecessors: Vec<Vec<VertexId>> = vec![Vec::new(); n];

    // sigma[t]: number of shortest paths from s to t.
    let mut sigma: Vec<f64> = vec![0.0; n];
    sigma[s] = 1.0;

    // dist[t]: distance from s to t (-1 = unvisited).
    let mut dist: Vec<i64> = vec![-1; n];
    dist[s] = 0;

    let mut queue: VecDeque<VertexId> = VecDeque::from([s]);

    while let Some(v) = queue.pop_front() {
        stack.push(v);

        for &w in succ.of(v) {
            // First visit to w?
            if dist[w] < 0 {
                dist[w] = dist[v] + 1;
                queue.push_back(w);
            }

            // Shortest path to w via v?
            if dist[w] == dist[v] + 1 {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    // Accumulate dependencies in reverse BFS order.
    let mut delta: Vec<f64> = vec![0.0; n];

    while let Some(w) = stack.pop() {
        for &v in &predecessors[w] {
            if sigma[w] > 0.0 {
                delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
            }
        }

        if w != s {
            cb[w] += delta[w];
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

    fn graph(n: usize, edges: &[(usize, usize)]) -> AdjacencyListGraph {
        AdjacencyListGraph::from_edges(n, edges.iter().copied()).expect("valid edges")
    }

    #[test]
    fn empty_graph_returns_empty() {
        assert!(betweenness_centrality(&graph(0, &[])).is_empty());
    }

    #[test]
    fn single_vertex_zero_betweenness() {
        assert_eq!(betweenness_centrality(&graph(1, &[])), vec![0.0]);
    }

    #[test]
    fn two_vertices_are_left_unscaled() {
        let bc = betweenness_centrality(&graph(2, &[(0, 1), (1, 0)]));
        assert_eq!(bc, vec![0.0, 0.0]);
    }

    #[test]
    fn linear_chain_middle_vertex_has_betweenness() {
        // 0 → 1 → 2
        // 1 is on the shortest path from 0 to 2.
        let g = graph(3, &[(0, 1), (1, 2)]);
        let raw = raw_betweenness(&g);
        assert!((raw[0] - 0.0).abs() < 1e-10, "0 is a source");
        assert!((raw[1] - 1.0).abs() < 1e-10, "1 is on path 0→2");
        assert!((raw[2] - 0.0).abs() < 1e-10, "2 is a sink");

        // Scaled by 1/((3-1)(3-2)) = 1/2.
        let bc = betweenness_centrality(&g);
        assert!((bc[1] - 0.5).abs() < 1e-10);
    }

    #[test]
    fn diamond_graph_betweenness() {
        // 0 → 1 → 3, 0 → 2 → 3
        // Two shortest 0→3 paths; 1 and 2 each carry half of them.
        let raw = raw_betweenness(&graph(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]));

        assert!((raw[0] - 0.0).abs() < 1e-10);
        assert!((raw[1] - 0.5).abs() < 1e-10, "got {}", raw[1]);
        assert!((raw[2] - 0.5).abs() < 1e-10, "got {}", raw[2]);
        assert!((raw[3] - 0.0).abs() < 1e-10);
    }

    #[test]
    fn chain_of_four_betweenness() {
        // 0 → 1 → 2 → 3
        // 1 is on 0→2 and 0→3; 2 is on 0→3 and 1→3.
        let g = graph(4, &[(0, 1), (1, 2), (2, 3)]);
        let raw = raw_betweenness(&g);
        assert!((raw[1] - 2.0).abs() < 1e-10, "got {}", raw[1]);
        assert!((raw[2] - 2.0).abs() < 1e-10, "got {}", raw[2]);

        // Scaled by 1/((4-1)(4-2)) = 1/6.
        let bc = betweenness_centrality(&g);
        assert!((bc[1] - 2.0 / 6.0).abs() < 1e-10);
        assert!((bc[0] - 0.0).abs() < 1e-10);
    }

    #[test]
    fn star_sink_has_zero_betweenness() {
        // 0 → 3, 1 → 3, 2 → 3: 3 is always an endpoint.
        let bc = betweenness_centrality(&graph(4, &[(0, 3), (1, 3), (2, 3)]));
        for (v, score) in bc.iter().enumerate() {
            assert!(score.abs() < 1e-10, "{v} betweenness should be 0 in a star");
        }
    }

    #[test]
    fn disconnected_components_no_cross_betweenness() {
        let bc = betweenness_centrality(&graph(4, &[(0, 1), (2, 3)]));
        assert!(bc.iter().all(|s| s.abs() < 1e-10));
    }

    #[test]
    fn cycle_spreads_betweenness_evenly() {
        // 0 → 1 → 2 → 0: each vertex relays exactly one pair.
        let raw = raw_betweenness(&graph(3, &[(0, 1), (1, 2), (2, 0)]));
        for score in raw {
            assert!((score - 1.0).abs() < 1e-10, "got {score}");
        }
    }
}
