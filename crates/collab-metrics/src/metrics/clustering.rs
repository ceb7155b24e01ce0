//! Local clustering coefficient on the undirected neighbor view.
//!
//! For a vertex with `k` distinct undirected neighbors, the coefficient is
//! the share of the `k(k-1)/2` neighbor pairs that are themselves adjacent
//! (in either direction). Vertices with `k < 2` score 0.0.

use collab_core::Graph;
use tracing::instrument;

use crate::graph::neighbors::undirected_neighbors;

/// Compute the local clustering coefficient of every vertex.
#[must_use]
#[instrument(skip(graph))]
pub fn clustering_coefficients<G: Graph + ?Sized>(graph: &G) -> Vec<f64> {
    let neighbors = undirected_neighbors(graph);

    neighbors
        .iter()
        .map(|own| {
            let k = own.len();
            if k < 2 {
                return 0.0;
            }

            let members: Vec<_> = own.iter().copied().collect();
            let mut links = 0usize;
            for (i, &v) in members.iter().enumerate() {
                links += members[i + 1..]
                    .iter()
                    .filter(|&&w| neighbors[v].contains(&w))
                    .count();
            }

            (2 * links) as f64 / (k * (k - 1)) as f64
        })
        .collect()
}
