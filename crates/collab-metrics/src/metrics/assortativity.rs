//! Degree assortativity.
//!
//! Pearson correlation of total degree (in + out) across the endpoints of
//! each undirected adjacency, sampled once per unordered pair as
//! `(deg(u), deg(v))` with `u < v`. Population moments (divide by the sample
//! count). Returns 0.0 with fewer than two samples or when either side has
//! zero variance.

use collab_core::Graph;
use tracing::instrument;

use super::basic::compute_degrees;
use crate::graph::neighbors::undirected_neighbors;

/// Degree assortativity coefficient of `graph`.
#[must_use]
#[instrument(skip(graph))]
pub fn degree_assortativity<G: Graph + ?Sized>(graph: &G) -> f64 {
    let degrees = compute_degrees(graph).total_degree;
    let neighbors = undirected_neighbors(graph);

    let samples: Vec<(f64, f64)> = neighbors
        .iter()
        .enumerate()
        .flat_map(|(u, set)| set.range(u + 1..).map(move |&v| (u, v)))
        .map(|(u, v)| (degrees[u] as f64, degrees[v] as f64))
        .collect();

    pearson(&samples)
}

#[allow(clippy::float_cmp)]
fn pearson(samples: &[(f64, f64)]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }

    let count = samples.len() as f64;
    let mean_x = samples.iter().map(|(x, _)| x).sum::<f64>() / count;
    let mean_y = samples.iter().map(|(_, y)| y).sum::<f64>() / count;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for &(x, y) in samples {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    cov /= count;
    var_x /= count;
    var_y /= count;

    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }
    cov / (var_x * var_y).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use collab_core::AdjacencyListGraph;

    #[test]
    fn no_edges_is_zero() {
        assert!(degree_assortativity(&AdjacencyListGraph::new(5)).abs() < f64::EPSILON);
    }

    #[test]
    fn single_pair_is_zero() {
        let g = AdjacencyListGraph::from_edges(2, [(0, 1)]).expect("build");
        assert!(degree_assortativity(&g).abs() < f64::EPSILON);
    }

    #[test]
    fn regular_cycle_has_zero_variance() {
        let g = AdjacencyListGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).expect("build");
        assert!(degree_assortativity(&g).abs() < f64::EPSILON);
    }

    #[test]
    fn path_of_four_is_disassortative() {
        // 0 - 1 - 2 - 3 with total degrees 1, 2, 2, 1.
        // Samples (1,2), (2,2), (2,1): x mean 5/3, y mean 5/3,
        // cov = -1/9, var = 2/9 on both sides → r = -0.5.
        let g = AdjacencyListGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).expect("build");
        assert!((degree_assortativity(&g) - (-0.5)).abs() < 1e-12);
    }

    #[test]
    fn mutual_edges_sample_once_with_total_degree() {
        // 0 <-> 1 doubles their total degree but adds one sample only.
        let g = AdjacencyListGraph::from_edges(3, [(0, 1), (1, 0), (1, 2)]).expect("build");
        // Degrees: 0 → 2, 1 → 3, 2 → 1. Samples (2,3), (3,1).
        // x: mean 2.5, var 0.25; y: mean 2, var 1; cov = (-0.5·1 + 0.5·-1)/2 = -0.5.
        let r = degree_assortativity(&g);
        assert!((r - (-1.0)).abs() < 1e-12, "got {r}");
    }
}
