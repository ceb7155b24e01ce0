//! PageRank by power iteration.
//!
//! # Overview
//!
//! PageRank identifies contributors that attention flows towards: being
//! reviewed, merged or answered by other well-connected people raises a
//! score.
//!
//! # Algorithm
//!
//! ```text
//! PR(v) = (1 - d) / N + d * Σ PR(u) / out_degree(u)   for each u → v
//! ```
//!
//! where `d` is the damping factor (default 0.85). Ranks start uniform at
//! `1/N` and iteration stops once the L1 norm of the rank delta drops below
//! the tolerance, or after `max_iter` rounds.
//!
//! # Dangling vertices
//!
//! A vertex with no outgoing edges contributes nothing in the next round:
//! its mass is **not** spread across the graph as the textbook formulation
//! does. Scores therefore need not sum to 1 once sinks exist. Published
//! rankings already depend on these numbers, so changing the policy changes
//! every previously exported PageRank table.

use collab_core::Graph;
use collab_core::config::PageRankSettings;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::graph::neighbors::Successors;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for PageRank computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a link vs teleporting).
    /// Default: 0.85.
    pub damping: f64,
    /// Convergence threshold: stop when L1 norm of rank delta < tolerance.
    /// Default: 1e-6.
    pub tolerance: f64,
    /// Maximum number of iterations.
    /// Default: 100.
    pub max_iter: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-6,
            max_iter: 100,
        }
    }
}

impl From<&PageRankSettings> for PageRankConfig {
    fn from(settings: &PageRankSettings) -> Self {
        Self {
            damping: settings.damping,
            tolerance: settings.tolerance,
            max_iter: settings.max_iter,
        }
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Result of a PageRank computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRankResult {
    /// PageRank score per vertex id.
    pub scores: Vec<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the L1 delta fell below the tolerance within `max_iter`.
    pub converged: bool,
}

// ---------------------------------------------------------------------------
// Power iteration
// ---------------------------------------------------------------------------

/// Compute PageRank for every vertex of `graph`.
///
/// An empty graph yields an empty, converged result.
#[must_use]
#[instrument(skip(graph, config))]
pub fn pagerank<G: Graph + ?Sized>(graph: &G, config: &PageRankConfig) -> PageRankResult {
    let succ = Successors::from_graph(graph);
    let n = succ.vertex_count();

    if n == 0 {
        return PageRankResult {
            scores: Vec::new(),
            iterations: 0,
            converged: true,
        };
    }

    let n_f64 = n as f64;
    let base = (1.0 - config.damping) / n_f64;

    // Initialize ranks uniformly.
    let mut ranks = vec![1.0 / n_f64; n];
    let mut new_ranks = vec![0.0_f64; n];

    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.max_iter {
        iterations += 1;

        // Reset new_ranks to base teleportation value.
        new_ranks.fill(base);

        // Distribute rank from each vertex to its outgoing neighbors.
        for (u, &rank) in ranks.iter().enumerate() {
            let out_degree = succ.out_degree(u);
            if out_degree == 0 {
                // Dangling: mass is dropped, not redistributed.
                continue;
            }
            let share = config.damping * rank / out_degree as f64;
            for &v in succ.of(u) {
                new_ranks[v] += share;
            }
        }

        // Check convergence: L1 norm of delta.
        let delta: f64 = ranks
            .iter()
            .zip(new_ranks.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut ranks, &mut new_ranks);

        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    if converged {
        debug!(iterations, "pagerank converged");
    } else {
        warn!(
            max_iter = config.max_iter,
            tolerance = config.tolerance,
            "pagerank hit the iteration cap before converging"
        );
    }

    PageRankResult {
        scores: ranks,
        iterations,
        converged,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
