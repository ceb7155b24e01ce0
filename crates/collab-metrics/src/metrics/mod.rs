//! Centrality and structural metrics for interaction graphs.
//!
//! # Overview
//!
//! Each metric answers a different question about a contributor:
//!
//! - **Degree** (`basic`): how many people they interact with, in and out.
//! - **Closeness** (`closeness`): how few hops they need to reach everyone
//!   they can reach.
//! - **Betweenness** (`betweenness`): how often they sit on shortest paths
//!   between other pairs.
//! - **PageRank** (`pagerank`): how much attention flows to them from other
//!   well-connected people.
//! - **Clustering** (`clustering`): how tightly knit their neighborhood is.
//!
//! Whole-graph scalars: `basic::density` and
//! `assortativity::degree_assortativity`.
//!
//! All centralities are hop-based: edge weights are carried by the graph
//! but ignored here.
//!
//! # Usage
//!
//! ```rust,ignore
//! use collab_metrics::metrics::betweenness::betweenness_centrality;
//! use collab_metrics::metrics::closeness::closeness_centrality;
//! use collab_metrics::metrics::pagerank::{PageRankConfig, pagerank};
//!
//! let g: AdjacencyListGraph = /* build graph */;
//!
//! let bc = betweenness_centrality(&g);
//! let cc = closeness_centrality(&g);
//! let pr = pagerank(&g, &PageRankConfig::default());
//! ```

pub mod assortativity;
pub mod basic;
pub mod betweenness;
pub mod closeness;
pub mod clustering;
pub mod pagerank;

use collab_core::VertexId;

/// Run `f` once per source vertex, in parallel with the `parallel` feature.
///
/// Results are returned in source order either way.
#[cfg(feature = "parallel")]
pub(crate) fn per_source<T, F>(n: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(VertexId) -> T + Sync + Send,
{
    use rayon::prelude::*;
    (0..n).into_par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn per_source<T, F>(n: usize, f: F) -> Vec<T>
where
    F: Fn(VertexId) -> T,
{
    (0..n).map(f).collect()
}
