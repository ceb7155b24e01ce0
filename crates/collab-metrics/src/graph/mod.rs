//! Derived views of an interaction graph.
//!
//! # Overview
//!
//! The metrics never walk a [`collab_core::Graph`] directly. They first take
//! one bulk edge export and build the view they need:
//!
//! ```text
//! &dyn Graph
//!        ↓  neighbors::Successors::from_graph()
//! out-neighbor lists   → closeness, betweenness, pagerank
//!        ↓  neighbors::undirected_neighbors()
//! undirected sets      → clustering, assortativity, communities
//!        ↓  stats::GraphStats::from_graph()
//! GraphStats (density, components, isolated vertices, …)
//! ```
//!
//! Views are rebuilt per call and dropped afterwards.

pub mod components;
pub mod neighbors;
pub mod stats;

// Re-export primary types at module level for convenience.
pub use components::weak_components;
pub use neighbors::{Successors, undirected_neighbors};
pub use stats::GraphStats;
