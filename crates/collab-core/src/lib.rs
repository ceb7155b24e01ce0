#![forbid(unsafe_code)]
//! collab-core library.
//!
//! Graph contract and storage for collaboration interaction graphs, plus the
//! event model and the step that turns typed events into a weighted graph.
//!
//! # Conventions
//!
//! - **Errors**: graph-contract violations are [`error::GraphError`]; I/O and
//!   parsing use `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod build;
pub mod config;
pub mod error;
pub mod event;
pub mod graph;
pub mod users;

pub use error::GraphError;
pub use graph::{AdjacencyListGraph, AdjacencyMatrixGraph, Edge, Graph, VertexId};
pub use users::UserIndex;
