#![forbid(unsafe_code)]
//! collab-metrics library.
//!
//! Structural and importance metrics over any [`collab_core::Graph`]. Every
//! entry point takes the graph by shared reference, never mutates it, and
//! returns maps that are total over `0..vertex_count()`.
//!
//! # Conventions
//!
//! - **Errors**: algorithms are infallible on well-formed graphs; exports use
//!   `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod graph;
pub mod metrics;
pub mod report;

pub use report::{AnalysisReport, Metric};
