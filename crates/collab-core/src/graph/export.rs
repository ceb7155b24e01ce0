//! Gephi-compatible node/edge CSV export.
//!
//! Two `;`-delimited files per graph:
//!
//! ```text
//! <prefix>_nodes.csv   id;label;weight
//! <prefix>_edges.csv   source;target;weight
//! ```
//!
//! Labels come from a [`UserIndex`] when one is supplied, otherwise the
//! vertex id doubles as its label.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, instrument};

use super::Graph;
use crate::users::UserIndex;

pub const NODES_HEADER: &str = "id;label;weight";
pub const EDGES_HEADER: &str = "source;target;weight";

/// Paths written by [`export_gephi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GephiFiles {
    pub nodes: PathBuf,
    pub edges: PathBuf,
}

/// Write the node table of `graph` to `w`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_nodes<G: Graph + ?Sized, W: Write>(
    graph: &G,
    labels: Option<&UserIndex>,
    mut w: W,
) -> Result<()> {
    writeln!(w, "{NODES_HEADER}")?;
    for v in 0..graph.vertex_count() {
        let weight = graph.vertex_weight(v)?;
        match labels.and_then(|idx| idx.handle(v)) {
            Some(label) => writeln!(w, "{v};{label};{weight}")?,
            None => writeln!(w, "{v};{v};{weight}")?,
        }
    }
    w.flush()?;
    Ok(())
}

/// Write the edge table of `graph` to `w`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_edges<G: Graph + ?Sized, W: Write>(graph: &G, mut w: W) -> Result<()> {
    writeln!(w, "{EDGES_HEADER}")?;
    for edge in graph.edges() {
        writeln!(w, "{};{};{}", edge.source, edge.target, edge.weight)?;
    }
    w.flush()?;
    Ok(())
}

/// Write `<prefix>_nodes.csv` and `<prefix>_edges.csv`.
///
/// # Errors
///
/// Returns an error for an empty prefix or if either file cannot be written.
#[instrument(skip(graph, labels))]
pub fn export_gephi<G: Graph + ?Sized>(
    graph: &G,
    labels: Option<&UserIndex>,
    prefix: &Path,
) -> Result<GephiFiles> {
    let Some(stem) = prefix.file_name().and_then(|s| s.to_str()) else {
        bail!("invalid export prefix: {}", prefix.display());
    };
    if stem.is_empty() {
        bail!("invalid export prefix: {}", prefix.display());
    }

    let files = GephiFiles {
        nodes: prefix.with_file_name(format!("{stem}_nodes.csv")),
        edges: prefix.with_file_name(format!("{stem}_edges.csv")),
    };

    let nodes = File::create(&files.nodes)
        .with_context(|| format!("failed to create {}", files.nodes.display()))?;
    write_nodes(graph, labels, BufWriter::new(nodes))
        .with_context(|| format!("failed to write {}", files.nodes.display()))?;

    let edges = File::create(&files.edges)
        .with_context(|| format!("failed to create {}", files.edges.display()))?;
    write_edges(graph, BufWriter::new(edges))
        .with_context(|| format!("failed to write {}", files.edges.display()))?;

    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        nodes = %files.nodes.display(),
        "exported graph for gephi"
    );
    Ok(files)
}
