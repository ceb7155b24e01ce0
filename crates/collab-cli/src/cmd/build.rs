//! `collab build`: build the interaction graphs and export them for Gephi.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use collab_core::{Graph, UserIndex};
use collab_core::build::GraphSet;
use collab_core::config::ProjectConfig;
use collab_core::error::ErrorCode;
use collab_core::graph::export::export_gephi;
use serde::Serialize;
use tracing::info;

use super::{fail, load_log};
use crate::output::{OutputMode, pretty_kv, pretty_section, render};

/// Arguments for `collab build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Interaction log (JSON).
    pub input: PathBuf,

    /// Directory receiving the `<graph>_nodes.csv` / `<graph>_edges.csv` files.
    #[arg(short, long, default_value = "graphs")]
    pub out: PathBuf,
}

/// One exported graph.
#[derive(Debug, Serialize)]
pub struct BuiltGraph {
    pub name: &'static str,
    pub vertices: usize,
    pub edges: usize,
    pub nodes_file: PathBuf,
    pub edges_file: PathBuf,
}

/// Report payload for `collab build`.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub users: usize,
    pub events: usize,
    pub graphs: Vec<BuiltGraph>,
}

/// Execute `collab build`.
pub fn run_build(
    args: &BuildArgs,
    config: &ProjectConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let loaded = load_log(&args.input, output)?;
    let set = GraphSet::build(&loaded.log, &loaded.users, &config.weights)
        .context("failed to build interaction graphs")
        .map_err(|err| fail(output, ErrorCode::InternalUnexpected, err))?;

    let graphs = export_all(&set, &loaded.users, &args.out)
        .map_err(|err| fail(output, ErrorCode::ExportWriteFailed, err))?;

    info!(graphs = graphs.len(), out = %args.out.display(), "build complete");

    let payload = BuildReport {
        users: loaded.users.len(),
        events: loaded.log.events.len(),
        graphs,
    };

    render(output, &payload, |report, w| {
        pretty_section(w, "Interaction graphs")?;
        pretty_kv(w, "Users", report.users.to_string())?;
        pretty_kv(w, "Events", report.events.to_string())?;
        writeln!(w)?;
        for graph in &report.graphs {
            writeln!(
                w,
                "{:<24} {:>6} vertices {:>8} edges  {}",
                graph.name,
                graph.vertices,
                graph.edges,
                graph.nodes_file.display()
            )?;
        }
        Ok(())
    })
}

fn export_all(set: &GraphSet, users: &UserIndex, out: &Path) -> anyhow::Result<Vec<BuiltGraph>> {
    std::fs::create_dir_all(out)
        .with_context(|| format!("failed to create {}", out.display()))?;

    set.named()
        .into_iter()
        .map(|(name, graph)| {
            let files = export_gephi(graph, Some(users), &out.join(name))?;
            Ok(BuiltGraph {
                name,
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
                nodes_file: files.nodes,
                edges_file: files.edges,
            })
        })
        .collect()
}
