//! `collab stats`: whole-graph statistics of the integrated graph.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use collab_core::build::build_integrated;
use collab_core::config::ProjectConfig;
use collab_core::error::ErrorCode;
use collab_metrics::graph::GraphStats;
use serde::Serialize;

use super::{fail, load_log};
use crate::output::{OutputMode, pretty_kv, pretty_section, render};

/// Arguments for `collab stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Interaction log (JSON).
    pub input: PathBuf,
}

/// Report payload for `collab stats`.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub users: usize,
    pub events: usize,
    pub events_by_kind: BTreeMap<&'static str, usize>,
    pub graph: GraphStats,
}

/// Execute `collab stats`.
pub fn run_stats(
    args: &StatsArgs,
    config: &ProjectConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let loaded = load_log(&args.input, output)?;
    let graph = build_integrated(&loaded.log, &loaded.users, &config.weights)
        .context("failed to build integrated graph")
        .map_err(|err| fail(output, ErrorCode::InternalUnexpected, err))?;

    let payload = StatsReport {
        users: loaded.users.len(),
        events: loaded.log.events.len(),
        events_by_kind: loaded
            .log
            .counts_by_kind()
            .into_iter()
            .map(|(kind, count)| (kind.as_str(), count))
            .collect(),
        graph: GraphStats::from_graph(&graph),
    };

    render(output, &payload, |report, w| {
        pretty_section(w, "Interaction log")?;
        pretty_kv(w, "Users", report.users.to_string())?;
        pretty_kv(w, "Events", report.events.to_string())?;
        for (kind, count) in &report.events_by_kind {
            pretty_kv(w, kind, count.to_string())?;
        }

        writeln!(w)?;
        let g = &report.graph;
        pretty_section(w, "Integrated graph")?;
        pretty_kv(w, "Vertices", g.vertex_count.to_string())?;
        pretty_kv(w, "Edges", g.edge_count.to_string())?;
        pretty_kv(w, "Density", format!("{:.6}", g.density))?;
        pretty_kv(w, "Assortativity", format!("{:.6}", g.assortativity))?;
        pretty_kv(w, "Communities", g.component_count.to_string())?;
        pretty_kv(w, "Isolated", g.isolated_vertex_count.to_string())?;
        pretty_kv(w, "Max in-degree", g.max_in_degree.to_string())?;
        pretty_kv(w, "Max out-degree", g.max_out_degree.to_string())?;
        pretty_kv(w, "Connected", g.is_connected.to_string())
    })
}
