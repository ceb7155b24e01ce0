//! `collab analyze`: centrality analysis of the integrated graph.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use collab_core::build::build_integrated;
use collab_core::config::{ProjectConfig, ReportConfig};
use collab_core::error::ErrorCode;
use collab_metrics::graph::GraphStats;
use collab_metrics::metrics::pagerank::PageRankConfig;
use collab_metrics::report::{RankingRow, write_exports};
use collab_metrics::{AnalysisReport, Metric};
use serde::Serialize;

use super::{fail, load_log};
use crate::output::{OutputMode, pretty_kv, pretty_section, render};

/// Arguments for `collab analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Interaction log (JSON).
    pub input: PathBuf,

    /// Directory receiving the ranking and summary CSV files.
    #[arg(short, long, default_value = "analysis")]
    pub out: PathBuf,

    /// Rows per ranking (overrides `report.top_n`).
    #[arg(long)]
    pub top: Option<usize>,
}

/// One ranked metric.
#[derive(Debug, Serialize)]
pub struct MetricRanking {
    pub metric: Metric,
    pub rows: Vec<RankingRow>,
}

/// Report payload for `collab analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeOutput {
    pub stats: GraphStats,
    pub communities: usize,
    pub pagerank_iterations: usize,
    pub pagerank_converged: bool,
    pub rankings: Vec<MetricRanking>,
    pub files: Vec<PathBuf>,
}

/// Execute `collab analyze`.
pub fn run_analyze(
    args: &AnalyzeArgs,
    config: &ProjectConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let loaded = load_log(&args.input, output)?;
    let graph = build_integrated(&loaded.log, &loaded.users, &config.weights)
        .context("failed to build integrated graph")
        .map_err(|err| fail(output, ErrorCode::InternalUnexpected, err))?;

    let report = AnalysisReport::compute(&graph, &PageRankConfig::from(&config.pagerank));

    let report_config = ReportConfig {
        top_n: args.top.unwrap_or(config.report.top_n),
        ..config.report.clone()
    };
    let labels = loaded.users.handles();

    let files = write_exports(&report, labels, &args.out, &report_config)
        .map_err(|err| fail(output, ErrorCode::ExportWriteFailed, err))?;

    let rankings = Metric::RANKED
        .into_iter()
        .map(|metric| MetricRanking {
            metric,
            rows: report.ranking(metric, labels, report_config.top_n),
        })
        .collect();

    let payload = AnalyzeOutput {
        stats: report.stats.clone(),
        communities: report.communities.len(),
        pagerank_iterations: report.pagerank.iterations,
        pagerank_converged: report.pagerank.converged,
        rankings,
        files,
    };

    render(output, &payload, |out, w| render_human(out, report_config.top_n, w))
}

fn render_human(out: &AnalyzeOutput, top_n: usize, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Integrated graph")?;
    pretty_kv(w, "Vertices", out.stats.vertex_count.to_string())?;
    pretty_kv(w, "Edges", out.stats.edge_count.to_string())?;
    pretty_kv(w, "Density", format!("{:.6}", out.stats.density))?;
    pretty_kv(w, "Assortativity", format!("{:.6}", out.stats.assortativity))?;
    pretty_kv(w, "Communities", out.communities.to_string())?;

    for ranking in &out.rankings {
        writeln!(w)?;
        pretty_section(w, &format!("{} (Top {top_n})", ranking.metric.title()))?;
        writeln!(w, "{:<5} {:<30} {:<6} {:<12}", "Rank", "User", "ID", "Value")?;
        for row in &ranking.rows {
            writeln!(
                w,
                "{:<5} {:<30} {:<6} {:<12.6}",
                row.rank, row.label, row.vertex, row.value
            )?;
        }
    }

    writeln!(w)?;
    for file in &out.files {
        writeln!(w, "wrote {}", file.display())?;
    }
    Ok(())
}
