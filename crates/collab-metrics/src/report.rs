//! Full analysis of one graph and its CSV exports.
//!
//! [`AnalysisReport::compute`] runs every metric once. The writers then turn
//! the report into `;`-delimited tables:
//!
//! ```text
//! top10_degree.csv          rank;vertex_id;username;value
//! centrality_summary.csv    vertex;user;in_degree;out_degree;degree;closeness;betweenness;pagerank;clustering
//! ```
//!
//! Labels are passed as a slice indexed by vertex id; a vertex without a
//! label is written under its id.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use collab_core::config::ReportConfig;
use collab_core::{Graph, VertexId};
use serde::Serialize;
use tracing::{info, instrument};

use crate::graph::components::weak_components;
use crate::graph::stats::GraphStats;
use crate::metrics::basic::{DegreeCentrality, compute_degrees};
use crate::metrics::betweenness::betweenness_centrality;
use crate::metrics::closeness::closeness_centrality;
use crate::metrics::clustering::clustering_coefficients;
use crate::metrics::pagerank::{PageRankConfig, PageRankResult, pagerank};

pub const RANKING_HEADER: &str = "rank;vertex_id;username;value";
pub const SUMMARY_HEADER: &str =
    "vertex;user;in_degree;out_degree;degree;closeness;betweenness;pagerank;clustering";
pub const SUMMARY_FILE: &str = "centrality_summary.csv";

// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

/// A per-vertex metric that can be ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    TotalDegree,
    InDegree,
    OutDegree,
    Closeness,
    Betweenness,
    PageRank,
    Clustering,
}

impl Metric {
    pub const ALL: [Self; 7] = [
        Self::TotalDegree,
        Self::InDegree,
        Self::OutDegree,
        Self::Closeness,
        Self::Betweenness,
        Self::PageRank,
        Self::Clustering,
    ];

    /// Metrics printed and exported by a default analysis run.
    pub const RANKED: [Self; 4] = [
        Self::TotalDegree,
        Self::Betweenness,
        Self::Closeness,
        Self::PageRank,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TotalDegree => "degree",
            Self::InDegree => "in_degree",
            Self::OutDegree => "out_degree",
            Self::Closeness => "closeness",
            Self::Betweenness => "betweenness",
            Self::PageRank => "pagerank",
            Self::Clustering => "clustering",
        }
    }

    /// Human-readable table title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TotalDegree => "Total degree",
            Self::InDegree => "In-degree",
            Self::OutDegree => "Out-degree",
            Self::Closeness => "Closeness",
            Self::Betweenness => "Betweenness",
            Self::PageRank => "PageRank",
            Self::Clustering => "Clustering",
        }
    }

    /// Ranking file name, e.g. `top10_pagerank.csv`.
    #[must_use]
    pub fn file_name(self, top_n: usize) -> String {
        format!("top{top_n}_{}.csv", self.as_str())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AnalysisReport
// ---------------------------------------------------------------------------

/// Every metric of one graph, each indexed by vertex id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub stats: GraphStats,
    pub degrees: DegreeCentrality,
    pub closeness: Vec<f64>,
    pub betweenness: Vec<f64>,
    pub pagerank: PageRankResult,
    pub clustering: Vec<f64>,
    /// Weakly connected components in seed order.
    pub communities: Vec<Vec<VertexId>>,
}

impl AnalysisReport {
    /// Run the whole metric suite over `graph`.
    #[must_use]
    #[instrument(skip(graph, pagerank_config))]
    pub fn compute<G: Graph + ?Sized>(graph: &G, pagerank_config: &PageRankConfig) -> Self {
        let report = Self {
            stats: GraphStats::from_graph(graph),
            degrees: compute_degrees(graph),
            closeness: closeness_centrality(graph),
            betweenness: betweenness_centrality(graph),
            pagerank: pagerank(graph, pagerank_config),
            clustering: clustering_coefficients(graph),
            communities: weak_components(graph),
        };

        info!(
            vertices = report.stats.vertex_count,
            edges = report.stats.edge_count,
            communities = report.communities.len(),
            "analysis complete"
        );
        report
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.stats.vertex_count
    }

    /// Per-vertex values of `metric`.
    #[must_use]
    pub fn values(&self, metric: Metric) -> Vec<f64> {
        let counts = |d: &[usize]| -> Vec<f64> { d.iter().map(|&c| c as f64).collect() };
        match metric {
            Metric::TotalDegree => counts(&self.degrees.total_degree),
            Metric::InDegree => counts(&self.degrees.in_degree),
            Metric::OutDegree => counts(&self.degrees.out_degree),
            Metric::Closeness => self.closeness.clone(),
            Metric::Betweenness => self.betweenness.clone(),
            Metric::PageRank => self.pagerank.scores.clone(),
            Metric::Clustering => self.clustering.clone(),
        }
    }

    /// Top `top_n` vertices by `metric`.
    #[must_use]
    pub fn ranking(&self, metric: Metric, labels: &[String], top_n: usize) -> Vec<RankingRow> {
        ranking(&self.values(metric), labels, top_n)
    }
}

// ---------------------------------------------------------------------------
// Rankings
// ---------------------------------------------------------------------------

/// One row of a top-N table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRow {
    /// 1-based position.
    pub rank: usize,
    pub vertex: VertexId,
    pub label: String,
    pub value: f64,
}

/// Sort vertices by `values` descending, ties by ascending vertex id, and
/// keep the first `top_n`.
#[must_use]
pub fn ranking(values: &[f64], labels: &[String], top_n: usize) -> Vec<RankingRow> {
    let mut order: Vec<VertexId> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]).then(a.cmp(&b)));

    order
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(i, vertex)| RankingRow {
            rank: i + 1,
            vertex,
            label: label_of(labels, vertex),
            value: values[vertex],
        })
        .collect()
}

fn label_of(labels: &[String], v: VertexId) -> String {
    labels.get(v).cloned().unwrap_or_else(|| v.to_string())
}

// ---------------------------------------------------------------------------
// CSV writers
// ---------------------------------------------------------------------------

/// Write a ranking table to `w`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_ranking_csv<W: Write>(rows: &[RankingRow], precision: usize, mut w: W) -> Result<()> {
    writeln!(w, "{RANKING_HEADER}")?;
    for row in rows {
        writeln!(
            w,
            "{};{};{};{:.precision$}",
            row.rank, row.vertex, row.label, row.value
        )?;
    }
    w.flush()?;
    Ok(())
}

/// Write one summary row per vertex to `w`. Degrees are written as integers.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_summary_csv<W: Write>(
    report: &AnalysisReport,
    labels: &[String],
    precision: usize,
    mut w: W,
) -> Result<()> {
    writeln!(w, "{SUMMARY_HEADER}")?;
    for v in 0..report.vertex_count() {
        writeln!(
            w,
            "{v};{};{};{};{};{:.p$};{:.p$};{:.p$};{:.p$}",
            label_of(labels, v),
            report.degrees.in_degree[v],
            report.degrees.out_degree[v],
            report.degrees.total_degree[v],
            report.closeness[v],
            report.betweenness[v],
            report.pagerank.scores[v],
            report.clustering[v],
            p = precision,
        )?;
    }
    w.flush()?;
    Ok(())
}

/// Write the ranking files for [`Metric::RANKED`] and the summary into
/// `dir`, creating it if needed. Returns the written paths.
///
/// # Errors
///
/// Returns an error if the directory or any file cannot be written.
#[instrument(skip(report, labels, config))]
pub fn write_exports(
    report: &AnalysisReport,
    labels: &[String],
    dir: &Path,
    config: &ReportConfig,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let mut written = Vec::with_capacity(Metric::RANKED.len() + 1);

    for metric in Metric::RANKED {
        let path = dir.join(metric.file_name(config.top_n));
        let rows = report.ranking(metric, labels, config.top_n);
        let file = create(&path)?;
        write_ranking_csv(&rows, config.precision, BufWriter::new(file))
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }

    let path = dir.join(SUMMARY_FILE);
    let file = create(&path)?;
    write_summary_csv(report, labels, config.precision, BufWriter::new(file))
        .with_context(|| format!("failed to write {}", path.display()))?;
    written.push(path);

    info!(files = written.len(), dir = %dir.display(), "wrote analysis exports");
    Ok(written)
}

fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("failed to create {}", path.display()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
