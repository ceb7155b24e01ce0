#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use collab_core::config::{CONFIG_FILE, ProjectConfig, load_config};
use collab_core::error::ErrorCode;
use output::OutputMode;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "collab: collaboration interaction graph analysis",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Config file (defaults to `collab.toml` in the working directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }

    fn config_path(&self) -> &Path {
        self.config.as_deref().unwrap_or_else(|| Path::new(CONFIG_FILE))
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Build the interaction graphs and export them for Gephi",
        long_about = "Build the comment, issue-closure, review/merge and integrated graphs \
                      from an interaction log and write <graph>_nodes.csv / <graph>_edges.csv \
                      for each.",
        after_help = "EXAMPLES:\n    collab build interactions.json --out graphs"
    )]
    Build(cmd::build::BuildArgs),

    #[command(
        about = "Rank contributors by centrality",
        long_about = "Build the integrated graph, compute degree, closeness, betweenness, \
                      PageRank and clustering, print top-N tables and write ranking and \
                      summary CSV files.",
        after_help = "EXAMPLES:\n    collab analyze interactions.json --out analysis --top 5\n\n    \
                      # Emit machine-readable output\n    collab analyze interactions.json --json"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(about = "Show whole-graph statistics")]
    Stats(cmd::stats::StatsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("COLLAB_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "collab=debug,info"
        } else {
            "collab=info,warn"
        })
    });

    let format = env::var("COLLAB_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn load_project_config(cli: &Cli, output: OutputMode) -> anyhow::Result<ProjectConfig> {
    load_config(cli.config_path())
        .map_err(|err| cmd::fail(output, ErrorCode::ConfigParseError, err))
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();
    let config = load_project_config(&cli, output)?;

    match cli.command {
        Commands::Build(ref args) => cmd::build::run_build(args, &config, output),
        Commands::Analyze(ref args) => cmd::analyze::run_analyze(args, &config, output),
        Commands::Stats(ref args) => cmd::stats::run_stats(args, &config, output),
    }
}
