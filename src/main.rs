// The theoremtree CLI.
// Generates the theorem tree of a rewrite system and prints or exports it.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use theoremtree::render;
use theoremtree::{SearchConfig, TreeSnapshot};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum View {
    /// Indented derivation tree
    Tree,
    /// Theorems grouped by level
    Levels,
    /// Sample derivation paths
    Paths,
    /// Theorem count
    Summary,
    /// Search statistics and fingerprint
    Stats,
    /// Summary, tree, levels and paths
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Json,
    Cbor,
}

#[derive(Parser)]
#[command(
    name = "theoremtree",
    about = "Breadth-first theorem generation for string-rewrite systems",
    long_about = "Explores every theorem derivable from an axiom within a depth bound.\n\nWithout a config file the MIU system is used, starting from \"MI\".",
    version = env!("CARGO_PKG_VERSION")
)]
struct Args {
    /// TOML file with axiom, max_level, alphabet and rules
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Starting string; overrides the config
    #[arg(long)]
    axiom: Option<String>,

    /// Search depth; overrides the config
    #[arg(long, allow_negative_numbers = true)]
    max_level: Option<i64>,

    /// What to print
    #[arg(long, value_enum, default_value_t = View::All)]
    view: View,

    /// Number of sample derivation paths
    #[arg(long, default_value_t = 3)]
    samples: usize,

    /// Minimum level of sampled theorems
    #[arg(long, default_value_t = 2)]
    min_sample_level: usize,

    /// Write a snapshot of the tree to FILE
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Snapshot format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,
}

fn main() -> Result<()> {
    // RUST_LOG controls verbosity, e.g. RUST_LOG=theoremtree=debug
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).without_time().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };
    if let Some(axiom) = args.axiom {
        config.axiom = axiom;
    }
    if let Some(max_level) = args.max_level {
        config.max_level = max_level;
    }

    let tree = config.search().context("invalid search arguments")?;

    let text = match args.view {
        View::Tree => render::tree_structure(&tree),
        View::Levels => render::theorems_by_level(&tree),
        View::Paths => render::sample_paths(&tree, args.min_sample_level, args.samples),
        View::Summary => render::summary(&tree),
        View::Stats => render::statistics(&tree),
        View::All => render::report(&tree, args.min_sample_level, args.samples),
    };
    print!("{text}");

    if let Some(path) = &args.export {
        let snapshot = TreeSnapshot::capture(&tree);
        let bytes = match args.format {
            ExportFormat::Json => snapshot.to_json()?.into_bytes(),
            ExportFormat::Cbor => snapshot.to_cbor()?,
        };
        std::fs::write(path, bytes)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        info!(path = %path.display(), nodes = tree.len(), "exported snapshot");
    }

    Ok(())
}
