//! braid-cover: braid cover graphs of maximal chains in the weak order.
//!
//! Prints JSON lines on stdout; logs go to stderr and follow `RUST_LOG`.

mod cli;
mod presets;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use presets::Preset;

/// Explore braid cover graphs of reduced words for the longest permutation.
#[derive(Parser)]
#[command(name = "braid-cover")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log search progress to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the braid cover graph of a maximal chain
    Graph {
        /// Seed word, e.g. 121321 or 1,2,1,3,2,1
        word: String,

        /// Number of letters permuted (defaults to max generator + 1)
        #[arg(short, long)]
        dim: Option<usize>,

        /// Allowed subchains (CSV, one inversion sequence per line) for restricted mode
        #[arg(short, long)]
        restricted_csv: Option<PathBuf>,

        /// Check every edge with the chain invariants
        #[arg(long)]
        check: bool,
    },

    /// Print the Hasse diagram spanned by the chains of the graph
    Poset {
        /// Seed word
        word: String,

        /// Number of letters permuted (defaults to max generator + 1)
        #[arg(short, long)]
        dim: Option<usize>,
    },

    /// Run a single braid-cover search
    Cover {
        /// Word to search from
        word: String,

        /// Positions fixed at each end of the word
        #[arg(short, long, default_value_t = 0)]
        p: usize,
    },

    /// Run one of the built-in experiments
    Preset {
        #[arg(value_enum)]
        name: Preset,

        /// Check every edge with the chain invariants
        #[arg(long)]
        check: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Graph {
            word,
            dim,
            restricted_csv,
            check,
        } => cli::run_graph(&word, dim, restricted_csv.as_deref(), check, &mut out),
        Commands::Poset { word, dim } => cli::run_poset(&word, dim, &mut out),
        Commands::Cover { word, p } => cli::run_cover(&word, p, &mut out),
        Commands::Preset { name, check } => cli::run_preset(name, check, &mut out),
    }
}
