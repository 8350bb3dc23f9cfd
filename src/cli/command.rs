//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Default configuration file, used when present.
pub const DEFAULT_CONFIG: &str = "streamscout.toml";

/// Find the cheapest streaming subscriptions covering your clubs and competitions
#[derive(Parser, Debug)]
#[command(name = "streamscout")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the configuration file [default: streamscout.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog snapshot, overriding `catalog.path` from the configuration
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank every provider bundle up to the configured size
    Rank(RankArgs),

    /// List single providers by coverage, then price
    Providers(ProvidersArgs),

    /// Rank providers plus gap-filling pairs
    Recommend(RecommendArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `streamscout config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied
    Show,
    /// Validate a configuration file for correctness
    Validate,
}

/// Clubs and competitions the user follows.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Club slug (repeatable)
    #[arg(long = "club", value_name = "SLUG")]
    pub clubs: Vec<String>,

    /// Competition slug (repeatable); overrides the clubs' competitions
    #[arg(long = "competition", value_name = "SLUG")]
    pub competitions: Vec<String>,
}

/// Arguments for `rank`.
#[derive(Args, Debug)]
pub struct RankArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Largest bundle to consider (1-4)
    #[arg(long)]
    pub max_size: Option<usize>,

    /// Minimum coverage percent
    #[arg(long)]
    pub min_coverage: Option<u32>,

    /// Show at most this many results
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for `providers`.
#[derive(Args, Debug)]
pub struct ProvidersArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Show at most this many results
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for `recommend`.
#[derive(Args, Debug)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Coverage percent a provider needs to anchor gap filling
    #[arg(long)]
    pub near_complete: Option<u32>,

    /// Minimum coverage percent
    #[arg(long)]
    pub min_coverage: Option<u32>,

    /// Show at most this many results
    #[arg(long)]
    pub limit: Option<usize>,
}
