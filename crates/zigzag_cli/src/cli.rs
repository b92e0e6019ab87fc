use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Babylonian System B eclipse-window tablets.
#[derive(Parser)]
#[command(
    name = "zigzag",
    version,
    about = "Babylonian zigzag-model eclipse-window tablets"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate candidate eclipse months and write them as JSON.
    Generate(GenerateArgs),
    /// Print every month of the horizon, flagged or not.
    Table(TableArgs),
}

/// Scenario overrides shared by all subcommands.
#[derive(clap::Args, Debug, Default)]
pub struct ScenarioArgs {
    /// Path to a TOML scenario file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed new-moon date (YYYY-MM-DD).
    #[arg(long)]
    pub start: Option<String>,

    /// Seed draconitic phase (reduced modulo 1.0).
    #[arg(long, allow_negative_numbers = true)]
    pub phase: Option<f64>,

    /// Number of synodic months to step.
    #[arg(short = 'n', long)]
    pub months: Option<usize>,

    /// Node-distance threshold in (0, 0.5].
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Override output JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `table` subcommand.
#[derive(clap::Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Show only flagged months.
    #[arg(long)]
    pub flagged_only: bool,
}
