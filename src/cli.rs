use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Caeli standardized climate drought indices.
#[derive(Parser)]
#[command(
    name = "caeli",
    version,
    about = "Standardized climate drought indices (SPI, SPEI)"
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
    /// Compute the Standardized Precipitation Index.
    Spi(ComputeArgs),
    /// Compute the Standardized Precipitation-Evapotranspiration Index
    /// (requires a `pet` column in the input).
    Spei(ComputeArgs),
}

/// Arguments shared by the `spi` and `spei` subcommands.
#[derive(clap::Args)]
pub struct ComputeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Input CSV path (columns: year, month, precip[, pet]).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output CSV path. Defaults to the input path with the index name as
    /// extension.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Accumulation scales to compute, overriding the config file.
    #[arg(short, long, value_delimiter = ',')]
    pub scales: Option<Vec<usize>>,

    /// Path for fitted-parameter diagnostics JSON.
    #[arg(long)]
    pub diagnostics: Option<PathBuf>,
}
