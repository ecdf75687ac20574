mod cli;
mod compute_cmd;
mod config;
mod logging;
mod report;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Spi(args) => compute_cmd::run_spi(args),
        Command::Spei(args) => compute_cmd::run_spei(args),
    }
}
