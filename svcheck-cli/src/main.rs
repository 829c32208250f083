//! svcheck CLI
//!
//! Developer tooling around the service registry: preparing service
//! environments and listing what `check` will run.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "svcheck")]
#[command(about = "Service check tooling", long_about = None)]
struct Cli {
    /// Project root containing the service directories
    #[arg(long, global = true, env = "CHECK_ROOT", default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config { root: cli.root };

    handle_command(cli.command, &config)
}
