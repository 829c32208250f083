//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod init;
mod services;

pub use init::InitCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Prepare service development environments
    Init {
        #[command(subcommand)]
        command: InitCommands,
    },
    /// List services in check order
    Services,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Init { command } => init::handle_init_command(command, config),
        Commands::Services => services::list_services(config),
    }
}
