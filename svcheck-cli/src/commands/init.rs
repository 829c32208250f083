//! Init command handlers
//!
//! Writes the per-service environment files that point each service at the
//! shared library directory.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use svcheck_core::domain::{SERVICES, ServiceName};

use crate::config::Config;

/// Init subcommands
#[derive(Subcommand)]
pub enum InitCommands {
    /// Write an environment file into every service that uses the shared library
    Env {
        /// Variable that receives the shared directory path
        #[arg(long, default_value = "PYTHONPATH")]
        var: String,

        /// Environment file name inside each service directory
        #[arg(long, default_value = ".env")]
        file: String,
    },
}

/// Handle init commands
pub fn handle_init_command(command: InitCommands, config: &Config) -> Result<()> {
    match command {
        InitCommands::Env { var, file } => {
            let written = write_env_files(&config.root, &var, &file)?;
            for path in &written {
                println!("  {} {}", "Created".green(), path.display());
            }
            println!(
                "{}",
                format!("✓ {} environment file(s) written", written.len())
                    .green()
                    .bold()
            );
            Ok(())
        }
    }
}

/// Writes `<var>=<absolute shared dir>` into `<service>/<file>`
///
/// Every registered service except `shared` gets exactly one line; existing
/// files are overwritten.
///
/// # Returns
/// Paths of the written files, in registry order
pub fn write_env_files(root: &Path, var: &str, file: &str) -> Result<Vec<PathBuf>> {
    let shared_dir = ServiceName::Shared.spec().working_dir(root);
    let shared_dir = std::path::absolute(&shared_dir)
        .with_context(|| format!("Failed to resolve {}", shared_dir.display()))?;
    let line = format!("{}={}\n", var, shared_dir.display());

    let mut written = Vec::new();
    for spec in SERVICES.iter().filter(|s| s.name != ServiceName::Shared) {
        let path = spec.working_dir(root).join(file);
        fs::write(&path, &line)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
