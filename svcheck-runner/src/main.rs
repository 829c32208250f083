//! check
//!
//! Runs every service's check entry point in registry order.
//!
//! Usage: `check [--skip SERVICE...]`
//!
//! Exit status:
//! - 0: run completed (check failures count only under `CHECK_EXIT_POLICY=worst`)
//! - 1: invalid configuration
//! - 2: a `--skip` candidate is not a registered service; nothing ran

use anyhow::Result;
use colored::*;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use svcheck_core::args::parse_skip_candidates;
use svcheck_core::skip::SkipSet;
use svcheck_runner::config::RunnerConfig;
use svcheck_runner::runner::ServiceRunner;
use svcheck_runner::service::ProcessExecutor;

const EXIT_CONFIG_ERROR: u8 = 1;
const EXIT_INVALID_SKIP: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so they never mix with check output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Tokens that are not valid Unicode are kept lossily: ignored unless they
    // follow --skip, where they fail validation.
    let candidates = parse_skip_candidates(
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned()),
    );
    let skip = match SkipSet::validate(&candidates) {
        Ok(skip) => skip,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            return ExitCode::from(EXIT_INVALID_SKIP);
        }
    };

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    match run(&config, &skip).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("Check run aborted: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration from the environment and validates it
fn load_config() -> Result<RunnerConfig> {
    let config = RunnerConfig::from_env()?;
    config.validate()?;
    info!(
        "Loaded configuration: root={}, env_runner={:?}, exit_policy={}",
        config.root.display(),
        config.env_runner,
        config.exit_policy
    );
    Ok(config)
}

/// Announces the skip set, runs every service and applies the exit policy
async fn run(config: &RunnerConfig, skip: &SkipSet) -> Result<u8> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{} {}", "Skipping:".bold(), skip)?;

    let runner = ServiceRunner::from_config(config, Arc::new(ProcessExecutor::new()));
    let report = runner.run(skip, &mut stdout).await?;
    stdout.flush()?;

    let failed = report.failures().count();
    let code = report.exit_code(config.exit_policy);
    info!(
        "Visited {} service(s), {} failed, exiting with {} (policy: {})",
        report.outcomes().len(),
        failed,
        code,
        config.exit_policy
    );

    Ok(code)
}
