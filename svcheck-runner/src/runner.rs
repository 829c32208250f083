//! Service runner
//!
//! Visits every registered service exactly once, in registry order. Skipped
//! services are announced and never executed; every other service's check
//! runs to completion before the next one starts. A failing or unstartable
//! check is recorded and the run moves on.

use anyhow::Result;
use colored::*;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use svcheck_core::domain::{Outcome, RunReport, SERVICES, ServiceSpec};
use svcheck_core::skip::SkipSet;
use tracing::{error, info, warn};

use crate::config::RunnerConfig;
use crate::service::CheckExecutor;

/// Sequential runner over the service registry
pub struct ServiceRunner {
    root: PathBuf,
    env_runner: Vec<String>,
    executor: Arc<dyn CheckExecutor>,
}

impl ServiceRunner {
    /// Creates a new runner
    ///
    /// # Arguments
    /// * `root` - Project root containing the service directories
    /// * `env_runner` - Wrapper that enters each service's environment
    /// * `executor` - Executor used for every check
    pub fn new(root: PathBuf, env_runner: Vec<String>, executor: Arc<dyn CheckExecutor>) -> Self {
        Self {
            root,
            env_runner,
            executor,
        }
    }

    /// Creates a runner from loaded configuration
    pub fn from_config(config: &RunnerConfig, executor: Arc<dyn CheckExecutor>) -> Self {
        Self::new(config.root.clone(), config.env_runner.clone(), executor)
    }

    /// Runs every service not in `skip`
    ///
    /// Headers and skip markers go to `out`; checks write to the inherited
    /// stdout/stderr directly.
    ///
    /// # Returns
    /// One outcome per registered service, in execution order. Errors only
    /// when writing to `out` fails.
    pub async fn run<W: Write>(&self, skip: &SkipSet, out: &mut W) -> Result<RunReport> {
        let mut report = RunReport::new();

        for spec in SERVICES.iter() {
            writeln!(out, "{}", format!("==> {}", spec.name).bold().cyan())?;

            if skip.contains(spec.name) {
                writeln!(out, "{}", "Skipped".yellow())?;
                info!("Skipped {}", spec.name);
                report.record(spec.name, Outcome::Skipped);
                continue;
            }

            // The child shares our stdout; keep the header ahead of its output.
            out.flush()?;

            let outcome = self.run_service(spec).await;
            report.record(spec.name, outcome);
        }

        Ok(report)
    }

    /// Runs a single service's check and classifies the result
    async fn run_service(&self, spec: &ServiceSpec) -> Outcome {
        let invocation = spec.invocation(&self.root, &self.env_runner);
        info!("Running check for {}: {}", spec.name, invocation);

        match self.executor.execute(&invocation).await {
            Ok(Outcome::Passed) => {
                info!("Check for {} passed", spec.name);
                Outcome::Passed
            }
            Ok(outcome) => {
                warn!("Check for {} {}", spec.name, outcome);
                outcome
            }
            Err(e) => {
                error!("Failed to run check for {}: {:#}", spec.name, e);
                Outcome::Failed { code: None }
            }
        }
    }
}
