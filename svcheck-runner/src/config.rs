//! Runner configuration
//!
//! Defines where the services live, which wrapper enters each service's
//! isolated dependency environment, and how check failures map to the exit
//! status.

use anyhow::Context;
use std::path::PathBuf;
use svcheck_core::domain::ExitPolicy;

/// Wrapper used when `CHECK_ENV_RUNNER` is not set
pub const DEFAULT_ENV_RUNNER: &str = "pipenv run";

/// Runner configuration
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Project root containing the service directories
    pub root: PathBuf,

    /// Command prefix that enters a service's dependency environment
    ///
    /// Empty runs each entry point directly.
    pub env_runner: Vec<String>,

    /// How check failures affect the process exit status
    pub exit_policy: ExitPolicy,
}

impl RunnerConfig {
    /// Creates a new configuration with defaults
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            env_runner: split_command(DEFAULT_ENV_RUNNER),
            exit_policy: ExitPolicy::default(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Recognized environment variables:
    /// - CHECK_ROOT (optional, default: current directory)
    /// - CHECK_ENV_RUNNER (optional, default: "pipenv run", empty for none)
    /// - CHECK_EXIT_POLICY (optional, "ignore" or "worst", default: ignore)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let root = lookup("CHECK_ROOT")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut config = Self::new(root);

        if let Some(runner) = lookup("CHECK_ENV_RUNNER") {
            config.env_runner = split_command(&runner);
        }

        if let Some(policy) = lookup("CHECK_EXIT_POLICY") {
            config.exit_policy = policy
                .parse::<ExitPolicy>()
                .context("Invalid CHECK_EXIT_POLICY")?;
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.root.is_dir() {
            anyhow::bail!(
                "Project root {} is not a directory",
                self.root.display()
            );
        }

        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}

/// Splits a wrapper command on whitespace
fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_string).collect()
}
