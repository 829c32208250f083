//! Outcome domain types
//!
//! Each service visited by a run ends in exactly one [`Outcome`]. The
//! [`RunReport`] collects them in execution order and an [`ExitPolicy`]
//! turns the report into the process exit status.

use std::fmt;
use std::str::FromStr;

use crate::domain::service::ServiceName;
use crate::error::CoreError;

/// Result of visiting one service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The check ran and exited with status 0
    Passed,
    /// The check ran and failed, or could not be started
    ///
    /// `code` is `None` when the child was terminated by a signal or never
    /// started.
    Failed { code: Option<i32> },
    /// The service was named in the skip set
    Skipped,
}

impl Outcome {
    /// Maps a child exit code to an outcome
    pub fn from_exit_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => Outcome::Passed,
            code => Outcome::Failed { code },
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => f.write_str("passed"),
            Outcome::Failed { code: Some(code) } => write!(f, "failed (exit code {})", code),
            Outcome::Failed { code: None } => f.write_str("failed (no exit code)"),
            Outcome::Skipped => f.write_str("skipped"),
        }
    }
}

/// Outcome of a single service within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOutcome {
    pub service: ServiceName,
    pub outcome: Outcome,
}

/// How the process exit status is derived from a run's outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// Exit 0 whenever the run completed, whatever the checks returned
    #[default]
    Ignore,
    /// Exit with the highest failing check code
    Worst,
}

impl ExitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExitPolicy::Ignore => "ignore",
            ExitPolicy::Worst => "worst",
        }
    }
}

impl FromStr for ExitPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(ExitPolicy::Ignore),
            "worst" => Ok(ExitPolicy::Worst),
            _ => Err(CoreError::UnknownExitPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for ExitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcomes of a whole run, in the order services were visited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    outcomes: Vec<ServiceOutcome>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for the next visited service
    pub fn record(&mut self, service: ServiceName, outcome: Outcome) {
        self.outcomes.push(ServiceOutcome { service, outcome });
    }

    pub fn outcomes(&self) -> &[ServiceOutcome] {
        &self.outcomes
    }

    /// Services whose checks failed
    pub fn failures(&self) -> impl Iterator<Item = &ServiceOutcome> {
        self.outcomes.iter().filter(|o| o.outcome.is_failure())
    }

    /// Process exit status for this report under `policy`
    ///
    /// Under [`ExitPolicy::Worst`] a failure without an exit code, or with a
    /// code outside `1..=255`, counts as 1.
    pub fn exit_code(&self, policy: ExitPolicy) -> u8 {
        match policy {
            ExitPolicy::Ignore => 0,
            ExitPolicy::Worst => self
                .failures()
                .map(|o| match o.outcome {
                    Outcome::Failed { code: Some(code) } => {
                        u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1)
                    }
                    _ => 1,
                })
                .max()
                .unwrap_or(0),
        }
    }
}
