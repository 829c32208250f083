//! Service domain types
//!
//! [`SERVICES`] is the single ordered registry of services. Skip validation
//! looks names up in it and the runner iterates it, so the set of valid
//! names and the execution order always agree.

use std::fmt;
use std::path::{Path, PathBuf};

/// Identifier of a service taking part in a check run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceName {
    Shared,
    Manager,
    Orchestrator,
    Router,
    Shell,
}

impl ServiceName {
    /// The name used on the command line and in output
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceName::Shared => "shared",
            ServiceName::Manager => "manager",
            ServiceName::Orchestrator => "orchestrator",
            ServiceName::Router => "router",
            ServiceName::Shell => "shell",
        }
    }

    /// Looks up a service by its command-line name
    pub fn from_name(name: &str) -> Option<Self> {
        ServiceSpec::lookup(name).map(|spec| spec.name)
    }

    /// Every service name, in execution order
    pub fn all() -> impl Iterator<Item = ServiceName> {
        SERVICES.iter().map(|spec| spec.name)
    }

    /// Registry entry for this service
    pub fn spec(self) -> &'static ServiceSpec {
        // Registry rows are declared in enum order.
        &SERVICES[self as usize]
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry row: where a service lives and how its checks are started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSpec {
    pub name: ServiceName,
    /// Working directory, relative to the project root
    pub workdir: &'static str,
    /// Check entry point, relative to `workdir`
    pub entry_point: &'static str,
}

/// All services, in the order their checks run
pub static SERVICES: [ServiceSpec; 5] = [
    // The shared library keeps its check script in the sibling scripts/ dir.
    ServiceSpec {
        name: ServiceName::Shared,
        workdir: "shared",
        entry_point: "../scripts/check_shared.sh",
    },
    ServiceSpec {
        name: ServiceName::Manager,
        workdir: "manager",
        entry_point: "./scripts/check.sh",
    },
    ServiceSpec {
        name: ServiceName::Orchestrator,
        workdir: "orchestrator",
        entry_point: "./scripts/check.sh",
    },
    ServiceSpec {
        name: ServiceName::Router,
        workdir: "router",
        entry_point: "./scripts/check.sh",
    },
    ServiceSpec {
        name: ServiceName::Shell,
        workdir: "shell",
        entry_point: "./scripts/check.sh",
    },
];

impl ServiceSpec {
    /// Finds the registry row whose name matches `candidate` exactly
    pub fn lookup(candidate: &str) -> Option<&'static ServiceSpec> {
        SERVICES.iter().find(|spec| spec.name.as_str() == candidate)
    }

    /// Every registered name, in execution order
    pub fn names() -> Vec<&'static str> {
        SERVICES.iter().map(|spec| spec.name.as_str()).collect()
    }

    /// Absolute or root-relative working directory of this service
    pub fn working_dir(&self, root: &Path) -> PathBuf {
        root.join(self.workdir)
    }

    /// Builds the command that runs this service's checks
    ///
    /// # Arguments
    /// * `root` - Project root containing the service directories
    /// * `env_runner` - Wrapper that enters the isolated dependency
    ///   environment (e.g. `["pipenv", "run"]`); empty runs the entry point
    ///   directly
    pub fn invocation(&self, root: &Path, env_runner: &[String]) -> CheckInvocation {
        let working_dir = self.working_dir(root);

        let (program, args) = match env_runner.split_first() {
            Some((wrapper, wrapper_args)) => {
                let mut args = wrapper_args.to_vec();
                args.push(self.entry_point.to_string());
                (PathBuf::from(wrapper), args)
            }
            // Relative programs resolve against the parent's cwd on some
            // platforms, so anchor the entry point to the working directory.
            None => (working_dir.join(self.entry_point), Vec::new()),
        };

        CheckInvocation {
            service: self.name,
            working_dir,
            program,
            args,
        }
    }
}

/// A fully resolved check command for one service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInvocation {
    pub service: ServiceName,
    /// Directory the child process runs in
    pub working_dir: PathBuf,
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl CheckInvocation {
    /// Program and arguments joined for display
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for CheckInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (in {})",
            self.command_line(),
            self.working_dir.display()
        )
    }
}
