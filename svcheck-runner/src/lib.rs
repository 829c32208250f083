//! svcheck Runner
//!
//! Runs each service's check entry point in registry order.
//!
//! Architecture:
//! - Configuration: project root, environment wrapper and exit policy from
//!   environment variables or defaults
//! - Services: the check executor seam and its process-backed implementation
//! - Runner: the sequential visit of every registered service
//!
//! The `check` binary wires these together behind the `--skip` command line.

pub mod config;
pub mod runner;
pub mod service;
