//! Core domain types
//!
//! The fixed service registry shared by skip validation and execution,
//! plus the per-service outcomes a check run produces.

pub mod outcome;
pub mod service;

pub use outcome::{ExitPolicy, Outcome, RunReport, ServiceOutcome};
pub use service::{CheckInvocation, SERVICES, ServiceName, ServiceSpec};
