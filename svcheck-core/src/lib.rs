//! svcheck Core
//!
//! Core types and pure logic for running quality checks across services.
//!
//! This crate contains:
//! - Domain types: the service registry, check invocations and outcomes
//! - Argument parsing: turning raw CLI tokens into skip candidates
//! - Skip validation: checking candidates against the registry

pub mod args;
pub mod domain;
pub mod error;
pub mod skip;

pub use error::{CoreError, Result};
