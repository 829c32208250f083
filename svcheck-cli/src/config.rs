//! Configuration module
//!
//! Handles CLI configuration shared by every command.

use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root containing the service directories
    pub root: PathBuf,
}
