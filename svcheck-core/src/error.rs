//! Error types for svcheck core

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while interpreting user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A `--skip` candidate that does not name a registered service
    #[error(
        "Invalid service to skip: '{candidate}'. Valid services: {}",
        .valid.join(", ")
    )]
    UnknownService {
        /// The offending candidate, verbatim
        candidate: String,
        /// Every registered service name, in execution order
        valid: Vec<&'static str>,
    },

    /// An exit policy name that is not recognized
    #[error("Unknown exit policy '{0}' (expected 'ignore' or 'worst')")]
    UnknownExitPolicy(String),
}
