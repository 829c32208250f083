//! Service layer
//!
//! Services perform the side effects of a check run. Execution is behind a
//! trait so the runner can be driven by a recording executor in tests.

mod executor;

pub use executor::CheckExecutor;
pub use executor::ProcessExecutor;
