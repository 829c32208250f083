//! Skip set validation
//!
//! Validation is fail-fast: the first candidate that does not name a
//! registered service aborts with [`CoreError::UnknownService`].

use std::fmt;

use crate::domain::service::{ServiceName, ServiceSpec};
use crate::error::{CoreError, Result};

/// Validated services to skip, in the order they were given
///
/// Duplicates are kept for reporting; membership is unaffected by them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet {
    services: Vec<ServiceName>,
}

impl SkipSet {
    /// Validates skip candidates against the service registry
    ///
    /// # Returns
    /// The skip set, or the error for the first unknown candidate
    pub fn validate<I, S>(candidates: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut services = Vec::new();

        for candidate in candidates {
            let candidate = candidate.as_ref();
            match ServiceName::from_name(candidate) {
                Some(name) => services.push(name),
                None => {
                    return Err(CoreError::UnknownService {
                        candidate: candidate.to_string(),
                        valid: ServiceSpec::names(),
                    });
                }
            }
        }

        Ok(Self { services })
    }

    pub fn contains(&self, service: ServiceName) -> bool {
        self.services.contains(&service)
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl fmt::Display for SkipSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.services.is_empty() {
            return f.write_str("(none)");
        }

        let names: Vec<_> = self.services.iter().map(|s| s.as_str()).collect();
        f.write_str(&names.join(", "))
    }
}
