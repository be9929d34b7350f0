//! Error types for unit text lookup.

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

use thiserror::Error;

/// Returned when a spelling matches no unit of the requested kind.
///
/// Produced by [`Unit::parse`](crate::Unit::parse) and the derived `FromStr`
/// impls. The offending spelling is carried verbatim for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit spelling `{spelling}`")]
pub struct UnknownUnit {
    spelling: String,
}

impl UnknownUnit {
    /// Builds the error from the spelling that failed to match.
    pub fn new(spelling: &str) -> Self {
        Self {
            spelling: spelling.to_string(),
        }
    }

    /// The spelling that failed to match.
    pub fn spelling(&self) -> &str {
        &self.spelling
    }
}
