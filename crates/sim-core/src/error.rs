//! Error types for scan operations.

use std::fmt;
use types::Pattern;

/// Result type for sim-core operations.
pub type Result<T> = std::result::Result<T, SimCoreError>;

/// Errors that can occur while scanning a flip stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimCoreError {
    /// A race was requested between two identical patterns.
    IdenticalPatterns(Pattern),
    /// A scan consumed its configured flip budget without a match.
    Divergence { budget: u64 },
    /// A finite source ran out of flips before a match.
    SourceExhausted { drawn: u64 },
}

impl fmt::Display for SimCoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimCoreError::IdenticalPatterns(p) => {
                write!(f, "patterns cannot have the same value: {}", p)
            }
            SimCoreError::Divergence { budget } => {
                write!(f, "no match within the {} flip budget", budget)
            }
            SimCoreError::SourceExhausted { drawn } => {
                write!(f, "flip source exhausted after {} flips", drawn)
            }
        }
    }
}

impl std::error::Error for SimCoreError {}
