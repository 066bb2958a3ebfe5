//! Diagnostic-side failures.
//!
//! Both variants are internal-contract violations rather than user errors:
//! a well-formed log covers every line of the text it was recorded for, and
//! a successful resolution never yields an empty chain.

use std::fmt;

/// Why an include-trace query failed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TraceError {
    /// No event in the log covers the requested flattened line, or the
    /// line is 0 (lines are 1-based).
    TargetNotFound {
        /// The flattened line that was asked about.
        target: u32,
    },
    /// A provenance chain with no entries cannot be rendered.
    EmptyChain,
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::TargetNotFound { target } => {
                write!(f, "target line number {target} not found")
            }
            TraceError::EmptyChain => write!(f, "cannot render an empty provenance chain"),
        }
    }
}

impl std::error::Error for TraceError {}
