//! Error taxonomy for query operators.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QueryError>;

/// Structured errors emitted by query operators.
///
/// Failures are local to a single operator invocation: they are never
/// retried or swallowed, and the engine instance stays inspectable and
/// reusable after a failing call. Callers who want a sentinel value instead
/// of a failure should use the `Option`-returning `..._or_default` family.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// An operator that requires at least one element ran on an empty
    /// (optionally filtered) sequence.
    #[error("{op} requires a non-empty sequence")]
    EmptySequence {
        /// Operator that observed the empty sequence.
        op: &'static str,
    },
    /// `single` matched more than one element.
    #[error("{op} expected exactly one matching element (found {found})")]
    MultipleElements {
        /// Operator that detected the cardinality violation.
        op: &'static str,
        /// Number of matching elements observed.
        found: usize,
    },
    /// `element_at` was asked for a position past the end of the sequence.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// Requested zero-based position.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
    /// The operator requires a source sequence, but the engine was
    /// constructed without one (absent, as opposed to merely empty).
    #[error("{op} requires a source sequence (source is absent)")]
    AbsentSource {
        /// Operator that required the source.
        op: &'static str,
    },
}

impl QueryError {
    /// Builds an [`QueryError::EmptySequence`] for a specific operator.
    pub fn empty(op: &'static str) -> Self {
        QueryError::EmptySequence { op }
    }

    /// Builds an [`QueryError::AbsentSource`] for a specific operator.
    pub fn absent(op: &'static str) -> Self {
        QueryError::AbsentSource { op }
    }

    /// Returns a machine-readable code for the error variant.
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::EmptySequence { .. } => "EmptySequence",
            QueryError::MultipleElements { .. } => "MultipleElements",
            QueryError::IndexOutOfRange { .. } => "IndexOutOfRange",
            QueryError::AbsentSource { .. } => "AbsentSource",
        }
    }
}
