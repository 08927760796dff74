//! Error types for tessera-constrained
//!
//! Only recoverable failures live here. A predicate failing under the
//! asserting verifier is a precheck violation, not an error value.

use thiserror::Error;

/// Recoverable constraint failures.
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// A value was rejected by its constraint.
    #[error("value violates constraint `{constraint}`")]
    Violated {
        /// Diagnostic name of the failing constraint.
        constraint: String,
    },

    /// An interval was built with its lower bound above its upper bound.
    #[error("invalid interval: lower bound {lower} is greater than upper bound {upper}")]
    InvalidInterval {
        /// The lower bound, formatted with `Debug`.
        lower: String,
        /// The upper bound, formatted with `Debug`.
        upper: String,
    },
}

impl ConstraintError {
    /// Creates a [`ConstraintError::Violated`] for the named constraint.
    pub fn violated(constraint: impl Into<String>) -> Self {
        Self::Violated {
            constraint: constraint.into(),
        }
    }

    /// Short, stable code for categorization.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Violated { .. } => "CONSTRAINT:VIOLATED",
            Self::InvalidInterval { .. } => "CONSTRAINT:INTERVAL",
        }
    }
}

/// Result alias for fallible constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;
