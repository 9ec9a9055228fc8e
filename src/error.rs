//! Error types for tabulated function construction, queries and mutation.

use thiserror::Error;

/// Errors raised by tabulated functions, factories, tabulation and integration.
///
/// Every validation failure is reported synchronously through this type;
/// nothing is clamped or retried.
#[derive(Debug, Error)]
pub enum TabulatedError {
    /// Bad constructor bounds, undersized inputs or invalid numeric parameters.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A requested interval is not contained in the source function's domain.
    #[error(
        "Interval [{left}, {right}] lies outside the function domain [{domain_left}, {domain_right}]"
    )]
    OutsideDomain {
        left: f64,
        right: f64,
        domain_left: f64,
        domain_right: f64,
    },

    /// Point index outside the valid range.
    #[error("Point index {index} is out of bounds for {count} points")]
    IndexOutOfBounds { index: usize, count: usize },

    /// A point would break the strict ordering of x-values or duplicate an
    /// existing x-value.
    #[error("Inappropriate point with x = {x}: {reason}")]
    InappropriatePoint { x: f64, reason: String },

    /// The operation is not allowed in the current state (e.g. deleting from
    /// a function that is already at its minimum size).
    #[error("Illegal state: {0}")]
    IllegalState(String),

    /// Type-directed construction could not produce the requested storage.
    #[error("Configuration error for storage '{kind}': {message}")]
    Configuration {
        kind: String,
        message: String,
        #[source]
        source: Option<Box<TabulatedError>>,
    },
}

impl TabulatedError {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        TabulatedError::InvalidArgument(message.into())
    }

    pub fn inappropriate_point<S: Into<String>>(x: f64, reason: S) -> Self {
        TabulatedError::InappropriatePoint {
            x,
            reason: reason.into(),
        }
    }

    pub fn illegal_state<S: Into<String>>(message: S) -> Self {
        TabulatedError::IllegalState(message.into())
    }

    pub fn index_out_of_bounds(index: usize, count: usize) -> Self {
        TabulatedError::IndexOutOfBounds { index, count }
    }
}
