//! Errors raised while reading or writing tabulated functions.

use std::fmt;

use thiserror::Error;

use crate::error::TabulatedError;

/// Failure of a serialization routine.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// The underlying stream failed (including an unexpected end of input).
    #[error("IO error{context}: {source}")]
    Io {
        context: ErrorContext,
        #[source]
        source: std::io::Error,
    },

    /// The input is readable but not a valid encoding.
    #[error("Format error{context}: {message}")]
    Format {
        context: ErrorContext,
        message: String,
    },

    /// The decoded points do not form a valid tabulated function.
    #[error("Invalid tabulated function: {0}")]
    Construction(#[from] TabulatedError),
}

impl SerializationError {
    pub(crate) fn io(context: ErrorContext, source: std::io::Error) -> Self {
        SerializationError::Io { context, source }
    }

    pub(crate) fn format<S: Into<String>>(context: ErrorContext, message: S) -> Self {
        SerializationError::Format {
            context,
            message: message.into(),
        }
    }

    /// Where the failure happened, if it happened inside the stream.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            SerializationError::Io { context, .. } | SerializationError::Format { context, .. } => {
                Some(context)
            }
            SerializationError::Construction(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
}

/// The value being encoded or decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Count,
    X,
    Y,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Count => write!(f, "count"),
            Field::X => write!(f, "x"),
            Field::Y => write!(f, "y"),
        }
    }
}

/// Position in a stream at which an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorContext {
    pub operation: Operation,
    /// Point index, absent for the count header.
    pub index: Option<usize>,
    pub field: Option<Field>,
}

impl ErrorContext {
    pub fn new(operation: Operation) -> Self {
        ErrorContext {
            operation,
            index: None,
            field: None,
        }
    }

    pub fn count(operation: Operation) -> Self {
        ErrorContext::new(operation).with_field(Field::Count)
    }

    pub fn point(operation: Operation, index: usize, field: Field) -> Self {
        ErrorContext::new(operation)
            .with_index(index)
            .with_field(field)
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operation {
            Operation::Read => write!(f, " while reading")?,
            Operation::Write => write!(f, " while writing")?,
        }
        if let Some(field) = self.field {
            write!(f, " {}", field)?;
        }
        if let Some(index) = self.index {
            write!(f, " of point {}", index)?;
        }
        Ok(())
    }
}
