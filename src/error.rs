//! Errors raised during table construction and export.

use std::fmt;

use crate::document::DocumentError;
use crate::gate::Gate;

/// Error type for table construction and evaluation.
///
/// Every variant carries the offending name or index. All variants are
/// fatal: construction aborts with no partial result.
#[derive(Debug)]
pub enum Error {
    /// Stored-column position outside `1..=total`.
    InvalidColumnIndex { index: usize, total: usize },
    /// An operation referenced a column name absent from the index.
    UnresolvedReference { name: String },
    /// A gate was given an operand count it cannot evaluate.
    InvalidOperandCount { gate: Gate, count: usize },
    /// A column label was registered twice.
    DuplicateColumn { name: String },
    /// An empty name in a delimiter-separated specification.
    InvalidName { spec: String },
    /// A gate name that does not parse.
    UnknownGate { name: String },
    /// A document backend failure during a combined build-and-save call.
    Document(DocumentError),
}

impl From<DocumentError> for Error {
    fn from(e: DocumentError) -> Self {
        Error::Document(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidColumnIndex { index, total } => {
                write!(
                    f,
                    "Column index {} is out of range 1..={} input columns",
                    index, total
                )
            }
            Error::UnresolvedReference { name } => {
                write!(f, "Reference to undeclared column {:?}", name)
            }
            Error::InvalidOperandCount { gate, count } => {
                if gate.is_unary() {
                    write!(f, "{} takes exactly 1 operand, got {}", gate, count)
                } else {
                    write!(f, "{} requires at least 1 operand, got {}", gate, count)
                }
            }
            Error::DuplicateColumn { name } => {
                write!(f, "Column {:?} is already registered", name)
            }
            Error::InvalidName { spec } => {
                write!(f, "Empty column name in specification {:?}", spec)
            }
            Error::UnknownGate { name } => {
                write!(f, "Unknown gate {:?}", name)
            }
            Error::Document(e) => {
                write!(f, "Document error: {}", e)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Document(e) => Some(e),
            _ => None,
        }
    }
}
