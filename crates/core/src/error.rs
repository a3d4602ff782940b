//! Error types for the classics crates.

use alloc::string::String;
use core::fmt;

/// Result type alias for classics operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for classics operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A parameter is outside its valid domain.
    InvalidParameter {
        name: &'static str,
        message: String,
    },
    /// Attempted to insert a key that is already present.
    DuplicateKey,
    /// A structural invariant does not hold.
    InvalidStructure {
        message: String,
    },
    /// A vertex id is not below the vertex count.
    VertexOutOfRange {
        vertex: usize,
        vertex_count: usize,
    },
    /// A negative-weight cycle is reachable from the source.
    NegativeCycle,
    /// A position is not below the length of the input.
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter { name, message } => {
                write!(f, "Invalid parameter {}: {}", name, message)
            }
            Error::DuplicateKey => write!(f, "Duplicate key"),
            Error::InvalidStructure { message } => {
                write!(f, "Invalid structure: {}", message)
            }
            Error::VertexOutOfRange {
                vertex,
                vertex_count,
            } => {
                write!(
                    f,
                    "Vertex {} out of range for a graph with {} vertices",
                    vertex, vertex_count
                )
            }
            Error::NegativeCycle => write!(f, "Graph contains negative weight cycle"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for length {}", index, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Error::InvalidStructure {
            message: message.into(),
        }
    }

    /// Creates a vertex out of range error.
    pub fn vertex_out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Error::VertexOutOfRange {
            vertex,
            vertex_count,
        }
    }

    /// Creates an index out of range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }
}
