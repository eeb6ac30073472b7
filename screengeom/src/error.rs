//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Constructor arguments do not form any of the supported shapes.
    #[error("invalid construction: {0}")]
    Construction(String),
    /// Operand of an unsupported kind.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Kind that was expected.
        expected: &'static str,
        /// Kind that was given.
        actual: &'static str,
    },
    /// Vector arity mismatch.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected number of components.
        expected: usize,
        /// Given number of components.
        actual: usize,
    },
    /// Integer index outside of `0..len`.
    #[error("index {index} is out of range for length {len}")]
    Index {
        /// Requested index.
        index: usize,
        /// Length of the indexed value.
        len: usize,
    },
    /// Value violates an invariant of the type being built.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
    /// Normalization of a vector with zero magnitude.
    #[error("cannot normalize a vector with zero magnitude")]
    DivisionByZero,
    /// Failed to encode a snapshot.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    /// Failed to decode a snapshot.
    #[error("failed to decode snapshot: {0}")]
    Decode(#[from] bincode::error::DecodeError),
    /// Error reading/writing data to the FS.
    #[error("failed to access file: {0}")]
    FsIo(#[from] std::io::Error),
}

impl GeometryError {
    pub(crate) fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    pub(crate) fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    pub(crate) fn index(index: usize, len: usize) -> Self {
        Self::Index { index, len }
    }
}
