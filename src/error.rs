//! # Errors
use crate::{Count, Index};
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ExtentError>;

/// Misuse of an extents, coordinates, or iterator value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ExtentError {
    /// A dimension was given a lower bound above its upper bound.
    #[error("invalid bounds for dimension {dim}: [{begin}, {end})")]
    InvalidBounds {
        /// The offending dimension.
        dim: usize,
        /// The inclusive lower bound.
        begin: Index,
        /// The exclusive upper bound.
        end: Index,
    },

    /// A dimension ordinal (or an index within it) fell outside the value.
    #[error("dimension {dim} out of range for {dimensions} dimensions")]
    OutOfRange {
        /// The requested dimension.
        dim: usize,
        /// The dimensionality of the value.
        dimensions: usize,
    },

    /// No coordinates remain at the given linear position.
    #[error("iterator exhausted at position {position}")]
    IteratorExhausted {
        /// The linear position that was requested.
        position: Count,
    },

    /// The product of the dimension sizes does not fit in a [`Count`].
    #[error("total element count overflows {} bits", Count::BITS)]
    TooManyElements,
}
