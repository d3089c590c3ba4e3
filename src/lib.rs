//! # Extent Tools
//!
//! Enumeration of every point in an n-dimensional rectangular index space.
//!
//! * [`Range`] - the `[begin, end)` bounds of one dimension.
//! * [`Extents`] - an ordered list of ranges; an axis-aligned box.
//! * [`Coordinates`] - one index per dimension.
//! * [`CoordinateIterator`] - visits each point of an [`Extents`] exactly
//!   once, last dimension varying fastest, so the n-th point yielded is the
//!   point at row-major linear position `n`.
//!
//! Linear positions and element counts are [`Count`]s; an [`Extents`] whose
//! total element count exceeds [`Count::MAX`] cannot be constructed.
#![warn(missing_docs)]

pub mod coords;
pub mod counters;
pub mod error;
pub mod extents;
pub mod range;

pub use coords::Coordinates;
pub use counters::CoordinateIterator;
pub use error::{ExtentError, Result};
pub use extents::Extents;
pub use range::Range;

/// A single index along one dimension.
pub type Index = i64;

/// An element count, dimension size, or linear position.
pub type Count = u64;

/// Dimensions stored inline before spilling to the heap.
pub const INLINE_DIMS: usize = 4;
