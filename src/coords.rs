//! # `Coordinates`
use crate::error::{ExtentError, Result};
use crate::{Index, INLINE_DIMS};
use smallvec::SmallVec;
use std::fmt;
use std::ops;

/// One point in an n-dimensional index space; one index per dimension.
///
/// No bounds are attached; whether a value is a member of some
/// [`Extents`](crate::Extents) is checked with
/// [`Extents::contains`](crate::Extents::contains).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    indices: SmallVec<[Index; INLINE_DIMS]>,
}

impl Coordinates {
    /// Create coordinates from a list of indices.
    pub fn new(indices: impl Into<Vec<Index>>) -> Self {
        Self {
            indices: SmallVec::from_vec(indices.into()),
        }
    }

    /// The origin of an n-dimensional space.
    pub fn zeros(dimensions: usize) -> Self {
        Self {
            indices: SmallVec::from_elem(0, dimensions),
        }
    }

    /// The number of dimensions.
    pub fn dimensions(&self) -> usize {
        self.indices.len()
    }

    /// The indices, in dimension order.
    pub fn as_slice(&self) -> &[Index] {
        &self.indices
    }

    /// Get the index stored for dimension `dim`.
    pub fn get(&self, dim: usize) -> Result<Index> {
        self.indices
            .get(dim)
            .copied()
            .ok_or_else(|| self.out_of_range(dim))
    }

    /// Replace the index stored for dimension `dim`.
    pub fn set(&mut self, dim: usize, index: Index) -> Result<()> {
        let err = self.out_of_range(dim);
        let slot = self.indices.get_mut(dim).ok_or(err)?;
        *slot = index;
        Ok(())
    }

    /// Add a trailing dimension.
    pub fn append(&mut self, index: Index) {
        self.indices.push(index);
    }

    fn out_of_range(&self, dim: usize) -> ExtentError {
        ExtentError::OutOfRange {
            dim,
            dimensions: self.dimensions(),
        }
    }
}

impl From<Vec<Index>> for Coordinates {
    fn from(indices: Vec<Index>) -> Self {
        Self::new(indices)
    }
}

impl<const N: usize> From<[Index; N]> for Coordinates {
    fn from(indices: [Index; N]) -> Self {
        indices.into_iter().collect()
    }
}

impl FromIterator<Index> for Coordinates {
    fn from_iter<I: IntoIterator<Item = Index>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

impl ops::Index<usize> for Coordinates {
    type Output = Index;

    fn index(&self, dim: usize) -> &Index {
        match self.indices.get(dim) {
            Some(index) => index,
            None => panic!("{}", self.out_of_range(dim)),
        }
    }
}

impl ops::IndexMut<usize> for Coordinates {
    fn index_mut(&mut self, dim: usize) -> &mut Index {
        let err = self.out_of_range(dim);
        match self.indices.get_mut(dim) {
            Some(index) => index,
            None => panic!("{err}"),
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (dim, index) in self.indices.iter().enumerate() {
            if dim > 0 {
                f.write_str(",")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}
