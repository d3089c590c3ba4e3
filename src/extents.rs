//! # `Extents`
use crate::coords::Coordinates;
use crate::error::{ExtentError, Result};
use crate::range::Range;
use crate::{Count, Index, INLINE_DIMS};
use smallvec::SmallVec;
use std::fmt;

/// An axis-aligned dense box of points in n-dimensional index space.
///
/// Each dimension is a half-open [`Range`]. The total element count is
/// computed once at construction and must fit in a [`Count`]; a
/// zero-dimensional extents holds exactly one (empty) point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extents {
    ranges: SmallVec<[Range; INLINE_DIMS]>,

    /// Product of the dimension sizes.
    total: Count,
}

impl Default for Extents {
    fn default() -> Self {
        Self {
            ranges: SmallVec::new(),
            total: 1,
        }
    }
}

fn total_count(ranges: &[Range]) -> Result<Count> {
    if ranges.iter().any(Range::is_empty) {
        return Ok(0);
    }
    ranges
        .iter()
        .try_fold(1 as Count, |acc, r| acc.checked_mul(r.size()))
        .ok_or(ExtentError::TooManyElements)
}

impl Extents {
    /// Create extents from already-validated ranges.
    pub fn from_ranges(ranges: impl IntoIterator<Item = Range>) -> Result<Self> {
        let ranges: SmallVec<[Range; INLINE_DIMS]> = ranges.into_iter().collect();
        let total = total_count(&ranges)?;
        Ok(Self { ranges, total })
    }

    /// Create extents from `(lower, upper)` pairs; lower inclusive, upper exclusive.
    pub fn from_bounds(bounds: &[(Index, Index)]) -> Result<Self> {
        let ranges = bounds
            .iter()
            .enumerate()
            .map(|(dim, &(begin, end))| Range::checked(dim, begin, end))
            .collect::<Result<SmallVec<[Range; INLINE_DIMS]>>>()?;
        Self::from_ranges(ranges)
    }

    /// Create zero-based extents from per-dimension sizes.
    pub fn from_sizes(sizes: &[Index]) -> Result<Self> {
        let ranges = sizes
            .iter()
            .enumerate()
            .map(|(dim, &size)| Range::checked(dim, 0, size))
            .collect::<Result<SmallVec<[Range; INLINE_DIMS]>>>()?;
        Self::from_ranges(ranges)
    }

    /// Create `dimensions` zero-based dimensions, each of the same `size`.
    pub fn uniform(dimensions: usize, size: Index) -> Result<Self> {
        Self::from_sizes(&vec![size; dimensions])
    }

    /// Add a trailing dimension.
    ///
    /// On overflow of the total count, `self` is left unchanged.
    pub fn append(&mut self, range: Range) -> Result<()> {
        self.ranges.push(range);
        match total_count(&self.ranges) {
            Ok(total) => {
                self.total = total;
                Ok(())
            }
            Err(err) => {
                self.ranges.pop();
                Err(err)
            }
        }
    }

    /// The number of dimensions.
    pub fn dimensions(&self) -> usize {
        self.ranges.len()
    }

    /// The per-dimension ranges.
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    /// The range of dimension `dim`.
    pub fn range(&self, dim: usize) -> Result<Range> {
        self.ranges
            .get(dim)
            .copied()
            .ok_or(ExtentError::OutOfRange {
                dim,
                dimensions: self.dimensions(),
            })
    }

    /// The inclusive lower bound of dimension `dim`.
    pub fn lower(&self, dim: usize) -> Result<Index> {
        self.range(dim).map(|r| r.begin())
    }

    /// The exclusive upper bound of dimension `dim`.
    pub fn upper(&self, dim: usize) -> Result<Index> {
        self.range(dim).map(|r| r.end())
    }

    /// The size of dimension `dim`.
    pub fn size(&self, dim: usize) -> Result<Count> {
        self.range(dim).map(|r| r.size())
    }

    /// The number of points in the extents.
    pub fn total_count(&self) -> Count {
        self.total
    }

    /// Whether the extents contain no points.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Whether every dimension begins at zero.
    pub fn is_zero_based(&self) -> bool {
        self.ranges.iter().all(|r| r.begin() == 0)
    }

    /// Whether `other` has the same dimension sizes, ignoring offsets.
    pub fn same_shape(&self, other: &Extents) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .ranges
                .iter()
                .zip(other.ranges.iter())
                .all(|(a, b)| a.size() == b.size())
    }

    /// Whether `coords` is a point of the extents.
    pub fn contains(&self, coords: &Coordinates) -> bool {
        self.first_violation(coords).is_none()
    }

    /// The first dimension at which `coords` falls outside the extents.
    fn first_violation(&self, coords: &Coordinates) -> Option<usize> {
        let shared = self.dimensions().min(coords.dimensions());
        let outside = self
            .ranges
            .iter()
            .zip(coords.as_slice())
            .position(|(r, &i)| !r.contains(i));
        match outside {
            Some(dim) => Some(dim),
            None if self.dimensions() != coords.dimensions() => Some(shared),
            None => None,
        }
    }

    /// The point at the given linear position, last dimension varying fastest.
    ///
    /// This is a mixed-radix decomposition of `position` using the
    /// dimension sizes as radices.
    pub fn coordinates_at(&self, position: Count) -> Result<Coordinates> {
        if position >= self.total {
            return Err(ExtentError::IteratorExhausted { position });
        }

        let mut coords = Coordinates::zeros(self.dimensions());
        let mut remaining = position;
        for dim in (0..self.dimensions()).rev() {
            let range = self.ranges[dim];
            // Non-zero: a non-empty total implies every size is positive.
            let size = range.size();
            coords[dim] = range.begin().wrapping_add_unsigned(remaining % size);
            remaining /= size;
        }
        Ok(coords)
    }

    /// The linear position of `coords`; the inverse of [`Self::coordinates_at`].
    pub fn position_of(&self, coords: &Coordinates) -> Result<Count> {
        if let Some(dim) = self.first_violation(coords) {
            return Err(ExtentError::OutOfRange {
                dim,
                dimensions: self.dimensions(),
            });
        }
        Ok(self
            .ranges
            .iter()
            .zip(coords.as_slice())
            .fold(0, |acc, (r, &i)| acc * r.size() + i.abs_diff(r.begin())))
    }
}

impl fmt::Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (dim, range) in self.ranges.iter().enumerate() {
            if dim > 0 {
                f.write_str("x")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}
