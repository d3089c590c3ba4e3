//! # `Range`
use crate::error::{ExtentError, Result};
use crate::{Count, Index};
use std::fmt;

/// The half-open `[begin, end)` bounds of a single dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Range {
    /// The start of the range; inclusive (if non-empty).
    begin: Index,

    /// The end of the range; exclusive.
    end: Index,
}

impl Range {
    /// Create a new range.
    ///
    /// Fails with [`ExtentError::InvalidBounds`] (reported as dimension 0)
    /// if `begin > end`.
    pub fn new(begin: Index, end: Index) -> Result<Self> {
        Self::checked(0, begin, end)
    }

    /// Validate bounds on behalf of the given dimension.
    pub(crate) fn checked(dim: usize, begin: Index, end: Index) -> Result<Self> {
        if begin > end {
            return Err(ExtentError::InvalidBounds { dim, begin, end });
        }
        Ok(Self { begin, end })
    }

    /// The range `[0, size)`.
    pub fn with_size(size: Index) -> Result<Self> {
        Self::new(0, size)
    }

    /// The start of the range; inclusive (if non-empty).
    pub fn begin(&self) -> Index {
        self.begin
    }

    /// The end of the range; exclusive.
    pub fn end(&self) -> Index {
        self.end
    }

    /// The number of indices in the range.
    pub fn size(&self) -> Count {
        self.end.abs_diff(self.begin)
    }

    /// Whether the range is empty.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Whether `index` lies in `[begin, end)`.
    pub fn contains(&self, index: Index) -> bool {
        self.begin <= index && index < self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        let r = Range::new(-2, 3).unwrap();

        assert_eq!(r.begin(), -2);
        assert_eq!(r.end(), 3);
        assert_eq!(r.size(), 5);
        assert!(!r.is_empty());

        assert!(r.contains(-2));
        assert!(r.contains(2));
        assert!(!r.contains(3));
        assert!(!r.contains(-3));

        assert_eq!(r.to_string(), "[-2, 3)");
    }

    #[test]
    fn test_empty_range() {
        let r = Range::new(4, 4).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.size(), 0);
        assert!(!r.contains(4));

        assert_eq!(Range::default(), Range::with_size(0).unwrap());
    }

    #[test]
    fn test_invalid_range() {
        assert_eq!(
            Range::new(3, 1),
            Err(ExtentError::InvalidBounds {
                dim: 0,
                begin: 3,
                end: 1
            })
        );
        assert!(Range::with_size(-1).is_err());
    }

    #[test]
    fn test_extreme_size() {
        let r = Range::new(Index::MIN, Index::MAX).unwrap();
        assert_eq!(r.size(), Count::MAX);
    }
}
