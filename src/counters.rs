//! # Counters
use crate::coords::Coordinates;
use crate::error::{ExtentError, Result};
use crate::extents::Extents;
use crate::Count;
use std::iter::FusedIterator;

/// Cursor over every point of an [`Extents`], in odometer order.
///
/// Points are visited by linear position `0..total`, with the last
/// dimension varying fastest; the n-th point yielded is
/// `extents.coordinates_at(n)`.
///
/// ```
/// use extent_tools::{CoordinateIterator, Extents};
///
/// let mut it = CoordinateIterator::default();
/// it.set_extents(Extents::from_sizes(&[2, 3])?);
///
/// let mut seen = Vec::new();
/// while it.has_next() {
///     seen.push(it.next_coordinates()?.to_string());
/// }
/// assert_eq!(seen, ["0,0", "0,1", "0,2", "1,0", "1,1", "1,2"]);
/// # Ok::<(), extent_tools::ExtentError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CoordinateIterator {
    extents: Extents,

    /// The linear position of the next point.
    current: Count,

    /// One past the last linear position.
    end: Count,
}

impl CoordinateIterator {
    /// Create an iterator positioned at the first point of `extents`.
    pub fn new(extents: Extents) -> Self {
        let mut it = Self::default();
        it.set_extents(extents);
        it
    }

    /// Bind new extents and restart from the first point.
    pub fn set_extents(&mut self, extents: Extents) {
        log::trace!(
            "iterating {} dims over {extents} ({} points)",
            extents.dimensions(),
            extents.total_count()
        );
        self.current = 0;
        self.end = extents.total_count();
        self.extents = extents;
    }

    /// The bound extents.
    pub fn extents(&self) -> &Extents {
        &self.extents
    }

    /// The linear position of the next point.
    pub fn position(&self) -> Count {
        self.current
    }

    /// One past the last linear position.
    pub fn end_position(&self) -> Count {
        self.end
    }

    /// The number of points not yet visited.
    pub fn remaining(&self) -> Count {
        self.end - self.current
    }

    /// Whether any points remain.
    pub fn has_next(&self) -> bool {
        self.current < self.end
    }

    /// Return the next point and advance.
    ///
    /// Fails with [`ExtentError::IteratorExhausted`] once every point
    /// has been visited; the iterator is left exhausted.
    pub fn next_coordinates(&mut self) -> Result<Coordinates> {
        if !self.has_next() {
            log::debug!("next called on exhausted iterator over {}", self.extents);
            return Err(ExtentError::IteratorExhausted {
                position: self.current,
            });
        }
        let coords = self.extents.coordinates_at(self.current)?;
        self.current += 1;
        Ok(coords)
    }
}

impl Iterator for CoordinateIterator {
    type Item = Coordinates;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        self.next_coordinates().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for CoordinateIterator {}

impl FusedIterator for CoordinateIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(it: &mut CoordinateIterator) -> Vec<Vec<i64>> {
        let mut points = Vec::new();
        while it.has_next() {
            points.push(it.next_coordinates().unwrap().as_slice().to_vec());
        }
        points
    }

    #[test]
    fn test_odometer_order() {
        let mut it = CoordinateIterator::new(Extents::from_sizes(&[2, 3]).unwrap());

        assert_eq!(
            drain(&mut it),
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2]
            ]
        );
        assert!(!it.has_next());
        assert_eq!(it.position(), 6);
    }

    #[test]
    fn test_offset_bounds() {
        let extents = Extents::from_bounds(&[(1, 3), (-1, 1)]).unwrap();
        let it = CoordinateIterator::new(extents);

        let points: Vec<String> = it.map(|c| c.to_string()).collect();
        assert_eq!(points, vec!["1,-1", "1,0", "2,-1", "2,0"]);
    }

    #[test]
    fn test_default_is_exhausted() {
        let mut it = CoordinateIterator::default();

        assert!(!it.has_next());
        assert_eq!(it.end_position(), 0);
        assert_eq!(
            it.next_coordinates(),
            Err(ExtentError::IteratorExhausted { position: 0 })
        );
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_zero_dimensions() {
        let mut it = CoordinateIterator::new(Extents::default());

        assert_eq!(it.end_position(), 1);
        assert!(it.has_next());
        assert_eq!(it.next_coordinates(), Ok(Coordinates::default()));
        assert!(!it.has_next());
    }

    #[test]
    fn test_empty_dimension() {
        let mut it = CoordinateIterator::new(Extents::from_sizes(&[4, 0, 2]).unwrap());

        assert!(!it.has_next());
        assert_eq!(it.len(), 0);
        assert!(it.next_coordinates().is_err());
    }

    #[test]
    fn test_unit_extents() {
        let mut it = CoordinateIterator::new(Extents::from_sizes(&[1, 1]).unwrap());

        assert_eq!(drain(&mut it), vec![vec![0, 0]]);
        assert_eq!(
            it.next_coordinates(),
            Err(ExtentError::IteratorExhausted { position: 1 })
        );
        // Stays exhausted.
        assert_eq!(it.position(), 1);
        assert!(!it.has_next());
    }

    #[test]
    fn test_reuse() {
        let mut it = CoordinateIterator::new(Extents::from_sizes(&[3]).unwrap());
        it.next_coordinates().unwrap();

        it.set_extents(Extents::from_sizes(&[1, 2]).unwrap());
        assert_eq!(it.position(), 0);
        assert_eq!(it.end_position(), 2);
        assert_eq!(drain(&mut it), vec![vec![0, 0], vec![0, 1]]);

        it.set_extents(Extents::from_sizes(&[1, 2]).unwrap());
        assert_eq!(drain(&mut it), vec![vec![0, 0], vec![0, 1]]);
    }

    #[test]
    fn test_returned_coordinates_are_detached() {
        let mut it = CoordinateIterator::new(Extents::from_sizes(&[2, 2]).unwrap());

        let mut first = it.next_coordinates().unwrap();
        first[1] = 99;

        assert_eq!(it.next_coordinates(), Ok(Coordinates::from([0, 1])));
        assert_eq!(it.remaining(), 2);
    }

    #[test]
    fn test_size_hint() {
        let mut it = CoordinateIterator::new(Extents::from_sizes(&[2, 3, 4]).unwrap());
        assert_eq!(it.len(), 24);
        it.next();
        assert_eq!(it.size_hint(), (23, Some(23)));
        assert_eq!(it.count(), 23);
    }
}
