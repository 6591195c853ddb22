//! Construction of the tabulated Hilbert curve and its lookup surface.

use std::slice;

use crate::{
    coord::Coord,
    error::{Error, Result},
};

/// Largest order accepted by [`HilbertCurve::new`].
///
/// At order 16 a 2D curve has `2^32` cells, past the index range we support;
/// the two tables also stop being practical to hold in memory well before
/// that. Checked before any allocation.
pub const MAX_ORDER: u32 = 15;

/// A fully tabulated 2D Hilbert curve over a `2^order × 2^order` grid.
///
/// Built once by [`HilbertCurve::new`] and immutable afterwards. Holds the
/// complete visiting order and its inverse, so both directions of the
/// index ↔ coordinate bijection are O(1) reads.
#[derive(Debug, Clone)]
pub struct HilbertCurve {
    /// Recursion depth of the subdivision.
    order: u32,
    /// Side length of the grid, `2^order`.
    width: usize,
    /// Cell visited at each step, in visiting order.
    coordinates: Vec<Coord>,
    /// Visiting step for each cell, keyed by `x + y * width`.
    indices: Vec<usize>,
}

/// Mutable construction state threaded through the recursive subdivision:
/// the cursor, the running index, and the two tables being filled.
struct Walker {
    /// Side length of the grid being walked.
    width: usize,
    /// Cell the walk currently stands on.
    cursor: Coord,
    /// Number of cells recorded so far.
    index: usize,
    /// Forward table under construction.
    coordinates: Vec<Coord>,
    /// Inverse table under construction.
    indices: Vec<usize>,
}

impl Walker {
    /// Set up a walk over a `width × width` grid.
    ///
    /// The cursor starts one cell left of the origin so that the seed
    /// `step(0)` lands on `(0, 0)` at index 0.
    fn new(width: usize) -> Self {
        let cells = width * width;
        Self {
            width,
            cursor: Coord::new(-1, 0),
            index: 0,
            coordinates: vec![Coord::default(); cells],
            indices: vec![0; cells],
        }
    }

    /// Move the cursor one cell along `direction` and record the visit in
    /// both tables.
    ///
    /// Headings are taken modulo 4: 0 = +x, 1 = +y, 2 = −x, 3 = −y. The
    /// masking handles the negative directions the subdivision produces.
    fn step(&mut self, direction: i32) {
        self.cursor = self.cursor
            + match direction & 3 {
                0 => Coord::new(1, 0),
                1 => Coord::new(0, 1),
                2 => Coord::new(-1, 0),
                _ => Coord::new(0, -1),
            };
        self.coordinates[self.index] = self.cursor;
        self.indices[self.cursor.x as usize + self.cursor.y as usize * self.width] = self.index;
        self.index += 1;
    }

    /// Recursive quadrant subdivision.
    ///
    /// `rotation` (±1) selects the handedness of the sub-pattern; the exact
    /// call order — four recursions interleaved with three steps, with the
    /// handedness flipped for the first and last — is what produces the
    /// Hilbert folding, and must not be reordered.
    fn subdivide(&mut self, mut direction: i32, rotation: i32, order: u32) {
        if order == 0 {
            return;
        }
        let order = order - 1;

        direction += rotation;

        self.subdivide(direction, -rotation, order);
        self.step(direction);

        direction -= rotation;

        self.subdivide(direction, rotation, order);
        self.step(direction);
        self.subdivide(direction, rotation, order);

        direction -= rotation;

        self.step(direction);
        self.subdivide(direction, -rotation, order);
    }
}

impl HilbertCurve {
    /// Build the curve of the given order, visiting all `4^order` cells.
    ///
    /// The walk is seeded at `(0, 0)` heading +x, then subdivided
    /// recursively; the same order always yields the identical sequence.
    /// Orders above [`MAX_ORDER`] report [`Error::InvalidOrder`] before
    /// anything is allocated.
    pub fn new(order: u32) -> Result<Self> {
        if order > MAX_ORDER {
            return Err(Error::InvalidOrder {
                order,
                max: MAX_ORDER,
            });
        }

        let width = 1usize << order;
        let mut walker = Walker::new(width);
        walker.step(0);
        walker.subdivide(0, 1, order);
        debug_assert_eq!(walker.index, width * width, "walk must cover the grid");

        Ok(Self {
            order,
            width,
            coordinates: walker.coordinates,
            indices: walker.indices,
        })
    }

    /// Total number of cells on the curve, `width²`.
    pub fn size(&self) -> usize {
        self.coordinates.len()
    }

    /// Side length of the grid, `2^order`.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Recursion depth the curve was built with.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Cell visited at step `index`.
    pub fn coordinate_at(&self, index: usize) -> Result<Coord> {
        self.coordinates
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Visiting step for the cell `(x, y)`.
    ///
    /// Both components must lie in `[0, width)`.
    pub fn index_at(&self, x: i64, y: i64) -> Result<usize> {
        let w = self.width as i64;
        if x < 0 || y < 0 || x >= w || y >= w {
            return Err(Error::CoordinateOutOfRange {
                x,
                y,
                width: self.width,
            });
        }
        Ok(self.indices[x as usize + y as usize * self.width])
    }

    /// Visiting step for a cell given by its linearized key `x + y * width`.
    pub fn index_at_key(&self, key: usize) -> Result<usize> {
        self.indices
            .get(key)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index: key,
                size: self.size(),
            })
    }

    /// The full visiting order as a read-only slice, no copy.
    pub fn coordinates(&self) -> &[Coord] {
        &self.coordinates
    }

    /// The inverse table as a read-only slice, keyed by `x + y * width`.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Iterate over the cells in visiting order.
    ///
    /// The iterator is double-ended; use `rev()` to walk the curve
    /// backwards.
    pub fn iter(&self) -> slice::Iter<'_, Coord> {
        self.coordinates.iter()
    }

    /// Consume the curve, yielding the visiting order as a flat vector.
    pub fn into_coordinates(self) -> Vec<Coord> {
        self.coordinates
    }

    /// Consume the curve, yielding the inverse table as a flat vector.
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

impl<'a> IntoIterator for &'a HilbertCurve {
    type Item = &'a Coord;
    type IntoIter = slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() -> Result<()> {
        let curve = HilbertCurve::new(3)?;
        assert_eq!(curve.order(), 3);
        assert_eq!(curve.width(), 8);
        assert_eq!(curve.size(), 64);
        assert_eq!(curve.coordinates().len(), 64);
        assert_eq!(curve.indices().len(), 64);
        Ok(())
    }

    #[test]
    fn order_zero_is_the_origin() -> Result<()> {
        let curve = HilbertCurve::new(0)?;
        assert_eq!(curve.size(), 1);
        assert_eq!(curve.coordinate_at(0)?, Coord::new(0, 0));
        assert_eq!(curve.index_at(0, 0)?, 0);
        Ok(())
    }

    #[test]
    fn order_one_sequence() -> Result<()> {
        let curve = HilbertCurve::new(1)?;
        let expected = [(0, 0), (0, 1), (1, 1), (1, 0)];
        for (i, &(x, y)) in expected.iter().enumerate() {
            assert_eq!(curve.coordinate_at(i)?, Coord::new(x, y));
        }
        Ok(())
    }

    #[test]
    fn order_two_sequence() -> Result<()> {
        // Fixes the exact handedness: bijection and adjacency alone would
        // also hold for mirrored walks.
        let curve = HilbertCurve::new(2)?;
        let expected = [
            (0, 0),
            (1, 0),
            (1, 1),
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 3),
            (1, 2),
            (2, 2),
            (2, 3),
            (3, 3),
            (3, 2),
            (3, 1),
            (2, 1),
            (2, 0),
            (3, 0),
        ];
        for (i, &(x, y)) in expected.iter().enumerate() {
            assert_eq!(curve.coordinate_at(i)?, Coord::new(x, y));
            assert_eq!(curve.index_at(x, y)?, i);
        }
        Ok(())
    }

    #[test]
    fn rejects_oversized_order() {
        assert_eq!(
            HilbertCurve::new(MAX_ORDER + 1).err(),
            Some(Error::InvalidOrder {
                order: MAX_ORDER + 1,
                max: MAX_ORDER
            })
        );
        assert!(HilbertCurve::new(u32::MAX).is_err());
    }

    #[test]
    fn out_of_range_lookups() -> Result<()> {
        let curve = HilbertCurve::new(2)?;
        assert_eq!(
            curve.coordinate_at(16),
            Err(Error::IndexOutOfRange {
                index: 16,
                size: 16
            })
        );
        assert_eq!(
            curve.index_at(-1, 0),
            Err(Error::CoordinateOutOfRange {
                x: -1,
                y: 0,
                width: 4
            })
        );
        assert_eq!(
            curve.index_at(0, 4),
            Err(Error::CoordinateOutOfRange {
                x: 0,
                y: 4,
                width: 4
            })
        );
        assert_eq!(
            curve.index_at_key(16),
            Err(Error::IndexOutOfRange {
                index: 16,
                size: 16
            })
        );
        Ok(())
    }

    #[test]
    fn key_lookup_matches_component_lookup() -> Result<()> {
        let curve = HilbertCurve::new(3)?;
        for y in 0..8i64 {
            for x in 0..8i64 {
                let key = x as usize + y as usize * curve.width();
                assert_eq!(curve.index_at(x, y)?, curve.index_at_key(key)?);
            }
        }
        Ok(())
    }

    #[test]
    fn reverse_iteration() -> Result<()> {
        let curve = HilbertCurve::new(1)?;
        let backwards: Vec<Coord> = curve.iter().rev().copied().collect();
        assert_eq!(
            backwards,
            vec![
                Coord::new(1, 0),
                Coord::new(1, 1),
                Coord::new(0, 1),
                Coord::new(0, 0)
            ]
        );
        Ok(())
    }

    #[test]
    fn into_parts() -> Result<()> {
        let curve = HilbertCurve::new(2)?;
        let coords = curve.clone().into_coordinates();
        let indices = curve.into_indices();
        assert_eq!(coords.len(), 16);
        assert_eq!(indices.len(), 16);
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(indices[0], 0);
        Ok(())
    }
}
