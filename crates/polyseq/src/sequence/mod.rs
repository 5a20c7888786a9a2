//! Lazy, memoized sequence of regular polygons sharing one circumradius.
//!
//! Purpose
//! - Index, slice and iterate polygons with side counts `3..=max_sides` without
//!   materializing them up front. Every element comes from the shared cache
//!   (`cache::polygonator`), so all access patterns return the same polygons.
//!
//! Indexing
//! - `get_at(i)`: negative `i` counts from the end; out of range is an index error.
//! - `get_range(start, stop, step)`: standard slice normalization (`slice::normalize`),
//!   eagerly collected. Negative `step` gives reverse order.
//!
//! Iteration
//! - `iterate()` returns a fresh ascending cursor each call.

pub mod slice;

mod iter;

use std::fmt;
use std::sync::Arc;

pub use iter::PolygonIter;

use crate::cache;
use crate::error::SequenceError;
use crate::number::Number;
use crate::polygon::{check_circumradius, ConvexPolygon};

/// Immutable `(max_sides, circumradius)` pair viewed as a sequence of polygons.
#[derive(Clone, Copy, PartialEq)]
pub struct PolygonSequence {
    max_sides: u32,
    circumradius: f64,
}

impl PolygonSequence {
    /// Both arguments must be real scalars; `max_sides` must be an integer `>= 3`.
    pub fn new(
        max_sides: impl Into<Number>,
        circumradius: impl Into<Number>,
    ) -> Result<Self, SequenceError> {
        let max_sides = max_sides.into().as_count("max_sides");
        let circumradius = circumradius.into().as_real("circumradius");
        let (max_sides, circumradius) = (max_sides?, circumradius?);
        if max_sides < 3 {
            return Err(SequenceError::invalid_value(format!(
                "minimum number of sides should be 3 (max_sides={max_sides})"
            )));
        }
        let max_sides = u32::try_from(max_sides).map_err(|_| {
            SequenceError::invalid_value(format!("max_sides={max_sides} is too large"))
        })?;
        check_circumradius(circumradius)?;
        tracing::debug!(max_sides, circumradius, "polygon sequence");
        Ok(Self {
            max_sides,
            circumradius,
        })
    }

    #[inline]
    pub fn max_sides(&self) -> u32 {
        self.max_sides
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Number of side counts covered: `max_sides - 3 + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        (self.max_sides - 2) as usize
    }

    /// Always false; a sequence holds at least the triangle.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Polygon at offset `index` (side count `index + 3`).
    pub fn get_at(&self, index: isize) -> Result<Arc<ConvexPolygon>, SequenceError> {
        let len = self.len() as isize;
        let offset = if index < 0 { index + len } else { index };
        if offset < 0 || offset >= len {
            return Err(SequenceError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.at_offset(offset))
    }

    /// Polygons selected by a slice, in slice order.
    pub fn get_range(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
    ) -> Result<Vec<Arc<ConvexPolygon>>, SequenceError> {
        let indices = slice::normalize(self.len(), start, stop, step)?;
        Ok(indices.iter().map(|offset| self.at_offset(offset)).collect())
    }

    /// Fresh ascending cursor starting at the triangle.
    #[inline]
    pub fn iterate(&self) -> PolygonIter {
        PolygonIter::new(self.max_sides, self.circumradius)
    }

    /// Polygon with the largest `area / perimeter`; the first one wins ties.
    ///
    /// Linear in `len()`: every polygon of the sequence is looked up.
    pub fn max_efficiency_polygon(&self) -> Arc<ConvexPolygon> {
        // len() >= 1, so the cursor always yields at least the triangle.
        most_efficient(self.iterate()).unwrap_or_else(|| self.at_offset(0))
    }

    #[inline]
    fn at_offset(&self, offset: isize) -> Arc<ConvexPolygon> {
        debug_assert!(offset >= 0 && (offset as usize) < self.len());
        cache::cached(offset as u32 + 3, self.circumradius)
    }
}

#[inline]
fn ratio(p: &ConvexPolygon) -> f64 {
    p.area() / p.perimeter()
}

/// Single pass over `polys`; a later polygon replaces the best only on a strictly larger ratio.
fn most_efficient<I>(polys: I) -> Option<Arc<ConvexPolygon>>
where
    I: IntoIterator<Item = Arc<ConvexPolygon>>,
{
    polys
        .into_iter()
        .map(|p| {
            let r = ratio(&p);
            (p, r)
        })
        .reduce(|best, next| if next.1 > best.1 { next } else { best })
        .map(|(p, _)| p)
}

impl<'a> IntoIterator for &'a PolygonSequence {
    type Item = Arc<ConvexPolygon>;
    type IntoIter = PolygonIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iterate()
    }
}

impl fmt::Display for PolygonSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PolygonSequence(max_sides={}, circumradius={}, len={})",
            self.max_sides,
            self.circumradius,
            self.len()
        )
    }
}

impl fmt::Debug for PolygonSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolygonSequence")
            .field("max_sides", &self.max_sides)
            .field("circumradius", &self.circumradius)
            .field("len", &self.len())
            .finish()
    }
}
