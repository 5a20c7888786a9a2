use std::iter::FusedIterator;
use std::sync::Arc;

use crate::cache;
use crate::polygon::ConvexPolygon;

/// Ascending cursor over side counts `3..=max_sides`.
///
/// Owns its own position; cursors over the same sequence never interfere.
#[derive(Clone, Debug)]
pub struct PolygonIter {
    next_sides: u64,
    max_sides: u64,
    circumradius: f64,
}

impl PolygonIter {
    pub(super) fn new(max_sides: u32, circumradius: f64) -> Self {
        Self {
            next_sides: 3,
            max_sides: u64::from(max_sides),
            circumradius,
        }
    }

    #[inline]
    fn remaining(&self) -> usize {
        (self.max_sides + 1).saturating_sub(self.next_sides) as usize
    }
}

impl Iterator for PolygonIter {
    type Item = Arc<ConvexPolygon>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_sides > self.max_sides {
            return None;
        }
        let item = cache::cached(self.next_sides as u32, self.circumradius);
        self.next_sides += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for PolygonIter {}
impl FusedIterator for PolygonIter {}
