//! Slice normalization against a sequence length.
//!
//! Same rules as the standard `slice.indices(len)` of ordered sequences:
//! - missing bounds default to the full range in the direction of `step`,
//! - negative bounds count from the end,
//! - out-of-range bounds are clamped, never an error,
//! - `step == 0` is rejected.

use crate::error::SequenceError;

/// Normalized `(start, stop, step)` for a sequence of a given length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceIndices {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
}

impl SliceIndices {
    /// Number of offsets the slice selects.
    pub fn len(&self) -> usize {
        // Bounds are clamped to [-1, len], so the span never overflows; the step may be isize::MIN.
        let span = if self.step > 0 && self.start < self.stop {
            self.stop - self.start
        } else if self.step < 0 && self.start > self.stop {
            self.start - self.stop
        } else {
            return 0;
        };
        (span as usize - 1) / self.step.unsigned_abs() + 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Selected offsets in slice order.
    pub fn iter(&self) -> impl Iterator<Item = isize> {
        let SliceIndices { start, step, .. } = *self;
        std::iter::successors(Some(start), move |&i| i.checked_add(step)).take(self.len())
    }
}

/// Normalize optional bounds and a step against `len`.
pub fn normalize(
    len: usize,
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
) -> Result<SliceIndices, SequenceError> {
    if step == 0 {
        return Err(SequenceError::invalid_value("slice step cannot be zero"));
    }
    let len = len as isize;
    let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
    let clamp = |bound: isize| {
        if bound < 0 {
            (bound + len).max(lower)
        } else {
            bound.min(upper)
        }
    };
    let start = match start {
        Some(s) => clamp(s),
        None if step < 0 => upper,
        None => lower,
    };
    let stop = match stop {
        Some(s) => clamp(s),
        None if step < 0 => lower,
        None => upper,
    };
    Ok(SliceIndices { start, stop, step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn offsets(len: usize, start: Option<isize>, stop: Option<isize>, step: isize) -> Vec<isize> {
        normalize(len, start, stop, step).unwrap().iter().collect()
    }

    #[test]
    fn full_ranges_both_directions() {
        assert_eq!(offsets(4, None, None, 1), vec![0, 1, 2, 3]);
        assert_eq!(offsets(4, None, None, -1), vec![3, 2, 1, 0]);
        assert_eq!(offsets(5, None, None, 2), vec![0, 2, 4]);
        assert_eq!(offsets(5, None, None, -2), vec![4, 2, 0]);
    }

    #[test]
    fn negative_and_clamped_bounds() {
        assert_eq!(offsets(8, Some(-3), None, 1), vec![5, 6, 7]);
        assert_eq!(offsets(8, Some(-100), Some(2), 1), vec![0, 1]);
        assert_eq!(offsets(8, Some(6), Some(100), 1), vec![6, 7]);
        assert_eq!(offsets(8, Some(100), Some(-100), -3), vec![7, 4, 1]);
        assert_eq!(offsets(8, Some(2), Some(-1), -1), Vec::<isize>::new());
    }

    #[test]
    fn empty_and_degenerate() {
        assert!(normalize(8, Some(5), Some(2), 1).unwrap().is_empty());
        assert!(normalize(0, None, None, -1).unwrap().is_empty());
        assert_eq!(
            normalize(8, None, None, -1).unwrap(),
            SliceIndices { start: 7, stop: -1, step: -1 }
        );
        assert!(normalize(8, None, None, 0).is_err());
    }

    #[test]
    fn extreme_steps_and_bounds() {
        assert_eq!(offsets(8, None, None, isize::MIN), vec![7]);
        assert_eq!(offsets(8, None, None, isize::MAX), vec![0]);
        assert_eq!(offsets(8, Some(isize::MIN), Some(isize::MAX), 3), vec![0, 3, 6]);
        assert_eq!(offsets(8, Some(isize::MAX), Some(isize::MIN), -3), vec![7, 4, 1]);
        assert_eq!(offsets(8, Some(isize::MAX), None, isize::MIN), vec![7]);
        assert!(normalize(8, Some(isize::MIN), None, isize::MIN).unwrap().is_empty());
        assert_eq!(normalize(8, None, None, isize::MIN).unwrap().len(), 1);
    }

    /// Straightforward `slice.indices` + `range` in wide arithmetic.
    fn reference(len: usize, start: Option<isize>, stop: Option<isize>, step: isize) -> Vec<isize> {
        let (len, step) = (len as i128, step as i128);
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
        let fix = |b: Option<isize>, default: i128| match b {
            None => default,
            Some(b) if b < 0 => (b as i128 + len).max(lower),
            Some(b) => (b as i128).min(upper),
        };
        let start = fix(start, if step > 0 { lower } else { upper });
        let stop = fix(stop, if step > 0 { upper } else { lower });
        let mut out = Vec::new();
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            out.push(i as isize);
            i += step;
        }
        out
    }

    fn any_bound() -> impl Strategy<Value = Option<isize>> {
        prop_oneof![
            Just(None),
            (-20isize..20).prop_map(Some),
            any::<isize>().prop_map(Some),
            Just(Some(isize::MIN)),
            Just(Some(isize::MAX)),
        ]
    }

    fn any_step() -> impl Strategy<Value = isize> {
        prop_oneof![
            (1isize..6),
            (-6isize..0),
            any::<isize>().prop_filter("non-zero", |s| *s != 0),
            Just(isize::MIN),
            Just(isize::MAX),
        ]
    }

    proptest! {
        #[test]
        fn matches_reference_slice_rules(
            len in 0usize..40,
            start in any_bound(),
            stop in any_bound(),
            step in any_step()
        ) {
            let got = normalize(len, start, stop, step).unwrap();
            let want = reference(len, start, stop, step);
            prop_assert_eq!(got.len(), want.len());
            prop_assert_eq!(got.iter().collect::<Vec<_>>(), want);
        }
    }
}
