//! Clamped slicing.
//!
//! [`slice_clamped`] is the only place in this crate that turns caller-supplied
//! bounds into slice indices. Every other range-shaped operation (`take`,
//! `skip`, `tail`, ...) is a bit of size arithmetic on top of it, and none of
//! them can go out of bounds.

use std::ops::Range;

use crate::num::{clamp_offset, Size};

/// The half-open range `[start, end)` obtained by clamping a pair of bounds
/// against a sequence length.
///
/// Always satisfies `start <= end <= len`. Only [`clamp_range`] builds one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClampedRange {
    start: usize,
    end: usize,
}

impl ClampedRange {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

impl From<ClampedRange> for Range<usize> {
    fn from(r: ClampedRange) -> Self {
        r.start..r.end
    }
}

/// Clamps `start` into `[0, len]`, then `end` into `[start, len]`.
///
/// Negative bounds are not counted from the end: they clamp to zero.
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::slice::clamp_range;
/// let r = clamp_range(5, -1, 6);
/// assert_eq!((r.start(), r.end()), (0, 5));
/// let r = clamp_range(5, 4, 2);
/// assert_eq!((r.start(), r.end(), r.len()), (4, 4, 0));
/// ```
pub fn clamp_range(len: usize, start: i64, end: i64) -> ClampedRange {
    let start = clamp_offset(start, 0, len);
    let end = clamp_offset(end, start, len);
    ClampedRange { start, end }
}

/// Copies the sub-sequence `[start, end)` after clamping both bounds, see
/// [`clamp_range`].
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::slice_clamped;
/// assert_eq!(slice_clamped(&[0, 1, 2, 3, 4], -1, 6), vec![0, 1, 2, 3, 4]);
/// assert_eq!(slice_clamped(&[0, 1, 2, 3, 4], 1, 3), vec![1, 2]);
/// assert_eq!(slice_clamped(&[0, 1, 2, 3, 4], 3, 1), Vec::<i32>::new());
/// ```
pub fn slice_clamped<T: Clone>(seq: &[T], start: i64, end: i64) -> Vec<T> {
    let range = clamp_range(seq.len(), start, end);
    seq[Range::from(range)].to_vec()
}

// Lengths of real slices always fit in an i64, but saturate rather than trust it.
fn offset(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// The first `n` elements (all of them if there are fewer).
pub fn take<T: Clone>(seq: &[T], n: impl Into<Size>) -> Vec<T> {
    slice_clamped(seq, 0, offset(n.into().get()))
}

/// The last `n` elements (all of them if there are fewer).
pub fn take_last<T: Clone>(seq: &[T], n: impl Into<Size>) -> Vec<T> {
    let len = Size::new(seq.len());
    slice_clamped(seq, offset(len.saturating_sub(n).get()), offset(len.get()))
}

/// Everything but the first `n` elements.
pub fn skip<T: Clone>(seq: &[T], n: impl Into<Size>) -> Vec<T> {
    slice_clamped(seq, offset(n.into().get()), offset(seq.len()))
}

/// Everything but the last `n` elements.
pub fn skip_last<T: Clone>(seq: &[T], n: impl Into<Size>) -> Vec<T> {
    let len = Size::new(seq.len());
    slice_clamped(seq, 0, offset(len.saturating_sub(n).get()))
}

/// Everything but the first element. Empty for an empty input.
pub fn tail<T: Clone>(seq: &[T]) -> Vec<T> {
    skip(seq, 1)
}

/// Everything but the last element. Empty for an empty input.
pub fn but_last<T: Clone>(seq: &[T]) -> Vec<T> {
    skip_last(seq, 1)
}

/// A fresh, element-wise equal copy of `seq`.
pub fn copy<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.to_vec()
}
