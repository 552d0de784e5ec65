//! Arithmetic progressions and the other sequence constructors.

use std::iter::FusedIterator;

use crate::num::{Size, Step};

/// A lazy arithmetic progression `start, start + step, ...` over the
/// half-open interval between `start` and `end`.
///
/// Ascending progressions run while `current < end`, descending ones while
/// `current > end`. A step whose sign disagrees with `end - start` yields
/// nothing. The progression also stops if the next value would overflow an
/// `i64`.
#[derive(Clone, Debug)]
pub struct Progression {
    // `None` once the progression is exhausted.
    next: Option<i64>,
    end: i64,
    step: Step,
}

impl Progression {
    pub fn new(start: i64, end: i64, step: Step) -> Self {
        Progression {
            next: Some(start),
            end,
            step,
        }
    }

    fn in_bounds(&self, current: i64) -> bool {
        if self.step.is_ascending() {
            current < self.end
        } else {
            current > self.end
        }
    }

    /// The number of values left, `max(0, ceil((end - current) / step))`.
    fn remaining(&self) -> u128 {
        let Some(current) = self.next.filter(|&c| self.in_bounds(c)) else {
            return 0;
        };
        let distance = (i128::from(self.end) - i128::from(current)).unsigned_abs();
        let step = u128::from(self.step.get().unsigned_abs());
        distance.div_ceil(step)
    }
}

impl Iterator for Progression {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.next.filter(|&c| self.in_bounds(c))?;
        self.next = current.checked_add(self.step.get());
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Progression {}

/// `[start, start + 1, ..., end - 1]`, empty if `start >= end`.
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::range;
/// assert_eq!(range(1, 5), vec![1, 2, 3, 4]);
/// assert_eq!(range(5, 1), Vec::<i64>::new());
/// ```
pub fn range(start: i64, end: i64) -> Vec<i64> {
    range_step(start, end, Step::ONE)
}

/// The progression of [`Progression::new`], collected.
///
/// # Panics
///
/// Collecting reserves the whole progression up front, so a progression with
/// more values than a `Vec` can hold (e.g. `range(i64::MIN, i64::MAX)` with
/// step 1) panics with a capacity overflow. Iterate a [`Progression`] lazily
/// instead.
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::{range_step, num::Step};
/// let down = Step::new(-3).unwrap();
/// assert_eq!(range_step(10, 0, down), vec![10, 7, 4, 1]);
/// assert_eq!(range_step(0, 10, down), Vec::<i64>::new());
/// ```
pub fn range_step(start: i64, end: i64, step: Step) -> Vec<i64> {
    Progression::new(start, end, step).collect()
}

/// `len` zeros.
pub fn zeros(len: impl Into<Size>) -> Vec<usize> {
    vec![0; len.into().get()]
}

/// `[0, 1, ..., len - 1]`.
pub fn seq(len: impl Into<Size>) -> Vec<usize> {
    (0..len.into().get()).collect()
}

/// `len` copies of `value`.
pub fn new_array<T: Clone>(len: impl Into<Size>, value: T) -> Vec<T> {
    vec![value; len.into().get()]
}

/// `[f(0), f(1), ..., f(len - 1)]`.
pub fn generate<T>(len: impl Into<Size>, f: impl FnMut(usize) -> T) -> Vec<T> {
    (0..len.into().get()).map(f).collect()
}
