//! Structural edits and element-wise transforms.
//!
//! Every function returns a new `Vec` and leaves its input untouched. Edits at
//! positions past the end never fail: they clamp (insertion) or leave the copy
//! unchanged (update, removal).

use std::cmp::Ordering;

use crate::{
    error::Result,
    num::{relative_offset, FillBound, Index},
};

/// A copy of `seq` where the element at `index` is replaced by
/// `updater(element)`. An out-of-range `index` returns an unchanged copy.
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::to_updated;
/// assert_eq!(to_updated(&[1, 2, 3], 1, |x| x * 10), vec![1, 20, 3]);
/// assert_eq!(to_updated(&[1, 2, 3], 10, |x| x * 2), vec![1, 2, 3]);
/// ```
pub fn to_updated<T: Clone>(
    seq: &[T],
    index: impl Into<Index>,
    updater: impl FnOnce(&T) -> T,
) -> Vec<T> {
    let mut result = seq.to_vec();
    if let Some(slot) = result.get_mut(index.into().get()) {
        *slot = updater(slot);
    }
    result
}

/// A copy of `seq` with `value` inserted before position `index`. An index at
/// or past the end appends.
pub fn to_inserted<T: Clone>(seq: &[T], index: impl Into<Index>, value: T) -> Vec<T> {
    let index = index.into().get().min(seq.len());
    let mut result = Vec::with_capacity(seq.len() + 1);
    result.extend_from_slice(&seq[..index]);
    result.push(value);
    result.extend_from_slice(&seq[index..]);
    result
}

/// A copy of `seq` without the element at `index`. An out-of-range index
/// returns an unchanged copy.
pub fn to_removed<T: Clone>(seq: &[T], index: impl Into<Index>) -> Vec<T> {
    let index = index.into().get();
    if index >= seq.len() {
        return seq.to_vec();
    }
    let mut result = Vec::with_capacity(seq.len() - 1);
    result.extend_from_slice(&seq[..index]);
    result.extend_from_slice(&seq[index + 1..]);
    result
}

pub fn to_pushed<T: Clone>(seq: &[T], value: T) -> Vec<T> {
    let mut result = Vec::with_capacity(seq.len() + 1);
    result.extend_from_slice(seq);
    result.push(value);
    result
}

pub fn to_unshifted<T: Clone>(seq: &[T], value: T) -> Vec<T> {
    let mut result = Vec::with_capacity(seq.len() + 1);
    result.push(value);
    result.extend_from_slice(seq);
    result
}

/// A sequence of the same length as `seq` where every slot holds `value`.
pub fn to_filled<T: Clone>(seq: &[T], value: T) -> Vec<T> {
    vec![value; seq.len()]
}

/// A copy of `seq` where the slots in `[start, end)` hold `value`.
///
/// Negative bounds count from the end; both are then clamped into the
/// sequence. Bounds that do not denote an integer (a fractional or non-finite
/// float, or an integer too large for an `i64`) are rejected with
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument).
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::{to_range_filled, ErrorKind};
/// assert_eq!(to_range_filled(&[1, 2, 3, 4], 0, 1, 3), Ok(vec![1, 0, 0, 4]));
/// assert_eq!(to_range_filled(&[1, 2, 3, 4], 0, -2, 10), Ok(vec![1, 2, 0, 0]));
/// assert_eq!(
///     to_range_filled(&[1, 2, 3, 4], 0, 0.5, 2.0).map_err(|e| e.kind()),
///     Err(ErrorKind::InvalidArgument),
/// );
/// ```
pub fn to_range_filled<T: Clone>(
    seq: &[T],
    value: T,
    start: impl FillBound,
    end: impl FillBound,
) -> Result<Vec<T>> {
    let bounds = start
        .to_offset("start")
        .and_then(|start| Ok((start, end.to_offset("end")?)));
    let (start, end) = match bounds {
        Ok(bounds) => bounds,
        Err(err) => {
            log::debug!("rejecting fill range [{start}, {end}): {err}");
            return Err(err);
        }
    };

    let start = relative_offset(seq.len(), start);
    let end = relative_offset(seq.len(), end);
    let mut result = seq.to_vec();
    if start < end {
        result[start..end].fill(value);
    }
    Ok(result)
}

/// `f` applied to every element and its index.
pub fn map<T, U>(seq: &[T], mut f: impl FnMut(&T, usize) -> U) -> Vec<U> {
    seq.iter().enumerate().map(|(i, x)| f(x, i)).collect()
}

/// The elements satisfying `pred`, in order.
pub fn filter<T: Clone>(seq: &[T], mut pred: impl FnMut(&T, usize) -> bool) -> Vec<T> {
    seq.iter()
        .enumerate()
        .filter(|(i, x)| pred(x, *i))
        .map(|(_, x)| x.clone())
        .collect()
}

/// The elements *not* satisfying `pred`, in order.
pub fn filter_not<T: Clone>(seq: &[T], mut pred: impl FnMut(&T, usize) -> bool) -> Vec<T> {
    filter(seq, |x, i| !pred(x, i))
}

pub fn flat_map<T, U, I>(seq: &[T], mut f: impl FnMut(&T, usize) -> I) -> Vec<U>
where
    I: IntoIterator<Item = U>,
{
    seq.iter().enumerate().flat_map(|(i, x)| f(x, i)).collect()
}

/// Concatenates the inner sequences (one level).
pub fn flatten<T: Clone, S: AsRef<[T]>>(seqs: &[S]) -> Vec<T> {
    seqs.iter().flat_map(|s| s.as_ref().iter().cloned()).collect()
}

pub fn concat<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    result.extend_from_slice(a);
    result.extend_from_slice(b);
    result
}

pub fn to_reversed<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}

/// A sorted copy. The sort is stable.
pub fn to_sorted<T: Clone + Ord>(seq: &[T]) -> Vec<T> {
    to_sorted_by(seq, T::cmp)
}

pub fn to_sorted_by<T: Clone>(seq: &[T], cmp: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
    let mut result = seq.to_vec();
    result.sort_by(cmp);
    result
}

pub fn to_sorted_by_key<T: Clone, K: Ord>(seq: &[T], key: impl FnMut(&T) -> K) -> Vec<T> {
    let mut result = seq.to_vec();
    result.sort_by_key(key);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};

    #[test]
    fn splices() {
        let xs = [1, 2, 3];
        assert_eq!(to_inserted(&xs, 0, 0), vec![0, 1, 2, 3]);
        assert_eq!(to_inserted(&xs, 2, 9), vec![1, 2, 9, 3]);
        assert_eq!(to_inserted(&xs, 3, 4), vec![1, 2, 3, 4]);
        assert_eq!(to_inserted(&xs, 100, 4), vec![1, 2, 3, 4]);
        assert_eq!(to_removed(&xs, 0), vec![2, 3]);
        assert_eq!(to_removed(&xs, 2), vec![1, 2]);
        assert_eq!(to_removed(&xs, 3), vec![1, 2, 3]);
        assert_eq!(to_removed::<i32>(&[], 0), Vec::<i32>::new());
        assert_eq!(to_pushed(&xs, 4), vec![1, 2, 3, 4]);
        assert_eq!(to_unshifted(&xs, 0), vec![0, 1, 2, 3]);
        assert_eq!(xs, [1, 2, 3]);
    }

    #[test]
    fn fills() {
        let xs = [1, 2, 3, 4, 5];
        assert_eq!(to_filled(&xs, 7), vec![7; 5]);
        assert_eq!(to_range_filled(&xs, 0, 1u8, 3u8), Ok(vec![1, 0, 0, 4, 5]));
        assert_eq!(to_range_filled(&xs, 0, 3, 1), Ok(xs.to_vec()));
        assert_eq!(to_range_filled(&xs, 0, -100, 100), Ok(vec![0; 5]));
        assert_eq!(to_range_filled(&xs, 0, 2.0, -1.0), Ok(vec![1, 2, 0, 0, 5]));

        let err = to_range_filled(&xs, 0, 0, f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(matches!(err, Error::InvalidArgument { name: "end", .. }));

        let err = to_range_filled(&xs, 0, 1.5f32, 2).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "start", .. }));
    }

    #[test]
    fn transforms() {
        let xs: [usize; 3] = [3, 1, 2];
        assert_eq!(map(&xs, |x, i| x * 10 + i), vec![30, 11, 22]);
        assert_eq!(filter(&xs, |x, _| *x > 1), vec![3, 2]);
        assert_eq!(filter_not(&xs, |x, _| *x > 1), vec![1]);
        assert_eq!(filter(&xs, |_, i| i != 1), vec![3, 2]);
        assert_eq!(flat_map(&xs, |x, _| vec![*x; *x]), vec![3, 3, 3, 1, 2, 2]);
        assert_eq!(flatten(&[vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
        assert_eq!(concat(&xs, &[4]), vec![3, 1, 2, 4]);
        assert_eq!(to_reversed(&xs), vec![2, 1, 3]);
        assert_eq!(to_sorted(&xs), vec![1, 2, 3]);
        assert_eq!(to_sorted_by(&xs, |a, b| b.cmp(a)), vec![3, 2, 1]);

        let pairs = [(1, 'b'), (0, 'a'), (1, 'a')];
        assert_eq!(
            to_sorted_by_key(&pairs, |p| p.0),
            vec![(0, 'a'), (1, 'b'), (1, 'a')]
        );
    }
}
