//! Safe indexed reads and linear searches.
//!
//! Nothing here panics: a missing element is reported as `None`.

use crate::num::{relative_offset, resolve_index};

/// The element at `index`, where a negative index counts from the end
/// (`-1` is the last element).
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::at;
/// let xs = [10, 20, 30];
/// assert_eq!(at(&xs, 1), Some(&20));
/// assert_eq!(at(&xs, -1), Some(&30));
/// assert_eq!(at(&xs, 3), None);
/// assert_eq!(at(&xs, -4), None);
/// ```
pub fn at<T>(seq: &[T], index: isize) -> Option<&T> {
    resolve_index(seq.len(), index).map(|i| &seq[i])
}

pub fn head<T>(seq: &[T]) -> Option<&T> {
    if seq.is_empty() {
        return None;
    }
    at(seq, 0)
}

pub fn last<T>(seq: &[T]) -> Option<&T> {
    if seq.is_empty() {
        return None;
    }
    at(seq, -1)
}

/// The first element satisfying `pred`, which also receives the element's
/// index and the whole sequence.
pub fn find<T>(seq: &[T], mut pred: impl FnMut(&T, usize, &[T]) -> bool) -> Option<&T> {
    seq.iter().enumerate().find(|(i, x)| pred(x, *i, seq)).map(|(_, x)| x)
}

/// The index of the first element satisfying `pred`.
pub fn find_index<T>(seq: &[T], mut pred: impl FnMut(&T, usize) -> bool) -> Option<usize> {
    seq.iter().enumerate().position(|(i, x)| pred(x, i))
}

/// The last element satisfying `pred`, scanning from the end.
pub fn find_last<T>(seq: &[T], mut pred: impl FnMut(&T, usize, &[T]) -> bool) -> Option<&T> {
    seq.iter()
        .enumerate()
        .rev()
        .find(|(i, x)| pred(x, *i, seq))
        .map(|(_, x)| x)
}

/// The index of the last element satisfying `pred`.
pub fn find_last_index<T>(seq: &[T], mut pred: impl FnMut(&T, usize) -> bool) -> Option<usize> {
    seq.iter()
        .enumerate()
        .rev()
        .find(|(i, x)| pred(x, *i))
        .map(|(i, _)| i)
}

pub fn index_of<T: PartialEq>(seq: &[T], value: &T) -> Option<usize> {
    seq.iter().position(|x| x == value)
}

/// Like [`index_of`], but the search starts at `from`. A negative `from`
/// counts from the end; it is clamped to the sequence.
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::index_of_from;
/// let xs = ['a', 'b', 'a', 'b'];
/// assert_eq!(index_of_from(&xs, &'a', 1), Some(2));
/// assert_eq!(index_of_from(&xs, &'b', -1), Some(3));
/// assert_eq!(index_of_from(&xs, &'a', 3), None);
/// ```
pub fn index_of_from<T: PartialEq>(seq: &[T], value: &T, from: isize) -> Option<usize> {
    let from = relative_offset(seq.len(), from as i64);
    seq[from..]
        .iter()
        .position(|x| x == value)
        .map(|i| i + from)
}

pub fn last_index_of<T: PartialEq>(seq: &[T], value: &T) -> Option<usize> {
    seq.iter().rposition(|x| x == value)
}

/// Like [`last_index_of`], but the backward search starts at `from`
/// (inclusive). A negative `from` counts from the end; a `from` that is still
/// negative after that finds nothing.
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::last_index_of_from;
/// let xs = ['a', 'b', 'a', 'b'];
/// assert_eq!(last_index_of_from(&xs, &'b', 2), Some(1));
/// assert_eq!(last_index_of_from(&xs, &'a', -3), Some(0));
/// assert_eq!(last_index_of_from(&xs, &'a', -5), None);
/// ```
pub fn last_index_of_from<T: PartialEq>(seq: &[T], value: &T, from: isize) -> Option<usize> {
    let start = if from < 0 {
        seq.len().checked_sub(from.unsigned_abs())?
    } else {
        from.unsigned_abs().min(seq.len().checked_sub(1)?)
    };
    seq[..=start].iter().rposition(|x| x == value)
}

pub fn includes<T: PartialEq>(seq: &[T], value: &T) -> bool {
    seq.contains(value)
}
