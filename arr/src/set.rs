//! Set-style comparisons between sequences.
//!
//! The generic operations ([`is_subset`], [`set_difference`], ...) only need
//! `PartialEq` and test membership with a linear scan, so they cost
//! `O(n * m)`. They are meant for small inputs. When both inputs are sorted,
//! [`sorted_num_set_difference`] computes the difference in `O(n + m)`.

use std::hash::Hash;

use indexmap::IndexSet;

/// `true` if every element of `a` occurs in `b`.
pub fn is_subset<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.iter().all(|x| b.contains(x))
}

/// `true` if every element of `b` occurs in `a`.
pub fn is_superset<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    is_subset(b, a)
}

/// The elements of `a` that also occur in `b`, in the order of `a`.
pub fn set_intersection<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|x| b.contains(x)).cloned().collect()
}

/// The elements of `a` that do not occur in `b`, in the order of `a`.
pub fn set_difference<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|x| !b.contains(x)).cloned().collect()
}

fn is_ascending<T: PartialOrd>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

/// The elements of the ascending sequence `a` that do not occur in the
/// ascending sequence `b`, computed with a single merge-style pass.
///
/// The result is ascending. Both inputs must be sorted; on unsorted input the
/// result is unspecified (but the call still terminates without panicking).
/// A pair of incomparable values (a NaN on either side) is treated like
/// `a > b`.
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::sorted_num_set_difference;
/// assert_eq!(sorted_num_set_difference(&[1, 2, 3, 5], &[2, 4, 5]), vec![1, 3]);
/// assert_eq!(sorted_num_set_difference(&[1.0, 1.5], &[]), vec![1.0, 1.5]);
/// ```
pub fn sorted_num_set_difference<T: PartialOrd + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    if cfg!(debug_assertions) && !(is_ascending(a) && is_ascending(b)) {
        log::warn!("sorted_num_set_difference called with unsorted input");
    }

    let mut result = Vec::with_capacity(a.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        let (x, y) = (&a[i], &b[j]);
        if x == y {
            i += 1;
            j += 1;
        } else if x < y {
            result.push(x.clone());
            i += 1;
        } else {
            j += 1;
        }
    }
    result.extend_from_slice(&a[i..]);
    result
}

/// The distinct elements of `seq`, in order of first occurrence.
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::uniq;
/// assert_eq!(uniq(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn uniq<T: Hash + Eq + Clone>(seq: &[T]) -> Vec<T> {
    seq.iter()
        .cloned()
        .collect::<IndexSet<T>>()
        .into_iter()
        .collect()
}

/// The elements of `seq` with distinct keys, keeping the first element seen
/// for each key.
pub fn uniq_by<T: Clone, K: Hash + Eq>(seq: &[T], mut key: impl FnMut(&T) -> K) -> Vec<T> {
    let mut seen = IndexSet::new();
    seq.iter()
        .filter(|x| seen.insert(key(x)))
        .cloned()
        .collect()
}
