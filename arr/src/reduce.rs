//! Folds, aggregates and prefix reductions.

use std::{cmp::Ordering, hash::Hash, iter::Sum};

use indexmap::IndexMap;

use crate::{map::OrderedMap, nonempty::NonEmpty};

/// Left fold: `f(...f(f(init, seq[0], 0), seq[1], 1)..., seq[n-1], n-1)`.
pub fn foldl<T, A>(seq: &[T], mut f: impl FnMut(A, &T, usize) -> A, init: A) -> A {
    seq.iter()
        .enumerate()
        .fold(init, |acc, (i, x)| f(acc, x, i))
}

/// Right fold. The index passed to `f` is still the element's position in
/// `seq`, so it counts down from `n - 1`.
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::foldr;
/// let s = foldr(&["a", "b", "c"], |acc, x, i| format!("{acc}{x}{i}"), String::new());
/// assert_eq!(s, "c2b1a0");
/// ```
pub fn foldr<T, A>(seq: &[T], mut f: impl FnMut(A, &T, usize) -> A, init: A) -> A {
    seq.iter()
        .enumerate()
        .rev()
        .fold(init, |acc, (i, x)| f(acc, x, i))
}

// The single reduction behind every min/max flavour: keep the running extreme
// and only replace it on a strict improvement, so the first extreme wins.
pub(crate) fn extreme_by<'a, T>(
    first: &'a T,
    rest: &'a [T],
    mut cmp: impl FnMut(&T, &T) -> Ordering,
) -> &'a T {
    rest.iter().fold(first, |best, x| {
        if cmp(x, best) == Ordering::Less {
            x
        } else {
            best
        }
    })
}

pub fn min_by<T>(seq: &[T], cmp: impl FnMut(&T, &T) -> Ordering) -> Option<&T> {
    let (first, rest) = seq.split_first()?;
    Some(extreme_by(first, rest, cmp))
}

/// The largest element according to `cmp`, the first one on ties. Computed
/// as the minimum under the reversed comparator.
pub fn max_by<T>(seq: &[T], mut cmp: impl FnMut(&T, &T) -> Ordering) -> Option<&T> {
    min_by(seq, |a, b| cmp(a, b).reverse())
}

pub fn min<T: Ord>(seq: &[T]) -> Option<&T> {
    min_by(seq, T::cmp)
}

pub fn max<T: Ord>(seq: &[T]) -> Option<&T> {
    max_by(seq, T::cmp)
}

pub fn min_by_key<T, K: Ord>(seq: &[T], mut key: impl FnMut(&T) -> K) -> Option<&T> {
    min_by(seq, |a, b| key(a).cmp(&key(b)))
}

pub fn max_by_key<T, K: Ord>(seq: &[T], mut key: impl FnMut(&T) -> K) -> Option<&T> {
    max_by(seq, |a, b| key(a).cmp(&key(b)))
}

/// The number of elements satisfying `pred`.
pub fn count<T>(seq: &[T], mut pred: impl FnMut(&T, usize) -> bool) -> usize {
    seq.iter()
        .enumerate()
        .filter(|(i, x)| pred(x, *i))
        .count()
}

/// How many elements map to each key, keys in order of first occurrence.
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::count_by;
/// let counts = count_by(&["apple", "avocado", "banana"], |s, _| s.chars().next());
/// assert_eq!(counts.get(&Some('a')), Some(&2));
/// assert_eq!(counts.keys().collect::<Vec<_>>(), vec![&Some('a'), &Some('b')]);
/// ```
pub fn count_by<T, K: Hash + Eq>(
    seq: &[T],
    mut key: impl FnMut(&T, usize) -> K,
) -> OrderedMap<K, usize> {
    let mut counts: IndexMap<K, usize> = IndexMap::new();
    for (i, x) in seq.iter().enumerate() {
        *counts.entry(key(x, i)).or_insert(0) += 1;
    }
    OrderedMap::from_index_map(counts)
}

/// The sum of all elements; the additive identity for an empty input.
///
/// # Panics
///
/// Integer overflow follows the `Sum` impl of `T`: it panics in debug builds
/// and wraps in release builds. Use [`foldl`] with `checked_add` to detect it:
///
/// ```rust
/// # use seqkit_arr::foldl;
/// let total = foldl(&[i32::MAX, 1], |acc: Option<i32>, x, _| acc?.checked_add(*x), Some(0));
/// assert_eq!(total, None);
/// ```
pub fn sum<T: Copy + Sum>(seq: &[T]) -> T {
    seq.iter().copied().sum()
}

/// Every intermediate accumulator of a left fold, starting with `seed`.
///
/// The result has exactly `seq.len() + 1` elements: `out[0] == seed` and
/// `out[i + 1] == f(&out[i], &seq[i], i)`.
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::scan;
/// let prefix_sums = scan(&[1, 2, 3], |acc, x, _| acc + x, 0);
/// assert_eq!(prefix_sums.as_slice(), &[0, 1, 3, 6]);
/// ```
pub fn scan<T, S>(seq: &[T], mut f: impl FnMut(&S, &T, usize) -> S, seed: S) -> NonEmpty<S> {
    let mut history = Vec::with_capacity(seq.len() + 1);
    history.push(seed);
    for (i, x) in seq.iter().enumerate() {
        let next = f(&history[i], x, i);
        history.push(next);
    }
    NonEmpty::from_vec_unchecked(history)
}

/// The elements grouped by key. Keys appear in order of first occurrence and
/// each group keeps the elements in their original order.
pub fn group_by<T: Clone, K: Hash + Eq>(
    seq: &[T],
    mut key: impl FnMut(&T, usize) -> K,
) -> OrderedMap<K, Vec<T>> {
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for (i, x) in seq.iter().enumerate() {
        groups.entry(key(x, i)).or_default().push(x.clone());
    }
    OrderedMap::from_index_map(groups)
}

/// `true` if every element satisfies `pred` (vacuously for an empty input).
pub fn every<T>(seq: &[T], mut pred: impl FnMut(&T, usize) -> bool) -> bool {
    seq.iter().enumerate().all(|(i, x)| pred(x, i))
}

/// `true` if at least one element satisfies `pred`.
pub fn some<T>(seq: &[T], mut pred: impl FnMut(&T, usize) -> bool) -> bool {
    seq.iter().enumerate().any(|(i, x)| pred(x, i))
}
