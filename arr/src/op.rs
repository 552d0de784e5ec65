//! Curried forms of the sequence operations.
//!
//! Each function here takes the arguments of the operation of the same name
//! *except* the sequence, and returns a function of the sequence. They are
//! meant to be chained with [`Pipe`](crate::Pipe):
//!
//! ```rust
//! use seqkit_arr::{op, Pipe};
//!
//! let xs = [5, 3, 8, 1];
//! let top_two = xs.pipe(op::to_sorted()).pipe(op::take_last(2));
//! assert_eq!(top_two, vec![5, 8]);
//! assert_eq!(xs.pipe(op::find_index(|x: &i32, _| *x > 4)), Some(0));
//! ```
//!
//! Every curried form delegates to the direct function, so both call
//! conventions always agree.

use std::{cmp::Ordering, fmt::Display, hash::Hash, iter::Sum};

use crate::{
    access, edit,
    error::Result,
    map::OrderedMap,
    nonempty::NonEmpty,
    num::{FillBound, Index, Size},
    partition as chunking, reduce, set, slice, text,
};

// Pins the signature of closures that return a borrow of their argument.
fn borrowing<T, F>(f: F) -> F
where
    F: for<'a> FnMut(&'a [T]) -> Option<&'a T>,
{
    f
}

fn borrowing_fn<T, F>(f: F) -> F
where
    F: for<'a> Fn(&'a [T]) -> Option<&'a T>,
{
    f
}

// Slicing

pub fn slice_clamped<T: Clone>(start: i64, end: i64) -> impl Fn(&[T]) -> Vec<T> {
    move |seq| slice::slice_clamped(seq, start, end)
}

pub fn take<T: Clone>(n: impl Into<Size>) -> impl Fn(&[T]) -> Vec<T> {
    let n = n.into();
    move |seq| slice::take(seq, n)
}

pub fn take_last<T: Clone>(n: impl Into<Size>) -> impl Fn(&[T]) -> Vec<T> {
    let n = n.into();
    move |seq| slice::take_last(seq, n)
}

pub fn skip<T: Clone>(n: impl Into<Size>) -> impl Fn(&[T]) -> Vec<T> {
    let n = n.into();
    move |seq| slice::skip(seq, n)
}

pub fn skip_last<T: Clone>(n: impl Into<Size>) -> impl Fn(&[T]) -> Vec<T> {
    let n = n.into();
    move |seq| slice::skip_last(seq, n)
}

pub fn tail<T: Clone>() -> fn(&[T]) -> Vec<T> {
    slice::tail
}

pub fn but_last<T: Clone>() -> fn(&[T]) -> Vec<T> {
    slice::but_last
}

pub fn copy<T: Clone>() -> fn(&[T]) -> Vec<T> {
    slice::copy
}

// Access

pub fn at<T>(index: isize) -> impl Fn(&[T]) -> Option<&T> {
    borrowing_fn(move |seq| access::at(seq, index))
}

pub fn head<T>() -> fn(&[T]) -> Option<&T> {
    access::head
}

pub fn last<T>() -> fn(&[T]) -> Option<&T> {
    access::last
}

pub fn find<T>(
    mut pred: impl FnMut(&T, usize, &[T]) -> bool,
) -> impl FnMut(&[T]) -> Option<&T> {
    borrowing(move |seq| access::find(seq, &mut pred))
}

pub fn find_index<T>(mut pred: impl FnMut(&T, usize) -> bool) -> impl FnMut(&[T]) -> Option<usize> {
    move |seq| access::find_index(seq, &mut pred)
}

pub fn find_last<T>(
    mut pred: impl FnMut(&T, usize, &[T]) -> bool,
) -> impl FnMut(&[T]) -> Option<&T> {
    borrowing(move |seq| access::find_last(seq, &mut pred))
}

pub fn find_last_index<T>(
    mut pred: impl FnMut(&T, usize) -> bool,
) -> impl FnMut(&[T]) -> Option<usize> {
    move |seq| access::find_last_index(seq, &mut pred)
}

pub fn index_of<T: PartialEq>(value: T) -> impl Fn(&[T]) -> Option<usize> {
    move |seq| access::index_of(seq, &value)
}

pub fn index_of_from<T: PartialEq>(value: T, from: isize) -> impl Fn(&[T]) -> Option<usize> {
    move |seq| access::index_of_from(seq, &value, from)
}

pub fn last_index_of<T: PartialEq>(value: T) -> impl Fn(&[T]) -> Option<usize> {
    move |seq| access::last_index_of(seq, &value)
}

pub fn last_index_of_from<T: PartialEq>(value: T, from: isize) -> impl Fn(&[T]) -> Option<usize> {
    move |seq| access::last_index_of_from(seq, &value, from)
}

pub fn includes<T: PartialEq>(value: T) -> impl Fn(&[T]) -> bool {
    move |seq| access::includes(seq, &value)
}

// Edits and transforms

/// The updater runs at most once, so the returned function can only be
/// called once too.
pub fn to_updated<T: Clone>(
    index: impl Into<Index>,
    updater: impl FnOnce(&T) -> T,
) -> impl FnOnce(&[T]) -> Vec<T> {
    let index = index.into();
    move |seq| edit::to_updated(seq, index, updater)
}

pub fn to_inserted<T: Clone>(index: impl Into<Index>, value: T) -> impl Fn(&[T]) -> Vec<T> {
    let index = index.into();
    move |seq| edit::to_inserted(seq, index, value.clone())
}

pub fn to_removed<T: Clone>(index: impl Into<Index>) -> impl Fn(&[T]) -> Vec<T> {
    let index = index.into();
    move |seq| edit::to_removed(seq, index)
}

pub fn to_pushed<T: Clone>(value: T) -> impl Fn(&[T]) -> Vec<T> {
    move |seq| edit::to_pushed(seq, value.clone())
}

pub fn to_unshifted<T: Clone>(value: T) -> impl Fn(&[T]) -> Vec<T> {
    move |seq| edit::to_unshifted(seq, value.clone())
}

pub fn to_filled<T: Clone>(value: T) -> impl Fn(&[T]) -> Vec<T> {
    move |seq| edit::to_filled(seq, value.clone())
}

pub fn to_range_filled<T: Clone>(
    value: T,
    start: impl FillBound,
    end: impl FillBound,
) -> impl Fn(&[T]) -> Result<Vec<T>> {
    move |seq| edit::to_range_filled(seq, value.clone(), start, end)
}

pub fn map<T, U>(mut f: impl FnMut(&T, usize) -> U) -> impl FnMut(&[T]) -> Vec<U> {
    move |seq| edit::map(seq, &mut f)
}

pub fn filter<T: Clone>(mut pred: impl FnMut(&T, usize) -> bool) -> impl FnMut(&[T]) -> Vec<T> {
    move |seq| edit::filter(seq, &mut pred)
}

pub fn filter_not<T: Clone>(
    mut pred: impl FnMut(&T, usize) -> bool,
) -> impl FnMut(&[T]) -> Vec<T> {
    move |seq| edit::filter_not(seq, &mut pred)
}

pub fn flat_map<T, U, I>(mut f: impl FnMut(&T, usize) -> I) -> impl FnMut(&[T]) -> Vec<U>
where
    I: IntoIterator<Item = U>,
{
    move |seq| edit::flat_map(seq, &mut f)
}

pub fn flatten<T: Clone, S: AsRef<[T]>>() -> fn(&[S]) -> Vec<T> {
    edit::flatten
}

/// Appends `suffix` to the piped sequence.
pub fn concat<T: Clone>(suffix: Vec<T>) -> impl Fn(&[T]) -> Vec<T> {
    move |seq| edit::concat(seq, &suffix)
}

pub fn to_reversed<T: Clone>() -> fn(&[T]) -> Vec<T> {
    edit::to_reversed
}

pub fn to_sorted<T: Clone + Ord>() -> fn(&[T]) -> Vec<T> {
    edit::to_sorted
}

pub fn to_sorted_by<T: Clone>(
    mut cmp: impl FnMut(&T, &T) -> Ordering,
) -> impl FnMut(&[T]) -> Vec<T> {
    move |seq| edit::to_sorted_by(seq, &mut cmp)
}

pub fn to_sorted_by_key<T: Clone, K: Ord>(
    mut key: impl FnMut(&T) -> K,
) -> impl FnMut(&[T]) -> Vec<T> {
    move |seq| edit::to_sorted_by_key(seq, &mut key)
}

// Reductions

/// The initial accumulator is cloned for every call.
pub fn foldl<T, A: Clone>(
    mut f: impl FnMut(A, &T, usize) -> A,
    init: A,
) -> impl FnMut(&[T]) -> A {
    move |seq| reduce::foldl(seq, &mut f, init.clone())
}

pub fn foldr<T, A: Clone>(
    mut f: impl FnMut(A, &T, usize) -> A,
    init: A,
) -> impl FnMut(&[T]) -> A {
    move |seq| reduce::foldr(seq, &mut f, init.clone())
}

pub fn min<T: Ord>() -> fn(&[T]) -> Option<&T> {
    reduce::min
}

pub fn max<T: Ord>() -> fn(&[T]) -> Option<&T> {
    reduce::max
}

pub fn min_by<T>(mut cmp: impl FnMut(&T, &T) -> Ordering) -> impl FnMut(&[T]) -> Option<&T> {
    borrowing(move |seq| reduce::min_by(seq, &mut cmp))
}

pub fn max_by<T>(mut cmp: impl FnMut(&T, &T) -> Ordering) -> impl FnMut(&[T]) -> Option<&T> {
    borrowing(move |seq| reduce::max_by(seq, &mut cmp))
}

pub fn min_by_key<T, K: Ord>(mut key: impl FnMut(&T) -> K) -> impl FnMut(&[T]) -> Option<&T> {
    borrowing(move |seq| reduce::min_by_key(seq, &mut key))
}

pub fn max_by_key<T, K: Ord>(mut key: impl FnMut(&T) -> K) -> impl FnMut(&[T]) -> Option<&T> {
    borrowing(move |seq| reduce::max_by_key(seq, &mut key))
}

pub fn count<T>(mut pred: impl FnMut(&T, usize) -> bool) -> impl FnMut(&[T]) -> usize {
    move |seq| reduce::count(seq, &mut pred)
}

pub fn count_by<T, K: Hash + Eq>(
    mut key: impl FnMut(&T, usize) -> K,
) -> impl FnMut(&[T]) -> OrderedMap<K, usize> {
    move |seq| reduce::count_by(seq, &mut key)
}

pub fn sum<T: Copy + Sum>() -> fn(&[T]) -> T {
    reduce::sum
}

/// The seed is cloned for every call.
pub fn scan<T, S: Clone>(
    mut f: impl FnMut(&S, &T, usize) -> S,
    seed: S,
) -> impl FnMut(&[T]) -> NonEmpty<S> {
    move |seq| reduce::scan(seq, &mut f, seed.clone())
}

pub fn group_by<T: Clone, K: Hash + Eq>(
    mut key: impl FnMut(&T, usize) -> K,
) -> impl FnMut(&[T]) -> OrderedMap<K, Vec<T>> {
    move |seq| reduce::group_by(seq, &mut key)
}

pub fn every<T>(mut pred: impl FnMut(&T, usize) -> bool) -> impl FnMut(&[T]) -> bool {
    move |seq| reduce::every(seq, &mut pred)
}

pub fn some<T>(mut pred: impl FnMut(&T, usize) -> bool) -> impl FnMut(&[T]) -> bool {
    move |seq| reduce::some(seq, &mut pred)
}

// Set-style comparisons. The captured sequence is always the right-hand
// operand: `xs.pipe(op::set_difference(ys))` is `set_difference(xs, ys)`.

pub fn is_subset<T: PartialEq>(of: Vec<T>) -> impl Fn(&[T]) -> bool {
    move |seq| set::is_subset(seq, &of)
}

pub fn is_superset<T: PartialEq>(of: Vec<T>) -> impl Fn(&[T]) -> bool {
    move |seq| set::is_superset(seq, &of)
}

pub fn set_intersection<T: PartialEq + Clone>(other: Vec<T>) -> impl Fn(&[T]) -> Vec<T> {
    move |seq| set::set_intersection(seq, &other)
}

pub fn set_difference<T: PartialEq + Clone>(other: Vec<T>) -> impl Fn(&[T]) -> Vec<T> {
    move |seq| set::set_difference(seq, &other)
}

pub fn sorted_num_set_difference<T: PartialOrd + Clone>(
    other: Vec<T>,
) -> impl Fn(&[T]) -> Vec<T> {
    move |seq| set::sorted_num_set_difference(seq, &other)
}

pub fn uniq<T: Hash + Eq + Clone>() -> fn(&[T]) -> Vec<T> {
    set::uniq
}

pub fn uniq_by<T: Clone, K: Hash + Eq>(mut key: impl FnMut(&T) -> K) -> impl FnMut(&[T]) -> Vec<T> {
    move |seq| set::uniq_by(seq, &mut key)
}

// Chunking, pairing and text

pub fn partition<T: Clone>(chunk_size: usize) -> impl Fn(&[T]) -> Vec<Vec<T>> {
    move |seq| chunking::partition(seq, chunk_size)
}

pub fn zip<A: Clone, B: Clone>(other: Vec<B>) -> impl Fn(&[A]) -> Vec<(A, B)> {
    move |seq| chunking::zip(seq, &other)
}

pub fn entries<T: Clone>() -> fn(&[T]) -> Vec<(usize, T)> {
    chunking::entries
}

pub fn join<T: Display>(sep: impl Into<String>) -> impl Fn(&[T]) -> Result<String> {
    let sep = sep.into();
    move |seq| text::join(seq, &sep)
}
