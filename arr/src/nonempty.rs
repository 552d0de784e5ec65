//! Sequences that are statically known to hold at least one element.

use std::{cmp::Ordering, ops::Deref};

use crate::{
    error::{Error, Result},
    num::PositiveSize,
    reduce,
};

/// A sequence that always holds at least one element.
///
/// Operations whose result can never be empty (like [`scan`](crate::scan))
/// return a `NonEmpty`, and operations that would otherwise have to return an
/// [`Option`] (like [`min`](NonEmpty::min) or [`head`](NonEmpty::head)) return
/// their result directly.
///
/// `NonEmpty<T>` dereferences to `[T]`, so it can be passed to every function
/// of this crate that takes a slice.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NonEmpty<T> {
    // Invariant: never empty.
    items: Vec<T>,
}

impl<T: serde::Serialize> serde::Serialize for NonEmpty<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for elt in self.iter() {
            seq.serialize_element(elt)?;
        }
        seq.end()
    }
}

impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmpty<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items: Vec<T> = Vec::deserialize(deserializer)?;
        NonEmpty::from_vec(items)
            .ok_or_else(|| serde::de::Error::invalid_length(0, &"a non-empty sequence"))
    }
}

impl<T> NonEmpty<T> {
    /// Builds a sequence out of its first element and the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_arr::NonEmpty;
    /// let xs = NonEmpty::new(1, vec![2, 3]);
    /// assert_eq!(xs.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn new(head: T, tail: Vec<T>) -> Self {
        let mut items = Vec::with_capacity(tail.len() + 1);
        items.push(head);
        items.extend(tail);
        NonEmpty { items }
    }

    pub fn singleton(value: T) -> Self {
        NonEmpty { items: vec![value] }
    }

    /// Returns `None` if `items` is empty.
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        (!items.is_empty()).then_some(NonEmpty { items })
    }

    /// The number of elements, which is statically at least one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_arr::NonEmpty;
    /// let xs = NonEmpty::new('a', vec!['b']);
    /// assert_eq!(xs.len().get(), 2);
    /// ```
    pub fn len(&self) -> PositiveSize {
        match PositiveSize::new(self.items.len()) {
            Some(len) => len,
            None => unreachable!("NonEmpty holds no elements"),
        }
    }

    /// Always `false`. Shadows the slice method reached through `Deref`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn head(&self) -> &T {
        &self.items[0]
    }

    pub fn last(&self) -> &T {
        &self.items[self.items.len() - 1]
    }

    /// All elements but the first, possibly empty.
    pub fn tail(&self) -> &[T] {
        &self.items[1..]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Applies `f` to every element (with its index), keeping the guarantee
    /// that the result is non-empty.
    pub fn map<U>(&self, mut f: impl FnMut(&T, usize) -> U) -> NonEmpty<U> {
        NonEmpty {
            items: self.items.iter().enumerate().map(|(i, x)| f(x, i)).collect(),
        }
    }

    pub(crate) fn from_vec_unchecked(items: Vec<T>) -> Self {
        debug_assert!(!items.is_empty());
        NonEmpty { items }
    }

    /// The smallest element according to `cmp`. The first of several equal
    /// minima wins.
    pub fn min_by(&self, cmp: impl FnMut(&T, &T) -> Ordering) -> &T {
        reduce::extreme_by(self.head(), self.tail(), cmp)
    }

    /// The largest element according to `cmp`. The first of several equal
    /// maxima wins.
    pub fn max_by(&self, mut cmp: impl FnMut(&T, &T) -> Ordering) -> &T {
        reduce::extreme_by(self.head(), self.tail(), |a, b| cmp(a, b).reverse())
    }

    pub fn min_by_key<K: Ord>(&self, mut key: impl FnMut(&T) -> K) -> &T {
        self.min_by(|a, b| key(a).cmp(&key(b)))
    }

    pub fn max_by_key<K: Ord>(&self, mut key: impl FnMut(&T) -> K) -> &T {
        self.max_by(|a, b| key(a).cmp(&key(b)))
    }
}

impl<T: Ord> NonEmpty<T> {
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit_arr::NonEmpty;
    /// let xs = NonEmpty::new(3, vec![1, 2]);
    /// assert_eq!(*xs.min(), 1);
    /// assert_eq!(*xs.max(), 3);
    /// ```
    pub fn min(&self) -> &T {
        self.min_by(T::cmp)
    }

    pub fn max(&self) -> &T {
        self.max_by(T::cmp)
    }
}

impl<T: Clone> NonEmpty<T> {
    /// `len` copies of `value`.
    pub fn repeat(len: PositiveSize, value: T) -> Self {
        NonEmpty {
            items: vec![value; len.get()],
        }
    }
}

impl<T> Deref for NonEmpty<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsRef<[T]> for NonEmpty<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> TryFrom<Vec<T>> for NonEmpty<T> {
    type Error = Error;

    fn try_from(items: Vec<T>) -> Result<Self> {
        NonEmpty::from_vec(items)
            .ok_or_else(|| Error::invalid_argument("items", "expected a non-empty sequence"))
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(xs: NonEmpty<T>) -> Self {
        xs.items
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
