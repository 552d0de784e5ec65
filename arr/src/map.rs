use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An immutable key-to-value mapping that remembers the order in which keys
/// were first inserted.
///
/// This is the result type of [`group_by`](crate::group_by) and
/// [`count_by`](crate::count_by). It is built from a mutable accumulator
/// inside those operations and only exposes read access afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "K: Serialize + Hash + Eq, V: Serialize",
    deserialize = "K: Deserialize<'de> + Hash + Eq, V: Deserialize<'de>"
))]
pub struct OrderedMap<K, V> {
    inner: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    pub(crate) fn from_index_map(inner: IndexMap<K, V>) -> Self {
        OrderedMap { inner }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over the entries in first-insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.inner.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.inner.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, K, V> {
        self.inner.values()
    }

    pub fn into_inner(self) -> IndexMap<K, V> {
        self.inner
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        OrderedMap {
            inner: IndexMap::default(),
        }
    }
}

// Two maps are equal only if their entries also appear in the same order.
impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.iter().eq(other.inner.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
