use std::{
    collections::{hash_map::Entry, HashMap},
    hash::Hash,
};

/// A cache for the results of a single-argument function, owned by the
/// caller.
///
/// There is no hidden state: the cache lives exactly as long as the `Memo`
/// value, and [`clear`](Memo::clear) empties it.
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::Memo;
/// let mut calls = 0;
/// let mut squares = Memo::new();
/// for x in [3, 4, 3, 3] {
///     squares.get_or_insert_with(x, |x| {
///         calls += 1;
///         x * x
///     });
/// }
/// assert_eq!(calls, 2);
/// assert_eq!(squares.get(&4), Some(&16));
/// ```
#[derive(Clone, Debug)]
pub struct Memo<K, V> {
    cache: HashMap<K, V>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Memo {
            cache: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached value for `key`, if any. Never computes anything.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.cache.get(key)
    }

    /// The cached value for `key`, computing it with `f` on a miss.
    pub fn get_or_insert_with(&mut self, key: K, f: impl FnOnce(&K) -> V) -> &V {
        let cached = self.cache.len();
        match self.cache.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                log::trace!("memo miss ({cached} values cached)");
                let value = f(entry.key());
                entry.insert(value)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
