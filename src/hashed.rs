//! Hash-backed dictionary and set.
//!
//! Thin layers over `hashbrown` tables. Enumeration order is whatever the
//! table yields and may change between calls.

use crate::dictionary::Dictionary;
use crate::pair::Pair;
use crate::set::Set;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::ops::ControlFlow;
use tracing::trace;

/// Hasher used when none is supplied.
#[cfg(feature = "foldhash")]
pub type DefaultHashBuilder = foldhash::fast::RandomState;
/// Hasher used when none is supplied.
#[cfg(not(feature = "foldhash"))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// Unordered [`Dictionary`] over a hash table.
pub struct HashDictionary<K, V, S = DefaultHashBuilder> {
    map: hashbrown::HashMap<K, V, S>,
}

impl<K, V> HashDictionary<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<K, V> Default for HashDictionary<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashDictionary<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            map: hashbrown::HashMap::with_hasher(hasher),
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            map: hashbrown::HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    pub fn hasher(&self) -> &S {
        self.map.hasher()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Pair<&K, &V>> + '_ {
        self.map.iter().map(|(k, v)| Pair::new(k, v))
    }
}

impl<K, V, S> Dictionary<K, V> for HashDictionary<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone,
{
    fn clear(&mut self) {
        let dropped = self.map.len();
        // A fresh table; the old one is dropped whole.
        self.map = hashbrown::HashMap::with_hasher(self.map.hasher().clone());
        trace!(dropped, "hash dictionary cleared");
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    fn for_each<'a, B, F>(&'a self, mut f: F) -> ControlFlow<B>
    where
        F: FnMut(Pair<&'a K, &'a V>) -> ControlFlow<B>,
        K: 'a,
        V: 'a,
    {
        self.map.iter().try_for_each(|(k, v)| f(Pair::new(k, v)))
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    fn size(&self) -> usize {
        self.map.len()
    }

    fn has(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }
}

impl<K, V, S> fmt::Debug for HashDictionary<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K, V, S> Extend<(K, V)> for HashDictionary<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.map.extend(iter);
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashDictionary<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

/// Unordered [`Set`] over a hash table.
pub struct HashSet<T, S = DefaultHashBuilder> {
    set: hashbrown::HashSet<T, S>,
}

impl<T> HashSet<T>
where
    T: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<T> Default for HashSet<T>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Clone,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            set: hashbrown::HashSet::with_hasher(hasher),
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            set: hashbrown::HashSet::with_capacity_and_hasher(capacity, hasher),
        }
    }

    pub fn hasher(&self) -> &S {
        self.set.hasher()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.set.iter()
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Clone,
{
    fn add(&mut self, value: T) -> bool {
        self.set.replace(value).is_none()
    }

    fn clear(&mut self) {
        let dropped = self.set.len();
        self.set = hashbrown::HashSet::with_hasher(self.set.hasher().clone());
        trace!(dropped, "hash set cleared");
    }

    fn delete(&mut self, value: &T) -> bool {
        self.set.remove(value)
    }

    fn for_each<'a, B, F>(&'a self, f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a T) -> ControlFlow<B>,
        T: 'a,
    {
        self.set.iter().try_for_each(f)
    }

    fn has(&self, value: &T) -> bool {
        self.set.contains(value)
    }

    fn size(&self) -> usize {
        self.set.len()
    }
}

impl<T, S> fmt::Debug for HashSet<T, S>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.set.iter()).finish()
    }
}

impl<T, S> Extend<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.set.replace(value);
        }
    }
}

impl<T, S> FromIterator<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            set: iter.into_iter().collect(),
        }
    }
}
