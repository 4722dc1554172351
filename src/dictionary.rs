//! Dictionary: the key/value contract shared by the hash-backed and the
//! ordered backends.

use crate::collection::{map, Collection, MapView};
use crate::pair::Pair;
use core::ops::ControlFlow;

/// A mapping from unique keys to values.
///
/// Implemented by [`HashDictionary`](crate::HashDictionary) (order unspecified)
/// and [`OrderedDictionary`](crate::OrderedDictionary) (ascending per its
/// comparator). Absence is always reported with `None`.
pub trait Dictionary<K, V> {
    /// Drops every entry. Ordered dictionaries keep their comparator.
    fn clear(&mut self);

    /// Removes the entry for `key` and returns its value; no-op when absent.
    fn delete(&mut self, key: &K) -> Option<V>;

    /// Enumerates entries until `f` breaks. See [`Collection::for_each`].
    fn for_each<'a, B, F>(&'a self, f: F) -> ControlFlow<B>
    where
        F: FnMut(Pair<&'a K, &'a V>) -> ControlFlow<B>,
        K: 'a,
        V: 'a;

    fn get(&self, key: &K) -> Option<&V>;

    /// Inserts or replaces the entry for `key`, returning the previous value.
    fn set(&mut self, key: K, value: V) -> Option<V>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn has(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// The entries of this dictionary as a [`Collection`].
    fn entries(&self) -> Entries<'_, Self> {
        Entries { dict: self }
    }

    /// Lazy view of the keys, in the dictionary's enumeration order.
    fn keys<'a>(&'a self) -> Keys<'a, Self, K, V>
    where
        K: 'a,
        V: 'a,
    {
        let first: fn(Pair<&'a K, &'a V>) -> &'a K = Pair::into_first;
        map(self.entries(), first)
    }

    /// Lazy view of the values, in the dictionary's enumeration order.
    fn values<'a>(&'a self) -> Values<'a, Self, K, V>
    where
        K: 'a,
        V: 'a,
    {
        let second: fn(Pair<&'a K, &'a V>) -> &'a V = Pair::into_second;
        map(self.entries(), second)
    }
}

/// A dictionary seen as a collection of `Pair<&K, &V>`.
pub struct Entries<'a, D: ?Sized> {
    dict: &'a D,
}

impl<'a, D: ?Sized> Clone for Entries<'a, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, D: ?Sized> Copy for Entries<'a, D> {}

impl<'a, K, V, D> Collection<Pair<&'a K, &'a V>> for Entries<'a, D>
where
    D: Dictionary<K, V> + ?Sized,
    K: 'a,
    V: 'a,
{
    fn for_each<B, F>(&self, f: F) -> ControlFlow<B>
    where
        F: FnMut(Pair<&'a K, &'a V>) -> ControlFlow<B>,
    {
        self.dict.for_each(f)
    }

    fn size(&self) -> usize {
        self.dict.size()
    }
}

pub type Keys<'a, D, K, V> =
    MapView<Entries<'a, D>, fn(Pair<&'a K, &'a V>) -> &'a K, Pair<&'a K, &'a V>>;

pub type Values<'a, D, K, V> =
    MapView<Entries<'a, D>, fn(Pair<&'a K, &'a V>) -> &'a V, Pair<&'a K, &'a V>>;
