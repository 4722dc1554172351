//! Comparator-ordered dictionary and set.
//!
//! Both delegate storage and order to [`Tree`], which owns the caller's
//! comparator and keeps it across `clear`. The dictionary stores `Pair<K, V>` and
//! lifts the key comparator onto pairs by looking at `first` only; the value
//! never takes part in ordering or equivalence.

use crate::dictionary::Dictionary;
use crate::pair::Pair;
use crate::set::Set;
use crate::tree::{order_by, Less, Tree};
use core::fmt;
use core::ops::ControlFlow;
use tracing::trace;

/// Key comparator lifted onto pairs.
struct ByKey<L>(L);

impl<K, V, L> Less<Pair<K, V>> for ByKey<L>
where
    L: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &Pair<K, V>, b: &Pair<K, V>) -> bool {
        (self.0)(a.first(), b.first())
    }
}

/// Caller's comparator used as is.
struct ByValue<L>(L);

impl<T, L> Less<T> for ByValue<L>
where
    L: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// [`Dictionary`] enumerating in ascending key order per `less`.
///
/// Keys are unique up to comparator equivalence: `set` with a key that is
/// neither less nor greater than a stored key replaces that entry, key
/// included.
pub struct OrderedDictionary<K, V, L> {
    tree: Tree<Pair<K, V>, ByKey<L>>,
}

impl<K, V, L> OrderedDictionary<K, V, L>
where
    L: Fn(&K, &K) -> bool,
{
    pub fn new(less: L) -> Self {
        Self {
            tree: Tree::new(ByKey(less)),
        }
    }

    pub fn comparator(&self) -> &L {
        &self.tree.comparator().0
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Pair<&K, &V>> + '_ {
        self.tree.iter().map(Pair::as_refs)
    }
}

impl<K, V, L> Dictionary<K, V> for OrderedDictionary<K, V, L>
where
    L: Fn(&K, &K) -> bool,
{
    fn clear(&mut self) {
        let dropped = self.tree.len();
        self.tree.clear();
        trace!(dropped, "sorted dictionary cleared");
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        self.tree
            .delete_by(|less, pair| order_by(&less.0, key, pair.first()))
            .map(Pair::into_second)
    }

    fn for_each<'a, B, F>(&'a self, mut f: F) -> ControlFlow<B>
    where
        F: FnMut(Pair<&'a K, &'a V>) -> ControlFlow<B>,
        K: 'a,
        V: 'a,
    {
        self.tree.scan(|pair| f(pair.as_refs()))
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.tree
            .get_by(|less, pair| order_by(&less.0, key, pair.first()))
            .map(Pair::second)
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.tree
            .set(Pair::new(key, value))
            .map(Pair::into_second)
    }

    fn size(&self) -> usize {
        self.tree.len()
    }
}

impl<K, V, L> fmt::Debug for OrderedDictionary<K, V, L>
where
    K: fmt::Debug,
    V: fmt::Debug,
    L: Fn(&K, &K) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|pair| pair.into_inner()))
            .finish()
    }
}

impl<K, V, L> Extend<(K, V)> for OrderedDictionary<K, V, L>
where
    L: Fn(&K, &K) -> bool,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.tree.set(Pair::new(key, value));
        }
    }
}

/// [`Set`] enumerating in ascending order per `less`.
pub struct OrderedSet<T, L> {
    tree: Tree<T, ByValue<L>>,
}

impl<T, L> OrderedSet<T, L>
where
    L: Fn(&T, &T) -> bool,
{
    pub fn new(less: L) -> Self {
        Self {
            tree: Tree::new(ByValue(less)),
        }
    }

    pub fn comparator(&self) -> &L {
        &self.tree.comparator().0
    }

    /// Values in ascending order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.tree.iter()
    }
}

impl<T, L> Set<T> for OrderedSet<T, L>
where
    L: Fn(&T, &T) -> bool,
{
    fn add(&mut self, value: T) -> bool {
        self.tree.set(value).is_none()
    }

    fn clear(&mut self) {
        let dropped = self.tree.len();
        self.tree.clear();
        trace!(dropped, "sorted set cleared");
    }

    fn delete(&mut self, value: &T) -> bool {
        self.tree.delete(value).is_some()
    }

    fn for_each<'a, B, F>(&'a self, f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a T) -> ControlFlow<B>,
        T: 'a,
    {
        self.tree.scan(f)
    }

    fn has(&self, value: &T) -> bool {
        self.tree.get(value).is_some()
    }

    fn size(&self) -> usize {
        self.tree.len()
    }
}

impl<T, L> fmt::Debug for OrderedSet<T, L>
where
    T: fmt::Debug,
    L: Fn(&T, &T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, L> Extend<T> for OrderedSet<T, L>
where
    L: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.tree.set(value);
        }
    }
}
