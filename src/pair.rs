//! Pair: immutable key/value element.

/// An immutable two-field value.
///
/// Ordered dictionaries store their entries as `Pair<K, V>`, and every
/// dictionary enumerates its entries as `Pair<&K, &V>`. Fields are only
/// readable; a pair cannot be changed after construction.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Pair<K, V> {
    first: K,
    second: V,
}

impl<K, V> Pair<K, V> {
    pub const fn new(first: K, second: V) -> Self {
        Pair { first, second }
    }

    pub fn first(&self) -> &K {
        &self.first
    }

    pub fn second(&self) -> &V {
        &self.second
    }

    pub fn into_first(self) -> K {
        self.first
    }

    pub fn into_second(self) -> V {
        self.second
    }

    pub fn into_inner(self) -> (K, V) {
        (self.first, self.second)
    }

    /// Borrow both fields, e.g. to hand a stored pair to an enumeration callback.
    pub fn as_refs(&self) -> Pair<&K, &V> {
        Pair::new(&self.first, &self.second)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((first, second): (K, V)) -> Self {
        Pair::new(first, second)
    }
}

impl<K, V> From<Pair<K, V>> for (K, V) {
    fn from(pair: Pair<K, V>) -> Self {
        pair.into_inner()
    }
}
