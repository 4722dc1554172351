//! Set: the unique-value contract shared by the hash-backed and the ordered
//! backends.

use crate::collection::Collection;
use core::ops::ControlFlow;

/// A collection of unique values.
///
/// Uniqueness is decided by `Eq`/`Hash` for [`HashSet`](crate::HashSet) and by
/// comparator equivalence for [`OrderedSet`](crate::OrderedSet).
pub trait Set<T> {
    /// Inserts `value`, replacing an equivalent stored value if there is one.
    /// Returns `true` when the set grew.
    fn add(&mut self, value: T) -> bool;

    /// Drops every value. Ordered sets keep their comparator.
    fn clear(&mut self);

    /// Removes the value equivalent to `value`. Returns `false` when absent.
    fn delete(&mut self, value: &T) -> bool;

    /// Enumerates values until `f` breaks. See [`Collection::for_each`].
    fn for_each<'a, B, F>(&'a self, f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a T) -> ControlFlow<B>,
        T: 'a;

    fn has(&self, value: &T) -> bool;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The values of this set as a [`Collection`].
    fn elements(&self) -> Elements<'_, Self> {
        Elements { set: self }
    }
}

/// A set seen as a collection of `&T`.
pub struct Elements<'a, S: ?Sized> {
    set: &'a S,
}

impl<'a, S: ?Sized> Clone for Elements<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: ?Sized> Copy for Elements<'a, S> {}

impl<'a, T, S> Collection<&'a T> for Elements<'a, S>
where
    S: Set<T> + ?Sized,
    T: 'a,
{
    fn for_each<B, F>(&self, f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a T) -> ControlFlow<B>,
    {
        self.set.for_each(f)
    }

    fn size(&self) -> usize {
        self.set.size()
    }
}
