//! Collection: the enumeration protocol shared by every container, and the
//! lazy `map` view built on top of it.
//!
//! Enumeration is push-based: the container calls back once per element and
//! the callback answers with a `ControlFlow`. The first `Break` ends the walk
//! and its payload is handed back to whoever started it, which is how a
//! callback reports a failure or an early result.

use core::marker::PhantomData;
use core::ops::ControlFlow;

/// A read-only, enumerable view.
///
/// Primary containers implement this through a shared borrow
/// (`&'a Deque<T>` yields `&'a T`), or through the `entries()`/`elements()`
/// views of the associative contracts.
pub trait Collection<T> {
    /// Calls `f` once per element in this collection's order until `f`
    /// returns `Break`. Returns that `Break`, or `Continue(())` if every
    /// element was visited.
    fn for_each<B, F>(&self, f: F) -> ControlFlow<B>
    where
        F: FnMut(T) -> ControlFlow<B>;

    /// Number of elements `for_each` would visit.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// A lazy view applying `f` to every element of `source`.
///
/// Holds the source and the transform only; nothing is evaluated until the
/// view itself is enumerated, and every enumeration re-runs `f`.
pub struct MapView<C, F, T> {
    source: C,
    f: F,
    _item: PhantomData<fn(T)>,
}

/// Builds a [`MapView`] over `source`. Does no work.
pub fn map<C, F, T, U>(source: C, f: F) -> MapView<C, F, T>
where
    C: Collection<T>,
    F: Fn(T) -> U,
{
    MapView {
        source,
        f,
        _item: PhantomData,
    }
}

impl<C, F, T, U> Collection<U> for MapView<C, F, T>
where
    C: Collection<T>,
    F: Fn(T) -> U,
{
    fn for_each<B, G>(&self, mut g: G) -> ControlFlow<B>
    where
        G: FnMut(U) -> ControlFlow<B>,
    {
        let f = &self.f;
        self.source.for_each(|item| g(f(item)))
    }

    fn size(&self) -> usize {
        self.source.size()
    }
}

impl<C: Clone, F: Clone, T> Clone for MapView<C, F, T> {
    fn clone(&self) -> Self {
        MapView {
            source: self.source.clone(),
            f: self.f.clone(),
            _item: PhantomData,
        }
    }
}

impl<C: Copy, F: Copy, T> Copy for MapView<C, F, T> {}

/// Materializes `c` into a vector in enumeration order.
pub fn to_vec<C, T>(c: &C) -> Vec<T>
where
    C: Collection<T> + ?Sized,
{
    let mut out = Vec::with_capacity(c.size());
    let _ = c.for_each(|item| {
        out.push(item);
        ControlFlow::<()>::Continue(())
    });
    out
}
