//! Queue: first-in, first-out view of a [`Deque`].

use crate::collection::Collection;
use crate::deque::{Deque, Iter};
use core::fmt;
use core::ops::ControlFlow;

/// FIFO container: `push` at the back, `pop`/`peek` at the front.
pub struct Queue<T> {
    inner: Deque<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Self {
        Self {
            inner: Deque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Deque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: T) {
        self.inner.push_back(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.inner.peek_front()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Oldest element first.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> Collection<&'a T> for &'a Queue<T> {
    fn for_each<B, F>(&self, f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a T) -> ControlFlow<B>,
    {
        let queue: &'a Queue<T> = *self;
        queue.inner.for_each(f)
    }

    fn size(&self) -> usize {
        self.inner.size()
    }
}
