//! Stack: last-in, first-out view of a [`Deque`].

use crate::collection::Collection;
use crate::deque::{Deque, Iter};
use core::fmt;
use core::iter::Rev;
use core::ops::ControlFlow;

/// LIFO container. `push`, `pop` and `peek` all work on the back of the
/// underlying deque.
pub struct Stack<T> {
    inner: Deque<T>,
}

impl<T> Stack<T> {
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
        self.inner.pop_back()
    }

    pub fn peek(&self) -> Option<&T> {
        self.inner.peek_back()
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

    /// Top of the stack first.
    pub fn iter(&self) -> Rev<Iter<'_, T>> {
        self.inner.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> Collection<&'a T> for &'a Stack<T> {
    fn for_each<B, F>(&self, f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a T) -> ControlFlow<B>,
    {
        let stack: &'a Stack<T> = *self;
        stack.iter().try_for_each(f)
    }

    fn size(&self) -> usize {
        self.inner.size()
    }
}
