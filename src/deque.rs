//! Deque: double-ended queue over a growable ring buffer.
//!
//! Representation
//! - `buf` holds `capacity` slots; live elements occupy the logical range
//!   `0..len`, and logical index `i` lives in physical slot
//!   `(head + i) % capacity`. Slots outside that range are `None`.
//! - Pushing into a full buffer first regrows it to twice the capacity (at
//!   least `MIN_CAPACITY`), laying the elements out in logical order from
//!   slot 0.
//!
//! Capacity policy
//! - Capacity only grows on its own: pops and `clear` keep the buffer.
//!   `shrink_to_fit` is the only way to hand memory back.

use crate::collection::Collection;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::ControlFlow;
use tracing::trace;

/// Smallest capacity allocated on first growth.
pub const MIN_CAPACITY: usize = 8;

pub struct Deque<T> {
    buf: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> Deque<T> {
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            head: 0,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        Self { buf, head: 0, len: 0 }
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Physical slot of logical index `i`. Only valid while capacity > 0.
    #[inline]
    fn slot(&self, i: usize) -> usize {
        (self.head + i) % self.buf.len()
    }

    /// Moves the elements into a fresh buffer of `capacity` slots, in
    /// logical order starting at slot 0.
    fn relayout(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut buf = Vec::with_capacity(capacity);
        for i in 0..self.len {
            let at = self.slot(i);
            buf.push(self.buf[at].take());
        }
        buf.resize_with(capacity, || None);
        self.buf = buf;
        self.head = 0;
    }

    fn grow(&mut self) {
        let from = self.buf.len();
        let to = (from * 2).max(MIN_CAPACITY);
        self.relayout(to);
        trace!(from, to, len = self.len, "ring buffer grown");
    }

    pub fn push_back(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.grow();
        }
        let at = self.slot(self.len);
        self.buf[at] = Some(value);
        self.len += 1;
    }

    pub fn push_front(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.grow();
        }
        let cap = self.buf.len();
        self.head = (self.head + cap - 1) % cap;
        self.buf[self.head] = Some(value);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buf[self.head].take();
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        value
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let at = self.slot(self.len - 1);
        self.len -= 1;
        self.buf[at].take()
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Element at logical index `i` (0 is the front).
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len {
            return None;
        }
        self.buf[self.slot(i)].as_ref()
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        for i in 0..self.len {
            let at = self.slot(i);
            self.buf[at] = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Releases every slot not holding an element.
    pub fn shrink_to_fit(&mut self) {
        let from = self.buf.len();
        if from == self.len {
            return;
        }
        self.relayout(self.len);
        self.buf.shrink_to_fit();
        trace!(from, to = self.len, "ring buffer shrunk");
    }

    /// Front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            front: 0,
            back: self.len,
        }
    }

    /// Calls `f` front to back until it breaks. Same as [`Collection::for_each`].
    pub fn for_each<'a, B, F>(&'a self, f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a T) -> ControlFlow<B>,
    {
        self.iter().try_for_each(f)
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut d = Deque::new();
        d.extend(iter);
        d
    }
}

impl<'a, T> Collection<&'a T> for &'a Deque<T> {
    fn for_each<B, F>(&self, f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a T) -> ControlFlow<B>,
    {
        let deque: &'a Deque<T> = *self;
        deque.iter().try_for_each(f)
    }

    fn size(&self) -> usize {
        self.len
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Deque`] in logical order.
pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.deque.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.deque.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
