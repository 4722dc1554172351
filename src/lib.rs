//! polycoll: interchangeable dictionaries and sets (hash-backed or
//! comparator-ordered) plus ring-buffer deques, queues and stacks, all
//! enumerable through one callback protocol.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one behavioral contract per container kind, so callers can swap
//!   a hash-backed container for an ordered one (or back) without touching
//!   the code that uses it.
//! - Layers:
//!   - Collection<T>: `for_each` with cooperative early exit through
//!     `ControlFlow`, plus `size`. `map` builds lazy views on top of any
//!     collection; `to_vec` materializes one.
//!   - Dictionary<K, V> / Set<T>: the associative contracts. `keys()` and
//!     `values()` are lazy `map` views over the entry enumeration, so no
//!     backend stores them separately.
//!   - HashDictionary / HashSet: `hashbrown` tables, order unspecified.
//!   - Tree<T, C>: AVL engine over a `slotmap` arena, ordered only by a
//!     strict weak ordering `C: Less<T>`.
//!   - OrderedDictionary / OrderedSet: delegate to `Tree`. The dictionary
//!     stores `Pair<K, V>` and lifts the key comparator onto pairs.
//!   - Deque<T>: growable ring buffer; Queue<T> and Stack<T> restrict it.
//!
//! Constraints
//! - Single-threaded: no internal locking. Sharing a container across
//!   threads needs external mutual exclusion around the whole container.
//! - Enumeration borrows the container, so structural mutation during
//!   `for_each` is rejected at compile time; read-only calls from inside
//!   the callback are fine.
//! - Absence is `None`, never a panic. Callback failures come back as the
//!   `Break` payload of `for_each`.
//! - Comparators must be strict weak orderings. A comparator that is not
//!   yields unspecified (lost, duplicated or unreachable) entries; this is
//!   never detected or reported.
//!
//! Ordered keyed lookup
//! - `Tree` exposes `get_by`/`delete_by` taking a closure that orders the
//!   sought key against a stored item. Ordered dictionaries use those, so a
//!   lookup by key never has to fabricate a placeholder value.
//!
//! Capacity policy
//! - Deques never shrink on their own, trading memory for predictable
//!   amortized cost. `Deque::shrink_to_fit` releases spare slots on request.
//!
//! Reentrancy
//! - `Tree` calls user code (the comparator) while nodes are being relinked.
//!   A debug-only check panics if that code re-enters the same tree; release
//!   builds carry no check.
//!
//! Notes and non-goals
//! - No thread-safety guarantees and no serialization.
//! - Containers are released when their owner drops them; there is no
//!   explicit teardown.

mod collection;
mod deque;
mod dictionary;
mod hashed;
mod ordered;
mod pair;
mod queue;
mod reentrancy;
mod set;
mod stack;
pub mod tree;
mod tree_proptest;

// Public surface
pub use collection::{map, to_vec, Collection, MapView};
pub use deque::{Deque, Iter as DequeIter, MIN_CAPACITY};
pub use dictionary::{Dictionary, Entries, Keys, Values};
pub use hashed::{DefaultHashBuilder, HashDictionary, HashSet};
pub use ordered::{OrderedDictionary, OrderedSet};
pub use pair::Pair;
pub use queue::Queue;
pub use set::{Elements, Set};
pub use stack::Stack;

use core::hash::Hash;

/// Creates an unordered dictionary backed by a hash table.
pub fn new_dictionary<K, V>() -> HashDictionary<K, V>
where
    K: Eq + Hash,
{
    HashDictionary::new()
}

/// Creates an unordered set backed by a hash table.
pub fn new_set<T>() -> HashSet<T>
where
    T: Eq + Hash,
{
    HashSet::new()
}

/// Creates a dictionary enumerating in ascending key order per `less`.
pub fn new_sorted_dictionary<K, V, L>(less: L) -> OrderedDictionary<K, V, L>
where
    L: Fn(&K, &K) -> bool,
{
    OrderedDictionary::new(less)
}

/// Creates a set enumerating in ascending order per `less`.
pub fn new_sorted_set<T, L>(less: L) -> OrderedSet<T, L>
where
    L: Fn(&T, &T) -> bool,
{
    OrderedSet::new(less)
}

/// Creates an empty ring-buffer deque.
pub fn new_deque<T>() -> Deque<T> {
    Deque::new()
}

/// Creates an empty FIFO queue.
pub fn new_queue<T>() -> Queue<T> {
    Queue::new()
}

/// Creates an empty LIFO stack.
pub fn new_stack<T>() -> Stack<T> {
    Stack::new()
}
