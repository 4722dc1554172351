//! Tree: comparator-driven ordered engine behind the sorted containers.
//!
//! An AVL tree whose nodes live in a `slotmap` arena and link to each other
//! by key. Items are whole elements; ordering and equivalence come only from
//! the engine's [`Less`] comparator (two items are equivalent when neither is
//! less than the other). Callers that want a keyed lookup without building a
//! probe element use the `*_by` entry points, which take a closure ordering
//! the probe against a stored item. The closure is handed the engine's
//! comparator so it can reuse it while the tree is borrowed.

use crate::reentrancy::ReentryCheck;
use core::cmp::Ordering;
use core::ops::ControlFlow;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    struct NodeKey;
}

/// Strict weak ordering over `T`.
///
/// Must be irreflexive and transitive; an ordering that is not leaves the
/// tree in an unspecified (but memory-safe) shape.
pub trait Less<T: ?Sized> {
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Orders `probe` against `item` using a strict `less`.
#[inline]
pub(crate) fn order_by<T: ?Sized, L>(less: L, probe: &T, item: &T) -> Ordering
where
    L: Fn(&T, &T) -> bool,
{
    if less(probe, item) {
        Ordering::Less
    } else if less(item, probe) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

struct Node<T> {
    item: T,
    left: Option<NodeKey>,
    right: Option<NodeKey>,
    height: u8,
}

type Nodes<T> = SlotMap<NodeKey, Node<T>>;

pub struct Tree<T, C> {
    less: C,
    nodes: Nodes<T>,
    root: Option<NodeKey>,
    reentry: ReentryCheck,
}

impl<T, C> Tree<T, C>
where
    C: Less<T>,
{
    pub fn new(less: C) -> Self {
        Self {
            less,
            nodes: SlotMap::with_key(),
            root: None,
            reentry: ReentryCheck::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn comparator(&self) -> &C {
        &self.less
    }

    /// The stored item equivalent to `probe`.
    pub fn get(&self, probe: &T) -> Option<&T> {
        self.get_by(|less, item| order_by(|a, b| less.less(a, b), probe, item))
    }

    /// Keyed lookup. `cmp(less, item)` tells where the sought item lies
    /// relative to `item`: `Less` to the left, `Greater` to the right.
    pub fn get_by<F>(&self, mut cmp: F) -> Option<&T>
    where
        F: FnMut(&C, &T) -> Ordering,
    {
        let _s = self.reentry.section("get");
        let mut at = self.root;
        while let Some(k) = at {
            let node = &self.nodes[k];
            at = match cmp(&self.less, &node.item) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(&node.item),
            };
        }
        None
    }

    /// Inserts `item`, or replaces the equivalent stored item and returns it.
    pub fn set(&mut self, item: T) -> Option<T> {
        let _s = self.reentry.section("set");
        let (root, old) = insert(&mut self.nodes, &self.less, self.root, item);
        self.root = Some(root);
        old
    }

    /// Removes and returns the item equivalent to `probe`.
    pub fn delete(&mut self, probe: &T) -> Option<T> {
        self.delete_by(|less, item| order_by(|a, b| less.less(a, b), probe, item))
    }

    /// Keyed removal; `cmp` as in [`Tree::get_by`].
    pub fn delete_by<F>(&mut self, mut cmp: F) -> Option<T>
    where
        F: FnMut(&C, &T) -> Ordering,
    {
        let less = &self.less;
        let _s = self.reentry.section("delete");
        let (root, removed) = remove(&mut self.nodes, self.root, &mut |item: &T| cmp(less, item));
        self.root = root;
        removed
    }

    /// Drops every item. The comparator stays.
    pub fn clear(&mut self) {
        let _s = self.reentry.section("clear");
        self.nodes.clear();
        self.root = None;
    }

    /// Ascending in-order walk; stops at the first `Break`.
    ///
    /// The comparator is not called, so `f` may freely read this tree.
    pub fn scan<'a, B, F>(&'a self, f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a T) -> ControlFlow<B>,
    {
        self.iter().try_for_each(f)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        let mut it = Iter {
            nodes: &self.nodes,
            stack: Vec::with_capacity(height(&self.nodes, self.root) as usize),
            remaining: self.nodes.len(),
        };
        it.descend(self.root);
        it
    }
}

/// Ascending iterator over a [`Tree`].
pub struct Iter<'a, T> {
    nodes: &'a Nodes<T>,
    stack: Vec<NodeKey>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn descend(&mut self, mut at: Option<NodeKey>) {
        while let Some(k) = at {
            self.stack.push(k);
            at = self.nodes[k].left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let k = self.stack.pop()?;
        let nodes = self.nodes;
        let node = &nodes[k];
        self.descend(node.right);
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

fn height<T>(nodes: &Nodes<T>, at: Option<NodeKey>) -> u8 {
    at.map_or(0, |k| nodes[k].height)
}

fn update<T>(nodes: &mut Nodes<T>, k: NodeKey) {
    let h = height(nodes, nodes[k].left).max(height(nodes, nodes[k].right));
    nodes[k].height = h + 1;
}

/// Requires a right child; rebalancing only rotates toward the taller side.
fn rotate_left<T>(nodes: &mut Nodes<T>, k: NodeKey) -> NodeKey {
    debug_assert!(nodes[k].right.is_some(), "left rotation without a right child");
    let Some(r) = nodes[k].right else {
        return k;
    };
    nodes[k].right = nodes[r].left;
    nodes[r].left = Some(k);
    update(nodes, k);
    update(nodes, r);
    r
}

/// Requires a left child.
fn rotate_right<T>(nodes: &mut Nodes<T>, k: NodeKey) -> NodeKey {
    debug_assert!(nodes[k].left.is_some(), "right rotation without a left child");
    let Some(l) = nodes[k].left else {
        return k;
    };
    nodes[k].left = nodes[l].right;
    nodes[l].right = Some(k);
    update(nodes, k);
    update(nodes, l);
    l
}

/// Restores the AVL balance at `k` and returns the subtree's new root.
fn rebalance<T>(nodes: &mut Nodes<T>, k: NodeKey) -> NodeKey {
    update(nodes, k);
    let (left, right) = (nodes[k].left, nodes[k].right);
    let balance = height(nodes, left) as i16 - height(nodes, right) as i16;
    if balance > 1 {
        if let Some(l) = left {
            if height(nodes, nodes[l].left) < height(nodes, nodes[l].right) {
                let l = rotate_left(nodes, l);
                nodes[k].left = Some(l);
            }
        }
        return rotate_right(nodes, k);
    }
    if balance < -1 {
        if let Some(r) = right {
            if height(nodes, nodes[r].right) < height(nodes, nodes[r].left) {
                let r = rotate_right(nodes, r);
                nodes[k].right = Some(r);
            }
        }
        return rotate_left(nodes, k);
    }
    k
}

fn insert<T, C: Less<T>>(
    nodes: &mut Nodes<T>,
    less: &C,
    at: Option<NodeKey>,
    item: T,
) -> (NodeKey, Option<T>) {
    let Some(k) = at else {
        let k = nodes.insert(Node {
            item,
            left: None,
            right: None,
            height: 1,
        });
        return (k, None);
    };
    let (left, right) = (nodes[k].left, nodes[k].right);
    if less.less(&item, &nodes[k].item) {
        let (l, old) = insert(nodes, less, left, item);
        nodes[k].left = Some(l);
        (rebalance(nodes, k), old)
    } else if less.less(&nodes[k].item, &item) {
        let (r, old) = insert(nodes, less, right, item);
        nodes[k].right = Some(r);
        (rebalance(nodes, k), old)
    } else {
        let old = core::mem::replace(&mut nodes[k].item, item);
        (k, Some(old))
    }
}

fn remove<T, F>(
    nodes: &mut Nodes<T>,
    at: Option<NodeKey>,
    cmp: &mut F,
) -> (Option<NodeKey>, Option<T>)
where
    F: FnMut(&T) -> Ordering,
{
    let Some(k) = at else {
        return (None, None);
    };
    let (left, right) = (nodes[k].left, nodes[k].right);
    match cmp(&nodes[k].item) {
        Ordering::Less => {
            let (l, removed) = remove(nodes, left, cmp);
            nodes[k].left = l;
            (Some(rebalance(nodes, k)), removed)
        }
        Ordering::Greater => {
            let (r, removed) = remove(nodes, right, cmp);
            nodes[k].right = r;
            (Some(rebalance(nodes, k)), removed)
        }
        Ordering::Equal => {
            let replacement = match (left, right) {
                (None, only) | (only, None) => only,
                (Some(l), Some(r)) => {
                    let (rest, min) = detach_min(nodes, r);
                    nodes[min].left = Some(l);
                    nodes[min].right = rest;
                    Some(rebalance(nodes, min))
                }
            };
            (replacement, nodes.remove(k).map(|node| node.item))
        }
    }
}

/// Unlinks the leftmost node under `k`. Returns the remaining subtree and the
/// detached node, whose links the caller overwrites.
fn detach_min<T>(nodes: &mut Nodes<T>, k: NodeKey) -> (Option<NodeKey>, NodeKey) {
    let left = nodes[k].left;
    match left {
        None => (nodes[k].right, k),
        Some(l) => {
            let (rest, min) = detach_min(nodes, l);
            nodes[k].left = rest;
            (Some(rebalance(nodes, k)), min)
        }
    }
}

#[cfg(test)]
impl<T, C> Tree<T, C> {
    /// Checks AVL balance and stored heights; returns the tree height.
    pub(crate) fn assert_balanced(&self) -> u8 {
        fn walk<T>(nodes: &Nodes<T>, at: Option<NodeKey>) -> u8 {
            let Some(k) = at else { return 0 };
            let l = walk(nodes, nodes[k].left);
            let r = walk(nodes, nodes[k].right);
            assert!(l.abs_diff(r) <= 1, "unbalanced node: {l} vs {r}");
            assert_eq!(nodes[k].height, l.max(r) + 1, "stale height");
            l.max(r) + 1
        }
        walk(&self.nodes, self.root)
    }
}
