//! Plain binary search tree mechanics.
//!
//! `OrderedTree` knows nothing about colors beyond storing them: it searches, walks, places new
//! red leaves and splices subtrees. Rebalancing lives in [`RBTree`](crate::RBTree), which is the
//! only thing allowed to mutate an `OrderedTree`.

use crate::node::{Arena, Color, NodeId, Side};
use compare::{Compare, Natural};
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
};

/// An unbalanced binary search tree over an arena, with a shared black sentinel.
///
/// Obtained read-only through [`RBTree::base`](crate::RBTree::base).
#[derive(Clone)]
pub struct OrderedTree<K, C = Natural<K>> {
    arena: Arena<K>,
    root: NodeId,
    cmp: C,
}

impl<K, C> OrderedTree<K, C> {
    pub(crate) fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        OrderedTree {
            arena: Arena::with_capacity(capacity),
            root: NodeId::NIL,
            cmp,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The sentinel. Always [`NodeId::NIL`].
    #[inline]
    pub fn nil(&self) -> NodeId {
        NodeId::NIL
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arena.live()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_nil()
    }

    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    #[inline]
    pub fn color(&self, id: NodeId) -> Color {
        self.arena[id].color
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> NodeId {
        self.arena[id].parent
    }

    #[inline]
    pub fn left(&self, id: NodeId) -> NodeId {
        self.arena[id].left
    }

    #[inline]
    pub fn right(&self, id: NodeId) -> NodeId {
        self.arena[id].right
    }

    /// Key stored at `id`. `None` for the sentinel.
    #[inline]
    pub fn key(&self, id: NodeId) -> Option<&K> {
        self.arena[id].key.as_ref()
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, side: Side) -> NodeId {
        self.arena[id].child(side)
    }

    #[inline]
    pub(crate) fn live_key(&self, id: NodeId) -> &K {
        self.arena.key(id)
    }

    /// Leftmost node of the subtree rooted at `x`. The sentinel for an empty subtree.
    pub fn minimum(&self, mut x: NodeId) -> NodeId {
        if x.is_nil() {
            return x;
        }
        while !self.left(x).is_nil() {
            x = self.left(x);
        }
        x
    }

    /// Rightmost node of the subtree rooted at `x`. The sentinel for an empty subtree.
    pub fn maximum(&self, mut x: NodeId) -> NodeId {
        if x.is_nil() {
            return x;
        }
        while !self.right(x).is_nil() {
            x = self.right(x);
        }
        x
    }

    /// In-order successor of `x`, or the sentinel if `x` holds the largest key or is the sentinel.
    pub fn successor(&self, mut x: NodeId) -> NodeId {
        if x.is_nil() {
            return x;
        }
        if !self.right(x).is_nil() {
            return self.minimum(self.right(x));
        }
        let mut y = self.parent(x);
        while !y.is_nil() && x == self.right(y) {
            x = y;
            y = self.parent(y);
        }
        y
    }

    /// In-order predecessor of `x`, or the sentinel if `x` holds the smallest key or is the
    /// sentinel.
    pub fn predecessor(&self, mut x: NodeId) -> NodeId {
        if x.is_nil() {
            return x;
        }
        if !self.left(x).is_nil() {
            return self.maximum(self.left(x));
        }
        let mut y = self.parent(x);
        while !y.is_nil() && x == self.left(y) {
            x = y;
            y = self.parent(y);
        }
        y
    }

    /// In-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_, K, C> {
        Iter {
            tree: self,
            front: self.minimum(self.root),
            remaining: self.len(),
        }
    }

    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        debug_assert!(
            !(id.is_nil() && color == Color::Red),
            "the sentinel must stay black"
        );
        self.arena[id].color = color;
    }

    /// Parent links may be written on the sentinel; `transplant` relies on it.
    #[inline]
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.arena[id].parent = parent;
    }

    #[inline]
    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        debug_assert!(!id.is_nil(), "the sentinel has no children");
        *self.arena[id].child_mut(side) = child;
    }

    #[inline]
    pub(crate) fn set_left(&mut self, id: NodeId, child: NodeId) {
        self.set_child(id, Side::Left, child)
    }

    #[inline]
    pub(crate) fn set_right(&mut self, id: NodeId, child: NodeId) {
        self.set_child(id, Side::Right, child)
    }

    /// Points whichever link of `parent` referred to `old` at `new`. A sentinel `parent` means
    /// `old` was the root.
    pub(crate) fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent.is_nil() {
            self.root = new;
        } else if self.left(parent) == old {
            self.set_left(parent, new);
        } else {
            debug_assert_eq!(self.right(parent), old);
            self.set_right(parent, new);
        }
    }

    /// Replaces the subtree rooted at `u` with the subtree rooted at `v` in `u`'s parent.
    ///
    /// `v` may be the sentinel, in which case the sentinel's parent link is set to `u`'s parent.
    /// `u`'s own links are left untouched.
    pub(crate) fn transplant(&mut self, u: NodeId, v: NodeId) {
        let parent = self.parent(u);
        self.replace_child(parent, u, v);
        self.set_parent(v, parent);
    }

    /// Frees a node that is no longer reachable from the root.
    pub(crate) fn release(&mut self, id: NodeId) -> K {
        debug_assert!(id != self.root);
        self.arena.release(id)
    }

    pub(crate) fn clear(&mut self) {
        self.arena.clear();
        self.root = NodeId::NIL;
    }
}

impl<K, C: Compare<K>> OrderedTree<K, C> {
    /// Node holding `key`, if any.
    pub fn search(&self, key: &K) -> Option<NodeId> {
        let mut x = self.root;
        while !x.is_nil() {
            x = match self.cmp.compare(key, self.arena.key(x)) {
                Ordering::Less => self.left(x),
                Ordering::Greater => self.right(x),
                Ordering::Equal => return Some(x),
            };
        }
        None
    }

    /// Places `key` in a new red leaf at the position BST order dictates, without rebalancing.
    ///
    /// Duplicates are rejected: if an equal key is present, `key` is dropped, the tree is left
    /// untouched and `None` is returned.
    pub(crate) fn insert(&mut self, key: K) -> Option<NodeId> {
        let mut parent = NodeId::NIL;
        let mut side = Side::Left;
        let mut x = self.root;
        while !x.is_nil() {
            parent = x;
            side = match self.cmp.compare(&key, self.arena.key(x)) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return None,
            };
            x = self.child(x, side);
        }
        let z = self.arena.alloc(key, parent);
        if parent.is_nil() {
            self.root = z;
        } else {
            self.set_child(parent, side, z);
        }
        Some(z)
    }
}

impl<K: Debug, C> Debug for OrderedTree<K, C> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// In-order iterator over the keys of a tree.
pub struct Iter<'a, K, C = Natural<K>> {
    tree: &'a OrderedTree<K, C>,
    front: NodeId,
    remaining: usize,
}

impl<'a, K, C> Clone for Iter<'a, K, C> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, C> Debug for Iter<'a, K, C> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Iter")
            .field("front", &self.front)
            .field("remaining", &self.remaining)
            .finish()
    }
}

impl<'a, K, C> Iterator for Iter<'a, K, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.front;
        self.front = self.tree.successor(x);
        self.remaining -= 1;
        Some(self.tree.live_key(x))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, C> ExactSizeIterator for Iter<'a, K, C> {}

impl<'a, K, C> FusedIterator for Iter<'a, K, C> {}
