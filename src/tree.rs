// based off of Introduction to Algorithms (CLRS), chapter 13, with a shared sentinel

use crate::{
    base::{Iter, OrderedTree},
    error::NotFound,
    node::{Color, NodeId, Side},
    stats,
    tracing_helpers::{debug_log, trace_log},
};
use compare::{Compare, Natural};
use std::fmt::{self, Debug, Formatter};

/// An ordered set backed by a red-black tree.
///
/// Every `insert` and `delete` costs O(log n) in the worst case, with no amortized rebalancing.
/// Keys are ordered by a [`Compare`] implementation, [`Natural`] ordering by default. Duplicate
/// keys are rejected.
///
/// # Examples
///
/// ```
/// use redblack::{NotFound, RBTree};
///
/// let mut tree = RBTree::new();
/// for key in [10, 20, 30] {
///     assert!(tree.insert(key));
/// }
/// assert!(!tree.insert(20));
/// assert_eq!(tree.delete(&20), Ok(20));
/// assert_eq!(tree.delete(&20), Err(NotFound));
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 30]);
/// ```
#[derive(Clone)]
pub struct RBTree<K, C = Natural<K>> {
    pub(crate) base: OrderedTree<K, C>,
}

impl<K: Ord> RBTree<K> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tree with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, compare::natural())
    }
}

impl<K: Ord> Default for RBTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RBTree<K, C> {
    /// Read-only view of the underlying ordered tree, for structural inspection.
    #[inline]
    pub fn base(&self) -> &OrderedTree<K, C> {
        &self.base
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.base.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        debug_log!(len = self.len(), "clear");
        self.base.clear()
    }

    /// Smallest key.
    pub fn first(&self) -> Option<&K> {
        self.base.key(self.base.minimum(self.base.root()))
    }

    /// Largest key.
    pub fn last(&self) -> Option<&K> {
        self.base.key(self.base.maximum(self.base.root()))
    }

    /// In-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_, K, C> {
        self.base.iter()
    }

    /// Number of nodes on the longest root-to-sentinel path. Walks the whole tree.
    pub fn height(&self) -> usize {
        fn height<K, C>(base: &OrderedTree<K, C>, x: NodeId) -> usize {
            if x.is_nil() {
                0
            } else {
                1 + height(base, base.left(x)).max(height(base, base.right(x)))
            }
        }
        height(&self.base, self.base.root())
    }

    /// Black nodes on any path from the root down to the sentinel, counting the sentinel and not
    /// the root. Zero for an empty tree.
    pub fn black_height(&self) -> usize {
        let mut x = self.base.root();
        if x.is_nil() {
            return 0;
        }
        let mut black = 0;
        loop {
            x = self.base.left(x);
            if self.base.color(x) == Color::Black {
                black += 1;
            }
            if x.is_nil() {
                return black;
            }
        }
    }

    /// Moves `x` down towards `side`, promoting its child on the other side into its position.
    /// `Side::Left` is a left rotation, `Side::Right` a right rotation.
    ///
    /// Colors are untouched and BST order is preserved.
    fn rotate(&mut self, x: NodeId, side: Side) {
        let up = side.opposite();
        let y = self.base.child(x, up);
        assert!(
            !x.is_nil() && !y.is_nil(),
            "rotation at {:?} towards {:?} needs a real {:?} child",
            x,
            side,
            up
        );
        let inner = self.base.child(y, side);
        self.base.set_child(x, up, inner);
        if !inner.is_nil() {
            self.base.set_parent(inner, x);
        }
        let parent = self.base.parent(x);
        self.base.set_parent(y, parent);
        self.base.replace_child(parent, x, y);
        self.base.set_child(y, side, x);
        self.base.set_parent(x, y);

        match side {
            Side::Left => stats::left_rotation(),
            Side::Right => stats::right_rotation(),
        }
        trace_log!(node = ?x, promoted = ?y, side = ?side, "rotate");
    }

    fn insert_fixup(&mut self, mut z: NodeId) {
        let mut iterations = 0;
        // Loop invariant: z is red, and the only red-red violation, if any, is between z and its
        // parent.
        while self.base.color(self.base.parent(z)) == Color::Red {
            iterations += 1;
            let parent = self.base.parent(z);
            // parent is red, so it is not the root and the grandparent is a real node
            let grandparent = self.base.parent(parent);
            let side = if parent == self.base.left(grandparent) {
                Side::Left
            } else {
                Side::Right
            };
            let uncle = self.base.child(grandparent, side.opposite());

            if self.base.color(uncle) == Color::Red {
                self.base.set_color(parent, Color::Black);
                self.base.set_color(uncle, Color::Black);
                self.base.set_color(grandparent, Color::Red);
                z = grandparent;
                stats::insert_recolor();
                trace_log!(node = ?grandparent, "insert fixup: red uncle");
                continue;
            }

            if z == self.base.child(parent, side.opposite()) {
                // inner child, rotate it to the outside first
                z = parent;
                self.rotate(z, side);
                stats::insert_inner_rotation();
                trace_log!(node = ?z, "insert fixup: inner child");
            }

            let parent = self.base.parent(z);
            let grandparent = self.base.parent(parent);
            self.base.set_color(parent, Color::Black);
            self.base.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
            stats::insert_outer_rotation();
            trace_log!(node = ?grandparent, "insert fixup: outer child");
            break;
        }
        let root = self.base.root();
        self.base.set_color(root, Color::Black);
        stats::insert_fixup_iterations(iterations);
    }

    /// Repairs a black-height deficit of one at `x`, which may be the sentinel.
    fn delete_fixup(&mut self, mut x: NodeId) {
        let mut iterations = 0;
        while x != self.base.root() && self.base.color(x) == Color::Black {
            iterations += 1;
            let parent = self.base.parent(x);
            // when x is the sentinel the sibling is a real node, so a sentinel left child means x
            // is the left child
            let side = if x == self.base.left(parent) {
                Side::Left
            } else {
                Side::Right
            };
            let far = side.opposite();
            let mut sibling = self.base.child(parent, far);

            if self.base.color(sibling) == Color::Red {
                self.base.set_color(sibling, Color::Black);
                self.base.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.base.child(parent, far);
                stats::delete_red_sibling();
                trace_log!(node = ?parent, "delete fixup: red sibling");
            }

            let near_nephew = self.base.child(sibling, side);
            let far_nephew = self.base.child(sibling, far);
            if self.base.color(near_nephew) == Color::Black
                && self.base.color(far_nephew) == Color::Black
            {
                self.base.set_color(sibling, Color::Red);
                x = parent;
                stats::delete_black_nephews();
                trace_log!(node = ?parent, "delete fixup: black nephews");
                continue;
            }

            if self.base.color(far_nephew) == Color::Black {
                self.base.set_color(near_nephew, Color::Black);
                self.base.set_color(sibling, Color::Red);
                self.rotate(sibling, far);
                sibling = self.base.child(parent, far);
                stats::delete_near_nephew();
                trace_log!(node = ?near_nephew, "delete fixup: red near nephew");
            }

            let parent_color = self.base.color(parent);
            self.base.set_color(sibling, parent_color);
            self.base.set_color(parent, Color::Black);
            let far_nephew = self.base.child(sibling, far);
            self.base.set_color(far_nephew, Color::Black);
            self.rotate(parent, side);
            stats::delete_far_nephew();
            trace_log!(node = ?parent, "delete fixup: red far nephew");
            break;
        }
        self.base.set_color(x, Color::Black);
        stats::delete_fixup_iterations(iterations);
    }
}

impl<K, C: Compare<K>> RBTree<K, C> {
    /// Creates an empty tree ordered by `cmp`. Closures `Fn(&K, &K) -> Ordering` work too.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::{natural, Compare, RBTree};
    ///
    /// let mut tree = RBTree::with_comparator(natural::<i32>().rev());
    /// for key in 1..=3 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        RBTree {
            base: OrderedTree::with_capacity_and_comparator(capacity, cmp),
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.base.search(key).is_some()
    }

    /// The stored key equal to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.base.search(key).and_then(|x| self.base.key(x))
    }

    /// Smallest stored key greater than `key`. `None` if `key` is absent or the largest.
    pub fn successor(&self, key: &K) -> Option<&K> {
        let x = self.base.search(key)?;
        self.base.key(self.base.successor(x))
    }

    /// Largest stored key less than `key`. `None` if `key` is absent or the smallest.
    pub fn predecessor(&self, key: &K) -> Option<&K> {
        let x = self.base.search(key)?;
        self.base.key(self.base.predecessor(x))
    }

    /// Inserts `key` and rebalances.
    ///
    /// Returns `false`, leaving the tree untouched and dropping `key`, if an equal key is already
    /// present.
    pub fn insert(&mut self, key: K) -> bool {
        let z = match self.base.insert(key) {
            Some(z) => z,
            None => {
                debug_log!("insert: duplicate key rejected");
                return false;
            }
        };
        self.insert_fixup(z);
        debug_log!(node = ?z, len = self.len(), "insert");
        true
    }

    /// Removes `key` and rebalances, handing the stored key back.
    ///
    /// # Errors
    ///
    /// [`NotFound`] if no equal key is present. The tree is left untouched.
    pub fn delete(&mut self, key: &K) -> Result<K, NotFound> {
        let z = match self.base.search(key) {
            Some(z) => z,
            None => {
                debug_log!("delete: key not found");
                return Err(NotFound);
            }
        };

        // color actually removed from its position, and the node that took that position
        let mut removed_color = self.base.color(z);
        let x;
        if self.base.left(z).is_nil() {
            x = self.base.right(z);
            self.base.transplant(z, x);
        } else if self.base.right(z).is_nil() {
            x = self.base.left(z);
            self.base.transplant(z, x);
        } else {
            let y = self.base.minimum(self.base.right(z));
            removed_color = self.base.color(y);
            x = self.base.right(y);
            if self.base.parent(y) == z {
                // x may be the sentinel; delete_fixup reads its parent
                self.base.set_parent(x, y);
            } else {
                self.base.transplant(y, x);
                let z_right = self.base.right(z);
                self.base.set_right(y, z_right);
                self.base.set_parent(z_right, y);
            }
            self.base.transplant(z, y);
            let z_left = self.base.left(z);
            self.base.set_left(y, z_left);
            self.base.set_parent(z_left, y);
            let z_color = self.base.color(z);
            self.base.set_color(y, z_color);
        }

        let removed = self.base.release(z);
        if removed_color == Color::Black {
            self.delete_fixup(x);
        }
        debug_log!(node = ?z, len = self.len(), "delete");
        Ok(removed)
    }
}

impl<'a, K, C> IntoIterator for &'a RBTree<K, C> {
    type IntoIter = Iter<'a, K, C>;
    type Item = &'a K;

    fn into_iter(self) -> Iter<'a, K, C> {
        self.iter()
    }
}

impl<K: Debug, C> Debug for RBTree<K, C> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}
