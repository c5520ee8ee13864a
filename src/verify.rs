//! Invariant checking.

use crate::{
    base::OrderedTree,
    node::{Color, NodeId},
    RBTree,
};
use compare::Compare;
use std::fmt::{self, Display, Formatter};

/// Shape summary of a tree that passed [`RBTree::verify`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Verify {
    /// Live nodes reachable from the root.
    pub len:          usize,
    /// Black nodes on every root-to-sentinel path, counting the sentinel and not the root.
    pub black_height: usize,
    /// Nodes on the shortest root-to-sentinel path.
    pub min_depth:    usize,
    /// Nodes on the longest root-to-sentinel path.
    pub max_depth:    usize,
}

/// A broken red-black tree invariant. Always a bug.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// The sentinel is red.
    RedSentinel,
    /// The root is red.
    RedRoot,
    /// A red node has a red child.
    RedRed { node: NodeId, child: NodeId },
    /// The two subtrees of a node disagree on their black height.
    BlackHeight { node: NodeId, left: usize, right: usize },
    /// A key is outside the range its ancestors allow.
    Order { node: NodeId },
    /// A child does not point back at its parent.
    ParentLink { node: NodeId, expected: NodeId, found: NodeId },
    /// The number of reachable nodes differs from the number of live nodes.
    Count { reachable: usize, live: usize },
}

impl Display for Violation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RedSentinel => write!(formatter, "the sentinel is red"),
            Violation::RedRoot => write!(formatter, "the root is red"),
            Violation::RedRed { node, child } => {
                write!(formatter, "red {:?} has red child {:?}", node, child)
            }
            Violation::BlackHeight { node, left, right } => write!(
                formatter,
                "{:?} has black height {} on the left and {} on the right",
                node, left, right
            ),
            Violation::Order { node } => write!(formatter, "{:?} is out of order", node),
            Violation::ParentLink {
                node,
                expected,
                found,
            } => write!(
                formatter,
                "{:?} has parent {:?}, expected {:?}",
                node, found, expected
            ),
            Violation::Count { reachable, live } => write!(
                formatter,
                "{} nodes reachable from the root, {} live",
                reachable, live
            ),
        }
    }
}

impl std::error::Error for Violation {}

struct Walk {
    black: usize, // including the sentinel and the node itself
    count: usize,
    min_depth: usize,
    max_depth: usize,
}

const EMPTY: Walk = Walk {
    black: 1,
    count: 0,
    min_depth: 0,
    max_depth: 0,
};

fn walk<K, C: Compare<K>>(
    base: &OrderedTree<K, C>,
    x: NodeId,
    lower: Option<&K>,
    upper: Option<&K>,
) -> Result<Walk, Violation> {
    if x.is_nil() {
        return Ok(EMPTY);
    }
    let key = match base.key(x) {
        Some(key) => key,
        None => return Err(Violation::Order { node: x }),
    };
    let cmp = base.comparator();
    if lower.map_or(false, |lower| cmp.compares_ge(lower, key))
        || upper.map_or(false, |upper| cmp.compares_ge(key, upper))
    {
        return Err(Violation::Order { node: x });
    }

    let color = base.color(x);
    let (left, right) = (base.left(x), base.right(x));
    for &child in &[left, right] {
        if child.is_nil() {
            continue;
        }
        if base.parent(child) != x {
            return Err(Violation::ParentLink {
                node: child,
                expected: x,
                found: base.parent(child),
            });
        }
        if color == Color::Red && base.color(child) == Color::Red {
            return Err(Violation::RedRed { node: x, child });
        }
    }

    let left_walk = walk(base, left, lower, Some(key))?;
    let right_walk = walk(base, right, Some(key), upper)?;
    if left_walk.black != right_walk.black {
        return Err(Violation::BlackHeight {
            node: x,
            left: left_walk.black,
            right: right_walk.black,
        });
    }
    Ok(Walk {
        black: left_walk.black + (color == Color::Black) as usize,
        count: left_walk.count + right_walk.count + 1,
        min_depth: left_walk.min_depth.min(right_walk.min_depth) + 1,
        max_depth: left_walk.max_depth.max(right_walk.max_depth) + 1,
    })
}

impl<K, C: Compare<K>> RBTree<K, C> {
    /// Checks every red-black tree property, parent links and the node count.
    ///
    /// Walks the whole tree. Meant for tests and debugging.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// for key in 0..100 {
    ///     tree.insert(key);
    /// }
    /// let verify = tree.verify().unwrap();
    /// assert_eq!(verify.len, 100);
    /// assert!(verify.max_depth <= 2 * verify.min_depth);
    /// ```
    pub fn verify(&self) -> Result<Verify, Violation> {
        let base = self.base();
        if base.color(base.nil()) != Color::Black {
            return Err(Violation::RedSentinel);
        }
        let root = base.root();
        if base.color(root) != Color::Black {
            return Err(Violation::RedRoot);
        }
        if !root.is_nil() && !base.parent(root).is_nil() {
            return Err(Violation::ParentLink {
                node: root,
                expected: base.nil(),
                found: base.parent(root),
            });
        }
        let walk = walk(base, root, None, None)?;
        if walk.count != base.len() {
            return Err(Violation::Count {
                reachable: walk.count,
                live: base.len(),
            });
        }
        Ok(Verify {
            len: walk.count,
            black_height: if root.is_nil() { 0 } else { walk.black - 1 },
            min_depth: walk.min_depth,
            max_depth: walk.max_depth,
        })
    }
}
