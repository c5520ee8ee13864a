//! Arena storage for tree nodes.
//!
//! Nodes live in a single `Vec` and refer to each other through [`NodeId`] indices. Index 0 is
//! reserved for the sentinel, which stands in for every absent child and for the parent of the
//! root. Freed slots are threaded onto a free list and handed out again by later allocations.

use std::{
    fmt::{self, Debug, Formatter},
    ops::{Index, IndexMut},
};

/// Node color.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Color {
    Black = 0,
    Red = 1,
}

/// Which child of a node.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Handle to a node slot inside a tree.
///
/// Handles are only meaningful for the tree that produced them, and only until the node they
/// name is deleted.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The sentinel.
    pub const NIL: NodeId = NodeId(0);

    #[inline]
    pub fn is_nil(self) -> bool {
        self == NodeId::NIL
    }

    #[inline]
    fn index(self) -> usize {
        self.0
    }
}

impl Debug for NodeId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            formatter.pad("NIL")
        } else {
            write!(formatter, "NodeId({})", self.0)
        }
    }
}

#[derive(Clone)]
pub(crate) struct Node<K> {
    pub(crate) key:    Option<K>, // None for the sentinel and for free slots
    pub(crate) color:  Color,
    pub(crate) parent: NodeId,
    pub(crate) left:   NodeId,
    pub(crate) right:  NodeId,
}

impl<K> Node<K> {
    const fn sentinel() -> Self {
        Node {
            key: None,
            color: Color::Black,
            parent: NodeId::NIL,
            left: NodeId::NIL,
            right: NodeId::NIL,
        }
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> NodeId {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, side: Side) -> &mut NodeId {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[derive(Clone)]
pub(crate) struct Arena<K> {
    nodes: Vec<Node<K>>,
    free: Vec<NodeId>,
}

impl<K> Arena<K> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::sentinel());
        Arena {
            nodes,
            free: Vec::new(),
        }
    }

    /// Number of live nodes, excluding the sentinel.
    #[inline]
    pub(crate) fn live(&self) -> usize {
        self.nodes.len() - 1 - self.free.len()
    }

    /// Allocates a red node with both children set to the sentinel.
    pub(crate) fn alloc(&mut self, key: K, parent: NodeId) -> NodeId {
        let node = Node {
            key: Some(key),
            color: Color::Red,
            parent,
            left: NodeId::NIL,
            right: NodeId::NIL,
        };
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self[id].key.is_none());
                self[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Returns the slot to the free list and hands back its key.
    pub(crate) fn release(&mut self, id: NodeId) -> K {
        assert!(!id.is_nil(), "the sentinel can not be released");
        let node = std::mem::replace(&mut self[id], Node::sentinel());
        self.free.push(id);
        match node.key {
            Some(key) => key,
            None => unreachable!("released {:?} twice", id),
        }
    }

    /// Key of a live node.
    #[inline]
    pub(crate) fn key(&self, id: NodeId) -> &K {
        match &self[id].key {
            Some(key) => key,
            None => unreachable!("{:?} is not a live node", id),
        }
    }

    /// Drops every key and resets the sentinel. Keeps the allocation.
    pub(crate) fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0] = Node::sentinel();
        self.free.clear();
    }
}

impl<K> Index<NodeId> for Arena<K> {
    type Output = Node<K>;

    #[inline]
    fn index(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.index()]
    }
}

impl<K> IndexMut<NodeId> for Arena<K> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.nodes[id.index()]
    }
}
