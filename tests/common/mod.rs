//! Shared test setup.
//!
//! `RUST_LOG` picks the filter, for example `RUST_LOG=redblack=trace`. Events only show up when
//! the crate is built with the `tracing` feature.

#![allow(dead_code)]

use redblack::{Color, Compare, NodeId, RBTree};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a test-writer subscriber. Only the first call takes effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .compact()
            .try_init();
    });
}

/// Builds a tree by inserting `keys` in order.
pub fn tree_of(keys: &[i32]) -> RBTree<i32> {
    let mut tree = RBTree::new();
    for &key in keys {
        assert!(tree.insert(key), "duplicate key {} in fixture", key);
    }
    tree
}

/// One node's id, key, color, parent, left and right.
pub type NodeSnapshot<K> = (NodeId, Option<K>, Color, NodeId, NodeId, NodeId);

/// Every link and color in the tree, sentinel first, then the reachable nodes in preorder.
pub fn snapshot<K: Clone, C>(tree: &RBTree<K, C>) -> Vec<NodeSnapshot<K>> {
    let base = tree.base();
    let node = |x: NodeId| {
        (
            x,
            base.key(x).cloned(),
            base.color(x),
            base.parent(x),
            base.left(x),
            base.right(x),
        )
    };
    let mut nodes = vec![node(base.nil())];
    let mut stack = vec![base.root()];
    while let Some(x) = stack.pop() {
        if x.is_nil() {
            continue;
        }
        nodes.push(node(x));
        stack.push(base.right(x));
        stack.push(base.left(x));
    }
    nodes
}

/// Keys in order, checking the invariants on the way.
pub fn keys<K: Clone, C: Compare<K>>(tree: &RBTree<K, C>) -> Vec<K> {
    tree.verify().unwrap();
    tree.iter().cloned().collect()
}
