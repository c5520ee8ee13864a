//! An ordered set backed by a red-black tree.
//!
//! `redblack` keeps its nodes in an arena and links them by index, with one shared black sentinel
//! standing in for every absent child and for the parent of the root. Insertion and deletion run
//! the classic bottom-up fixups, so every operation is O(log n) in the worst case with no
//! amortized rebalancing pauses.
//!
//! # Examples
//!
//! ```
//! use redblack::{NotFound, RBTree};
//!
//! let mut tree = RBTree::new();
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//!
//! let root = tree.base().root();
//! let root_key = *tree.base().key(root).unwrap();
//! assert_eq!(tree.delete(&root_key), Ok(root_key));
//! assert_eq!(tree.delete(&root_key), Err(NotFound));
//!
//! tree.verify().expect("red-black invariants hold");
//! assert_eq!(tree.len(), 6);
//! ```
//!
//! # Structure
//!
//! * [`OrderedTree`], plain binary search tree mechanics: search, minimum/maximum, successor,
//!   subtree transplant and unbalanced insertion. Read-only from outside the crate.
//! * [`RBTree`], the rotations and the insert/delete fixups layered over an `OrderedTree`.
//! * Key order comes from the `compare` crate: [`Natural`] by default, any [`Compare`]
//!   implementation or `Fn(&K, &K) -> Ordering` closure otherwise.
//!
//! # Duplicate keys
//!
//! Duplicates are rejected. [`RBTree::insert`] returns `false` and leaves the tree untouched.
//!
//! # Thread safety
//!
//! `RBTree` does no internal synchronization. It is `Send`/`Sync` when its keys and comparator
//! are, so sharing one tree between threads means wrapping it in a lock.
//!
//! # Features
//!
//! * `stats`, counts rotations and fixup cases, see [`stats`].
//! * `tracing`, emits `tracing` events for mutations, rotations and fixup cases.

#![warn(missing_debug_implementations)]
#![warn(unused_lifetimes)]
#![cfg_attr(not(test), warn(unused_results))]
#![deny(rust_2018_idioms)]
#![deny(unused_must_use)]

mod tracing_helpers;

mod base;
mod error;
mod node;
pub mod stats;
mod tree;
mod verify;

pub use compare::{natural, Compare, Natural};

pub use crate::{
    base::{Iter, OrderedTree},
    error::NotFound,
    node::{Color, NodeId},
    tree::RBTree,
    verify::{Verify, Violation},
};
