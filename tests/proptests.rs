//! Differential tests against `BTreeSet`, checking every invariant after each operation.

mod common;

use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use redblack::RBTree;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16),
    Delete(u16),
}

// narrow key range so deletes usually hit
fn operations(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..512u16).prop_map(Op::Insert),
            2 => (0..512u16).prop_map(Op::Delete),
        ],
        0..=max_ops,
    )
}

/// Upper bound on the height of a red-black tree with `len` keys: 2 * log2(len + 1).
fn height_bound(len: usize) -> usize {
    2 * (usize::BITS - (len + 1).leading_zeros() - 1) as usize + 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn matches_btreeset(ops in operations(400)) {
        common::init_tracing();
        let mut tree = RBTree::new();
        let mut oracle = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    prop_assert_eq!(tree.insert(key), oracle.insert(key));
                }
                Op::Delete(key) => {
                    let expected = if oracle.remove(&key) { Ok(key) } else { Err(redblack::NotFound) };
                    prop_assert_eq!(tree.delete(&key), expected);
                }
            }
            let verify = tree.verify();
            prop_assert!(verify.is_ok(), "{:?} after {:?}", verify, tree);
            prop_assert_eq!(tree.len(), oracle.len());
        }
        prop_assert!(tree.iter().eq(oracle.iter()));
        prop_assert_eq!(tree.first(), oracle.iter().next());
        prop_assert_eq!(tree.last(), oracle.iter().next_back());
    }

    #[test]
    fn height_is_logarithmic(keys in prop::collection::vec(any::<u32>(), 0..2000)) {
        let mut tree = RBTree::new();
        for key in keys {
            tree.insert(key);
        }
        let verify = tree.verify().unwrap();
        prop_assert!(
            verify.max_depth <= height_bound(verify.len),
            "height {} for {} keys",
            verify.max_depth,
            verify.len
        );
        prop_assert!(verify.max_depth <= 2 * verify.min_depth);
    }

    #[test]
    fn delete_everything(keys in prop::collection::btree_set(any::<i64>(), 0..300), seed: u64) {
        let mut tree = RBTree::new();
        for &key in &keys {
            prop_assert!(tree.insert(key));
        }
        let mut order: Vec<i64> = keys.iter().copied().collect();
        order.shuffle(&mut StdRng::seed_from_u64(seed));
        for key in order {
            prop_assert_eq!(tree.delete(&key), Ok(key));
            tree.verify().unwrap();
        }
        prop_assert!(tree.is_empty());
        prop_assert!(tree.base().root().is_nil());
    }

    #[test]
    fn neighbours_match_btreeset(keys in prop::collection::btree_set(0..1000i32, 1..200)) {
        let mut tree = RBTree::new();
        for &key in keys.iter().rev() {
            tree.insert(key);
        }
        for &key in &keys {
            prop_assert_eq!(tree.successor(&key), keys.range(key + 1..).next());
            prop_assert_eq!(tree.predecessor(&key), keys.range(..key).next_back());
        }
    }
}
