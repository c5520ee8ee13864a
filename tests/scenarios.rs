mod common;

use common::{init_tracing, keys, snapshot, tree_of};
use redblack::{Color, NotFound, RBTree};

#[test]
fn ascending_three_rotate_to_middle() {
    init_tracing();
    let tree = tree_of(&[10, 20, 30]);
    let base = tree.base();
    let root = base.root();
    assert_eq!(base.key(root), Some(&20));
    assert_eq!(base.color(root), Color::Black);
    assert_eq!(base.key(base.left(root)), Some(&10));
    assert_eq!(base.key(base.right(root)), Some(&30));
    assert_eq!(base.color(base.left(root)), Color::Red);
    assert_eq!(base.color(base.right(root)), Color::Red);
    assert_eq!(tree.verify().unwrap().black_height, 1);
}

#[test]
fn descending_three_rotate_to_middle() {
    init_tracing();
    let tree = tree_of(&[10, 5, 1]);
    let base = tree.base();
    let root = base.root();
    assert_eq!(base.key(root), Some(&5));
    assert_eq!(base.color(root), Color::Black);
    assert_eq!(base.key(base.left(root)), Some(&1));
    assert_eq!(base.key(base.right(root)), Some(&10));
    assert_eq!(base.color(base.left(root)), Color::Red);
    assert_eq!(base.color(base.right(root)), Color::Red);
}

#[test]
fn delete_root_of_seven() {
    init_tracing();
    let mut tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]);
    let before = tree.verify().unwrap().black_height;

    let root = tree.base().root();
    let root_key = *tree.base().key(root).unwrap();
    assert_eq!(tree.delete(&root_key), Ok(root_key));

    let expected: Vec<i32> = (1..=7).filter(|&key| key != root_key).collect();
    assert_eq!(keys(&tree), expected);
    assert_eq!(tree.verify().unwrap().black_height, before);
}

#[test]
fn delete_only_node() {
    init_tracing();
    let mut tree = tree_of(&[42]);
    assert_eq!(tree.delete(&42), Ok(42));
    assert!(tree.is_empty());
    assert!(tree.base().root().is_nil());
    assert_eq!(tree.base().root(), tree.base().nil());
    assert_eq!(tree.base().color(tree.base().nil()), Color::Black);
    assert_eq!(tree.first(), None);
    tree.verify().unwrap();
}

#[test]
fn missing_key_leaves_tree_unchanged() {
    init_tracing();
    let mut tree = tree_of(&[8, 4, 12, 2, 6, 10, 14, 1, 3]);
    // a black leaf removal leaves the sentinel's parent link set
    assert_eq!(tree.delete(&6), Ok(6));
    let before = snapshot(&tree);
    let root = tree.base().root();

    for missing in &[5, 6, 0, 100, 11] {
        assert_eq!(tree.delete(missing), Err(NotFound));
        assert_eq!(snapshot(&tree), before);
    }
    assert_eq!(tree.base().root(), root);
    assert_eq!(tree.len(), 8);
    tree.verify().unwrap();

    let mut empty = RBTree::<i32>::new();
    assert_eq!(empty.delete(&1), Err(NotFound));
}

#[test]
fn insert_then_delete_restores_contents() {
    init_tracing();
    let base_keys = [50, 25, 75, 12, 37, 62, 87, 6, 18, 31, 43];
    let mut tree = tree_of(&base_keys);
    let before = keys(&tree);

    for extra in &[1, 99, 40, 41, 42, 63, 64] {
        assert!(tree.insert(*extra));
        tree.verify().unwrap();
        assert_eq!(tree.delete(extra), Ok(*extra));
        assert_eq!(keys(&tree), before);
    }
}

#[test]
fn duplicates_are_rejected() {
    init_tracing();
    let mut tree = tree_of(&[3, 1, 2]);
    assert!(!tree.insert(2));
    assert!(!tree.insert(3));
    assert_eq!(tree.len(), 3);
    assert_eq!(keys(&tree), vec![1, 2, 3]);
}

// left-child deletions exercise one mirror of the fixup, right-child deletions the other
#[test]
fn mirrored_deletes_stay_balanced() {
    init_tracing();
    for &delete_low in &[true, false] {
        let mut tree = tree_of(&(0..64).collect::<Vec<_>>());
        let order: Vec<i32> = if delete_low {
            (0..64).collect()
        } else {
            (0..64).rev().collect()
        };
        for (removed, key) in order.iter().enumerate() {
            assert_eq!(tree.delete(key), Ok(*key));
            let verify = tree.verify().unwrap();
            assert_eq!(verify.len, 63 - removed);
        }
        assert!(tree.is_empty());
    }
}

#[test]
fn navigation() {
    init_tracing();
    let tree = tree_of(&[40, 20, 60, 10, 30, 50, 70]);
    assert_eq!(tree.first(), Some(&10));
    assert_eq!(tree.last(), Some(&70));
    assert_eq!(tree.successor(&30), Some(&40));
    assert_eq!(tree.successor(&70), None);
    assert_eq!(tree.predecessor(&50), Some(&40));
    assert_eq!(tree.predecessor(&10), None);
    assert!(tree.contains(&60));
    assert!(!tree.contains(&65));
    assert_eq!(tree.get(&20), Some(&20));

    let base = tree.base();
    assert!(base.successor(base.nil()).is_nil());
    assert!(base.predecessor(base.nil()).is_nil());
    let min = base.minimum(base.root());
    assert_eq!(base.key(min), Some(&10));
    assert!(base.predecessor(min).is_nil());
    let max = base.maximum(base.root());
    assert!(base.successor(max).is_nil());
}
