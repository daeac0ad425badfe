use ordered_tree::{Node, OrderedTree, TreeError};

use std::collections::BTreeSet;

use crate::Op;

fn values(tree: &OrderedTree<i8>) -> Vec<i8> {
    tree.iter().map(|n| *n.value()).collect()
}

fn ascending(xs: &[i8]) -> bool {
    xs.windows(2).all(|w| w[0] < w[1])
}

/// Applies a set of operations to a tree and a `BTreeSet` model of its values.
/// After every step the insert result must agree with the model and an in-order
/// walk must be strictly ascending and hold exactly the model's values.
fn do_ops(ops: &[Op], tree: &mut OrderedTree<i8>, set: &mut BTreeSet<i8>) -> bool {
    for op in ops {
        match op {
            Op::Insert(x) => {
                let expected = if set.insert(*x) {
                    Ok(())
                } else {
                    Err(TreeError::DuplicateValue)
                };
                if tree.insert(*x) != expected {
                    return false;
                }
            }
            Op::Delete(x) => {
                tree.delete(x);
                set.remove(x);
            }
            Op::Rebalance => {
                tree.rebalance();
            }
        }

        let current = values(tree);
        if !ascending(&current) || !current.iter().eq(set.iter()) {
            return false;
        }
    }

    true
}

#[quickcheck]
fn in_order_stays_ascending(ops: Vec<Op>) -> bool {
    let mut tree = OrderedTree::default();
    do_ops(&ops, &mut tree, &mut BTreeSet::new())
}

#[quickcheck]
fn insert_reports_duplicates_like_a_set(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::default();
    let ops: Vec<Op> = xs.iter().chain(xs.iter()).map(|x| Op::Insert(*x)).collect();

    do_ops(&ops, &mut tree, &mut BTreeSet::new())
}

#[quickcheck]
fn build_round_trips_sorted_unique(xs: Vec<i8>) -> bool {
    let tree = OrderedTree::new(xs.clone());
    let expected: Vec<i8> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    values(&tree) == expected
}

#[quickcheck]
fn insert_then_find(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = OrderedTree::new(xs.into_iter().filter(|y| *y != x));
    let before = values(&tree);

    let inserted = tree.insert(x) == Ok(());
    let found = tree.find(&x).map(|n| *n.value()) == Some(x);

    let unchanged_after_duplicate = {
        let after = values(&tree);
        tree.insert(x) == Err(TreeError::DuplicateValue) && values(&tree) == after
    };

    inserted && found && unchanged_after_duplicate && values(&tree).len() == before.len() + 1
}

#[quickcheck]
fn delete_removes_only_target(xs: Vec<i8>, ops: Vec<Op>, x: i8) -> bool {
    let mut set: BTreeSet<i8> = xs.iter().copied().collect();
    let mut tree = OrderedTree::new(xs);
    if !do_ops(&ops, &mut tree, &mut set) {
        return false;
    }

    let mut expected = values(&tree);
    expected.retain(|y| *y != x);
    tree.delete(&x);

    tree.find(&x).is_none() && values(&tree) == expected
}

#[quickcheck]
fn height_is_one_more_than_tallest_child(ops: Vec<Op>) -> bool {
    let mut tree = OrderedTree::default();
    if !do_ops(&ops, &mut tree, &mut BTreeSet::new()) {
        return false;
    }

    let root_ok = match tree.root() {
        None => tree.height(None) == -1,
        Some(root) => tree.height(Some(root)) >= 0,
    };
    let nodes_ok = tree.iter().all(|n: &Node<i8>| {
        let expected = 1 + tree.height(n.left()).max(tree.height(n.right()));
        let leaf_ok = !n.is_leaf() || tree.height(Some(n)) == 0;
        tree.height(Some(n)) == expected && leaf_ok
    });

    root_ok && nodes_ok
}

#[quickcheck]
fn rebalance_twice_keeps_shape(ops: Vec<Op>) -> bool {
    let mut tree = OrderedTree::default();
    if !do_ops(&ops, &mut tree, &mut BTreeSet::new()) {
        return false;
    }

    tree.rebalance();
    let once = OrderedTree::new(values(&tree));
    tree.rebalance();

    let same_shape = tree.root() == once.root();
    same_shape && tree.is_balanced()
}

#[quickcheck]
fn depth_matches_level_order_rank(xs: Vec<i8>) -> bool {
    let tree = OrderedTree::new(xs);

    let mut level = vec![];
    level.extend(tree.root());
    let mut depth = 0;
    while !level.is_empty() {
        if !level.iter().all(|n| tree.depth(n) == depth) {
            return false;
        }
        level = level
            .into_iter()
            .flat_map(|n| n.left().into_iter().chain(n.right()))
            .collect();
        depth += 1;
    }

    true
}
