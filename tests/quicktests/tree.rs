use bstree::{Traversal, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::ops::Op;

/// Builds a tree by inserting `xs` in order.
fn tree_of(xs: &[i8]) -> Tree<i8> {
    let tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }

    tree
}

/// Checks every parent/child pair of a pre-order listing against the BST invariant by
/// re-inserting the values in that order: a pre-order listing of a BST rebuilds the same tree.
fn rebuilds_same_shape(tree: &Tree<i8>) -> bool {
    let pre_order = tree.values(Traversal::PreOrder);
    let rebuilt = tree_of(&pre_order);

    rebuilt.values(Traversal::PreOrder) == pre_order
        && rebuilt.values(Traversal::LevelOrder) == tree.values(Traversal::LevelOrder)
}

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and lookups the tree agrees with the set at every step.
#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let tree = Tree::new();
    let mut set = BTreeSet::new();

    ops.iter().all(|op| match op {
        Op::Insert(x) => tree.insert(*x) == set.insert(*x) && tree.size() == set.len(),
        Op::Exists(x) => tree.exists(x) == set.contains(x),
        Op::Traverse(order) => {
            let values = tree.values(*order);
            match order {
                Traversal::InOrder => values.iter().eq(set.iter()),
                _ => values.len() == set.len() && values.iter().all(|x| set.contains(x)),
            }
        }
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.exists(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.exists(x))
}

#[quickcheck]
fn size_counts_distinct_values(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let distinct: HashSet<_> = xs.iter().collect();

    tree.size() == distinct.len()
}

#[quickcheck]
fn in_order_is_ascending(xs: Vec<i8>) -> bool {
    let values = tree_of(&xs).values(Traversal::InOrder);

    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn min_max_are_extrema(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    tree.minimum() == xs.iter().min().copied() && tree.maximum() == xs.iter().max().copied()
}

#[quickcheck]
fn depth_is_bounded_by_size(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let size = tree.size();
    let depth = tree.depth();

    // No tree is shallower than a complete one.
    let shallowest = (usize::BITS - size.leading_zeros()) as usize;
    shallowest <= depth && depth <= size
}

#[quickcheck]
fn pre_order_rebuilds_tree(xs: Vec<i8>) -> bool {
    rebuilds_same_shape(&tree_of(&xs))
}

#[quickcheck]
fn first_insert_is_root(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    tree.values(Traversal::PreOrder).first() == xs.first()
        && tree.values(Traversal::LevelOrder).first() == xs.first()
}
