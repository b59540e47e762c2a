//! This crate exposes a thread-safe, in-memory Binary Search Tree (BST) that can hold any type of
//! value, as long as there is some way to order those values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! values. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores
//! some sort of value (the value that was inserted, for example) and will sometimes have child
//! `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a value less than its
//!    own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a value greater than
//!    its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(depth)` (where `depth` is the number of `Node`s on the longest
//! path from the root `Node` to a leaf `Node`). The [`Tree`] here never rebalances itself, so its
//! depth is decided by insertion order: `O(lg N)` on average for values inserted in random order,
//! but `N` for values inserted in sorted order. BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree (see
//! [`Traversal::InOrder`]).
//!
//! ## Ordering
//!
//! "Less than" and "greater than" are whatever the tree is told they are. [`Tree::new`] uses the
//! value's [`Ord`] implementation, [`Tree::with_comparator`] takes any three-way comparison and
//! [`Tree::from_predicates`] takes a "smaller" and a "larger" predicate (see [`ordering`]).
//! Values comparing neither smaller nor larger than each other are duplicates: the tree only
//! keeps the first one.
//!
//! ## Concurrency
//!
//! Every operation takes `&self`, so a `Tree` can be shared between threads (for example in an
//! [`Arc`][std::sync::Arc]). Reads run in parallel with each other. Inserts hold the tree
//! exclusively, for the whole walk down from the root.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use bstree::Tree;
//!
//! let tree = Arc::new(Tree::new());
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         let tree = Arc::clone(&tree);
//!         thread::spawn(move || {
//!             for x in (i * 100)..((i + 1) * 100) {
//!                 tree.insert(x);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(tree.size(), 400);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod ordering;
mod tree;

pub use tree::{Traversal, Tree};
