//! A thread-safe, unbalanced BST. Every operation takes `&self`; a single reader/writer lock
//! around the whole tree serializes inserts against each other and against reads, while any
//! number of reads proceed together.
//!
//! # Examples
//!
//! ```
//! use bstree::{Traversal, Tree};
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.exists(&1));
//! assert_eq!(tree.minimum(), None);
//!
//! assert!(tree.insert(2));
//! assert!(tree.insert(1));
//! assert!(tree.insert(3));
//!
//! // Inserting a value the tree already holds does nothing.
//! assert!(!tree.insert(3));
//! assert_eq!(tree.size(), 3);
//!
//! assert_eq!(tree.minimum(), Some(1));
//! assert_eq!(tree.maximum(), Some(3));
//! assert_eq!(tree.depth(), 2);
//! assert_eq!(tree.values(Traversal::InOrder), vec![1, 2, 3]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FromIterator;
use std::ptr;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, trace};

use crate::ordering::{self, Comparator};

/// The order in which [`Tree::traverse`] visits values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Visit a node, then its left subtree, then its right subtree.
    PreOrder,
    /// Visit the left subtree, then the node, then the right subtree. This yields values in
    /// ascending order.
    InOrder,
    /// Visit the left subtree, then the right subtree, then the node.
    PostOrder,
    /// Visit nodes breadth first, one level at a time, left to right.
    LevelOrder,
}

/// A Binary Search Tree of distinct values, ordered by a caller supplied comparison.
///
/// The shape of the tree is entirely decided by the order values are inserted in. Nothing
/// rebalances it: inserting sorted values produces a tree as deep as it is large.
///
/// The ordering must be a strict weak ordering. If it isn't (say `a < b` and `b < a` can both
/// hold) the tree won't panic but lookups and traversals stop meaning anything.
pub struct Tree<T> {
    inner: RwLock<Inner<T>>,
    compare: Box<Comparator<T>>,
}

/// The lock protected part of the tree.
struct Inner<T> {
    root: Link<T>,
    /// Number of nodes reachable from `root`.
    size: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Default for Tree<T>
where
    T: Ord + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` ordered by `T`'s natural ordering.
    pub fn new() -> Self
    where
        T: Ord + 'static,
    {
        Self::with_comparator(T::cmp)
    }

    /// Generates a new, empty `Tree` ordered by `compare`. Values that compare
    /// [`Equal`][Ordering::Equal] are duplicates, and only the first one inserted is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Traversal, Tree};
    ///
    /// // Largest first.
    /// let tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// for x in [2, 3, 1] {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(tree.values(Traversal::InOrder), vec![3, 2, 1]);
    /// assert_eq!(tree.minimum(), Some(3));
    /// ```
    pub fn with_comparator<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        debug!("creating empty tree");
        Self {
            inner: RwLock::new(Inner {
                root: None,
                size: 0,
            }),
            compare: Box::new(compare),
        }
    }

    /// Generates a new, empty `Tree` ordered by a pair of predicates. `is_smaller(a, b)` says
    /// whether `a` belongs left of `b` and `is_larger(a, b)` whether it belongs right of it.
    /// When neither holds the two values are duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::ordering::{is_larger, is_smaller};
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_predicates(is_smaller, is_larger);
    /// tree.insert(20);
    /// tree.insert(10);
    ///
    /// assert!(tree.exists(&10));
    /// assert!(!tree.exists(&30));
    /// ```
    pub fn from_predicates<S, L>(is_smaller: S, is_larger: L) -> Self
    where
        T: 'static,
        S: Fn(&T, &T) -> bool + Send + Sync + 'static,
        L: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self::with_comparator(ordering::from_predicates(is_smaller, is_larger))
    }

    /// Returns how many values are in the tree.
    pub fn size(&self) -> usize {
        self.read().size
    }

    /// Returns `true` if nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.read().root.is_none()
    }

    /// Inserts `value` unless the tree already holds a value comparing equal to it. Returns
    /// whether the value was inserted.
    ///
    /// Average case `O(depth)`, worst case `O(size)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&self, value: T) -> bool {
        let mut inner = self.write();
        let inserted = inner.insert(value, &*self.compare);
        if inserted {
            trace!("inserted value, tree size is now {}", inner.size);
        } else {
            trace!("rejected duplicate value");
        }

        inserted
    }

    /// Returns whether the tree holds a value comparing equal to `value`.
    ///
    /// Average case `O(depth)`, worst case `O(size)`.
    pub fn exists(&self, value: &T) -> bool {
        let inner = self.read();
        let mut link = inner.root.as_deref();
        while let Some(node) = link {
            link = match (self.compare)(value, &node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }

        false
    }

    /// Returns the smallest value in the tree or `None` if it is empty.
    ///
    /// Average case `O(depth)`, worst case `O(size)`.
    pub fn minimum(&self) -> Option<T>
    where
        T: Clone,
    {
        let inner = self.read();
        let mut node = inner.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }

        Some(node.value.clone())
    }

    /// Returns the largest value in the tree or `None` if it is empty.
    ///
    /// Average case `O(depth)`, worst case `O(size)`.
    pub fn maximum(&self) -> Option<T>
    where
        T: Clone,
    {
        let inner = self.read();
        let mut node = inner.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }

        Some(node.value.clone())
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty tree
    /// has a depth of 0 and a tree with only a root has a depth of 1.
    ///
    /// This holds the read lock for the whole walk so it never sees a half finished insert.
    pub fn depth(&self) -> usize {
        depth(&self.read().root)
    }

    /// Calls `visitor` with every value in the tree, in the given order. The read lock is held
    /// until the traversal finishes, so inserts wait for it.
    ///
    /// `visitor` must not insert into this same tree: that waits on the lock the traversal
    /// holds and never returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Traversal, Tree};
    ///
    /// let tree = Tree::new();
    /// for x in [2, 1, 3] {
    ///     tree.insert(x);
    /// }
    ///
    /// let mut visited = Vec::new();
    /// tree.traverse(Traversal::PostOrder, |x| visited.push(*x));
    ///
    /// assert_eq!(visited, vec![1, 3, 2]);
    /// ```
    pub fn traverse<F>(&self, order: Traversal, mut visitor: F)
    where
        F: FnMut(&T),
    {
        walk(&self.read().root, order, &mut visitor);
    }

    /// Collects the tree's values in the given order.
    pub fn values(&self, order: Traversal) -> Vec<T>
    where
        T: Clone,
    {
        let inner = self.read();
        let mut values = Vec::with_capacity(inner.size);
        walk(&inner.root, order, &mut |value: &T| values.push(value.clone()));
        values
    }

    // A panic while the lock is held (from the comparator or a visitor) never leaves a node
    // half linked, so a poisoned lock still guards a valid tree.
    fn read(&self) -> RwLockReadGuard<'_, Inner<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Inner<T> {
    /// Walks down from the root and links a new node holding `value` into the first empty slot
    /// that keeps the BST invariant. Returns `false` without touching anything if a node
    /// compares equal to `value`.
    fn insert(&mut self, value: T, compare: &Comparator<T>) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match compare(&value, &node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *link = Some(Node::new_boxed(value));
        self.size += 1;

        true
    }

    fn root_ptr(&self) -> *const Node<T> {
        link_ptr(&self.root)
    }
}

/// Unlinks nodes one at a time. The default drop of a `Box` chain recurses once per level, which
/// a degenerate tree turns into a stack overflow.
impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

fn link_ptr<T>(link: &Link<T>) -> *const Node<T> {
    link.as_deref().map_or(ptr::null(), |node| node as *const Node<T>)
}

// None of the walks below recurse: a tree built from sorted input is as deep as it is large.

/// Counts levels by sweeping the tree one level at a time.
fn depth<T>(root: &Link<T>) -> usize {
    let mut level: Vec<&Node<T>> = root.as_deref().into_iter().collect();
    let mut depth = 0;
    while !level.is_empty() {
        depth += 1;
        let mut next = Vec::with_capacity(level.len() * 2);
        for node in level {
            next.extend(node.left.as_deref());
            next.extend(node.right.as_deref());
        }
        level = next;
    }

    depth
}

fn walk<T>(root: &Link<T>, order: Traversal, visitor: &mut impl FnMut(&T)) {
    match order {
        Traversal::PreOrder => pre_order(root, visitor),
        Traversal::InOrder => in_order(root, visitor),
        Traversal::PostOrder => post_order(root, visitor),
        Traversal::LevelOrder => level_order(root, |node| visitor(&node.value)),
    }
}

fn pre_order<T>(root: &Link<T>, visitor: &mut impl FnMut(&T)) {
    let mut stack: Vec<&Node<T>> = root.as_deref().into_iter().collect();
    while let Some(node) = stack.pop() {
        visitor(&node.value);
        // Right goes on first so the left subtree is finished before it.
        stack.extend(node.right.as_deref());
        stack.extend(node.left.as_deref());
    }
}

fn in_order<T>(root: &Link<T>, visitor: &mut impl FnMut(&T)) {
    let mut stack = Vec::new();
    let mut link = root.as_deref();
    loop {
        while let Some(node) = link {
            stack.push(node);
            link = node.left.as_deref();
        }
        match stack.pop() {
            Some(node) => {
                visitor(&node.value);
                link = node.right.as_deref();
            }
            None => break,
        }
    }
}

/// Collects nodes in node, right, left order and then visits them backwards, which is left,
/// right, node.
fn post_order<T>(root: &Link<T>, visitor: &mut impl FnMut(&T)) {
    let mut pending: Vec<&Node<T>> = root.as_deref().into_iter().collect();
    let mut reversed = Vec::new();
    while let Some(node) = pending.pop() {
        reversed.push(node);
        pending.extend(node.left.as_deref());
        pending.extend(node.right.as_deref());
    }
    for node in reversed.into_iter().rev() {
        visitor(&node.value);
    }
}

fn level_order<'a, T>(root: &'a Link<T>, mut visit: impl FnMut(&'a Node<T>)) {
    let mut queue: VecDeque<&Node<T>> = root.as_deref().into_iter().collect();
    while let Some(node) = queue.pop_front() {
        visit(node);
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord + 'static,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // `&mut self` means nobody else can be holding the lock.
        let inner = self.inner.get_mut().unwrap_or_else(PoisonError::into_inner);
        for value in iter {
            inner.insert(value, &*self.compare);
        }
    }
}

/// `{address: 0x.. | root: 0x.. | size: n}`. The root address is null for an empty tree.
impl<T> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read();
        write!(
            f,
            "{{address: {:p} | root: {:p} | size: {}}}",
            self,
            inner.root_ptr(),
            inner.size
        )
    }
}

/// Shows the tree's address, root address and size. The alternate form (`{:#?}`) also lists every
/// node in level order.
impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read();
        let alternate = f.alternate();
        let mut tree = f.debug_struct("Tree");
        tree.field("address", &(self as *const Self))
            .field("root", &inner.root_ptr())
            .field("size", &inner.size);
        if alternate {
            let mut nodes = Vec::with_capacity(inner.size);
            level_order(&inner.root, |node| nodes.push(NodeEntry(node)));
            tree.field("nodes", &nodes);
        }
        tree.finish()
    }
}

/// One node with its children as addresses, so rendering never recurses.
struct NodeEntry<'a, T>(&'a Node<T>);

impl<T> fmt::Debug for NodeEntry<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0;
        f.debug_struct("Node")
            .field("address", &(node as *const Node<T>))
            .field("value", &node.value)
            .field("left", &link_ptr(&node.left))
            .field("right", &link_ptr(&node.right))
            .finish()
    }
}
