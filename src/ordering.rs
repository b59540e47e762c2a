//! Orderings a [`Tree`][crate::Tree] can be built with.
//!
//! A tree only ever asks one question of its values: is this one smaller than,
//! larger than, or the same as that one? That question is answered by a
//! [`Comparator`]. Callers who think in terms of two predicates instead (a
//! "smaller" test and a "larger" test) can turn them into a comparator with
//! [`from_predicates`].
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use bstree::ordering::{self, is_larger, is_smaller};
//!
//! let compare = ordering::from_predicates(is_smaller, is_larger);
//!
//! assert_eq!(compare(&1, &2), Ordering::Less);
//! assert_eq!(compare(&2, &1), Ordering::Greater);
//! assert_eq!(compare(&2, &2), Ordering::Equal);
//! ```

use std::cmp::Ordering;

/// A three-way comparison between two values.
///
/// The comparator must describe a strict weak ordering. Two values it calls
/// [`Ordering::Equal`] are duplicates as far as the tree is concerned, whether
/// or not they are `==`.
pub type Comparator<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// Combines a "smaller" predicate and a "larger" predicate into a single
/// three-way comparison.
///
/// `is_smaller` is asked first. Only when it says no is `is_larger` asked, and
/// when neither holds the values compare equal.
pub fn from_predicates<T, S, L>(is_smaller: S, is_larger: L) -> impl Fn(&T, &T) -> Ordering
where
    S: Fn(&T, &T) -> bool,
    L: Fn(&T, &T) -> bool,
{
    move |value: &T, other: &T| {
        if is_smaller(value, other) {
            Ordering::Less
        } else if is_larger(value, other) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// The reference "smaller" predicate: `value < other` under `T`'s natural
/// ordering. Works for every integer type.
pub fn is_smaller<T: Ord>(value: &T, other: &T) -> bool {
    value < other
}

/// The reference "larger" predicate: `value > other` under `T`'s natural
/// ordering. Works for every integer type.
pub fn is_larger<T: Ord>(value: &T, other: &T) -> bool {
    value > other
}
