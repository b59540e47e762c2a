//! Property tests for `bstree`, comparing trees against `std`'s `BTreeSet`.

mod ops;
mod tree;
