use bstree::Traversal;
use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Look the value up
    Exists(T),
    /// Compare a full traversal
    Traverse(Traversal),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Exists(T::arbitrary(g)),
            2 => Op::Traverse(
                *g.choose(&[
                    Traversal::PreOrder,
                    Traversal::InOrder,
                    Traversal::PostOrder,
                    Traversal::LevelOrder,
                ])
                .unwrap(),
            ),
            _ => unreachable!(),
        }
    }
}
