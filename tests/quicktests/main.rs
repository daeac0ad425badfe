#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod properties;

/// Something to do to a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op {
    /// Insert the value into the tree
    Insert(i8),
    /// Delete the value from the tree
    Delete(i8),
    /// Rebuild the tree from its own values
    Rebalance,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(i8::arbitrary(g)),
            1 => Op::Delete(i8::arbitrary(g)),
            2 => Op::Rebalance,
            _ => unreachable!(),
        }
    }
}
