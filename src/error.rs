//! Errors reported by [`OrderedTree`][crate::OrderedTree] operations.
//!
//! Nothing here is fatal. A lookup that comes up empty is not an error at all:
//! [`find`][crate::OrderedTree::find] returns `None` and
//! [`depth`][crate::OrderedTree::depth] returns `-1`.

use thiserror::Error;

/// The ways a tree operation can refuse to do its job.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The value passed to [`insert`][crate::OrderedTree::insert] is already stored.
    /// The tree was left untouched.
    #[error("value is already present in the tree")]
    DuplicateValue,
    /// A traversal was started without a callback to visit the nodes with.
    /// No node was visited.
    #[error("traversal requires a callback")]
    InvalidCallback,
}
