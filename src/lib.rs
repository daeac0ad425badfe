//! This crate exposes a Binary Search Tree (BST) over unique values that is
//! only balanced when asked to be.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`).
//!
//! ## Balancing on demand
//!
//! [`OrderedTree`] is built from a batch of values by repeatedly choosing the
//! median of a sorted range as that range's subtree root, which limits the
//! height to `O(lg N)`. After that, [`insert`][OrderedTree::insert] and
//! [`delete`][OrderedTree::delete] do nothing to keep it that way: inserting
//! an ascending run grows a chain as tall as the run is long. Call
//! [`rebalance`][OrderedTree::rebalance] to rebuild the tree with the same
//! median split in `O(N)`.
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new(vec![10, 20, 30, 40, 50, 60, 70]);
//! assert_eq!(tree.height(tree.root()), 2);
//!
//! for x in 71..80 {
//!     tree.insert(x).unwrap();
//! }
//! assert_eq!(tree.height(tree.root()), 11);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(tree.root()), 4);
//! assert!(tree.is_balanced());
//! ```
//!
//! The tree logs through the [`log`] facade. Whole-tree rebuilds are logged at
//! `debug` and rejected operations at `trace`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod pretty;
mod traversal;
mod tree;

pub use error::TreeError;
pub use traversal::{InOrder, LevelOrder, PostOrder, PreOrder};
pub use tree::{Node, OrderedTree};
