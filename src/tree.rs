//! An unbalanced BST over unique values that can be rebuilt into a balanced shape on demand.
//!
//! Building a tree sorts and deduplicates its input and then picks the median of each range as
//! the root of that range's subtree. Inserting and deleting do *not* keep the tree balanced, so
//! inserting sorted runs degrades it towards a linked list. [`OrderedTree::rebalance`] flattens
//! the tree and rebuilds it with the same median split.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, TreeError};
//!
//! let mut tree = OrderedTree::new(vec![30, 10, 20, 10]);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(20));
//!
//! assert_eq!(tree.insert(40), Ok(()));
//! assert_eq!(tree.insert(40), Err(TreeError::DuplicateValue));
//!
//! tree.delete(&10);
//! assert!(tree.find(&10).is_none());
//! assert_eq!(tree.find(&40).map(|n| *n.value()), Some(40));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::error::TreeError;

type Link<T> = Option<Box<Node<T>>>;

/// A single value in an [`OrderedTree`] and links to up to two children.
///
/// Handles to nodes are read-only. Any `delete` or `rebalance` may restructure the tree, so a
/// handle cannot outlive the borrow of the tree it came from.
///
/// Two nodes are equal when their subtrees have the same shape and the same values.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree. Every value in it is less than [`Node::value`].
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree. Every value in it is greater than [`Node::value`].
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of edges on the longest path from this node down to a leaf. A leaf has height 0.
    pub fn height(&self) -> isize {
        height_of(Some(self))
    }
}

// Compares pairs of subtrees off a heap stack so long chains don't recurse once per level.
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.value != b.value {
                return false;
            }
            for (x, y) in [(a.left(), b.left()), (a.right(), b.right())].iter() {
                match (x, y) {
                    (Some(x), Some(y)) => pending.push((*x, *y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<T: Eq> Eq for Node<T> {}

/// Shows the node's value and only the values of its children.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// A Binary Search Tree of unique values.
///
/// The tree owns every node. Nodes have no parent links: anything that needs to locate a node
/// (`delete`, `depth`) descends from the root by comparing values.
pub struct OrderedTree<T> {
    root: Link<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        teardown(self.root.take());
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(Node::value)).finish()
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::new(values)
    }
}

impl<T> OrderedTree<T> {
    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the subtree rooted at `node`. A leaf has height 0 and an absent node -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::new(vec![1, 2, 3]);
    /// assert_eq!(tree.height(tree.root()), 1);
    /// assert_eq!(tree.height(None), -1);
    /// ```
    pub fn height(&self, node: Option<&Node<T>>) -> isize {
        height_of(node)
    }

    /// Whether the heights of the root's two subtrees differ by at most one.
    ///
    /// **Note** this only looks at the root's children. A tree whose root is balanced but which is
    /// lopsided further down still reports `true`. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        let (left, right) = self
            .root()
            .map_or((None, None), |root| (root.left(), root.right()));
        (height_of(left) - height_of(right)).abs() <= 1
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Builds a height balanced tree from `values`. Duplicates are dropped and the input need not
    /// be sorted.
    ///
    /// The shape only depends on the set of values: each subtree's root is the element at index
    /// `len / 2` of its sorted range.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::default();
        tree.build_from(values);
        tree
    }

    /// Replaces the whole tree with one built from `values` as in [`OrderedTree::new`].
    pub fn build_from<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort();
        values.dedup();
        debug!("Building tree from {} unique values", values.len());

        teardown(self.root.take());
        self.root = build(values.len(), &mut values.into_iter());
    }

    /// Inserts `value` as a new leaf. Nothing is rebalanced.
    ///
    /// # Errors
    ///
    /// [`TreeError::DuplicateValue`] if the value is already in the tree. The tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TreeError};
    ///
    /// let mut tree = OrderedTree::default();
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(TreeError::DuplicateValue));
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), TreeError> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!("Rejected duplicate insert");
                    return Err(TreeError::DuplicateValue);
                }
            };
        }

        *link = Some(Box::new(Node::new(value)));
        Ok(())
    }

    /// Removes `value` from the tree. Does nothing if it isn't there.
    ///
    /// A node with two children takes the value of its in-order successor (the smallest value in
    /// its right subtree) and the successor's node is removed instead.
    pub fn delete(&mut self, value: &T) {
        if !remove(&mut self.root, value) {
            trace!("Delete found nothing to remove");
        }
    }

    /// Finds the node holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::new(vec![0, 1, 2]);
    ///
    /// assert_eq!(tree.find(&0).map(|n| *n.value()), Some(0));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }

        None
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Number of edges between the root and the node holding `node`'s value, or -1 if no node
    /// holds it.
    ///
    /// The lookup is by value, not identity. Values are unique within a tree so a node from this
    /// tree is always found at its own position.
    pub fn depth(&self, node: &Node<T>) -> isize {
        self.depth_of(&node.value)
    }

    /// Number of edges between the root and the node holding `value`, or -1 if no node holds it.
    pub fn depth_of(&self, value: &T) -> isize {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return depth,
            };
            depth += 1;
        }

        -1
    }

    /// Rebuilds the tree from its own values with the same median split as
    /// [`OrderedTree::new`] and returns the new root.
    ///
    /// Rebalancing twice in a row yields structurally identical trees.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::default();
    /// for x in 1..=4 {
    ///     tree.insert(x).unwrap();
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// assert_eq!(tree.rebalance().map(|n| *n.value()), Some(3));
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self) -> Option<&Node<T>> {
        let old_height = height_of(self.root());
        let values = drain_in_order(self.root.take());
        let len = values.len();

        self.root = build(len, &mut values.into_iter());
        debug!(
            "Rebalanced {} values from height {} to height {}",
            len,
            old_height,
            height_of(self.root())
        );

        self.root()
    }
}

/// Builds the subtree for the next `len` values of the sorted `values`. The root of the subtree
/// is the value at index `len / 2`.
fn build<T, I>(len: usize, values: &mut I) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }

    let mid = len / 2;
    let left = build(mid, values);
    let value = values.next()?;
    let right = build(len - mid - 1, values);

    Some(Box::new(Node { value, left, right }))
}

/// Removes the node holding `value` from the subtree behind `link`. Returns whether anything was
/// removed.
fn remove<T: Ord>(link: &mut Link<T>, value: &T) -> bool {
    let node = match link {
        Some(node) => node,
        None => return false,
    };

    match value.cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, value),
        Ordering::Greater => remove(&mut node.right, value),
        Ordering::Equal => {
            if node.left.is_some() && node.right.is_some() {
                if let Some(successor) = take_min(&mut node.right) {
                    node.value = successor;
                }
            } else {
                let child = node.left.take().or_else(|| node.right.take());
                *link = child;
            }

            true
        }
    }
}

/// Unlinks the smallest node of the subtree behind `link` and returns its value. That node has
/// no left child so its right child takes its place.
fn take_min<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        return take_min(&mut node.left);
    }

    let node = link.take()?;
    let Node { value, right, .. } = *node;
    *link = right;

    Some(value)
}

/// Consumes a subtree and returns its values in ascending order.
fn drain_in_order<T>(mut link: Link<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut stack = Vec::new();
    loop {
        while let Some(mut node) = link {
            link = node.left.take();
            stack.push(node);
        }

        match stack.pop() {
            Some(node) => {
                let Node { value, right, .. } = *node;
                values.push(value);
                link = right;
            }
            None => return values,
        }
    }
}

/// Frees a subtree. Degenerate chains are as deep as the tree is large so the default recursive
/// drop of the boxes could overflow the stack. Detach children onto a heap stack instead.
fn teardown<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Counts levels breadth first so degenerate chains don't recurse once per node.
fn height_of<T>(node: Option<&Node<T>>) -> isize {
    let mut level: Vec<&Node<T>> = node.into_iter().collect();
    let mut height = -1;
    while !level.is_empty() {
        height += 1;
        level = level
            .into_iter()
            .flat_map(|n| n.left().into_iter().chain(n.right()))
            .collect();
    }

    height
}
