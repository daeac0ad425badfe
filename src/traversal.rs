//! Depth first and breadth first walks over an [`OrderedTree`].
//!
//! Every order is available two ways: as a lazy iterator of node handles (`iter_*`) and as a
//! method that calls a visitor once per node (`level_order`, `pre_order`, `in_order`,
//! `post_order`). Both keep their pending nodes in a heap allocated stack or queue, so walking a
//! degenerate chain doesn't recurse once per node.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Node, OrderedTree};
//!
//! let tree = OrderedTree::new(vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! let mut seen = Vec::new();
//! tree.pre_order(Some(|n: &Node<i32>| seen.push(*n.value())), None)
//!     .unwrap();
//! assert_eq!(seen, vec![4, 2, 1, 3, 6, 5, 7]);
//!
//! let levels: Vec<_> = tree.iter_level_order().map(|n| *n.value()).collect();
//! assert_eq!(levels, vec![4, 2, 6, 1, 3, 5, 7]);
//! ```

use std::collections::VecDeque;

use log::trace;

use crate::error::TreeError;
use crate::tree::{Node, OrderedTree};

/// Breadth first iterator: the start node, then its children, then its grandchildren and so on.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            queue: start.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

/// Depth first iterator visiting each node before its left and then its right subtree.
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

/// Depth first iterator visiting each node between its left and its right subtree. Values come
/// out in ascending order.
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn new(start: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(start);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

/// Depth first iterator visiting each node after both of its subtrees.
pub struct PostOrder<'a, T> {
    /// Pending nodes and whether their children have been pushed already.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            stack: start.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a Node<T>;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> OrderedTree<T> {
    /// Iterates over the whole tree in ascending order.
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Iterates over the subtree rooted at `start` in ascending order.
    pub fn iter_from<'a>(&self, start: &'a Node<T>) -> InOrder<'a, T> {
        InOrder::new(Some(start))
    }

    /// Iterates over the whole tree one level at a time.
    pub fn iter_level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root())
    }

    /// Iterates over the subtree rooted at `start` one level at a time.
    pub fn iter_level_order_from<'a>(&self, start: &'a Node<T>) -> LevelOrder<'a, T> {
        LevelOrder::new(Some(start))
    }

    /// Iterates over the whole tree in pre-order.
    pub fn iter_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// Iterates over the subtree rooted at `start` in pre-order.
    pub fn iter_pre_order_from<'a>(&self, start: &'a Node<T>) -> PreOrder<'a, T> {
        PreOrder::new(Some(start))
    }

    /// Iterates over the whole tree in post-order.
    pub fn iter_post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root())
    }

    /// Iterates over the subtree rooted at `start` in post-order.
    pub fn iter_post_order_from<'a>(&self, start: &'a Node<T>) -> PostOrder<'a, T> {
        PostOrder::new(Some(start))
    }

    /// Calls `callback` on every node breadth first, starting at `from` or, if that is `None`,
    /// at the current root.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidCallback`] if `callback` is `None`. No node is visited.
    pub fn level_order<F>(
        &self,
        callback: Option<F>,
        from: Option<&Node<T>>,
    ) -> Result<(), TreeError>
    where
        F: FnMut(&Node<T>),
    {
        visit(callback, LevelOrder::new(from.or_else(|| self.root())))
    }

    /// Calls `callback` on every node in pre-order (node, left, right), starting at `from` or, if
    /// that is `None`, at the current root.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidCallback`] if `callback` is `None`. No node is visited.
    pub fn pre_order<F>(
        &self,
        callback: Option<F>,
        from: Option<&Node<T>>,
    ) -> Result<(), TreeError>
    where
        F: FnMut(&Node<T>),
    {
        visit(callback, PreOrder::new(from.or_else(|| self.root())))
    }

    /// Calls `callback` on every node in-order (left, node, right), starting at `from` or, if
    /// that is `None`, at the current root. Nodes are visited in ascending order of their values.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidCallback`] if `callback` is `None`. No node is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Node, OrderedTree, TreeError};
    ///
    /// let tree = OrderedTree::new(vec![3, 1, 2]);
    ///
    /// let mut sum = 0;
    /// tree.in_order(Some(|n: &Node<i32>| sum += *n.value()), None).unwrap();
    /// assert_eq!(sum, 6);
    ///
    /// let missing: Option<fn(&Node<i32>)> = None;
    /// assert_eq!(tree.in_order(missing, None), Err(TreeError::InvalidCallback));
    /// ```
    pub fn in_order<F>(
        &self,
        callback: Option<F>,
        from: Option<&Node<T>>,
    ) -> Result<(), TreeError>
    where
        F: FnMut(&Node<T>),
    {
        visit(callback, InOrder::new(from.or_else(|| self.root())))
    }

    /// Calls `callback` on every node in post-order (left, right, node), starting at `from` or, if
    /// that is `None`, at the current root.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidCallback`] if `callback` is `None`. No node is visited.
    pub fn post_order<F>(
        &self,
        callback: Option<F>,
        from: Option<&Node<T>>,
    ) -> Result<(), TreeError>
    where
        F: FnMut(&Node<T>),
    {
        visit(callback, PostOrder::new(from.or_else(|| self.root())))
    }
}

fn visit<'a, T, I, F>(callback: Option<F>, nodes: I) -> Result<(), TreeError>
where
    T: 'a,
    I: Iterator<Item = &'a Node<T>>,
    F: FnMut(&Node<T>),
{
    match callback {
        Some(callback) => {
            nodes.for_each(callback);
            Ok(())
        }
        None => {
            trace!("Rejected traversal without a callback");
            Err(TreeError::InvalidCallback)
        }
    }
}
