//! Sideways text rendering of a tree for eyeballing its shape. The output is meant for people and
//! may change at any time.
//!
//! The right subtree is drawn above its parent and the left subtree below it, so reading the
//! values top to bottom gives them in descending order:
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let tree = OrderedTree::new(vec![1, 2, 3]);
//! assert_eq!(
//!     tree.to_string(),
//!     "│   ┌── 3\n└── 2\n    └── 1\n",
//! );
//! ```

use std::fmt;

use crate::tree::{Node, OrderedTree};

impl<T> OrderedTree<T>
where
    T: fmt::Display,
{
    /// Writes the subtree rooted at `node` to `sink`. Writes nothing for `None`.
    pub fn pretty_print<W>(&self, node: Option<&Node<T>>, sink: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        match node {
            Some(node) => render(node, "", true, sink),
            None => Ok(()),
        }
    }
}

impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pretty_print(self.root(), f)
    }
}

fn render<T, W>(node: &Node<T>, prefix: &str, is_left: bool, sink: &mut W) -> fmt::Result
where
    T: fmt::Display,
    W: fmt::Write,
{
    if let Some(right) = node.right() {
        let indent = if is_left { "│   " } else { "    " };
        render(right, &format!("{}{}", prefix, indent), false, sink)?;
    }

    let branch = if is_left { "└── " } else { "┌── " };
    writeln!(sink, "{}{}{}", prefix, branch, node.value())?;

    if let Some(left) = node.left() {
        let indent = if is_left { "    " } else { "│   " };
        render(left, &format!("{}{}", prefix, indent), true, sink)?;
    }

    Ok(())
}
