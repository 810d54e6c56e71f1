//! Depth-first traversals and the parenthesized debug rendering.

use std::fmt;

use crate::node::Node;

impl<T> Node<T> {
    /// Calls `visit` on every value of this subtree: left subtree, then this node, then the right
    /// subtree. For a BST this visits values in sorted order.
    ///
    /// # Panics
    ///
    /// If `visit` inserts into or removes from the tree being walked.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Node;
    ///
    /// let tree = Node::from_values([2, 3, 1]).unwrap();
    ///
    /// let mut values = Vec::new();
    /// tree.traverse_in_order(|v| values.push(*v));
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn traverse_in_order(&self, mut visit: impl FnMut(&T)) {
        self.in_order(&mut visit);
    }

    /// Calls `visit` on every value of this subtree: this node, then the left subtree, then the
    /// right subtree.
    ///
    /// # Panics
    ///
    /// If `visit` inserts into or removes from the tree being walked.
    pub fn traverse_pre_order(&self, mut visit: impl FnMut(&T)) {
        self.pre_order(&mut visit);
    }

    /// Calls `visit` on every value of this subtree: the left subtree, then the right subtree,
    /// then this node.
    ///
    /// # Panics
    ///
    /// If `visit` inserts into or removes from the tree being walked.
    pub fn traverse_post_order(&self, mut visit: impl FnMut(&T)) {
        self.post_order(&mut visit);
    }

    fn in_order(&self, visit: &mut dyn FnMut(&T)) {
        if let Some(left) = self.left_child() {
            left.in_order(visit);
        }
        visit(&*self.value());
        if let Some(right) = self.right_child() {
            right.in_order(visit);
        }
    }

    fn pre_order(&self, visit: &mut dyn FnMut(&T)) {
        visit(&*self.value());
        if let Some(left) = self.left_child() {
            left.pre_order(visit);
        }
        if let Some(right) = self.right_child() {
            right.pre_order(visit);
        }
    }

    fn post_order(&self, visit: &mut dyn FnMut(&T)) {
        if let Some(left) = self.left_child() {
            left.post_order(visit);
        }
        if let Some(right) = self.right_child() {
            right.post_order(visit);
        }
        visit(&*self.value());
    }
}

/// Renders the subtree as `(left) <-value-> (right)`, leaving out a side without a child. Meant
/// for eyeballing, not for parsing back.
impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(left) = self.left_child() {
            write!(f, "({}) <-", left)?;
        }
        write!(f, "{}", *self.value())?;
        if let Some(right) = self.right_child() {
            write!(f, "-> ({})", right)?;
        }
        Ok(())
    }
}
