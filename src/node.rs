//! The [`Node`] handle and everything that changes the shape of a tree.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Node;
//!
//! let tree = Node::new(5);
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! tree.insert(1);
//! assert_eq!(*tree.search(&1).unwrap().value(), 1);
//!
//! // Equal values go to the right of the first one.
//! tree.insert(5);
//! assert!(tree.right_child().unwrap().is_right_child());
//!
//! // Removing a leaf leaves nothing in its place.
//! assert!(tree.remove_node_with_value(&1).is_none());
//! assert!(tree.search(&1).is_none());
//! ```

use std::cell::{Ref, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::error::BuildError;

/// A node of an unbalanced Binary Search Tree and, at the same time, the subtree rooted at it.
///
/// `Node` is a handle: cloning it is cheap and yields another handle to the same node, it never
/// copies the subtree. A node is owned by its parent's child slot (or by whoever holds the root)
/// and only keeps a weak reference to its parent.
pub struct Node<T>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    /// Only upgraded to answer questions about relationships. Never keeps the parent alive.
    parent: Weak<RefCell<Inner<T>>>,
    left: Option<Node<T>>,
    right: Option<Node<T>>,
}

/// Which child slot of its parent a node hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Manual implementation of `Clone` so cloning a handle doesn't require `T: Clone`.
impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        // Letting `Rc` drop the children recursively overflows the stack on degenerate trees so
        // we unlink them onto our own stack. Nodes someone else still has a handle to survive.
        let mut stack: Vec<Node<T>> = self.left.take().into_iter().collect();
        stack.extend(self.right.take());
        while let Some(Node(node)) = stack.pop() {
            if let Ok(node) = Rc::try_unwrap(node) {
                let mut node = node.into_inner();
                stack.extend(node.left.take());
                stack.extend(node.right.take());
            }
        }
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // NB the parent is left out on purpose, printing it would recurse forever.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &*self.value())
            .field("left", &self.left_child())
            .field("right", &self.right_child())
            .finish()
    }
}

impl<T> TryFrom<Vec<T>> for Node<T>
where
    T: Ord,
{
    type Error = BuildError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl<T> Node<T> {
    /// Creates a lone node with no parent and no children.
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            parent: Weak::new(),
            left: None,
            right: None,
        })))
    }

    /// Builds a tree from a sequence of values. The first value becomes the root and the rest
    /// are inserted one after another, so the shape of the tree depends on the order of `values`.
    ///
    /// # Errors
    ///
    /// [`BuildError::Empty`] if `values` yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{BuildError, Node};
    ///
    /// let tree = Node::from_values([0, 1, -1]).unwrap();
    /// assert_eq!(*tree.value(), 0);
    /// assert_eq!(*tree.left_child().unwrap().value(), -1);
    /// assert_eq!(*tree.right_child().unwrap().value(), 1);
    ///
    /// assert_eq!(Node::<i32>::from_values([]).unwrap_err(), BuildError::Empty);
    /// ```
    pub fn from_values<I>(values: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values = values.into_iter();
        let root = Self::new(values.next().ok_or(BuildError::Empty)?);

        let mut count = 1usize;
        for value in values {
            root.insert(value);
            count += 1;
        }
        trace!(nodes = count, "built tree");

        Ok(root)
    }

    /// Borrows the value stored in this node.
    ///
    /// # Panics
    ///
    /// If the node is being mutated, e.g. from inside a traversal callback.
    pub fn value(&self) -> Ref<'_, T> {
        Ref::map(self.0.borrow(), |inner| &inner.value)
    }

    /// The node this node hangs from, `None` for a root.
    pub fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(Self)
    }

    /// The root of the left subtree.
    pub fn left_child(&self) -> Option<Self> {
        self.0.borrow().left.clone()
    }

    /// The root of the right subtree.
    pub fn right_child(&self) -> Option<Self> {
        self.0.borrow().right.clone()
    }

    pub(crate) fn child(&self, side: Side) -> Option<Self> {
        match side {
            Side::Left => self.left_child(),
            Side::Right => self.right_child(),
        }
    }

    /// Whether both handles refer to the very same node. Values are never compared, two distinct
    /// nodes holding equal values are not the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Whether this node has no parent.
    pub fn is_root(&self) -> bool {
        self.0.borrow().parent.strong_count() == 0
    }

    /// Whether this node is its parent's left child.
    pub fn is_left_child(&self) -> bool {
        self.side() == Some(Side::Left)
    }

    /// Whether this node is its parent's right child.
    pub fn is_right_child(&self) -> bool {
        self.side() == Some(Side::Right)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        !self.has_child()
    }

    /// Whether this node has a left child.
    pub fn has_left_child(&self) -> bool {
        self.0.borrow().left.is_some()
    }

    /// Whether this node has a right child.
    pub fn has_right_child(&self) -> bool {
        self.0.borrow().right.is_some()
    }

    /// Whether this node has at least one child.
    pub fn has_child(&self) -> bool {
        self.has_left_child() || self.has_right_child()
    }

    /// Whether this node has a left and a right child.
    pub fn has_both_children(&self) -> bool {
        self.has_left_child() && self.has_right_child()
    }

    /// Which slot of the parent holds this node. Decided by identity since duplicate values make
    /// comparing values ambiguous.
    fn side(&self) -> Option<Side> {
        let parent = self.parent()?;
        if parent.left_child().map_or(false, |left| left.ptr_eq(self)) {
            Some(Side::Left)
        } else if parent.right_child().map_or(false, |right| right.ptr_eq(self)) {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Puts `child` into the slot on `side` and points `child` back at `self`. Whatever was in the
    /// slot before is released from it.
    fn attach(&self, side: Side, child: Option<Self>) {
        if let Some(child) = &child {
            child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        }
        let mut inner = self.0.borrow_mut();
        match side {
            Side::Left => inner.left = child,
            Side::Right => inner.right = child,
        }
    }

    fn clear_parent(&self) {
        self.0.borrow_mut().parent = Weak::new();
    }

    /// Compares `value` against the value in this node.
    fn compare(&self, value: &T) -> Ordering
    where
        T: Ord,
    {
        value.cmp(&*self.value())
    }

    /// Potentially finds a node holding `value` in this subtree. Equal values are inserted to the
    /// right so with duplicates this finds the shallowest one.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Node;
    ///
    /// let tree = Node::from_values([2, 1, 3]).unwrap();
    ///
    /// assert!(tree.search(&3).unwrap().is_right_child());
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, value: &T) -> Option<Self>
    where
        T: Ord,
    {
        let mut current = self.clone();
        loop {
            let next = match current.compare(value) {
                Ordering::Less => current.left_child(),
                Ordering::Equal => return Some(current),
                Ordering::Greater => current.right_child(),
            };
            current = next?;
        }
    }

    /// Inserts `value` as a new leaf of this subtree. Values less than a node go to its left,
    /// everything else (equal values included) goes to its right. Nothing is rebalanced.
    pub fn insert(&self, value: T)
    where
        T: Ord,
    {
        let mut current = self.clone();
        let side = loop {
            let side = match current.compare(&value) {
                Ordering::Less => Side::Left,
                Ordering::Equal | Ordering::Greater => Side::Right,
            };
            match current.child(side) {
                Some(child) => current = child,
                None => break side,
            }
        };

        trace!(?side, "attaching new leaf");
        current.attach(side, Some(Self::new(value)));
        current.check_links();
    }

    /// Detaches this node from its tree and returns the node that took its place, if any.
    ///
    /// - A leaf leaves an empty slot behind.
    /// - A node with one child is replaced by that child.
    /// - A node with two children is replaced by its in-order successor (the leftmost node of its
    ///   right subtree) which adopts both of its children.
    ///
    /// Afterwards this node has no parent and no children. When this node was a root its
    /// replacement becomes a root too and the caller has to hold on to it. Calling `remove` on a
    /// lone node does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Node;
    ///
    /// let tree = Node::from_values([5, 3, 8, 7, 9]).unwrap();
    ///
    /// let eight = tree.search(&8).unwrap();
    /// let replacement = eight.remove().unwrap();
    ///
    /// assert_eq!(*replacement.value(), 9);
    /// assert_eq!(*replacement.left_child().unwrap().value(), 7);
    /// assert!(replacement.parent().unwrap().ptr_eq(&tree));
    /// assert!(eight.is_root() && eight.is_leaf());
    /// ```
    pub fn remove(&self) -> Option<Self>
    where
        T: Ord,
    {
        let parent = self.parent();
        let side = self.side();
        let (left, right) = {
            let mut inner = self.0.borrow_mut();
            (inner.left.take(), inner.right.take())
        };

        let replacement = match (left, right) {
            (None, None) => {
                trace!("removing leaf");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("removing node with one child");
                Some(child)
            }
            (Some(left), Some(right)) => {
                trace!("removing node with two children");
                Some(Self::adopt_by_successor(left, right))
            }
        };

        match (parent, side) {
            (Some(parent), Some(side)) => {
                parent.attach(side, replacement.clone());
                parent.check_links();
            }
            _ => {
                if let Some(replacement) = &replacement {
                    replacement.clear_parent();
                }
            }
        }
        self.clear_parent();

        replacement
    }

    /// Finds the in-order successor in `right`, unlinks it from where it was and hands it both
    /// orphaned subtrees.
    fn adopt_by_successor(left: Self, right: Self) -> Self
    where
        T: Ord,
    {
        let successor = right.minimum();
        // The successor being `right` itself means it has no left child. Its right subtree stays.
        if !successor.ptr_eq(&right) {
            successor.remove();
            successor.attach(Side::Right, Some(right));
        }
        successor.attach(Side::Left, Some(left));
        successor.check_links();

        successor
    }

    /// Removes the node [`search`][Node::search] finds for `value` and returns its replacement.
    /// `None` both when nothing holds `value` and when the removed node was a leaf.
    ///
    /// When the match is `self` this handle ends up detached and the returned replacement is the
    /// new root.
    pub fn remove_node_with_value(&self, value: &T) -> Option<Self>
    where
        T: Ord,
    {
        self.search(value)?.remove()
    }

    /// In debug builds, asserts the order property and parent links between `self` and its
    /// children.
    fn check_links(&self)
    where
        T: Ord,
    {
        if cfg!(debug_assertions) {
            if let Some(left) = self.left_child() {
                assert!(*left.value() < *self.value());
                assert!(left.parent().map_or(false, |p| p.ptr_eq(self)));
            }
            if let Some(right) = self.right_child() {
                assert!(*right.value() >= *self.value());
                assert!(right.parent().map_or(false, |p| p.ptr_eq(self)));
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn attach_for_test(&self, side: Side, child: Self) {
        self.attach(side, Some(child));
    }
}
