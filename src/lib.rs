//! An unbalanced Binary Search Tree whose nodes know their parents.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The invariant kept by this crate is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value.
//!
//! > Equal values are routed to the right so the tree behaves like a multiset.
//!
//! Nothing here rebalances. Inserting an already sorted sequence produces a
//! tree shaped like a linked list, and every operation degrades to `O(N)`.
//!
//! ## Nodes are trees
//!
//! There is no separate "tree" type: a [`Node`] is both a node and the subtree
//! rooted at it. Every node also holds a weak reference to its parent which
//! makes upward queries like [`Node::depth`], [`Node::predecessor`] and
//! [`Node::successor`] possible.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Node;
//!
//! let tree = Node::from_values([5, 3, 7, 2, 4, 6, 8]).unwrap();
//!
//! let mut sorted = Vec::new();
//! tree.traverse_in_order(|v| sorted.push(*v));
//! assert_eq!(sorted, [2, 3, 4, 5, 6, 7, 8]);
//!
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.depth_of(&4), Some(2));
//! assert_eq!(tree.successor(), Some(6));
//!
//! let three = tree.search(&3).unwrap();
//! let replacement = three.remove().unwrap();
//! assert_eq!(*replacement.value(), 4);
//! assert!(tree.search(&3).is_none());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
mod node;
mod query;
mod traverse;


pub use error::BuildError;
pub use node::Node;
