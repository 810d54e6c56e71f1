//! Positional queries: how tall a subtree is, how deep a node sits and which values neighbour it.

use crate::node::Node;

impl<T> Node<T> {
    /// The leftmost node of this subtree, i.e. the one holding its smallest value.
    pub fn minimum(&self) -> Self {
        let mut node = self.clone();
        while let Some(left) = node.left_child() {
            node = left;
        }
        node
    }

    /// The rightmost node of this subtree, i.e. the one holding its largest value.
    pub fn maximum(&self) -> Self {
        let mut node = self.clone();
        while let Some(right) = node.right_child() {
            node = right;
        }
        node
    }

    /// The root of the tree this node belongs to. A root returns itself.
    pub fn root(&self) -> Self {
        let mut node = self.clone();
        while let Some(parent) = node.parent() {
            node = parent;
        }
        node
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a
    /// height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Node;
    ///
    /// let tree = Node::new(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        // Walks level by level so a degenerate tree can't blow the stack.
        let mut level = vec![self.clone()];
        let mut height = 0;
        loop {
            level = level
                .iter()
                .flat_map(|node| node.left_child().into_iter().chain(node.right_child()))
                .collect();
            if level.is_empty() {
                return height;
            }
            height += 1;
        }
    }

    /// The height of the node [`search`][Node::search] finds for `value`.
    pub fn height_of(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.search(value).map(|node| node.height())
    }

    /// The number of edges between this node and the root. The root has a depth of 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self.parent();
        while let Some(parent) = node {
            depth += 1;
            node = parent.parent();
        }
        depth
    }

    /// The depth of the node [`search`][Node::search] finds for `value`.
    pub fn depth_of(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.search(value).map(|node| node.depth())
    }

    /// The next smaller value in the whole tree, `None` when this node holds the minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Node;
    ///
    /// let tree = Node::from_values([5, 3, 7, 4]).unwrap();
    ///
    /// assert_eq!(tree.predecessor(), Some(4));
    /// assert_eq!(tree.search(&4).unwrap().predecessor(), Some(3));
    /// assert_eq!(tree.predecessor_of(&3), None);
    /// ```
    pub fn predecessor(&self) -> Option<T>
    where
        T: Ord + Clone,
    {
        if let Some(left) = self.left_child() {
            return Some(left.maximum().value().clone());
        }

        // Without a left subtree it's the closest ancestor that is smaller. Larger ancestors are
        // the ones we're a left descendant of and get skipped.
        let mut node = self.parent();
        while let Some(parent) = node {
            if *parent.value() < *self.value() {
                return Some(parent.value().clone());
            }
            node = parent.parent();
        }
        None
    }

    /// The predecessor of the node [`search`][Node::search] finds for `value`.
    pub fn predecessor_of(&self, value: &T) -> Option<T>
    where
        T: Ord + Clone,
    {
        self.search(value)?.predecessor()
    }

    /// The next larger value in the whole tree, `None` when this node holds the maximum.
    pub fn successor(&self) -> Option<T>
    where
        T: Ord + Clone,
    {
        if let Some(right) = self.right_child() {
            return Some(right.minimum().value().clone());
        }

        let mut node = self.parent();
        while let Some(parent) = node {
            if *parent.value() > *self.value() {
                return Some(parent.value().clone());
            }
            node = parent.parent();
        }
        None
    }

    /// The successor of the node [`search`][Node::search] finds for `value`.
    pub fn successor_of(&self, value: &T) -> Option<T>
    where
        T: Ord + Clone,
    {
        self.search(value)?.successor()
    }
}
