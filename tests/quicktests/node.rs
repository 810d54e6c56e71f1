use linked_bst::Node;

use std::collections::HashSet;

use crate::Op;

/// Builds a tree out of `xs` with the first value as its root.
fn build(xs: &[i8]) -> Option<Node<i8>> {
    Node::from_values(xs.iter().copied()).ok()
}

fn in_order(tree: &Node<i8>) -> Vec<i8> {
    let mut values = Vec::new();
    tree.traverse_in_order(|v| values.push(*v));
    values
}

fn pre_order_nodes(tree: &Node<i8>) -> Vec<Node<i8>> {
    let mut nodes = Vec::new();
    let mut stack = vec![tree.clone()];
    while let Some(node) = stack.pop() {
        stack.extend(node.right_child());
        stack.extend(node.left_child());
        nodes.push(node);
    }
    nodes
}

/// Applies a set of operations to a tree and a sorted `Vec`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same values in both. Removing the root hands
/// the tree over to its replacement.
fn do_ops(ops: &[Op<i8>], mut tree: Option<Node<i8>>, expected: &mut Vec<i8>) -> Option<Node<i8>> {
    for op in ops {
        match op {
            Op::Insert(v) => {
                match tree.clone() {
                    Some(root) => root.insert(*v),
                    None => tree = Some(Node::new(*v)),
                }
                expected.push(*v);
            }
            Op::Remove(v) => {
                let Some(root) = tree.clone() else {
                    continue;
                };
                let Some(found) = root.search(v) else {
                    continue;
                };
                let pos = expected.iter().position(|x| x == v).unwrap();
                expected.remove(pos);

                let replacement = found.remove();
                if found.ptr_eq(&root) {
                    tree = replacement;
                }
            }
        }
    }

    expected.sort_unstable();
    tree
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut expected = Vec::new();
    let tree = do_ops(&ops, None, &mut expected);

    match tree {
        Some(tree) => tree.is_root() && in_order(&tree) == expected,
        None => expected.is_empty(),
    }
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let Some(tree) = build(&xs) else {
        return true;
    };
    let mut sorted = xs;
    sorted.sort_unstable();

    in_order(&tree) == sorted
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let Some(tree) = build(&xs) else {
        return true;
    };

    xs.iter()
        .all(|x| tree.search(x).map_or(false, |node| *node.value() == *x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let Some(tree) = build(&xs) else {
        return true;
    };
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn removing_unique_values(xs: Vec<i8>) -> bool {
    let unique: Vec<_> = {
        let mut seen = HashSet::new();
        xs.into_iter().filter(|x| seen.insert(*x)).collect()
    };
    // Keep the root so there's always a handle to the tree.
    let Some((first, rest)) = unique.split_first() else {
        return true;
    };
    let tree = Node::new(*first);
    for x in rest {
        tree.insert(*x);
    }

    rest.iter().all(|x| {
        let before = in_order(&tree);
        tree.remove_node_with_value(x);
        let after = in_order(&tree);

        tree.search(x).is_none()
            && before.into_iter().filter(|y| y != x).eq(after.into_iter())
    })
}

#[quickcheck]
fn depth_is_parent_depth_plus_one(xs: Vec<i8>) -> bool {
    let Some(tree) = build(&xs) else {
        return true;
    };

    tree.depth() == 0
        && pre_order_nodes(&tree).iter().all(|node| match node.parent() {
            Some(parent) => node.depth() == parent.depth() + 1,
            None => node.ptr_eq(&tree),
        })
}

#[quickcheck]
fn height_bounds_depth(xs: Vec<i8>) -> bool {
    let Some(tree) = build(&xs) else {
        return true;
    };

    pre_order_nodes(&tree)
        .iter()
        .all(|node| node.depth() <= tree.height() && (node.is_leaf() == (node.height() == 0)))
}

#[quickcheck]
fn predecessor_and_successor_are_adjacent(xs: Vec<i8>) -> bool {
    let unique: Vec<_> = {
        let mut seen = HashSet::new();
        xs.into_iter().filter(|x| seen.insert(*x)).collect()
    };
    let Some(tree) = build(&unique) else {
        return true;
    };
    let sorted = in_order(&tree);

    sorted.windows(2).all(|pair| {
        tree.successor_of(&pair[0]) == Some(pair[1])
            && tree.predecessor_of(&pair[1]) == Some(pair[0])
    }) && tree.predecessor_of(&sorted[0]).is_none()
        && tree.successor_of(&sorted[sorted.len() - 1]).is_none()
}

#[quickcheck]
fn removing_a_leaf_only_clears_its_slot(xs: Vec<i8>) -> bool {
    let Some(tree) = build(&xs) else {
        return true;
    };
    let Some(leaf) = pre_order_nodes(&tree)
        .into_iter()
        .find(|node| node.is_leaf() && !node.is_root())
    else {
        return true;
    };
    let parent = leaf.parent().unwrap();
    let was_left = leaf.is_left_child();
    let other = if was_left {
        parent.right_child()
    } else {
        parent.left_child()
    };
    let before = pre_order_nodes(&tree).len();

    leaf.remove().is_none()
        && leaf.is_root()
        && parent.left_child().map_or(true, |n| !n.ptr_eq(&leaf))
        && parent.right_child().map_or(true, |n| !n.ptr_eq(&leaf))
        && match (other, if was_left { parent.right_child() } else { parent.left_child() }) {
            (Some(a), Some(b)) => a.ptr_eq(&b),
            (None, None) => true,
            _ => false,
        }
        && pre_order_nodes(&tree).len() == before - 1
}
