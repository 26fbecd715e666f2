//! Height-balanced binary search tree keyed by task id.
//!
//! Each [`Node`] owns its task and both children, so rotations are plain
//! ownership moves between `Option<Box<Node>>` slots. Heights are cached per
//! node (leaf = 1, empty subtree = 0) and every insert or delete restores
//! `|height(left) - height(right)| <= 1` on the way back up.
//!
//! The functions here are the building blocks of
//! [`TaskIndex`](crate::libs::index::TaskIndex); they never log and never fail.
//! A missing id is a normal outcome and a duplicate id on insert leaves the
//! tree untouched.

use super::compare::compare_with_id;
use super::task::Task;
use std::cmp::Ordering;

/// Owned link to a subtree.
pub type Link = Option<Box<Node>>;

#[derive(Debug, Clone)]
pub struct Node {
    task: Task,
    left: Link,
    right: Link,
    height: i32,
}

impl Node {
    fn leaf(task: Task) -> Box<Node> {
        Box::new(Node {
            task,
            left: None,
            right: None,
            height: 1,
        })
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

pub fn height(node: Option<&Node>) -> i32 {
    node.map_or(0, |n| n.height)
}

/// `height(left) - height(right)`.
pub fn balance_factor(node: &Node) -> i32 {
    height(node.left()) - height(node.right())
}

fn update_height(node: &mut Node) {
    node.height = 1 + height(node.left()).max(height(node.right()));
}

/// Right rotation around `y`: its left child `x` becomes the subtree root.
fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let Some(mut x) = y.left.take() else {
        debug_assert!(false, "right rotation on node {} without a left child", y.task.id);
        return y;
    };
    y.left = x.right.take();
    update_height(&mut y);
    x.right = Some(y);
    update_height(&mut x);
    x
}

/// Left rotation around `x`: its right child `y` becomes the subtree root.
fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let Some(mut y) = x.right.take() else {
        debug_assert!(false, "left rotation on node {} without a right child", x.task.id);
        return x;
    };
    x.right = y.left.take();
    update_height(&mut x);
    y.left = Some(x);
    update_height(&mut y);
    y
}

/// Finds the node holding `id`.
pub fn search(root: Option<&Node>, id: u32) -> Option<&Node> {
    let mut current = root;
    while let Some(node) = current {
        match compare_with_id(&node.task, id) {
            Ordering::Equal => return Some(node),
            Ordering::Less => current = node.right(),
            Ordering::Greater => current = node.left(),
        }
    }
    None
}

/// Finds the task holding `id` for in-place edits.
///
/// Callers must not change the returned task's id; the tree would no longer
/// be ordered.
pub fn search_mut(root: &mut Link, id: u32) -> Option<&mut Task> {
    let mut current = root.as_deref_mut();
    while let Some(node) = current {
        match compare_with_id(&node.task, id) {
            Ordering::Equal => return Some(&mut node.task),
            Ordering::Less => current = node.right.as_deref_mut(),
            Ordering::Greater => current = node.left.as_deref_mut(),
        }
    }
    None
}

/// Inserts `task` keyed by its id and rebalances the path back to `root`.
///
/// Returns `false` (and drops `task`) when the id is already present; the
/// tree is unchanged in that case.
pub fn insert(root: &mut Link, task: Task) -> bool {
    let (node, inserted) = insert_node(root.take(), task);
    *root = Some(node);
    inserted
}

fn insert_node(link: Link, task: Task) -> (Box<Node>, bool) {
    let Some(mut node) = link else {
        return (Node::leaf(task), true);
    };

    let id = task.id;
    let inserted = match compare_with_id(&task, node.task.id) {
        Ordering::Less => {
            let (child, inserted) = insert_node(node.left.take(), task);
            node.left = Some(child);
            inserted
        }
        Ordering::Greater => {
            let (child, inserted) = insert_node(node.right.take(), task);
            node.right = Some(child);
            inserted
        }
        Ordering::Equal => return (node, false),
    };

    update_height(&mut node);
    (rebalance_after_insert(node, id), inserted)
}

/// Restores balance after inserting `id` below `node`.
///
/// The side that grew is known from the inserted key, so the case is picked
/// by comparing it with the nearer child's key.
fn rebalance_after_insert(mut node: Box<Node>, id: u32) -> Box<Node> {
    let balance = balance_factor(&node);

    if balance > 1 {
        if let Some(left_id) = node.left().map(|left| left.task.id) {
            match id.cmp(&left_id) {
                Ordering::Less => return rotate_right(node),
                Ordering::Greater => {
                    node.left = node.left.take().map(rotate_left);
                    return rotate_right(node);
                }
                Ordering::Equal => {}
            }
        }
    }

    if balance < -1 {
        if let Some(right_id) = node.right().map(|right| right.task.id) {
            match id.cmp(&right_id) {
                Ordering::Greater => return rotate_left(node),
                Ordering::Less => {
                    node.right = node.right.take().map(rotate_right);
                    return rotate_left(node);
                }
                Ordering::Equal => {}
            }
        }
    }

    node
}

/// Removes the task holding `id` and rebalances the path back to `root`.
///
/// Returns the removed task, or `None` when the id is absent.
pub fn delete(root: &mut Link, id: u32) -> Option<Task> {
    let (node, removed) = delete_node(root.take(), id);
    *root = node;
    removed
}

fn delete_node(link: Link, id: u32) -> (Link, Option<Task>) {
    let Some(mut node) = link else {
        return (None, None);
    };

    let removed = match compare_with_id(&node.task, id) {
        Ordering::Greater => {
            let (child, removed) = delete_node(node.left.take(), id);
            node.left = child;
            removed
        }
        Ordering::Less => {
            let (child, removed) = delete_node(node.right.take(), id);
            node.right = child;
            removed
        }
        Ordering::Equal => {
            let successor = match (&node.left, &node.right) {
                (Some(_), Some(right)) => Some(leftmost(right).task.clone()),
                _ => None,
            };

            match successor {
                // Zero or one child: the child subtree is already balanced.
                None => {
                    let child = node.left.take().or_else(|| node.right.take());
                    return (child, Some(node.task));
                }
                // Two children: take over the successor's value, then drop its node.
                Some(successor) => {
                    let successor_id = successor.id;
                    let original = std::mem::replace(&mut node.task, successor);
                    let (child, _) = delete_node(node.right.take(), successor_id);
                    node.right = child;
                    Some(original)
                }
            }
        }
    };

    update_height(&mut node);
    (Some(rebalance_after_delete(node)), removed)
}

/// Restores balance after a removal below `node`.
///
/// The heavier child's balance factor picks between single and double rotation.
fn rebalance_after_delete(mut node: Box<Node>) -> Box<Node> {
    let balance = balance_factor(&node);

    if balance > 1 {
        if node.left().map_or(0, balance_factor) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if node.right().map_or(0, balance_factor) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

fn leftmost(node: &Node) -> &Node {
    let mut current = node;
    while let Some(left) = current.left() {
        current = left;
    }
    current
}

/// Visits every task in ascending id order.
pub fn for_each_in_order<F>(root: Option<&Node>, visit: &mut F)
where
    F: FnMut(&Task),
{
    if let Some(node) = root {
        for_each_in_order(node.left(), visit);
        visit(&node.task);
        for_each_in_order(node.right(), visit);
    }
}

/// In-order iterator over the tasks of a subtree.
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub fn new(root: Option<&'a Node>) -> Self {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.task)
    }
}

/// Checks ordering, cached heights and the balance bound for every node.
pub fn is_balanced(root: Option<&Node>) -> bool {
    fn check(node: Option<&Node>, lower: Option<u32>, upper: Option<u32>) -> Option<i32> {
        let Some(node) = node else {
            return Some(0);
        };
        let id = node.task.id;
        if lower.is_some_and(|lower| id <= lower) || upper.is_some_and(|upper| id >= upper) {
            return None;
        }
        let left = check(node.left(), lower, Some(id))?;
        let right = check(node.right(), Some(id), upper)?;
        let height = 1 + left.max(right);
        if (left - right).abs() > 1 || height != node.height {
            return None;
        }
        Some(height)
    }

    check(root, None, None).is_some()
}
