//! Singly linked staging list with an in-place merge sort.
//!
//! Reports push borrowed tasks onto a [`Worklist`] while walking the index and
//! sort each list by a [`SortBy`] criterion afterwards. Sorting only relinks
//! the existing nodes; nothing is allocated or dropped.
//!
//! The merge step takes the left run's head only when it is strictly smaller,
//! so equal elements from the right run come first. The sort is therefore not
//! stable.

use super::compare::{compare, SortBy};
use super::task::Task;
use std::cmp::Ordering;
use std::fmt;

type Link<T> = Option<Box<ListNode<T>>>;

struct ListNode<T> {
    item: T,
    next: Link<T>,
}

pub struct Worklist<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for Worklist<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Worklist<T> {
    pub fn new() -> Self {
        Worklist { head: None, len: 0 }
    }

    pub fn push_front(&mut self, item: T) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { item, next }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let ListNode { item, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(item)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.item)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Consumes the list, keeping its order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Merge sorts the list in place using `cmp`.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.head = merge_sort(self.head.take(), &mut cmp);
    }
}

impl<'a> Worklist<&'a Task> {
    /// Sorts the staged tasks ascending by `by`.
    pub fn sort(&mut self, by: SortBy) {
        self.sort_by(|a, b| compare(a, b, by));
    }
}

fn merge_sort<T, F>(head: Link<T>, cmp: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut head = head?;
    if head.next.is_none() {
        return Some(head);
    }

    let second = split(&mut head);
    let first = merge_sort(Some(head), cmp);
    let second = merge_sort(second, cmp);
    merge(first, second, cmp)
}

/// Cuts the list after its middle node and returns the second half.
///
/// A fast cursor moves two nodes for every node the slow cursor moves, so a
/// list of `n` nodes keeps `ceil(n / 2)` nodes in the first half.
fn split<T>(head: &mut ListNode<T>) -> Link<T> {
    let mut slow_steps = 0;
    let mut fast: Option<&ListNode<T>> = Some(&*head);
    while let Some(node) = fast {
        let Some(next) = node.next.as_deref() else {
            break;
        };
        fast = next.next.as_deref();
        if fast.is_some() {
            slow_steps += 1;
        }
    }

    let mut slow = head;
    for _ in 0..slow_steps {
        slow = match slow.next.as_deref_mut() {
            Some(next) => next,
            None => return None,
        };
    }
    slow.next.take()
}

/// Merges two sorted runs; on ties the head of `right` is taken first.
fn merge<T, F>(mut left: Link<T>, mut right: Link<T>, cmp: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut head: Link<T> = None;
    let mut tail = &mut head;

    loop {
        let take_left = match (left.as_deref(), right.as_deref()) {
            (Some(a), Some(b)) => cmp(&a.item, &b.item) == Ordering::Less,
            _ => break,
        };
        let source = if take_left { &mut left } else { &mut right };
        let Some(mut node) = source.take() else {
            break;
        };
        *source = node.next.take();
        tail = &mut tail.insert(node).next;
    }

    *tail = left.or(right);
    head
}

impl<T> Drop for Worklist<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Worklist<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Keeps the iteration order of the source.
impl<T> FromIterator<T> for Worklist<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = Worklist::new();
        for item in items.into_iter().rev() {
            list.push_front(item);
        }
        list
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.item)
    }
}

impl<'a, T> IntoIterator for &'a Worklist<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IntoIter<T>(Worklist<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for Worklist<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
