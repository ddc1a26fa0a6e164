//! Positional doubly linked list.
//!
//! The classic list-with-positions interface: every insertion returns a
//! [`Pos`] handle that stays valid until that exact entry is removed, no
//! matter what happens elsewhere in the list. Removal through a handle is
//! O(1). Nodes live in a [`Slots`] arena and link to each other by id, with
//! `usize::MAX` standing in for the null link, so the list needs no
//! allocated sentinel nodes and no unsafe code.

use crate::bucket::slots::Slots;
use crate::error::{BucketError, Result};

const NIL: usize = usize::MAX;

/// Stable handle to one entry of a [`PositionalList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos(usize);

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: usize,
    next: usize,
}

/// Doubly linked list with O(1) insertion and removal at known positions.
#[derive(Debug, Clone)]
pub struct PositionalList<T> {
    nodes: Slots<Node<T>>,
    head: usize,
    tail: usize,
}

impl<T> PositionalList<T> {
    pub fn new() -> Self {
        PositionalList {
            nodes: Slots::new(),
            head: NIL,
            tail: NIL,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Position of the first entry, or `None` when empty.
    pub fn first(&self) -> Option<Pos> {
        if self.head == NIL {
            None
        } else {
            Some(Pos(self.head))
        }
    }

    /// Position of the last entry, or `None` when empty.
    pub fn last(&self) -> Option<Pos> {
        if self.tail == NIL {
            None
        } else {
            Some(Pos(self.tail))
        }
    }

    /// Value of the first entry, or `None` when empty.
    pub fn front(&self) -> Option<&T> {
        self.nodes.get(self.head).map(|node| &node.value)
    }

    /// Value of the last entry, or `None` when empty.
    pub fn back(&self) -> Option<&T> {
        self.nodes.get(self.tail).map(|node| &node.value)
    }

    /// Prepends `value` and returns its position.
    pub fn add_first(&mut self, value: T) -> Pos {
        let id = self.nodes.insert(Node {
            value,
            prev: NIL,
            next: self.head,
        });
        if let Some(old) = self.nodes.get_mut(self.head) {
            old.prev = id;
        } else {
            self.tail = id;
        }
        self.head = id;
        Pos(id)
    }

    /// Appends `value` and returns its position.
    pub fn add_last(&mut self, value: T) -> Pos {
        let id = self.nodes.insert(Node {
            value,
            prev: self.tail,
            next: NIL,
        });
        if let Some(old) = self.nodes.get_mut(self.tail) {
            old.next = id;
        } else {
            self.head = id;
        }
        self.tail = id;
        Pos(id)
    }

    /// Inserts `value` immediately before `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidHandle`] if `pos` does not refer to a
    /// live entry of this list.
    pub fn add_before(&mut self, pos: Pos, value: T) -> Result<Pos> {
        let anchor = pos.0;
        let prev = match self.nodes.get(anchor) {
            Some(node) => node.prev,
            None => return Err(BucketError::InvalidHandle),
        };
        let id = self.nodes.insert(Node {
            value,
            prev,
            next: anchor,
        });
        if let Some(before) = self.nodes.get_mut(prev) {
            before.next = id;
        } else {
            self.head = id;
        }
        if let Some(node) = self.nodes.get_mut(anchor) {
            node.prev = id;
        }
        Ok(Pos(id))
    }

    /// Inserts `value` immediately after `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidHandle`] if `pos` does not refer to a
    /// live entry of this list.
    pub fn add_after(&mut self, pos: Pos, value: T) -> Result<Pos> {
        let anchor = pos.0;
        let next = match self.nodes.get(anchor) {
            Some(node) => node.next,
            None => return Err(BucketError::InvalidHandle),
        };
        let id = self.nodes.insert(Node {
            value,
            prev: anchor,
            next,
        });
        if let Some(after) = self.nodes.get_mut(next) {
            after.prev = id;
        } else {
            self.tail = id;
        }
        if let Some(node) = self.nodes.get_mut(anchor) {
            node.next = id;
        }
        Ok(Pos(id))
    }

    /// Unlinks the entry at `pos` and returns its value.
    ///
    /// Every other position of the list stays valid.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidHandle`] if `pos` was already removed.
    pub fn remove(&mut self, pos: Pos) -> Result<T> {
        let node = self.nodes.remove(pos.0).ok_or(BucketError::InvalidHandle)?;
        if let Some(before) = self.nodes.get_mut(node.prev) {
            before.next = node.next;
        } else {
            self.head = node.next;
        }
        if let Some(after) = self.nodes.get_mut(node.next) {
            after.prev = node.prev;
        } else {
            self.tail = node.prev;
        }
        Ok(node.value)
    }

    /// Borrows the value at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidHandle`] if `pos` was already removed.
    pub fn get(&self, pos: Pos) -> Result<&T> {
        self.nodes
            .get(pos.0)
            .map(|node| &node.value)
            .ok_or(BucketError::InvalidHandle)
    }

    /// Mutably borrows the value at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::InvalidHandle`] if `pos` was already removed.
    pub fn get_mut(&mut self, pos: Pos) -> Result<&mut T> {
        self.nodes
            .get_mut(pos.0)
            .map(|node| &mut node.value)
            .ok_or(BucketError::InvalidHandle)
    }

    /// Whether `pos` still refers to a live entry.
    pub fn contains(&self, pos: Pos) -> bool {
        self.nodes.contains(pos.0)
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Applies `apply` to every value, front to back.
    pub fn for_each_mut(&mut self, mut apply: impl FnMut(&mut T)) {
        let mut cursor = self.head;
        while cursor != NIL {
            let next = match self.nodes.get_mut(cursor) {
                Some(node) => {
                    apply(&mut node.value);
                    node.next
                }
                None => break,
            };
            cursor = next;
        }
    }
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, T> {
    list: &'a PositionalList<T>,
    cursor: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.list.nodes.get(self.cursor)?;
        self.cursor = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Copy>(list: &PositionalList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_new_list_is_empty() {
        let list: PositionalList<i32> = PositionalList::new();
        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        assert_eq!(list.front(), None);
    }

    #[test]
    fn test_add_last_preserves_order() {
        let mut list = PositionalList::new();
        list.add_last(1);
        list.add_last(2);
        list.add_last(3);
        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn test_add_first_prepends() {
        let mut list = PositionalList::new();
        list.add_first(1);
        list.add_first(2);
        list.add_first(3);
        assert_eq!(collect(&list), vec![3, 2, 1]);
    }

    #[test]
    fn test_add_before_and_after_anchor() {
        let mut list = PositionalList::new();
        let b = list.add_last('b');
        assert!(list.add_before(b, 'a').is_ok());
        assert!(list.add_after(b, 'c').is_ok());
        assert_eq!(collect(&list), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_add_before_head_updates_head() {
        let mut list = PositionalList::new();
        let head = list.add_last(2);
        let pos = list.add_before(head, 1).unwrap();
        assert_eq!(list.first(), Some(pos));
        assert_eq!(collect(&list), vec![1, 2]);
    }

    #[test]
    fn test_remove_middle_relinks() {
        let mut list = PositionalList::new();
        list.add_last(1);
        let mid = list.add_last(2);
        list.add_last(3);
        assert_eq!(list.remove(mid), Ok(2));
        assert_eq!(collect(&list), vec![1, 3]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_endpoints_update_head_and_tail() {
        let mut list = PositionalList::new();
        let first = list.add_last(1);
        list.add_last(2);
        let last = list.add_last(3);
        assert_eq!(list.remove(first), Ok(1));
        assert_eq!(list.remove(last), Ok(3));
        assert_eq!(collect(&list), vec![2]);
        assert_eq!(list.front(), list.back());
    }

    #[test]
    fn test_remove_only_entry_empties_list() {
        let mut list = PositionalList::new();
        let pos = list.add_first(9);
        assert_eq!(list.remove(pos), Ok(9));
        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
    }

    #[test]
    fn test_stale_position_is_rejected() {
        let mut list = PositionalList::new();
        let pos = list.add_last(1);
        list.remove(pos).unwrap();
        assert!(matches!(list.remove(pos), Err(BucketError::InvalidHandle)));
        assert!(matches!(list.get(pos), Err(BucketError::InvalidHandle)));
        assert!(matches!(
            list.add_before(pos, 0),
            Err(BucketError::InvalidHandle)
        ));
    }

    #[test]
    fn test_other_positions_survive_removal() {
        let mut list = PositionalList::new();
        let a = list.add_last('a');
        let b = list.add_last('b');
        let c = list.add_last('c');
        list.remove(b).unwrap();
        assert_eq!(list.get(a), Ok(&'a'));
        assert_eq!(list.get(c), Ok(&'c'));
    }

    #[test]
    fn test_position_survives_slot_reuse_elsewhere() {
        let mut list = PositionalList::new();
        let a = list.add_last(1);
        list.add_last(2);
        list.remove(a).unwrap();
        let d = list.add_last(4);
        assert_eq!(list.get(d), Ok(&4));
        assert_eq!(collect(&list), vec![2, 4]);
    }

    #[test]
    fn test_for_each_mut_visits_in_order() {
        let mut list = PositionalList::new();
        list.add_last(1);
        list.add_last(2);
        list.add_last(3);
        let mut seen = Vec::new();
        list.for_each_mut(|value| {
            seen.push(*value);
            *value *= 10;
        });
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(collect(&list), vec![10, 20, 30]);
    }

    #[test]
    fn test_get_mut_updates_value() {
        let mut list = PositionalList::new();
        let pos = list.add_last(5);
        *list.get_mut(pos).unwrap() = 7;
        assert_eq!(list.get(pos), Ok(&7));
    }
}
