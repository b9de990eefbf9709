//! Node storage for `SinglyLinkedList`.
//!
//! Nodes live in a `Vec` of slots and refer to each other by `NodeId`
//! instead of by pointer. A vacated slot joins a free stack threaded
//! through the vacant slots and is reused by the next insert, so a
//! `NodeId` stays valid until its node is removed.

use core::ops::{Index, IndexMut};

use alloc::vec::Vec;

/// Stable handle of a node inside an [`Arena`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NodeId(usize);

pub struct Node<T> {
    pub value: T,
    pub next: Option<NodeId>,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> },
}

pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
    occupied: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: None,
            occupied: 0,
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn insert(&mut self, node: Node<T>) -> NodeId {
        self.occupied += 1;
        match self.free {
            Some(id) => {
                let slot = &mut self.slots[id.0];
                self.free = match *slot {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("occupied slot on the free stack"),
                };
                *slot = Slot::Occupied(node);
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    pub fn remove(&mut self, id: NodeId) -> Node<T> {
        let vacant = Slot::Vacant { next_free: self.free };
        match core::mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { .. } => panic!("removing vacant node {:?}", id),
        }
    }

    #[cfg(test)]
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Drops every node and releases the slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.occupied = 0;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    #[inline]
    fn index(&self, id: NodeId) -> &Node<T> {
        match self.slots[id.0] {
            Slot::Occupied(ref node) => node,
            Slot::Vacant { .. } => panic!("vacant node {:?} is still linked", id),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots[id.0] {
            Slot::Occupied(ref mut node) => node,
            Slot::Vacant { .. } => panic!("vacant node {:?} is still linked", id),
        }
    }
}
