//! Index-linked doubly linked list backed by `SlotArena`.
//!
//! Nodes live in a [`SlotArena`] and refer to their neighbours by
//! [`SlotId`] rather than by pointer, so the list needs no `unsafe` and a
//! handle to a removed node simply stops resolving. `BlockChain` keeps its
//! blocks in a `NodeList`.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None, next: Some(id_2) }  │
//!   │ id_2   │ { value: B, prev: Some(id_1), next: id_3 }  │
//!   │ id_3   │ { value: C, prev: Some(id_2), next: None }  │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail
//! ```
//!
//! ## Performance
//! - `push_front` / `push_back` / `insert_before` / `insert_after`: O(1)
//! - `remove`: O(1)
//! - `next` / `prev`: O(1)
//! - `iter`: O(n)
//!
//! `debug_validate_invariants()` is available in debug/test builds.
use rustc_hash::FxHashSet;

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Doubly linked list whose nodes are addressed by `SlotId`.
#[derive(Debug, Clone)]
pub struct NodeList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> NodeList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    pub fn head(&self) -> Option<SlotId> {
        self.head
    }

    pub fn tail(&self) -> Option<SlotId> {
        self.tail
    }

    /// Returns the successor of `id`, or `None` at the tail or for a stale id.
    pub fn next(&self, id: SlotId) -> Option<SlotId> {
        self.arena.get(id).and_then(|node| node.next)
    }

    /// Returns the predecessor of `id`, or `None` at the head or for a stale id.
    pub fn prev(&self, id: SlotId) -> Option<SlotId> {
        self.arena.get(id).and_then(|node| node.prev)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Borrows the values of two distinct nodes mutably.
    pub fn pair_mut(&mut self, a: SlotId, b: SlotId) -> Option<(&mut T, &mut T)> {
        self.arena
            .get2_mut(a, b)
            .map(|(x, y)| (&mut x.value, &mut y.value))
    }

    /// Inserts a new node at the front and returns its `SlotId`.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.set_prev(head, Some(id)),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        id
    }

    /// Inserts a new node at the back and returns its `SlotId`.
    pub fn push_back(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.set_next(tail, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Inserts a new node directly before `at`; `None` if `at` is stale.
    pub fn insert_before(&mut self, at: SlotId, value: T) -> Option<SlotId> {
        let prev = self.arena.get(at)?.prev;
        let id = self.arena.insert(Node {
            value,
            prev,
            next: Some(at),
        });
        self.set_prev(at, Some(id));
        match prev {
            Some(prev) => self.set_next(prev, Some(id)),
            None => self.head = Some(id),
        }
        Some(id)
    }

    /// Inserts a new node directly after `at`; `None` if `at` is stale.
    pub fn insert_after(&mut self, at: SlotId, value: T) -> Option<SlotId> {
        let next = self.arena.get(at)?.next;
        let id = self.arena.insert(Node {
            value,
            prev: Some(at),
            next,
        });
        self.set_next(at, Some(id));
        match next {
            Some(next) => self.set_prev(next, Some(id)),
            None => self.tail = Some(id),
        }
        Some(id)
    }

    /// Unlinks the node `id` and returns its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.set_prev(next, prev),
            None => self.tail = prev,
        }
        self.arena.remove(id).map(|node| node.value)
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns an iterator of values from head to tail.
    pub fn iter(&self) -> NodeListIter<'_, T> {
        NodeListIter {
            list: self,
            current: self.head,
        }
    }

    /// Returns an iterator of SlotIds from head to tail.
    pub fn iter_ids(&self) -> NodeListIdIter<'_, T> {
        NodeListIdIter {
            list: self,
            current: self.head,
        }
    }

    /// Walks the links and checks them against the arena.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.head.is_none() || self.tail.is_none() {
            if self.head.is_some() || self.tail.is_some() || !self.is_empty() {
                return Err(InvariantError::new(format!(
                    "head {:?} / tail {:?} disagree with {} nodes",
                    self.head,
                    self.tail,
                    self.len()
                )));
            }
            return Ok(());
        }

        let mut seen = FxHashSet::default();
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            if !seen.insert(id) {
                return Err(InvariantError::new(format!("cycle through node {:?}", id)));
            }
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("stale link to {:?}", id)))?;
            if node.prev != prev {
                return Err(InvariantError::new(format!(
                    "node {:?} has prev {:?}, expected {:?}",
                    id, node.prev, prev
                )));
            }
            if node.next.is_none() && self.tail != Some(id) {
                return Err(InvariantError::new(format!(
                    "last node {:?} is not the tail {:?}",
                    id, self.tail
                )));
            }
            prev = Some(id);
            current = node.next;
        }

        if seen.len() != self.len() {
            return Err(InvariantError::new(format!(
                "{} reachable nodes but {} allocated",
                seen.len(),
                self.len()
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("node list invariant violated: {err}");
        }
    }

    fn set_prev(&mut self, id: SlotId, prev: Option<SlotId>) {
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = prev;
        }
    }

    fn set_next(&mut self, id: SlotId, next: Option<SlotId>) {
        if let Some(node) = self.arena.get_mut(id) {
            node.next = next;
        }
    }
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over values from head to tail.
pub struct NodeListIter<'a, T> {
    list: &'a NodeList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for NodeListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

/// Iterator over SlotIds from head to tail.
pub struct NodeListIdIter<'a, T> {
    list: &'a NodeList<T>,
    current: Option<SlotId>,
}

impl<T> Iterator for NodeListIdIter<'_, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.list.arena.get(id)?.next;
        Some(id)
    }
}
