//! Generation-stamped slot storage.
//!
//! `SlotArena` hands out [`SlotId`] handles into a `Vec` of slots and reuses
//! freed slots through a free list. Each slot carries a generation that is
//! bumped whenever its value is removed, so a handle to a removed value never
//! resolves to a later occupant of the same slot.
//!
//! ```text
//!   slots                                 free_list
//!   ┌───┬──────────────────────────┐      ┌───┐
//!   │ 0 │ gen 0  Some(A)           │      │ 1 │
//!   │ 1 │ gen 3  None              │ ◄────┴───┘
//!   │ 2 │ gen 1  Some(B)           │
//!   └───┴──────────────────────────┘
//!
//!   SlotId { index: 1, generation: 2 }  → stale, resolves to None
//! ```
//!
//! ## Performance
//! - `insert` / `remove` / `get`: O(1)
//! - `iter`: O(slots)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    index: usize,
    generation: u32,
}

impl SlotId {
    pub fn index(self) -> usize {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    value: Option<T>,
    generation: u32,
}

#[derive(Debug, Clone)]
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, value: T) -> SlotId {
        let index = if let Some(index) = self.free_list.pop() {
            self.slots[index].value = Some(value);
            index
        } else {
            self.slots.push(Slot {
                value: Some(value),
                generation: 0,
            });
            self.slots.len() - 1
        };
        self.len += 1;
        SlotId {
            index,
            generation: self.slots[index].generation,
        }
    }

    /// Removes the value behind `id`; stale or foreign ids return `None`.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(id.index);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    /// Borrows two distinct live values mutably at once.
    ///
    /// Returns `None` if `a == b` or either id is stale.
    pub fn get2_mut(&mut self, a: SlotId, b: SlotId) -> Option<(&mut T, &mut T)> {
        if a.index == b.index || !self.contains(a) || !self.contains(b) {
            return None;
        }
        let (low, high, swapped) = if a.index < b.index {
            (a.index, b.index, false)
        } else {
            (b.index, a.index, true)
        };
        let (head, tail) = self.slots.split_at_mut(high);
        let first = head[low].value.as_mut()?;
        let second = tail[0].value.as_mut()?;
        Some(if swapped { (second, first) } else { (first, second) })
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Removes every value; all outstanding ids become stale.
    pub fn clear(&mut self) {
        self.free_list.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free_list.push(index);
        }
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.value.as_ref().map(|value| {
                (
                    SlotId {
                        index,
                        generation: slot.generation,
                    },
                    value,
                )
            })
        })
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_arena_insert_remove_reuse() {
        let mut arena = SlotArena::new();
        let id1 = arena.insert("a");
        let id2 = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(id1), Some(&"a"));
        assert_eq!(arena.get(id2), Some(&"b"));

        assert_eq!(arena.remove(id1), Some("a"));
        assert_eq!(arena.len(), 1);

        let id3 = arena.insert("c");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(id3), Some(&"c"));
        assert_eq!(id1.index(), id3.index());
        assert_ne!(id1.generation(), id3.generation());
    }

    #[test]
    fn stale_id_misses_reused_slot() {
        let mut arena = SlotArena::new();
        let old = arena.insert(1);
        arena.remove(old);
        let new = arena.insert(2);
        assert_eq!(arena.get(old), None);
        assert_eq!(arena.get_mut(old), None);
        assert_eq!(arena.remove(old), None);
        assert!(!arena.contains(old));
        assert_eq!(arena.get(new), Some(&2));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn double_remove_is_none() {
        let mut arena = SlotArena::new();
        let id = arena.insert(5);
        assert_eq!(arena.remove(id), Some(5));
        assert_eq!(arena.remove(id), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn get2_mut_borrows_both_in_order() {
        let mut arena = SlotArena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);
        {
            let (x, y) = arena.get2_mut(b, a).unwrap();
            assert_eq!((*x, *y), (2, 1));
            std::mem::swap(x, y);
        }
        assert_eq!(arena.get(a), Some(&2));
        assert_eq!(arena.get(b), Some(&1));
        assert!(arena.get2_mut(a, a).is_none());
        arena.remove(b);
        assert!(arena.get2_mut(a, b).is_none());
    }

    #[test]
    fn clear_invalidates_ids() {
        let mut arena = SlotArena::new();
        let a = arena.insert('a');
        arena.insert('b');
        arena.clear();
        assert!(arena.is_empty());
        let c = arena.insert('c');
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.get(c), Some(&'c'));
        assert_eq!(arena.iter().count(), 1);
    }

    #[test]
    fn iter_yields_live_entries() {
        let mut arena = SlotArena::with_capacity(4);
        let a = arena.insert(10);
        let b = arena.insert(20);
        let c = arena.insert(30);
        arena.remove(b);
        let entries: Vec<_> = arena.iter().map(|(id, v)| (id, *v)).collect();
        assert_eq!(entries, vec![(a, 10), (c, 30)]);
        assert!(arena.capacity() >= 3);
    }
}
