//! Contiguous growable array over an [`Arena`].
//!
//! `ArrayBlock` is the plain dynamic array that backs each block of a
//! [`SqrtArray`](crate::ds::SqrtArray). Slots `0..len` of the arena are live;
//! everything past `len` is uninitialized.
//!
//! ```text
//!   ArrayBlock (len = 3, capacity = 5)
//!   ┌─────┬─────┬─────┬─────┬─────┐
//!   │  a  │  b  │  c  │  ·  │  ·  │
//!   └─────┴─────┴─────┴─────┴─────┘
//!     0     1     2   ◄── len
//! ```
//!
//! ## Performance
//!
//! | Operation        | Time           | Notes                       |
//! |------------------|----------------|-----------------------------|
//! | `push_back`      | O(1) amortized | Doubles capacity when full  |
//! | `pop_back`       | O(1)           |                             |
//! | `insert(pos, v)` | O(len - pos)   | Shifts the tail right       |
//! | `remove(pos)`    | O(len - pos)   | Shifts the tail left        |
//! | `push_front`     | O(len)         | Shifts everything right     |
//! | `get`            | O(1)           |                             |
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::ds::arena::Arena;
use crate::error::SequenceError;
use crate::traits::CoreSequence;

/// Arena-backed contiguous array.
pub struct ArrayBlock<T> {
    arena: Arena<T>,
    len: usize,
}

impl<T> ArrayBlock<T> {
    /// Creates an empty block with no storage.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty block with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::new(capacity),
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Returns `true` if `len == capacity`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.arena.capacity()
    }

    /// Makes room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        let needed = self.len + additional;
        if needed > self.capacity() {
            self.reallocate(needed);
        }
    }

    /// Appends `value`, doubling the storage when full.
    pub fn push_back(&mut self, value: T) -> &mut T {
        if self.is_full() {
            self.reallocate((self.capacity() * 2).max(1));
        }
        let index = self.len;
        self.len += 1;
        self.arena.construct(index, value)
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was the last live slot.
        Some(unsafe { self.arena.take(self.len) })
    }

    /// Inserts `value` at `pos`, shifting later elements right.
    ///
    /// Returns [`SequenceError::OutOfRange`] if `pos > len`.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<&mut T, SequenceError> {
        if pos > self.len {
            return Err(SequenceError::OutOfRange { pos, len: self.len });
        }
        Ok(self.insert_in_bounds(pos, value))
    }

    /// Removes the element at `pos`, shifting later elements left.
    pub fn remove(&mut self, pos: usize) -> Result<T, SequenceError> {
        if self.len == 0 {
            return Err(SequenceError::EmptyContainer);
        }
        if pos >= self.len {
            return Err(SequenceError::OutOfRange { pos, len: self.len });
        }
        Ok(self.shift_out(pos))
    }

    /// Prepends `value`, shifting every element right.
    pub fn push_front(&mut self, value: T) -> &mut T {
        self.insert_in_bounds(0, value)
    }

    /// Removes and returns the first element, shifting the rest left.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        Some(self.shift_out(0))
    }

    #[inline]
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.as_slice().get(pos)
    }

    #[inline]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(pos)
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `0..len` are live.
        unsafe { self.arena.slice(0..self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots `0..len` are live.
        unsafe { self.arena.slice_mut(0..self.len) }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Drops every element, keeping the storage.
    pub fn clear(&mut self) {
        let len = self.len;
        // Reset before dropping; a panicking destructor must not see stale slots.
        self.len = 0;
        for index in 0..len {
            // SAFETY: slots `0..len` were live.
            unsafe { self.arena.destroy(index) };
        }
    }

    /// Inserts at `pos <= len` without the range check.
    pub(crate) fn insert_in_bounds(&mut self, pos: usize, value: T) -> &mut T {
        debug_assert!(pos <= self.len);
        if self.is_full() {
            self.reallocate((self.capacity() * 2).max(1));
        }
        for index in (pos..self.len).rev() {
            // SAFETY: `index` is live and `index + 1` is the first empty slot
            // after the shift so far.
            unsafe { self.arena.relocate(index, index + 1) };
        }
        self.len += 1;
        self.arena.construct(pos, value)
    }

    fn shift_out(&mut self, pos: usize) -> T {
        debug_assert!(pos < self.len);
        // SAFETY: `pos < len`, so the slot is live.
        let value = unsafe { self.arena.take(pos) };
        for index in pos + 1..self.len {
            // SAFETY: `index` is live and `index - 1` was just vacated.
            unsafe { self.arena.relocate(index, index - 1) };
        }
        self.len -= 1;
        value
    }

    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut fresh = Arena::new(capacity);
        for index in 0..self.len {
            // SAFETY: slots `0..len` are live; each is moved exactly once.
            fresh.construct(index, unsafe { self.arena.take(index) });
        }
        self.arena = fresh;
    }
}

impl<T> Default for ArrayBlock<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayBlock<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for ArrayBlock<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for value in self.iter() {
            copy.push_back(value.clone());
        }
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayBlock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBlock")
            .field("capacity", &self.capacity())
            .field("items", &self.as_slice())
            .finish()
    }
}

impl<T> Index<usize> for ArrayBlock<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for ArrayBlock<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> CoreSequence<T> for ArrayBlock<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, pos: usize) -> Option<&T> {
        ArrayBlock::get(self, pos)
    }

    fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        ArrayBlock::get_mut(self, pos)
    }

    fn insert(&mut self, pos: usize, value: T) -> Result<&mut T, SequenceError> {
        ArrayBlock::insert(self, pos, value)
    }

    fn remove(&mut self, pos: usize) -> Result<T, SequenceError> {
        ArrayBlock::remove(self, pos)
    }

    fn push_back(&mut self, value: T) -> Result<&mut T, SequenceError> {
        Ok(ArrayBlock::push_back(self, value))
    }

    fn pop_back(&mut self) -> Result<T, SequenceError> {
        ArrayBlock::pop_back(self).ok_or(SequenceError::EmptyContainer)
    }

    fn clear(&mut self) {
        ArrayBlock::clear(self)
    }
}
