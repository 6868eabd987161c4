//! Policy-driven circular buffer over an [`Arena`].
//!
//! A `RingBuffer` keeps its elements in a fixed arena and tracks the logical
//! front with a `head` cursor and the first free slot with a `tail` cursor.
//! Logical index `i` lives in physical slot `(head + i) % capacity`.
//!
//! ## Architecture
//!
//! ```text
//!   capacity = 8, len = 5, wrapped
//!
//!     0     1     2     3     4     5     6     7
//!   ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//!   │  d  │  e  │  ·  │  ·  │  ·  │  a  │  b  │  c  │
//!   └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//!                  ▲                 ▲
//!             tail = Some(2)      head = 5
//!
//!   full buffer: tail = None (head == tail would be ambiguous)
//! ```
//!
//! ## Policies
//!
//! | Capacity  | Overflow  | push on full buffer                          |
//! |-----------|-----------|----------------------------------------------|
//! | `Dynamic` | any       | capacity doubles (0 → 1), then push          |
//! | `Fixed`   | `Reject`  | `Err(CapacityExceeded)`, buffer unchanged    |
//! | `Fixed`   | `Replace` | opposite end is overwritten, length stays    |
//!
//! `Dynamic` buffers also halve their capacity when a removal leaves the
//! length at a quarter of the capacity.
//!
//! ## Performance
//!
//! | Operation                 | Time             | Notes                        |
//! |---------------------------|------------------|------------------------------|
//! | `push_back` / `push_front`| O(1) amortized   | O(n) when capacity changes   |
//! | `pop_back` / `pop_front`  | O(1) amortized   | O(n) when capacity changes   |
//! | `insert` / `remove`       | O(min(i, n - i)) | Shifts the shorter side      |
//! | `get`                     | O(1)             |                              |
//! | `linearize`               | O(capacity)      | In-place rotation            |
//!
//! ## Example Usage
//!
//! ```
//! use seqkit::ds::{BufferPolicy, CapacityPolicy, OverflowPolicy, RingBuffer};
//!
//! let policy = BufferPolicy::new(CapacityPolicy::Fixed, OverflowPolicy::Replace);
//! let mut ring = RingBuffer::new(3, policy);
//! for v in 1..=5 {
//!     ring.push_back(v).unwrap();
//! }
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
//! assert_eq!(ring.linearize(), &[3, 4, 5]);
//! ```
//!
//! `debug_validate_invariants()` is available in debug/test builds.
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

use crate::ds::arena::Arena;
use crate::error::{InvariantError, SequenceError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::RingBufferMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::RingBufferMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, MetricsSnapshotProvider, RingBufferMetricsRecorder,
};
use crate::traits::{CoreSequence, DequeSequence};

/// Whether a full buffer may grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapacityPolicy {
    /// Capacity never changes on its own.
    Fixed,
    /// Capacity doubles when full and halves when a quarter full.
    Dynamic,
}

/// What a full fixed-capacity buffer does with a new element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Overwrite the element at the opposite end.
    Replace,
    /// Refuse the element with [`SequenceError::CapacityExceeded`].
    Reject,
}

/// Which elements survive a [`RingBuffer::resize`] below the current length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizePolicy {
    /// Drop the oldest (front) elements, keep the newest.
    DiscardOld,
    /// Drop the newest (back) elements, keep the oldest.
    DiscardNew,
}

/// Capacity and overflow behaviour of a [`RingBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferPolicy {
    pub capacity: CapacityPolicy,
    pub overflow: OverflowPolicy,
}

impl BufferPolicy {
    pub const fn new(capacity: CapacityPolicy, overflow: OverflowPolicy) -> Self {
        Self { capacity, overflow }
    }
}

enum Room {
    Free,
    Overwrite,
}

/// Circular buffer with configurable capacity and overflow policies.
pub struct RingBuffer<T> {
    arena: Arena<T>,
    head: usize,
    /// First free slot; `None` when the buffer is full.
    tail: Option<usize>,
    policy: BufferPolicy,
    #[cfg(feature = "metrics")]
    metrics: RingBufferMetrics,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer with `capacity` slots.
    ///
    /// A zero-capacity buffer is permanently full: a `Fixed` one rejects
    /// every push, a `Dynamic` one grows to capacity 1 on the first push.
    pub fn new(capacity: usize, policy: BufferPolicy) -> Self {
        Self {
            arena: Arena::new(capacity),
            head: 0,
            tail: if capacity == 0 { None } else { Some(0) },
            policy,
            #[cfg(feature = "metrics")]
            metrics: RingBufferMetrics::default(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self.tail {
            None => self.capacity(),
            Some(tail) => (tail + self.capacity() - self.head) % self.capacity(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `len == capacity`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.tail.is_none()
    }

    #[inline]
    pub fn policy(&self) -> BufferPolicy {
        self.policy
    }

    /// Updates either half of the policy; `None` keeps the current value.
    pub fn set_policy(
        &mut self,
        capacity: Option<CapacityPolicy>,
        overflow: Option<OverflowPolicy>,
    ) {
        if let Some(capacity) = capacity {
            self.policy.capacity = capacity;
        }
        if let Some(overflow) = overflow {
            self.policy.overflow = overflow;
        }
    }

    /// Appends `value` at the back.
    ///
    /// On a full `Fixed + Replace` buffer the front element is dropped and
    /// the new element takes its slot.
    pub fn push_back(&mut self, value: T) -> Result<&mut T, SequenceError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        match self.make_room()? {
            Room::Overwrite => {
                let slot = self.head;
                self.head = (slot + 1) % self.capacity();
                #[cfg(feature = "metrics")]
                self.metrics.record_overwrite();
                Ok(self.overwrite(slot, value))
            },
            Room::Free => {
                let len = self.len();
                let slot = self.physical(len);
                self.set_len(len + 1);
                Ok(self.arena.construct(slot, value))
            },
        }
    }

    /// Prepends `value` at the front.
    ///
    /// On a full `Fixed + Replace` buffer the back element is dropped and the
    /// new element takes its slot.
    pub fn push_front(&mut self, value: T) -> Result<&mut T, SequenceError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        let room = self.make_room()?;
        let len = self.len();
        let capacity = self.capacity();
        self.head = (self.head + capacity - 1) % capacity;
        match room {
            Room::Overwrite => {
                #[cfg(feature = "metrics")]
                self.metrics.record_overwrite();
                Ok(self.overwrite(self.head, value))
            },
            Room::Free => {
                self.set_len(len + 1);
                Ok(self.arena.construct(self.head, value))
            },
        }
    }

    pub fn pop_back(&mut self) -> Result<T, SequenceError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let len = self.len();
        if len == 0 {
            return Err(SequenceError::EmptyContainer);
        }
        let slot = self.physical(len - 1);
        // SAFETY: the last logical slot is live.
        let value = unsafe { self.arena.take(slot) };
        self.set_len(len - 1);
        self.shrink_if_sparse();
        Ok(value)
    }

    pub fn pop_front(&mut self) -> Result<T, SequenceError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let len = self.len();
        if len == 0 {
            return Err(SequenceError::EmptyContainer);
        }
        let slot = self.head;
        // SAFETY: the head slot of a non-empty buffer is live.
        let value = unsafe { self.arena.take(slot) };
        self.head = (slot + 1) % self.capacity();
        self.set_len(len - 1);
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Inserts `value` at logical position `pos`, shifting the shorter side.
    ///
    /// `pos == 0` and `pos == len` behave exactly like `push_front` and
    /// `push_back`. For an interior position on a full `Fixed + Replace`
    /// buffer the front element is evicted first, and the new element is
    /// placed just before the element that was at `pos`.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<&mut T, SequenceError> {
        let len = self.len();
        if pos > len {
            return Err(SequenceError::OutOfRange { pos, len });
        }
        if pos == len {
            return self.push_back(value);
        }
        if pos == 0 {
            return self.push_front(value);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        let mut pos = pos;
        let mut len = len;
        if let Room::Overwrite = self.make_room()? {
            // SAFETY: the buffer is full, so the head slot is live.
            unsafe { self.arena.destroy(self.head) };
            self.head = (self.head + 1) % self.capacity();
            len -= 1;
            pos -= 1;
            self.set_len(len);
            #[cfg(feature = "metrics")]
            self.metrics.record_overwrite();
        }

        let capacity = self.capacity();
        if pos < len - pos {
            let new_head = (self.head + capacity - 1) % capacity;
            for i in 0..pos {
                // SAFETY: logical slot `i` is live; its destination is the
                // slot vacated by `i - 1` (or the free slot before head).
                unsafe {
                    self.arena
                        .relocate((self.head + i) % capacity, (new_head + i) % capacity)
                };
                #[cfg(feature = "metrics")]
                self.metrics.record_shift_step();
            }
            self.head = new_head;
        } else {
            for i in (pos..len).rev() {
                // SAFETY: logical slot `i` is live; `i + 1` is free.
                unsafe { self.arena.relocate(self.physical(i), self.physical(i + 1)) };
                #[cfg(feature = "metrics")]
                self.metrics.record_shift_step();
            }
        }

        let slot = self.physical(pos);
        self.set_len(len + 1);
        Ok(self.arena.construct(slot, value))
    }

    /// Removes the element at logical position `pos`, shifting the shorter
    /// side to close the gap.
    pub fn remove(&mut self, pos: usize) -> Result<T, SequenceError> {
        let len = self.len();
        if len == 0 {
            return Err(SequenceError::EmptyContainer);
        }
        if pos >= len {
            return Err(SequenceError::OutOfRange { pos, len });
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let capacity = self.capacity();
        // SAFETY: `pos < len`, so the slot is live.
        let value = unsafe { self.arena.take(self.physical(pos)) };
        if pos < len - 1 - pos {
            for i in (0..pos).rev() {
                // SAFETY: logical slot `i` is live; `i + 1` was vacated.
                unsafe { self.arena.relocate(self.physical(i), self.physical(i + 1)) };
                #[cfg(feature = "metrics")]
                self.metrics.record_shift_step();
            }
            self.head = (self.head + 1) % capacity;
        } else {
            for i in pos + 1..len {
                // SAFETY: logical slot `i` is live; `i - 1` was vacated.
                unsafe { self.arena.relocate(self.physical(i), self.physical(i - 1)) };
                #[cfg(feature = "metrics")]
                self.metrics.record_shift_step();
            }
        }
        self.set_len(len - 1);
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Changes the capacity to `new_capacity`.
    ///
    /// When fewer slots than elements remain, `policy` decides which end is
    /// dropped. Resizing to zero clears the buffer.
    pub fn resize(&mut self, new_capacity: usize, policy: ResizePolicy) {
        #[cfg(feature = "metrics")]
        self.metrics.record_resize();

        if new_capacity == 0 {
            self.clear();
            self.arena = Arena::new(0);
            self.head = 0;
            self.tail = None;
            return;
        }

        let len = self.len();
        if new_capacity < len {
            let excess = len - new_capacity;
            match policy {
                ResizePolicy::DiscardOld => {
                    for _ in 0..excess {
                        // SAFETY: the head slot of a non-empty buffer is live.
                        unsafe { self.arena.destroy(self.head) };
                        self.head = (self.head + 1) % self.capacity();
                    }
                },
                ResizePolicy::DiscardNew => {
                    for i in (new_capacity..len).rev() {
                        // SAFETY: logical slots below `len` are live.
                        unsafe { self.arena.destroy(self.physical(i)) };
                    }
                },
            }
            self.set_len(new_capacity);
        }
        self.reallocate(new_capacity);
    }

    /// Rotates storage so the front element sits in slot 0 and returns the
    /// contents as one contiguous slice.
    pub fn linearize(&mut self) -> &mut [T] {
        let len = self.len();
        if self.head != 0 {
            #[cfg(feature = "metrics")]
            self.metrics.record_linearize();
            self.arena.rotate_left(self.head);
            self.head = 0;
            self.set_len(len);
        }
        // SAFETY: with head at 0, slots `0..len` are exactly the live ones.
        unsafe { self.arena.slice_mut(0..len) }
    }

    /// Returns a linearized deep copy, optionally under a different policy.
    pub fn linearized_clone(&self, policy: Option<BufferPolicy>) -> RingBuffer<T>
    where
        T: Clone,
    {
        let mut copy = RingBuffer::new(self.capacity(), policy.unwrap_or(self.policy));
        for (i, value) in self.iter().enumerate() {
            copy.arena.construct(i, value.clone());
        }
        copy.set_len(self.len());
        copy
    }

    /// Returns the contents as two slices: the run starting at head, then
    /// the wrapped run starting at slot 0.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let len = self.len();
        if len == 0 {
            return (&[], &[]);
        }
        let end = self.head + len;
        let capacity = self.capacity();
        if end <= capacity {
            // SAFETY: logical slots map to `head..end` without wrapping.
            (unsafe { self.arena.slice(self.head..end) }, &[])
        } else {
            // SAFETY: logical slots map to `head..capacity` then `0..end - capacity`.
            unsafe {
                (
                    self.arena.slice(self.head..capacity),
                    self.arena.slice(0..end - capacity),
                )
            }
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            // SAFETY: logical index below `len` maps to a live slot.
            Some(unsafe { self.arena.at(self.physical(index)) })
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            let slot = self.physical(index);
            // SAFETY: logical index below `len` maps to a live slot.
            Some(unsafe { self.arena.at_mut(slot) })
        } else {
            None
        }
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Drops every element and resets the cursors; capacity is kept.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        let len = self.len();
        let head = self.head;
        let capacity = self.capacity();
        self.head = 0;
        self.set_len(0);
        for i in 0..len {
            // SAFETY: these were the live logical slots before the reset.
            unsafe { self.arena.destroy((head + i) % capacity) };
        }
    }

    /// Checks cursor and slot-liveness invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let capacity = self.capacity();
        if capacity == 0 {
            if self.head != 0 || self.tail.is_some() {
                return Err(InvariantError::new(format!(
                    "zero-capacity buffer has head {} and tail {:?}",
                    self.head, self.tail
                )));
            }
            return Ok(());
        }
        if self.head >= capacity {
            return Err(InvariantError::new(format!(
                "head {} outside capacity {}",
                self.head, capacity
            )));
        }
        if let Some(tail) = self.tail
            && tail >= capacity
        {
            return Err(InvariantError::new(format!(
                "tail {} outside capacity {}",
                tail, capacity
            )));
        }

        #[cfg(debug_assertions)]
        {
            let len = self.len();
            let live = self.arena.live_count();
            if live != len {
                return Err(InvariantError::new(format!(
                    "{live} live slots but length {len}"
                )));
            }
            for i in 0..len {
                let slot = self.physical(i);
                if !self.arena.is_constructed(slot) {
                    return Err(InvariantError::new(format!(
                        "logical index {i} maps to empty slot {slot}"
                    )));
                }
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("ring buffer invariant violated: {err}");
        }
    }

    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.head + index) % self.capacity()
    }

    /// Recomputes `tail` from `head` for a new length.
    #[inline]
    fn set_len(&mut self, len: usize) {
        let capacity = self.capacity();
        self.tail = if len == capacity {
            None
        } else {
            Some((self.head + len) % capacity)
        };
    }

    fn overwrite(&mut self, slot: usize, value: T) -> &mut T {
        // SAFETY: the buffer is full, so every slot is live.
        drop(unsafe { self.arena.replace(slot, value) });
        // SAFETY: the slot was just written.
        unsafe { self.arena.at_mut(slot) }
    }

    fn make_room(&mut self) -> Result<Room, SequenceError> {
        if !self.is_full() {
            return Ok(Room::Free);
        }
        let capacity = self.capacity();
        match (self.policy.capacity, self.policy.overflow) {
            (CapacityPolicy::Dynamic, _) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_grow();
                self.reallocate((capacity * 2).max(1));
                Ok(Room::Free)
            },
            (CapacityPolicy::Fixed, OverflowPolicy::Replace) if capacity > 0 => Ok(Room::Overwrite),
            (CapacityPolicy::Fixed, _) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_reject();
                Err(SequenceError::CapacityExceeded { capacity })
            },
        }
    }

    fn shrink_if_sparse(&mut self) {
        if self.policy.capacity != CapacityPolicy::Dynamic {
            return;
        }
        let capacity = self.capacity();
        if capacity / 2 >= 1 && self.len() == capacity / 4 {
            #[cfg(feature = "metrics")]
            self.metrics.record_shrink();
            self.reallocate(capacity / 2);
        }
    }

    /// Moves every element into a fresh arena of `capacity` slots at head 0.
    fn reallocate(&mut self, capacity: usize) {
        let len = self.len();
        debug_assert!(capacity >= len);

        #[cfg(feature = "tracing")]
        tracing::trace!(from = self.capacity(), to = capacity, len, "ring buffer reallocated");

        let mut fresh = Arena::new(capacity);
        for i in 0..len {
            // SAFETY: each live logical slot is moved exactly once.
            fresh.construct(i, unsafe { self.arena.take(self.physical(i)) });
        }
        self.arena = fresh;
        self.head = 0;
        self.set_len(len);
    }
}

#[cfg(feature = "metrics")]
impl<T> RingBuffer<T> {
    pub fn metrics_snapshot(&self) -> RingBufferMetricsSnapshot {
        RingBufferMetricsSnapshot {
            insert_calls: self.metrics.insert_calls,
            remove_calls: self.metrics.remove_calls,
            clear_calls: self.metrics.clear_calls,
            grow_events: self.metrics.grow_events,
            shrink_events: self.metrics.shrink_events,
            overwrites: self.metrics.overwrites,
            rejects: self.metrics.rejects,
            shift_steps: self.metrics.shift_steps,
            linearize_calls: self.metrics.linearize_calls,
            resize_calls: self.metrics.resize_calls,
            len: self.len(),
            capacity: self.capacity(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<RingBufferMetricsSnapshot> for RingBuffer<T> {
    fn snapshot(&self) -> RingBufferMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<T> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for RingBuffer<T> {
    /// Deep copy keeping the physical layout (same head and tail).
    fn clone(&self) -> Self {
        let mut arena = Arena::new(self.capacity());
        for i in 0..self.len() {
            let slot = self.physical(i);
            // SAFETY: logical index below `len` maps to a live slot.
            arena.construct(slot, unsafe { self.arena.at(slot) }.clone());
        }
        Self {
            arena,
            head: self.head,
            tail: self.tail,
            policy: self.policy,
            #[cfg(feature = "metrics")]
            metrics: RingBufferMetrics::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("policy", &self.policy)
            .field("capacity", &self.capacity())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len();
        self.get(index)
            .unwrap_or_else(|| panic!("index {index} out of range for length {len}"))
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        self.get_mut(index)
            .unwrap_or_else(|| panic!("index {index} out of range for length {len}"))
    }
}

/// Front-to-back iterator over a [`RingBuffer`].
pub struct Iter<'a, T> {
    ring: &'a RingBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.ring.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.ring.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> CoreSequence<T> for RingBuffer<T> {
    fn len(&self) -> usize {
        RingBuffer::len(self)
    }

    fn get(&self, pos: usize) -> Option<&T> {
        RingBuffer::get(self, pos)
    }

    fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        RingBuffer::get_mut(self, pos)
    }

    fn insert(&mut self, pos: usize, value: T) -> Result<&mut T, SequenceError> {
        RingBuffer::insert(self, pos, value)
    }

    fn remove(&mut self, pos: usize) -> Result<T, SequenceError> {
        RingBuffer::remove(self, pos)
    }

    fn push_back(&mut self, value: T) -> Result<&mut T, SequenceError> {
        RingBuffer::push_back(self, value)
    }

    fn pop_back(&mut self) -> Result<T, SequenceError> {
        RingBuffer::pop_back(self)
    }

    fn clear(&mut self) {
        RingBuffer::clear(self)
    }
}

impl<T> DequeSequence<T> for RingBuffer<T> {
    fn push_front(&mut self, value: T) -> Result<&mut T, SequenceError> {
        RingBuffer::push_front(self, value)
    }

    fn pop_front(&mut self) -> Result<T, SequenceError> {
        RingBuffer::pop_front(self)
    }

    fn front(&self) -> Option<&T> {
        RingBuffer::front(self)
    }

    fn back(&self) -> Option<&T> {
        RingBuffer::back(self)
    }
}
