//! Raw slot storage with manual per-slot lifecycle.
//!
//! An [`Arena`] owns one contiguous allocation of `N` uninitialized slots and
//! never constructs or destroys a value on its own: the owner decides which
//! slots are live. It is the storage layer under
//! [`RingBuffer`](crate::ds::RingBuffer) and
//! [`ArrayBlock`](crate::ds::ArrayBlock).
//!
//! ## Architecture
//!
//! ```text
//!   Arena<T> (capacity = 6)
//!   ┌─────┬─────┬─────┬─────┬─────┬─────┐
//!   │  A  │  ·  │  B  │  C  │  ·  │  ·  │   slots: Box<[MaybeUninit<T>]>
//!   └─────┴─────┴─────┴─────┴─────┴─────┘
//!   ┌─────┬─────┬─────┬─────┬─────┬─────┐
//!   │  1  │  0  │  1  │  1  │  0  │  0  │   live:  Box<[bool]> (debug builds)
//!   └─────┴─────┴─────┴─────┴─────┴─────┘
//!
//!   construct(i, v): empty → live      destroy(i) / take(i): live → empty
//! ```
//!
//! ## Slot Lifecycle
//!
//! - A slot is constructed at most once before it is destroyed, and destroyed
//!   at most once after it is constructed.
//! - Reading a slot (`at`, `at_mut`, `take`, `replace`) requires it to be live;
//!   these methods are `unsafe` and the caller upholds liveness.
//! - Debug builds track liveness in a parallel bitmap and panic on double
//!   construct, double destroy, reads of empty slots, and on dropping an arena
//!   that still holds live slots. Release builds carry no bookkeeping.
//!
//! Dropping an arena frees the allocation but never drops slot contents: the
//! owner must destroy every live slot first.
//!
//! ## Example Usage
//!
//! ```
//! use seqkit::ds::Arena;
//!
//! let mut arena = Arena::new(4);
//! arena.construct(2, String::from("hello"));
//!
//! // SAFETY: slot 2 was constructed above.
//! assert_eq!(unsafe { arena.at(2) }, "hello");
//!
//! // SAFETY: slot 2 is live; after `take` it is empty again.
//! let value = unsafe { arena.take(2) };
//! assert_eq!(value, "hello");
//! ```
use std::fmt;
use std::mem::MaybeUninit;
use std::ops::Range;

/// Fixed-capacity block of uninitialized slots with manual construct/destroy.
pub struct Arena<T> {
    slots: Box<[MaybeUninit<T>]>,
    #[cfg(debug_assertions)]
    live: Box<[bool]>,
}

impl<T> Arena<T> {
    /// Allocates `capacity` uninitialized slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Box::new_uninit_slice(capacity),
            #[cfg(debug_assertions)]
            live: vec![false; capacity].into_boxed_slice(),
        }
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Writes `value` into slot `index` and returns a reference to it.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`. Debug builds also panic if the slot is
    /// already live; release builds overwrite it without dropping the old
    /// value.
    #[inline]
    pub fn construct(&mut self, index: usize, value: T) -> &mut T {
        self.mark_live(index);
        self.slots[index].write(value)
    }

    /// Drops the value in slot `index` in place.
    ///
    /// # Safety
    ///
    /// Slot `index` must be live.
    #[inline]
    pub unsafe fn destroy(&mut self, index: usize) {
        self.mark_dead(index);
        // SAFETY: the caller guarantees the slot holds an initialized value.
        unsafe { self.slots[index].assume_init_drop() }
    }

    /// Moves the value out of slot `index`, leaving the slot empty.
    ///
    /// # Safety
    ///
    /// Slot `index` must be live.
    #[inline]
    pub unsafe fn take(&mut self, index: usize) -> T {
        self.mark_dead(index);
        // SAFETY: the caller guarantees the slot holds an initialized value,
        // and the slot is marked empty so it is never read again.
        unsafe { self.slots[index].assume_init_read() }
    }

    /// Swaps `value` into the live slot `index` and returns the old value.
    ///
    /// # Safety
    ///
    /// Slot `index` must be live.
    #[inline]
    pub unsafe fn replace(&mut self, index: usize, value: T) -> T {
        self.debug_assert_live(index);
        // SAFETY: the caller guarantees the slot holds an initialized value.
        std::mem::replace(unsafe { self.slots[index].assume_init_mut() }, value)
    }

    /// Returns a shared reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// Slot `index` must be live.
    #[inline]
    pub unsafe fn at(&self, index: usize) -> &T {
        self.debug_assert_live(index);
        // SAFETY: the caller guarantees the slot holds an initialized value.
        unsafe { self.slots[index].assume_init_ref() }
    }

    /// Returns a mutable reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// Slot `index` must be live.
    #[inline]
    pub unsafe fn at_mut(&mut self, index: usize) -> &mut T {
        self.debug_assert_live(index);
        // SAFETY: the caller guarantees the slot holds an initialized value.
        unsafe { self.slots[index].assume_init_mut() }
    }

    /// Moves the value in slot `src` into the empty slot `dst`.
    ///
    /// # Safety
    ///
    /// Slot `src` must be live and slot `dst` must be empty (or equal to
    /// `src`).
    #[inline]
    pub unsafe fn relocate(&mut self, src: usize, dst: usize) {
        if src == dst {
            return;
        }
        // SAFETY: forwarded caller guarantee on `src`.
        let value = unsafe { self.take(src) };
        self.construct(dst, value);
    }

    /// Views the live slots in `range` as a slice.
    ///
    /// # Safety
    ///
    /// Every slot in `range` must be live.
    #[inline]
    pub unsafe fn slice(&self, range: Range<usize>) -> &[T] {
        #[cfg(debug_assertions)]
        for index in range.clone() {
            self.debug_assert_live(index);
        }
        let slots = &self.slots[range];
        // SAFETY: `MaybeUninit<T>` has the same layout as `T` and the caller
        // guarantees every slot in the range is initialized.
        unsafe { &*(slots as *const [MaybeUninit<T>] as *const [T]) }
    }

    /// Views the live slots in `range` as a mutable slice.
    ///
    /// # Safety
    ///
    /// Every slot in `range` must be live.
    #[inline]
    pub unsafe fn slice_mut(&mut self, range: Range<usize>) -> &mut [T] {
        #[cfg(debug_assertions)]
        for index in range.clone() {
            self.debug_assert_live(index);
        }
        let slots = &mut self.slots[range];
        // SAFETY: see `slice`.
        unsafe { &mut *(slots as *mut [MaybeUninit<T>] as *mut [T]) }
    }

    /// Rotates slots (live or not) left by `mid`, so slot `mid` becomes slot 0.
    ///
    /// # Panics
    ///
    /// Panics if `mid > capacity`.
    pub fn rotate_left(&mut self, mid: usize) {
        self.slots.rotate_left(mid);
        #[cfg(debug_assertions)]
        self.live.rotate_left(mid);
    }

    /// Returns `true` if slot `index` is live (debug builds only).
    #[cfg(debug_assertions)]
    pub fn is_constructed(&self, index: usize) -> bool {
        self.live.get(index).copied().unwrap_or(false)
    }

    /// Returns the number of live slots (debug builds only).
    #[cfg(debug_assertions)]
    pub fn live_count(&self) -> usize {
        self.live.iter().filter(|live| **live).count()
    }

    #[inline]
    fn mark_live(&mut self, index: usize) {
        #[cfg(debug_assertions)]
        {
            assert!(!self.live[index], "arena slot {index} constructed twice");
            self.live[index] = true;
        }
        #[cfg(not(debug_assertions))]
        let _ = index;
    }

    #[inline]
    fn mark_dead(&mut self, index: usize) {
        #[cfg(debug_assertions)]
        {
            assert!(self.live[index], "arena slot {index} destroyed while empty");
            self.live[index] = false;
        }
        #[cfg(not(debug_assertions))]
        let _ = index;
    }

    #[inline]
    fn debug_assert_live(&self, index: usize) {
        #[cfg(debug_assertions)]
        assert!(self.live[index], "arena slot {index} read while empty");
        #[cfg(not(debug_assertions))]
        let _ = index;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Arena");
        s.field("capacity", &self.capacity());
        #[cfg(debug_assertions)]
        s.field("live", &self.live_count());
        s.finish()
    }
}

impl<T> Drop for Arena<T> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        if !std::thread::panicking() {
            let live = self.live_count();
            assert!(live == 0, "arena dropped with {live} live slots");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct LifeCycleTracker {
        counter: Arc<AtomicUsize>,
    }

    impl LifeCycleTracker {
        fn new(counter: &Arc<AtomicUsize>) -> Self {
            counter.fetch_add(1, Ordering::SeqCst);
            Self {
                counter: Arc::clone(counter),
            }
        }
    }

    impl Drop for LifeCycleTracker {
        fn drop(&mut self) {
            self.counter.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn arena_construct_read_destroy() {
        let mut arena = Arena::new(10);
        for i in 0..10 {
            arena.construct(i, 10 - i + 1);
        }
        for i in 0..10 {
            // SAFETY: every slot was constructed above.
            assert_eq!(unsafe { *arena.at(i) }, 10 - i + 1);
        }
        for i in 0..10 {
            // SAFETY: every slot is still live.
            unsafe { arena.destroy(i) };
        }
    }

    #[test]
    fn arena_take_moves_without_drop() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut arena = Arena::new(2);
        arena.construct(0, LifeCycleTracker::new(&counter));
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        // SAFETY: slot 0 is live.
        let tracker = unsafe { arena.take(0) };
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        drop(tracker);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn arena_destroy_drops_in_place() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut arena = Arena::new(3);
        for i in 0..3 {
            arena.construct(i, LifeCycleTracker::new(&counter));
        }
        assert_eq!(counter.load(Ordering::SeqCst), 3);
        for i in 0..3 {
            // SAFETY: slot i is live.
            unsafe { arena.destroy(i) };
        }
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn arena_slot_can_cycle_many_times() {
        let mut arena = Arena::new(1);
        for round in 0..5 {
            arena.construct(0, round);
            // SAFETY: slot 0 was just constructed.
            assert_eq!(unsafe { arena.take(0) }, round);
        }
    }

    #[test]
    fn arena_replace_returns_previous_value() {
        let mut arena = Arena::new(1);
        arena.construct(0, "old");
        // SAFETY: slot 0 is live.
        let old = unsafe { arena.replace(0, "new") };
        assert_eq!(old, "old");
        // SAFETY: slot 0 is still live.
        assert_eq!(unsafe { arena.take(0) }, "new");
    }

    #[test]
    fn arena_relocate_moves_between_slots() {
        let mut arena = Arena::new(3);
        arena.construct(0, 'a');
        // SAFETY: slot 0 is live, slot 2 is empty.
        unsafe { arena.relocate(0, 2) };
        #[cfg(debug_assertions)]
        {
            assert!(!arena.is_constructed(0));
            assert!(arena.is_constructed(2));
        }
        // SAFETY: slot 2 holds the relocated value.
        assert_eq!(unsafe { arena.take(2) }, 'a');
    }

    #[test]
    fn arena_rotate_left_moves_slots_and_liveness() {
        let mut arena = Arena::new(4);
        arena.construct(2, 20);
        arena.construct(3, 30);
        arena.rotate_left(2);
        // SAFETY: rotation moved the live slots to 0 and 1.
        assert_eq!(unsafe { arena.slice(0..2) }, &[20, 30]);
        #[cfg(debug_assertions)]
        assert_eq!(arena.live_count(), 2);
        // SAFETY: slots 0 and 1 are live.
        unsafe {
            arena.destroy(0);
            arena.destroy(1);
        }
    }

    #[test]
    fn arena_slice_mut_writes_through() {
        let mut arena = Arena::new(3);
        for i in 0..3 {
            arena.construct(i, i);
        }
        // SAFETY: all three slots are live.
        unsafe { arena.slice_mut(0..3) }.reverse();
        // SAFETY: all three slots are live.
        assert_eq!(unsafe { arena.slice(0..3) }, &[2, 1, 0]);
        for i in 0..3 {
            // SAFETY: slot i is live.
            unsafe { arena.destroy(i) };
        }
    }

    #[test]
    fn arena_move_leaves_empty_source() {
        let mut arena: Arena<u32> = Arena::new(8);
        let moved = std::mem::take(&mut arena);
        assert_eq!(arena.capacity(), 0);
        assert_eq!(moved.capacity(), 8);
    }

    #[test]
    fn arena_zero_capacity_is_valid() {
        let arena: Arena<String> = Arena::new(0);
        assert_eq!(arena.capacity(), 0);
        assert!(format!("{:?}", arena).contains("capacity: 0"));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "constructed twice")]
    fn arena_double_construct_panics_in_debug() {
        let mut arena = Arena::new(1);
        arena.construct(0, 1);
        arena.construct(0, 2);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "destroyed while empty")]
    fn arena_destroy_empty_slot_panics_in_debug() {
        let mut arena: Arena<u8> = Arena::new(1);
        // SAFETY: intentionally violated; the debug check panics first.
        unsafe { arena.destroy(0) };
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "live slots")]
    fn arena_drop_with_live_slot_panics_in_debug() {
        let mut arena = Arena::new(2);
        arena.construct(1, 5u8);
        drop(arena);
    }
}
