//! Square-root decomposed dynamic array.
//!
//! Elements are spread over blocks whose capacities grow by one: block `i`
//! holds up to `i + 1` elements, so the block starting position `pos` lives
//! in is found in closed form from the triangular numbers
//! `T(b) = b(b+1)/2`. Growing never copies more than one block, and at most
//! `O(√n)` slots are ever unused.
//!
//! ## Architecture
//!
//! ```text
//!   len = 8, three full blocks, one partial, one spare
//!
//!   block 0  ┌───┐
//!            │ 0 │                          T(0) = 0
//!            └───┘
//!   block 1  ┌───┬───┐
//!            │ 1 │ 2 │                      T(1) = 1
//!            └───┴───┘
//!   block 2  ┌───┬───┬───┐
//!            │ 3 │ 4 │ 5 │                  T(2) = 3
//!            └───┴───┴───┘
//!   block 3  ┌───┬───┬───┬───┐
//!            │ 6 │ 7 │ · │ · │   last active (partial)
//!            └───┴───┴───┴───┘
//!   block 4  ┌───┬───┬───┬───┬───┐
//!            │ · │ · │ · │ · │ · │  spare (always empty)
//!            └───┴───┴───┴───┴───┘
//! ```
//!
//! ## Layout Rules
//!
//! - Every active block except the last is full; the last active block is
//!   non-empty.
//! - Exactly one empty spare block follows the active blocks, so a growth
//!   right after a shrink does not reallocate.
//! - No blocks are held while the array is empty.
//! - `len` is never stored: it follows from the block count and the length
//!   of the last active block.
//!
//! ## Insert / Remove
//!
//! ```text
//!   insert(pos = 1, x) on [0 | 1 2 | 3 4 5 | 6 7 · ·]
//!
//!   ripple last → target+1:   block 3 takes 5 at its front
//!                             block 2 takes 2 at its front
//!   local insert:             block 1 inserts x at 0
//!
//!   result:                   [0 | x 1 | 2 3 4 | 5 6 7 ·]
//! ```
//!
//! Removal is the mirror image: a local remove, then every later block
//! hands its first element to its predecessor's back.
//!
//! ## Performance
//!
//! | Operation      | Time          | Notes                              |
//! |----------------|---------------|------------------------------------|
//! | `get`          | O(1)          | Closed-form block lookup           |
//! | `push_back`    | O(1) amortized| New block every √(2n) pushes       |
//! | `insert(pos)`  | O(√n)         | One move per later block + local   |
//! | `remove(pos)`  | O(√n)         | Mirror of insert                   |
//!
//! `debug_validate_invariants()` is available in debug/test builds.
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::ds::array_block::ArrayBlock;
use crate::error::{InvariantError, SequenceError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::SqrtArrayMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::SqrtArrayMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, MetricsSnapshotProvider, SqrtArrayMetricsRecorder,
};
use crate::traits::CoreSequence;

/// Location of a logical position inside a [`SqrtArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementIndex {
    /// Block number; the block has capacity `block + 1`.
    pub block: usize,
    /// Offset inside the block, always `<= block`.
    pub local: usize,
}

/// Returns `n(n+1)/2`, the number of slots in blocks `0..n`.
#[inline]
pub const fn triangular(n: usize) -> usize {
    n * (n + 1) / 2
}

#[inline]
fn triangular_wide(n: usize) -> u128 {
    let n = n as u128;
    n * (n + 1) / 2
}

/// Maps a logical position to its block and offset.
///
/// Uses `ceil((-3 + √(9 + 8·pos)) / 2)` and then corrects the estimate with
/// exact integer arithmetic, so `T(block) <= pos < T(block + 1)` holds even
/// where `f64` rounding is off by one.
///
/// ```
/// use seqkit::ds::sqrt_array::{element_index, ElementIndex};
///
/// assert_eq!(element_index(0), ElementIndex { block: 0, local: 0 });
/// assert_eq!(element_index(2), ElementIndex { block: 1, local: 1 });
/// assert_eq!(element_index(3), ElementIndex { block: 2, local: 0 });
/// ```
pub fn element_index(pos: usize) -> ElementIndex {
    let estimate = ((-3.0 + (9.0 + 8.0 * pos as f64).sqrt()) / 2.0).ceil();
    let mut block = if estimate > 0.0 { estimate as usize } else { 0 };

    let target = pos as u128;
    while block > 0 && triangular_wide(block) > target {
        block -= 1;
    }
    while triangular_wide(block + 1) <= target {
        block += 1;
    }

    ElementIndex {
        block,
        local: (target - triangular_wide(block)) as usize,
    }
}

/// Dynamic array over blocks of capacity 1, 2, 3, …
pub struct SqrtArray<T> {
    /// Active blocks followed by one empty spare; empty iff `len == 0`.
    blocks: Vec<ArrayBlock<T>>,
    #[cfg(feature = "metrics")]
    metrics: SqrtArrayMetrics,
}

impl<T> SqrtArray<T> {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            #[cfg(feature = "metrics")]
            metrics: SqrtArrayMetrics::default(),
        }
    }

    /// Returns the number of elements, derived from the block layout.
    pub fn len(&self) -> usize {
        let Some(last) = self.last_active() else {
            return 0;
        };
        let active = last + 1;
        triangular(active) - (active - self.blocks[last].len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns the total slot count of every allocated block, spare included.
    pub fn capacity(&self) -> usize {
        triangular(self.blocks.len())
    }

    /// Returns the active blocks (the trailing spare is not included).
    pub fn blocks(&self) -> &[ArrayBlock<T>] {
        match self.last_active() {
            Some(last) => &self.blocks[..=last],
            None => &[],
        }
    }

    pub fn get(&self, pos: usize) -> Option<&T> {
        if pos >= self.len() {
            return None;
        }
        let ElementIndex { block, local } = element_index(pos);
        self.blocks[block].get(local)
    }

    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        if pos >= self.len() {
            return None;
        }
        let ElementIndex { block, local } = element_index(pos);
        self.blocks[block].get_mut(local)
    }

    pub fn first(&self) -> Option<&T> {
        self.blocks.first().and_then(ArrayBlock::first)
    }

    pub fn last(&self) -> Option<&T> {
        self.last_active().and_then(|last| self.blocks[last].last())
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.blocks().iter().flat_map(ArrayBlock::iter)
    }

    /// Appends `value`.
    pub fn push_back(&mut self, value: T) -> &mut T {
        let len = self.len();
        self.insert_unchecked(len, value)
    }

    /// Removes the last element.
    pub fn pop_back(&mut self) -> Result<T, SequenceError> {
        match self.len() {
            0 => Err(SequenceError::EmptyContainer),
            len => self.remove(len - 1),
        }
    }

    /// Inserts `value` at `pos`, moving one element across each later block.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<&mut T, SequenceError> {
        let len = self.len();
        if pos > len {
            return Err(SequenceError::OutOfRange { pos, len });
        }
        Ok(self.insert_unchecked(pos, value))
    }

    /// Removes the element at `pos`, pulling one element back across each
    /// later block.
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

        let ElementIndex { block, local } = element_index(pos);
        let last = self.blocks.len() - 2;
        let value = self.blocks[block].remove(local)?;

        for i in block..last {
            let (left, right) = self.blocks.split_at_mut(i + 1);
            if let Some(moved) = right[0].pop_front() {
                left[i].push_back(moved);
            }
            #[cfg(feature = "metrics")]
            self.metrics.record_ripple_step();
        }

        if len == 1 {
            self.blocks.clear();
        } else if self.blocks[last].is_empty() {
            // The emptied block becomes the spare; the old spare goes.
            self.blocks.pop();
            #[cfg(feature = "metrics")]
            self.metrics.record_block_shrink();
            #[cfg(feature = "tracing")]
            tracing::trace!(blocks = self.blocks.len(), "sqrt array released spare block");
        }
        Ok(value)
    }

    /// Drops every element and releases every block.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.blocks.clear();
    }

    /// Checks block capacities, fullness and the spare-block layout.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.blocks.is_empty() {
            return Ok(());
        }
        if self.blocks.len() < 2 {
            return Err(InvariantError::new(
                "non-empty array must hold an active block and a spare",
            ));
        }
        for (i, block) in self.blocks.iter().enumerate() {
            if block.capacity() != i + 1 {
                return Err(InvariantError::new(format!(
                    "block {} has capacity {}, expected {}",
                    i,
                    block.capacity(),
                    i + 1
                )));
            }
        }

        let last = self.blocks.len() - 2;
        for (i, block) in self.blocks[..last].iter().enumerate() {
            if !block.is_full() {
                return Err(InvariantError::new(format!(
                    "interior block {} holds {} of {}",
                    i,
                    block.len(),
                    block.capacity()
                )));
            }
        }
        if self.blocks[last].is_empty() {
            return Err(InvariantError::new(format!("last active block {last} is empty")));
        }
        if let Some(spare) = self.blocks.last()
            && !spare.is_empty()
        {
            return Err(InvariantError::new(format!(
                "spare block holds {} elements",
                spare.len()
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("sqrt array invariant violated: {err}");
        }
    }

    #[inline]
    fn last_active(&self) -> Option<usize> {
        self.blocks.len().checked_sub(2)
    }

    fn insert_unchecked(&mut self, pos: usize, value: T) -> &mut T {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if self.blocks.is_empty() {
            self.blocks.push(ArrayBlock::with_capacity(1));
            self.blocks.push(ArrayBlock::with_capacity(2));
            #[cfg(feature = "metrics")]
            {
                self.metrics.record_block_grow();
                self.metrics.record_block_grow();
            }
            return self.blocks[0].push_back(value);
        }

        let mut last = self.blocks.len() - 2;
        if self.blocks[last].is_full() {
            let count = self.blocks.len();
            self.blocks.push(ArrayBlock::with_capacity(count + 1));
            last += 1;
            #[cfg(feature = "metrics")]
            self.metrics.record_block_grow();
            #[cfg(feature = "tracing")]
            tracing::trace!(blocks = count + 1, "sqrt array added block");
        }

        let ElementIndex { block, local } = element_index(pos);
        for i in (block + 1..=last).rev() {
            let (left, right) = self.blocks.split_at_mut(i);
            if let Some(moved) = left[i - 1].pop_back() {
                right[0].push_front(moved);
            }
            #[cfg(feature = "metrics")]
            self.metrics.record_ripple_step();
        }
        self.blocks[block].insert_in_bounds(local, value)
    }
}

#[cfg(feature = "metrics")]
impl<T> SqrtArray<T> {
    pub fn metrics_snapshot(&self) -> SqrtArrayMetricsSnapshot {
        SqrtArrayMetricsSnapshot {
            insert_calls: self.metrics.insert_calls,
            remove_calls: self.metrics.remove_calls,
            clear_calls: self.metrics.clear_calls,
            block_grows: self.metrics.block_grows,
            block_shrinks: self.metrics.block_shrinks,
            ripple_steps: self.metrics.ripple_steps,
            len: self.len(),
            capacity: self.capacity(),
            block_count: self.blocks.len(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<SqrtArrayMetricsSnapshot> for SqrtArray<T> {
    fn snapshot(&self) -> SqrtArrayMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<T> Default for SqrtArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SqrtArray<T> {
    fn clone(&self) -> Self {
        Self {
            blocks: self.blocks.clone(),
            #[cfg(feature = "metrics")]
            metrics: SqrtArrayMetrics::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SqrtArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqrtArray")
            .field("len", &self.len())
            .field("blocks", &self.blocks.len())
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Index<usize> for SqrtArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len();
        self.get(index)
            .unwrap_or_else(|| panic!("index {index} out of range for length {len}"))
    }
}

impl<T> IndexMut<usize> for SqrtArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        self.get_mut(index)
            .unwrap_or_else(|| panic!("index {index} out of range for length {len}"))
    }
}

impl<T> Extend<T> for SqrtArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for SqrtArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> CoreSequence<T> for SqrtArray<T> {
    fn len(&self) -> usize {
        SqrtArray::len(self)
    }

    fn get(&self, pos: usize) -> Option<&T> {
        SqrtArray::get(self, pos)
    }

    fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        SqrtArray::get_mut(self, pos)
    }

    fn insert(&mut self, pos: usize, value: T) -> Result<&mut T, SequenceError> {
        SqrtArray::insert(self, pos, value)
    }

    fn remove(&mut self, pos: usize) -> Result<T, SequenceError> {
        SqrtArray::remove(self, pos)
    }

    fn push_back(&mut self, value: T) -> Result<&mut T, SequenceError> {
        Ok(SqrtArray::push_back(self, value))
    }

    fn pop_back(&mut self) -> Result<T, SequenceError> {
        SqrtArray::pop_back(self)
    }

    fn clear(&mut self) {
        SqrtArray::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacities<T>(array: &SqrtArray<T>) -> Vec<usize> {
        array.blocks().iter().map(ArrayBlock::capacity).collect()
    }

    fn contents<T: Clone>(array: &SqrtArray<T>) -> Vec<T> {
        array.iter().cloned().collect()
    }

    mod index_math {
        use super::*;

        #[test]
        fn element_index_matches_brute_force() {
            let mut pos = 0;
            for block in 0..200 {
                for local in 0..=block {
                    assert_eq!(element_index(pos), ElementIndex { block, local });
                    pos += 1;
                }
            }
        }

        #[test]
        fn element_index_at_block_boundaries() {
            for block in [1usize, 10, 1_000, 60_000] {
                let start = triangular(block);
                assert_eq!(element_index(start), ElementIndex { block, local: 0 });
                assert_eq!(
                    element_index(start - 1),
                    ElementIndex { block: block - 1, local: block - 1 }
                );
            }
        }

        #[test]
        fn element_index_near_usize_max() {
            let idx = element_index(usize::MAX);
            assert!(triangular_wide(idx.block) <= usize::MAX as u128);
            assert!(triangular_wide(idx.block + 1) > usize::MAX as u128);
            assert!(idx.local <= idx.block);
        }

        #[test]
        fn triangular_numbers() {
            assert_eq!(triangular(0), 0);
            assert_eq!(triangular(1), 1);
            assert_eq!(triangular(4), 10);
        }
    }

    mod layout {
        use super::*;

        #[test]
        fn first_insert_creates_two_blocks() {
            let mut array = SqrtArray::new();
            array.push_back('a');
            assert_eq!(array.blocks.len(), 2);
            assert_eq!(array.capacity(), 3);
            assert_eq!(capacities(&array), vec![1]);
            array.debug_validate_invariants();
        }

        #[test]
        fn twenty_pushes_use_blocks_one_to_six() {
            let array: SqrtArray<usize> = (0..20).collect();
            assert_eq!(array.len(), 20);
            assert_eq!(capacities(&array), vec![1, 2, 3, 4, 5, 6]);
            let partial = array.blocks().iter().filter(|b| !b.is_full()).count();
            assert_eq!(partial, 1);
            assert_eq!(array.blocks().last().map(ArrayBlock::len), Some(5));
            assert_eq!(contents(&array), (0..20).collect::<Vec<_>>());
            array.debug_validate_invariants();
        }

        #[test]
        fn len_is_derived_at_every_step() {
            let mut array = SqrtArray::new();
            for n in 0..100 {
                assert_eq!(array.len(), n);
                array.push_back(n);
                array.debug_validate_invariants();
            }
            for n in (0..100).rev() {
                assert_eq!(array.pop_back(), Ok(n));
                assert_eq!(array.len(), n);
                array.debug_validate_invariants();
            }
            assert!(array.blocks.is_empty());
        }

        #[test]
        fn emptying_releases_all_blocks() {
            let mut array: SqrtArray<i32> = (0..4).collect();
            for _ in 0..4 {
                array.remove(0).unwrap();
            }
            assert_eq!(array.capacity(), 0);
            assert!(array.is_empty());
            assert_eq!(array.first(), None);
            assert_eq!(array.last(), None);
        }

        #[test]
        fn shrink_keeps_one_spare() {
            let mut array: SqrtArray<i32> = (0..7).collect();
            // blocks 1,2,3 full, block 4 holds one, spare 5
            assert_eq!(array.blocks.len(), 5);
            array.pop_back().unwrap();
            assert_eq!(array.blocks.len(), 4);
            assert_eq!(capacities(&array), vec![1, 2, 3]);
            array.debug_validate_invariants();
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn insert_ripples_through_later_blocks() {
            let mut array: SqrtArray<i32> = (0..8).collect();
            *array.insert(1, 100).unwrap() += 1;
            assert_eq!(contents(&array), vec![0, 101, 1, 2, 3, 4, 5, 6, 7]);
            array.debug_validate_invariants();
        }

        #[test]
        fn insert_at_front_and_end() {
            let mut array = SqrtArray::new();
            array.insert(0, 2).unwrap();
            array.insert(0, 1).unwrap();
            array.insert(2, 3).unwrap();
            array.insert(0, 0).unwrap();
            assert_eq!(contents(&array), vec![0, 1, 2, 3]);
            array.debug_validate_invariants();
        }

        #[test]
        fn insert_out_of_range() {
            let mut array: SqrtArray<i32> = (0..3).collect();
            assert_eq!(
                array.insert(4, 0).unwrap_err(),
                SequenceError::OutOfRange { pos: 4, len: 3 }
            );
        }

        #[test]
        fn remove_pulls_later_elements_back() {
            let mut array: SqrtArray<i32> = (0..10).collect();
            assert_eq!(array.remove(2), Ok(2));
            assert_eq!(array.remove(0), Ok(0));
            assert_eq!(contents(&array), vec![1, 3, 4, 5, 6, 7, 8, 9]);
            array.debug_validate_invariants();
        }

        #[test]
        fn remove_errors() {
            let mut array: SqrtArray<i32> = SqrtArray::new();
            assert_eq!(array.remove(0), Err(SequenceError::EmptyContainer));
            assert_eq!(array.pop_back(), Err(SequenceError::EmptyContainer));
            array.push_back(1);
            assert_eq!(array.remove(1), Err(SequenceError::OutOfRange { pos: 1, len: 1 }));
        }

        #[test]
        fn round_trip_at_every_position() {
            let mut array: SqrtArray<i32> = (0..15).collect();
            let before = contents(&array);
            for pos in 0..=before.len() {
                array.insert(pos, -1).unwrap();
                array.debug_validate_invariants();
                assert_eq!(array.remove(pos), Ok(-1));
                assert_eq!(contents(&array), before);
                array.debug_validate_invariants();
            }
        }

        #[test]
        fn index_get_and_clone() {
            let mut array: SqrtArray<String> =
                ["a", "b", "c"].into_iter().map(String::from).collect();
            array[1].push('!');
            assert_eq!(array.get(1).map(String::as_str), Some("b!"));
            assert_eq!(array.get(3), None);
            let copy = array.clone();
            array[0].clear();
            assert_eq!(copy[0], "a");
            assert_eq!(copy.len(), 3);
            assert_eq!(array.first().map(String::as_str), Some(""));
            assert_eq!(array.last().map(String::as_str), Some("c"));
        }

        #[test]
        fn clear_then_reuse() {
            let mut array: SqrtArray<i32> = (0..10).collect();
            array.clear();
            assert!(array.is_empty());
            array.extend([5, 6]);
            assert_eq!(contents(&array), vec![5, 6]);
        }

        #[test]
        fn iter_reverses() {
            let array: SqrtArray<i32> = (0..6).collect();
            assert_eq!(array.iter().rev().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1, 0]);
        }
    }

    mod leak_detection {
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
        fn ripples_neither_leak_nor_double_drop() {
            let counter = Arc::new(AtomicUsize::new(0));
            {
                let mut array = SqrtArray::new();
                for i in 0..30 {
                    array.insert(i / 2, LifeCycleTracker::new(&counter)).unwrap();
                }
                for _ in 0..10 {
                    drop(array.remove(3).unwrap());
                }
                assert_eq!(counter.load(Ordering::SeqCst), 20);
            }
            assert_eq!(counter.load(Ordering::SeqCst), 0);
        }
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: T(block) + local == pos and local <= block
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_index_law(pos in any::<usize>()) {
            let ElementIndex { block, local } = element_index(pos);
            prop_assert_eq!(triangular_wide(block) + local as u128, pos as u128);
            prop_assert!(local <= block);
        }

        /// Property: random inserts/removes match Vec and keep the block layout
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_vec(ops in prop::collection::vec((any::<bool>(), any::<usize>(), any::<i32>()), 0..200)) {
            let mut array = SqrtArray::new();
            let mut model = Vec::new();
            for (is_insert, p, v) in ops {
                if is_insert || model.is_empty() {
                    let pos = p % (model.len() + 1);
                    array.insert(pos, v).unwrap();
                    model.insert(pos, v);
                } else {
                    let pos = p % model.len();
                    prop_assert_eq!(array.remove(pos), Ok(model.remove(pos)));
                }
                prop_assert!(array.check_invariants().is_ok());
                prop_assert_eq!(array.len(), model.len());
            }
            prop_assert_eq!(array.iter().copied().collect::<Vec<_>>(), model);
        }
    }
}
