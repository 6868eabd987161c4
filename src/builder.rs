//! Unified sequence builder for all container layouts.
//!
//! Provides one construction path for the containers in [`crate::ds`] and a
//! [`Sequence`] wrapper that dispatches to whichever layout was chosen.
//!
//! ## Example
//!
//! ```rust
//! use seqkit::builder::{SequenceBuilder, SequenceKind};
//!
//! let mut seq = SequenceBuilder::new()
//!     .block_size(4)
//!     .build::<u64>(SequenceKind::BlockChain);
//! seq.push_back(1).unwrap();
//! seq.insert(0, 0).unwrap();
//! assert_eq!(seq.get(1), Some(&1));
//! ```

use std::fmt;

use crate::ds::{
    BlockChain, BufferPolicy, CapacityPolicy, DEFAULT_BLOCK_SIZE, RingBuffer, SqrtArray,
};
use crate::error::{ConfigError, InvariantError, SequenceError};
use crate::traits::{CoreSequence, DequeSequence};

/// Available container layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Circular buffer with the given capacity and overflow policy.
    Ring(BufferPolicy),
    /// Square-root decomposed array with O(1) indexing.
    Sqrt,
    /// Linked list of ring-buffer blocks.
    BlockChain,
}

/// Unified sequence wrapper that provides a consistent API regardless of
/// layout.
pub struct Sequence<T> {
    inner: SequenceInner<T>,
}

enum SequenceInner<T> {
    Ring(RingBuffer<T>),
    Sqrt(SqrtArray<T>),
    BlockChain(BlockChain<T>),
}

impl<T> Sequence<T> {
    /// Returns the layout this sequence was built with.
    pub fn kind(&self) -> SequenceKind {
        match &self.inner {
            SequenceInner::Ring(ring) => SequenceKind::Ring(ring.policy()),
            SequenceInner::Sqrt(_) => SequenceKind::Sqrt,
            SequenceInner::BlockChain(_) => SequenceKind::BlockChain,
        }
    }

    pub fn len(&self) -> usize {
        match &self.inner {
            SequenceInner::Ring(ring) => ring.len(),
            SequenceInner::Sqrt(array) => array.len(),
            SequenceInner::BlockChain(chain) => chain.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, pos: usize) -> Option<&T> {
        match &self.inner {
            SequenceInner::Ring(ring) => ring.get(pos),
            SequenceInner::Sqrt(array) => array.get(pos),
            SequenceInner::BlockChain(chain) => chain.get(pos),
        }
    }

    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        match &mut self.inner {
            SequenceInner::Ring(ring) => ring.get_mut(pos),
            SequenceInner::Sqrt(array) => array.get_mut(pos),
            SequenceInner::BlockChain(chain) => chain.get_mut(pos),
        }
    }

    pub fn front(&self) -> Option<&T> {
        match &self.inner {
            SequenceInner::Ring(ring) => ring.front(),
            SequenceInner::Sqrt(array) => array.first(),
            SequenceInner::BlockChain(chain) => chain.front(),
        }
    }

    pub fn back(&self) -> Option<&T> {
        match &self.inner {
            SequenceInner::Ring(ring) => ring.back(),
            SequenceInner::Sqrt(array) => array.last(),
            SequenceInner::BlockChain(chain) => chain.back(),
        }
    }

    /// Insert `value` at `pos` (`0..=len`).
    pub fn insert(&mut self, pos: usize, value: T) -> Result<&mut T, SequenceError> {
        match &mut self.inner {
            SequenceInner::Ring(ring) => ring.insert(pos, value),
            SequenceInner::Sqrt(array) => array.insert(pos, value),
            SequenceInner::BlockChain(chain) => chain.insert(pos, value),
        }
    }

    /// Remove the element at `pos` (`0..len`).
    pub fn remove(&mut self, pos: usize) -> Result<T, SequenceError> {
        match &mut self.inner {
            SequenceInner::Ring(ring) => ring.remove(pos),
            SequenceInner::Sqrt(array) => array.remove(pos),
            SequenceInner::BlockChain(chain) => chain.remove(pos),
        }
    }

    /// Append `value`. Only a full `Fixed + Reject` ring can fail.
    pub fn push_back(&mut self, value: T) -> Result<&mut T, SequenceError> {
        match &mut self.inner {
            SequenceInner::Ring(ring) => ring.push_back(value),
            SequenceInner::Sqrt(array) => Ok(array.push_back(value)),
            SequenceInner::BlockChain(chain) => Ok(chain.push_back(value)),
        }
    }

    /// Prepend `value`. On a square-root array this is an `O(√n)` insert.
    pub fn push_front(&mut self, value: T) -> Result<&mut T, SequenceError> {
        match &mut self.inner {
            SequenceInner::Ring(ring) => ring.push_front(value),
            SequenceInner::Sqrt(array) => array.insert(0, value),
            SequenceInner::BlockChain(chain) => Ok(chain.push_front(value)),
        }
    }

    pub fn pop_back(&mut self) -> Result<T, SequenceError> {
        match &mut self.inner {
            SequenceInner::Ring(ring) => ring.pop_back(),
            SequenceInner::Sqrt(array) => array.pop_back(),
            SequenceInner::BlockChain(chain) => chain.pop_back(),
        }
    }

    pub fn pop_front(&mut self) -> Result<T, SequenceError> {
        match &mut self.inner {
            SequenceInner::Ring(ring) => ring.pop_front(),
            SequenceInner::Sqrt(array) => array.remove(0),
            SequenceInner::BlockChain(chain) => chain.pop_front(),
        }
    }

    /// Iterate elements front to back.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match &self.inner {
            SequenceInner::Ring(ring) => Box::new(ring.iter()),
            SequenceInner::Sqrt(array) => Box::new(array.iter()),
            SequenceInner::BlockChain(chain) => Box::new(chain.iter()),
        }
    }

    /// Clear all elements.
    pub fn clear(&mut self) {
        match &mut self.inner {
            SequenceInner::Ring(ring) => ring.clear(),
            SequenceInner::Sqrt(array) => array.clear(),
            SequenceInner::BlockChain(chain) => chain.clear(),
        }
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        match &self.inner {
            SequenceInner::Ring(ring) => ring.check_invariants(),
            SequenceInner::Sqrt(array) => array.check_invariants(),
            SequenceInner::BlockChain(chain) => chain.check_invariants(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            SequenceInner::Ring(ring) => ring.fmt(f),
            SequenceInner::Sqrt(array) => array.fmt(f),
            SequenceInner::BlockChain(chain) => chain.fmt(f),
        }
    }
}

impl<T> CoreSequence<T> for Sequence<T> {
    fn len(&self) -> usize {
        Sequence::len(self)
    }

    fn get(&self, pos: usize) -> Option<&T> {
        Sequence::get(self, pos)
    }

    fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        Sequence::get_mut(self, pos)
    }

    fn insert(&mut self, pos: usize, value: T) -> Result<&mut T, SequenceError> {
        Sequence::insert(self, pos, value)
    }

    fn remove(&mut self, pos: usize) -> Result<T, SequenceError> {
        Sequence::remove(self, pos)
    }

    fn push_back(&mut self, value: T) -> Result<&mut T, SequenceError> {
        Sequence::push_back(self, value)
    }

    fn pop_back(&mut self) -> Result<T, SequenceError> {
        Sequence::pop_back(self)
    }

    fn clear(&mut self) {
        Sequence::clear(self)
    }
}

impl<T> DequeSequence<T> for Sequence<T> {
    fn push_front(&mut self, value: T) -> Result<&mut T, SequenceError> {
        Sequence::push_front(self, value)
    }

    fn pop_front(&mut self) -> Result<T, SequenceError> {
        Sequence::pop_front(self)
    }

    fn front(&self) -> Option<&T> {
        Sequence::front(self)
    }

    fn back(&self) -> Option<&T> {
        Sequence::back(self)
    }
}

/// Builder for creating sequence instances.
#[derive(Debug, Clone, Copy)]
pub struct SequenceBuilder {
    capacity: usize,
    block_size: usize,
}

impl SequenceBuilder {
    /// Create a builder with capacity 0 and [`DEFAULT_BLOCK_SIZE`].
    pub fn new() -> Self {
        Self {
            capacity: 0,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    /// Initial slot count of a ring buffer. Other layouts ignore it.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Block size of a block chain. Other layouts ignore it.
    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Build a sequence with the specified layout.
    ///
    /// # Panics
    ///
    /// Panics where [`try_build`](Self::try_build) would return an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use seqkit::builder::{SequenceBuilder, SequenceKind};
    /// use seqkit::ds::{BufferPolicy, CapacityPolicy, OverflowPolicy};
    ///
    /// // Fixed ring that overwrites its oldest element
    /// let policy = BufferPolicy::new(CapacityPolicy::Fixed, OverflowPolicy::Replace);
    /// let ring = SequenceBuilder::new().capacity(64).build::<u8>(SequenceKind::Ring(policy));
    ///
    /// // Square-root array
    /// let array = SequenceBuilder::new().build::<u8>(SequenceKind::Sqrt);
    /// ```
    pub fn build<T>(self, kind: SequenceKind) -> Sequence<T> {
        match self.try_build(kind) {
            Ok(sequence) => sequence,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build a sequence, reporting invalid parameters as [`ConfigError`].
    ///
    /// ```rust
    /// use seqkit::builder::{SequenceBuilder, SequenceKind};
    /// use seqkit::ds::{BufferPolicy, CapacityPolicy, OverflowPolicy};
    ///
    /// let policy = BufferPolicy::new(CapacityPolicy::Fixed, OverflowPolicy::Reject);
    /// assert!(SequenceBuilder::new().try_build::<u8>(SequenceKind::Ring(policy)).is_err());
    /// assert!(SequenceBuilder::new().block_size(2).try_build::<u8>(SequenceKind::BlockChain).is_err());
    /// ```
    pub fn try_build<T>(self, kind: SequenceKind) -> Result<Sequence<T>, ConfigError> {
        let inner = match kind {
            SequenceKind::Ring(policy) => {
                if policy.capacity == CapacityPolicy::Fixed && self.capacity == 0 {
                    return Err(ConfigError::new(
                        "fixed ring buffer capacity must be greater than zero",
                    ));
                }
                SequenceInner::Ring(RingBuffer::new(self.capacity, policy))
            },
            SequenceKind::Sqrt => SequenceInner::Sqrt(SqrtArray::new()),
            SequenceKind::BlockChain => {
                SequenceInner::BlockChain(BlockChain::try_with_block_size(self.block_size)?)
            },
        };
        Ok(Sequence { inner })
    }
}

impl Default for SequenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::OverflowPolicy;

    fn all_kinds() -> [SequenceKind; 4] {
        [
            SequenceKind::Ring(BufferPolicy::new(
                CapacityPolicy::Dynamic,
                OverflowPolicy::Reject,
            )),
            SequenceKind::Ring(BufferPolicy::new(
                CapacityPolicy::Fixed,
                OverflowPolicy::Reject,
            )),
            SequenceKind::Sqrt,
            SequenceKind::BlockChain,
        ]
    }

    #[test]
    fn all_kinds_basic_ops() {
        for kind in all_kinds() {
            let mut seq = SequenceBuilder::new()
                .capacity(64)
                .block_size(3)
                .build::<i32>(kind);
            assert_eq!(seq.kind(), kind);
            assert!(seq.is_empty());

            for v in 0..10 {
                seq.push_back(v).unwrap();
            }
            seq.push_front(-1).unwrap();
            seq.insert(5, 100).unwrap();
            assert_eq!(seq.len(), 12);
            assert_eq!(seq.front(), Some(&-1));
            assert_eq!(seq.back(), Some(&9));
            assert_eq!(seq.get(5), Some(&100));

            *seq.get_mut(5).unwrap() = 101;
            assert_eq!(seq.remove(5), Ok(101));
            assert_eq!(seq.pop_front(), Ok(-1));
            assert_eq!(seq.pop_back(), Ok(9));
            assert_eq!(
                seq.iter().copied().collect::<Vec<_>>(),
                (0..9).collect::<Vec<_>>()
            );
            assert!(seq.check_invariants().is_ok());

            seq.clear();
            assert!(seq.is_empty());
            assert_eq!(seq.pop_front(), Err(SequenceError::EmptyContainer));
        }
    }

    #[test]
    fn fixed_ring_without_capacity_is_rejected() {
        let policy = BufferPolicy::new(CapacityPolicy::Fixed, OverflowPolicy::Replace);
        let err = SequenceBuilder::new()
            .try_build::<u8>(SequenceKind::Ring(policy))
            .unwrap_err();
        assert!(err.message().contains("capacity"));
    }

    #[test]
    fn dynamic_ring_may_start_empty() {
        let policy = BufferPolicy::new(CapacityPolicy::Dynamic, OverflowPolicy::Reject);
        let mut seq = SequenceBuilder::new().build::<u8>(SequenceKind::Ring(policy));
        seq.push_back(1).unwrap();
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn small_block_size_only_matters_for_block_chain() {
        let builder = SequenceBuilder::new().block_size(1);
        assert!(builder.try_build::<u8>(SequenceKind::BlockChain).is_err());
        assert!(builder.try_build::<u8>(SequenceKind::Sqrt).is_ok());
    }

    #[test]
    #[should_panic(expected = "block size")]
    fn build_panics_on_invalid_block_size() {
        let _seq = SequenceBuilder::new()
            .block_size(0)
            .build::<u8>(SequenceKind::BlockChain);
    }

    #[test]
    fn fixed_reject_ring_reports_overflow() {
        let policy = BufferPolicy::new(CapacityPolicy::Fixed, OverflowPolicy::Reject);
        let mut seq = SequenceBuilder::new()
            .capacity(1)
            .build::<u8>(SequenceKind::Ring(policy));
        seq.push_back(1).unwrap();
        assert_eq!(
            seq.push_back(2).unwrap_err(),
            SequenceError::CapacityExceeded { capacity: 1 }
        );
    }

    #[test]
    fn debug_delegates_to_container() {
        let mut seq = SequenceBuilder::new().build::<u8>(SequenceKind::Sqrt);
        seq.push_back(7).unwrap();
        assert!(format!("{seq:?}").starts_with("SqrtArray"));
    }
}
