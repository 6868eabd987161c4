//! # Sequence Trait Hierarchy
//!
//! Positional containers share one small interface so that callers can be
//! written once and run against any of the block layouts in [`crate::ds`].
//!
//! ## Architecture
//!
//! ```text
//!                   ┌─────────────────────────────────────────────┐
//!                   │             CoreSequence<T>                 │
//!                   │                                             │
//!                   │  len(&) → usize                             │
//!                   │  is_empty(&) → bool                         │
//!                   │  get(&, pos) → Option<&T>                   │
//!                   │  get_mut(&mut, pos) → Option<&mut T>        │
//!                   │  insert(&mut, pos, T) → Result<&mut T>      │
//!                   │  remove(&mut, pos) → Result<T>              │
//!                   │  push_back(&mut, T) → Result<&mut T>        │
//!                   │  pop_back(&mut) → Result<T>                 │
//!                   │  clear(&mut)                                │
//!                   └──────────────────────┬──────────────────────┘
//!                                          │
//!                                          ▼
//!                   ┌─────────────────────────────────────────────┐
//!                   │            DequeSequence<T>                 │
//!                   │                                             │
//!                   │  push_front(&mut, T) → Result<&mut T>       │
//!                   │  pop_front(&mut) → Result<T>                │
//!                   │  front(&) → Option<&T>                      │
//!                   │  back(&) → Option<&T>                       │
//!                   └─────────────────────────────────────────────┘
//! ```
//!
//! ## Implementors
//!
//! | Container     | `CoreSequence` | `DequeSequence` | Fallible pushes             |
//! |---------------|----------------|-----------------|-----------------------------|
//! | `ArrayBlock`  | ✅             | ❌              | never                       |
//! | `RingBuffer`  | ✅             | ✅              | `Fixed + Reject` when full  |
//! | `SqrtArray`   | ✅             | ❌              | never                       |
//! | `BlockChain`  | ✅             | ✅              | never                       |
//!
//! Pushes return `Result` at the trait level because a full fixed ring
//! buffer may reject them; containers that always accept a push expose an
//! infallible inherent method and wrap it in `Ok` here.
//!
//! ## Example Usage
//!
//! ```
//! use seqkit::ds::{BlockChain, SqrtArray};
//! use seqkit::traits::CoreSequence;
//!
//! fn fill<S: CoreSequence<u32>>(seq: &mut S, n: u32) {
//!     for v in 0..n {
//!         seq.push_back(v).unwrap();
//!     }
//! }
//!
//! let mut chain: BlockChain<u32> = BlockChain::new();
//! let mut array: SqrtArray<u32> = SqrtArray::new();
//! fill(&mut chain, 10);
//! fill(&mut array, 10);
//! assert_eq!(CoreSequence::get(&chain, 7), CoreSequence::get(&array, 7));
//! ```
use crate::error::SequenceError;

/// Positional operations every sequence container supports.
///
/// Positions are zero-based logical indices. Inserts accept `0..=len`,
/// every other positional operation accepts `0..len`. A failing call leaves
/// the container unchanged.
pub trait CoreSequence<T> {
    /// Returns the number of stored elements.
    fn len(&self) -> usize;

    /// Returns `true` if no elements are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `pos`, or `None` if `pos >= len`.
    fn get(&self, pos: usize) -> Option<&T>;

    /// Mutable form of [`get`](Self::get).
    fn get_mut(&mut self, pos: usize) -> Option<&mut T>;

    /// Inserts `value` so that it ends up at `pos`, shifting later elements
    /// back by one.
    ///
    /// # Example
    ///
    /// ```
    /// use seqkit::ds::SqrtArray;
    /// use seqkit::error::SequenceError;
    /// use seqkit::traits::CoreSequence;
    ///
    /// let mut array: SqrtArray<char> = SqrtArray::new();
    /// CoreSequence::insert(&mut array, 0, 'b').unwrap();
    /// CoreSequence::insert(&mut array, 0, 'a').unwrap();
    /// assert_eq!(
    ///     CoreSequence::insert(&mut array, 5, 'z').unwrap_err(),
    ///     SequenceError::OutOfRange { pos: 5, len: 2 }
    /// );
    /// ```
    fn insert(&mut self, pos: usize, value: T) -> Result<&mut T, SequenceError>;

    /// Removes and returns the element at `pos`.
    fn remove(&mut self, pos: usize) -> Result<T, SequenceError>;

    /// Appends `value` after the last element.
    fn push_back(&mut self, value: T) -> Result<&mut T, SequenceError>;

    /// Removes the last element.
    fn pop_back(&mut self) -> Result<T, SequenceError>;

    /// Drops every element.
    fn clear(&mut self);
}

/// Sequences with cheap access at both ends.
///
/// # Example
///
/// ```
/// use seqkit::ds::{BufferPolicy, CapacityPolicy, OverflowPolicy, RingBuffer};
/// use seqkit::traits::DequeSequence;
///
/// fn rotate_once<S: DequeSequence<i32>>(seq: &mut S) {
///     if let Ok(v) = seq.pop_front() {
///         seq.push_back(v).unwrap();
///     }
/// }
///
/// let policy = BufferPolicy::new(CapacityPolicy::Dynamic, OverflowPolicy::Reject);
/// let mut ring = RingBuffer::new(4, policy);
/// for v in 1..=3 {
///     ring.push_back(v).unwrap();
/// }
/// rotate_once(&mut ring);
/// assert_eq!(DequeSequence::front(&ring), Some(&2));
/// assert_eq!(DequeSequence::back(&ring), Some(&1));
/// ```
pub trait DequeSequence<T>: CoreSequence<T> {
    /// Prepends `value` before the first element.
    fn push_front(&mut self, value: T) -> Result<&mut T, SequenceError>;

    /// Removes the first element.
    fn pop_front(&mut self) -> Result<T, SequenceError>;

    fn front(&self) -> Option<&T>;

    fn back(&self) -> Option<&T>;
}
