//! Error types for the seqkit library.
//!
//! ## Key Components
//!
//! - [`SequenceError`]: Returned by fallible container operations
//!   (out-of-range positions, full fixed-capacity buffers, pops on empty
//!   containers). A failed call leaves the container untouched.
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (e.g. a block size below the minimum).
//! - [`InvariantError`]: Returned by `check_invariants` methods when an
//!   internal data-structure invariant is broken. This indicates a bug in
//!   the container itself, never caller misuse.
//!
//! ## Example Usage
//!
//! ```
//! use seqkit::ds::{BufferPolicy, CapacityPolicy, OverflowPolicy, RingBuffer};
//! use seqkit::error::SequenceError;
//!
//! let policy = BufferPolicy::new(CapacityPolicy::Fixed, OverflowPolicy::Reject);
//! let mut ring = RingBuffer::new(1, policy);
//! ring.push_back(1).unwrap();
//!
//! // Full fixed buffer under the reject policy
//! let err = ring.push_back(2).unwrap_err();
//! assert_eq!(err, SequenceError::CapacityExceeded { capacity: 1 });
//! assert_eq!(ring.len(), 1);
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// SequenceError
// ---------------------------------------------------------------------------

/// Error returned by container operations.
///
/// Every variant is raised before the container is mutated, so the
/// container keeps the exact state it had before the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// A position lies outside the valid range for the operation
    /// (`[0, len]` for inserts, `[0, len)` for removals and access).
    OutOfRange {
        /// The requested position.
        pos: usize,
        /// The container length at the time of the call.
        len: usize,
    },
    /// A fixed-capacity buffer configured to reject overflow is full.
    CapacityExceeded {
        /// The buffer capacity.
        capacity: usize,
    },
    /// A pop or removal was attempted on an empty container.
    EmptyContainer,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pos, len } => {
                write!(f, "position {pos} is out of range for length {len}")
            },
            Self::CapacityExceeded { capacity } => {
                write!(f, "capacity exceeded: buffer is full at {capacity} elements")
            },
            Self::EmptyContainer => f.write_str("container is empty"),
        }
    }
}

impl std::error::Error for SequenceError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal container invariants are violated.
///
/// Produced by `check_invariants` methods on container types
/// (e.g. [`BlockChain::check_invariants`](crate::ds::BlockChain::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when construction parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`BlockChain::try_with_block_size`](crate::ds::BlockChain::try_with_block_size)
/// and [`SequenceBuilder::try_build`](crate::builder::SequenceBuilder::try_build).
///
/// # Example
///
/// ```
/// use seqkit::ds::BlockChain;
///
/// let err = BlockChain::<u64>::try_with_block_size(1).unwrap_err();
/// assert!(err.to_string().contains("block size"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
