//! seqkit: block-structured sequence containers.
//!
//! Ring buffers over raw arenas, square-root decomposed arrays and blocked
//! linked lists, all behind the [`traits::CoreSequence`] seam.
//!
//! Storage is layered: [`ds::Arena`] owns raw slots, [`ds::RingBuffer`] and
//! [`ds::ArrayBlock`] manage live ranges over it, [`ds::SqrtArray`] chains
//! array blocks of growing capacity, and [`ds::BlockChain`] links ring
//! buffers through a generational [`ds::NodeList`]. Every container exposes
//! `check_invariants()` for tests and debug builds.

pub mod builder;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
