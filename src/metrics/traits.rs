//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting and export are split into small traits so the
//! containers only ever write counters and never know how they are read.
//!
//! ## Architecture
//!
//! ```text
//!                          ┌─────────────────────────────┐
//!                          │     CoreMetricsRecorder     │
//!                          │  insert / remove / clear    │
//!                          └──────────────┬──────────────┘
//!                                         │
//!            ┌────────────────────────────┼────────────────────────────┐
//!            │                            │                            │
//!            ▼                            ▼                            ▼
//!   ┌──────────────────┐       ┌──────────────────┐       ┌──────────────────┐
//!   │    RingBuffer    │       │    SqrtArray     │       │    BlockChain    │
//!   │     Recorder     │       │     Recorder     │       │     Recorder     │
//!   │ grow/shrink/...  │       │ block grow/...   │       │ shift/spread/... │
//!   └──────────────────┘       └──────────────────┘       └────────┬─────────┘
//!                                                                  │ &self
//!                                                                  ▼
//!                                                       ┌──────────────────┐
//!                                                       │    BlockChain    │
//!                                                       │   ReadRecorder   │
//!                                                       │  locate walks    │
//!                                                       └──────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (monitoring)                 │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters shared by every container.
pub trait CoreMetricsRecorder {
    fn record_insert_call(&mut self);
    fn record_remove_call(&mut self);
    fn record_clear(&mut self);
}

/// Capacity changes and overflow handling of a ring buffer.
pub trait RingBufferMetricsRecorder: CoreMetricsRecorder {
    fn record_grow(&mut self);
    fn record_shrink(&mut self);
    fn record_overwrite(&mut self);
    fn record_reject(&mut self);
    /// One element moved while opening or closing an interior gap.
    fn record_shift_step(&mut self);
    fn record_linearize(&mut self);
    fn record_resize(&mut self);
}

/// Block allocation and cross-block ripples of a square-root array.
pub trait SqrtArrayMetricsRecorder: CoreMetricsRecorder {
    fn record_block_grow(&mut self);
    fn record_block_shrink(&mut self);
    /// One element handed across a block boundary.
    fn record_ripple_step(&mut self);
}

/// Rebalancing activity of a block chain.
pub trait BlockChainMetricsRecorder: CoreMetricsRecorder {
    fn record_push_back_fast(&mut self);
    fn record_push_front_fast(&mut self);
    fn record_shift(&mut self);
    fn record_spread(&mut self);
    fn record_gather(&mut self);
    fn record_end_of_list(&mut self);
    fn record_node_alloc(&mut self);
    fn record_node_free(&mut self);
    fn record_element_move(&mut self);
}

/// Read-only block chain metrics for `&self` methods (uses interior
/// mutability).
///
/// Position lookups walk the node list from `&self`, so their counters live
/// in [`MetricsCell`](crate::metrics::cell::MetricsCell)s.
pub trait BlockChainMetricsReadRecorder {
    fn record_locate_call(&self);
    /// One whole node skipped during a lookup.
    fn record_locate_step(&self);
}

/// Point-in-time copy of a container's counters and gauges.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Publish snapshots to a monitoring backend.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
