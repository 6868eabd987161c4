//! Optional counters for the containers in [`crate::ds`].
//!
//! Compiled only with the `metrics` feature. Each container owns a counter
//! struct from [`metrics_impl`], exposes `metrics_snapshot()`, and implements
//! [`traits::MetricsSnapshotProvider`] for its snapshot type.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
