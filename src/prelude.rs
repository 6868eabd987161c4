pub use crate::builder::{Sequence, SequenceBuilder, SequenceKind};
pub use crate::ds::{
    Arena, ArrayBlock, BlockChain, BufferPolicy, CapacityPolicy, ElementIndex, InsertScenario,
    NodeList, OverflowPolicy, RemoveScenario, ResizePolicy, RingBuffer, SlotArena, SlotId,
    SqrtArray,
};
pub use crate::error::{ConfigError, InvariantError, SequenceError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::{
    BlockChainMetricsSnapshot, RingBufferMetricsSnapshot, SqrtArrayMetricsSnapshot,
};
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::MetricsSnapshotProvider;
pub use crate::traits::{CoreSequence, DequeSequence};
