#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RingBufferMetricsSnapshot {
    pub insert_calls: u64,
    pub remove_calls: u64,
    pub clear_calls: u64,

    pub grow_events: u64,
    pub shrink_events: u64,
    pub overwrites: u64,
    pub rejects: u64,
    pub shift_steps: u64,
    pub linearize_calls: u64,
    pub resize_calls: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SqrtArrayMetricsSnapshot {
    pub insert_calls: u64,
    pub remove_calls: u64,
    pub clear_calls: u64,

    pub block_grows: u64,
    pub block_shrinks: u64,
    pub ripple_steps: u64,

    pub len: usize,
    pub capacity: usize,
    pub block_count: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlockChainMetricsSnapshot {
    pub insert_calls: u64,
    pub remove_calls: u64,
    pub clear_calls: u64,

    pub push_back_fast: u64,
    pub push_front_fast: u64,
    pub shifts: u64,
    pub spreads: u64,
    pub gathers: u64,
    pub end_of_list: u64,
    pub nodes_allocated: u64,
    pub nodes_freed: u64,
    pub element_moves: u64,

    pub locate_calls: u64,
    pub locate_steps: u64,

    pub len: usize,
    pub node_count: usize,
    pub block_size: usize,
}
