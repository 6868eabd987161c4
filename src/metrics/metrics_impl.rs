use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{
    BlockChainMetricsReadRecorder, BlockChainMetricsRecorder, CoreMetricsRecorder,
    RingBufferMetricsRecorder, SqrtArrayMetricsRecorder,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct RingBufferMetrics {
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
}

impl CoreMetricsRecorder for RingBufferMetrics {
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl RingBufferMetricsRecorder for RingBufferMetrics {
    fn record_grow(&mut self) {
        self.grow_events += 1;
    }

    fn record_shrink(&mut self) {
        self.shrink_events += 1;
    }

    fn record_overwrite(&mut self) {
        self.overwrites += 1;
    }

    fn record_reject(&mut self) {
        self.rejects += 1;
    }

    fn record_shift_step(&mut self) {
        self.shift_steps += 1;
    }

    fn record_linearize(&mut self) {
        self.linearize_calls += 1;
    }

    fn record_resize(&mut self) {
        self.resize_calls += 1;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SqrtArrayMetrics {
    pub insert_calls: u64,
    pub remove_calls: u64,
    pub clear_calls: u64,
    pub block_grows: u64,
    pub block_shrinks: u64,
    pub ripple_steps: u64,
}

impl CoreMetricsRecorder for SqrtArrayMetrics {
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl SqrtArrayMetricsRecorder for SqrtArrayMetrics {
    fn record_block_grow(&mut self) {
        self.block_grows += 1;
    }

    fn record_block_shrink(&mut self) {
        self.block_shrinks += 1;
    }

    fn record_ripple_step(&mut self) {
        self.ripple_steps += 1;
    }
}

#[derive(Debug, Default)]
pub struct BlockChainMetrics {
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
    pub locate_calls: MetricsCell,
    pub locate_steps: MetricsCell,
}

impl CoreMetricsRecorder for BlockChainMetrics {
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl BlockChainMetricsRecorder for BlockChainMetrics {
    fn record_push_back_fast(&mut self) {
        self.push_back_fast += 1;
    }

    fn record_push_front_fast(&mut self) {
        self.push_front_fast += 1;
    }

    fn record_shift(&mut self) {
        self.shifts += 1;
    }

    fn record_spread(&mut self) {
        self.spreads += 1;
    }

    fn record_gather(&mut self) {
        self.gathers += 1;
    }

    fn record_end_of_list(&mut self) {
        self.end_of_list += 1;
    }

    fn record_node_alloc(&mut self) {
        self.nodes_allocated += 1;
    }

    fn record_node_free(&mut self) {
        self.nodes_freed += 1;
    }

    fn record_element_move(&mut self) {
        self.element_moves += 1;
    }
}

impl BlockChainMetricsReadRecorder for BlockChainMetrics {
    fn record_locate_call(&self) {
        self.locate_calls.incr();
    }

    fn record_locate_step(&self) {
        self.locate_steps.incr();
    }
}
