//! DHAT heap profiler for seqkit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use seqkit::builder::{SequenceBuilder, SequenceKind};
use seqkit::ds::{BufferPolicy, CapacityPolicy, OverflowPolicy};
use seqkit::traits::DequeSequence;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// Append-heavy growth followed by draining from the back.
fn grow_and_drain<S: DequeSequence<u64>>(seq: &mut S, operations: usize) {
    for i in 0..operations as u64 {
        let _ = seq.push_back(i);
    }
    while seq.len() > operations / 4 {
        let _ = seq.pop_back();
    }
}

/// Random interior edits with a stable length.
fn random_edits<S: DequeSequence<u64>>(seq: &mut S, operations: usize, seed: u64) {
    let mut rng = XorShift64::new(seed);
    for i in 0..operations as u64 {
        let pos = (rng.next_u64() as usize) % (seq.len() + 1);
        let _ = seq.insert(pos, i);
        if !seq.is_empty() {
            let pos = (rng.next_u64() as usize) % seq.len();
            let _ = seq.remove(pos);
        }
    }
}

/// Queue churn: push at the back, pop at the front.
fn queue_churn<S: DequeSequence<u64>>(seq: &mut S, operations: usize) {
    for i in 0..operations as u64 {
        let _ = seq.push_back(i);
        if i % 2 == 0 {
            let _ = seq.pop_front();
        }
    }
}

fn profile(name: &str, kind: SequenceKind) {
    println!("=== Profiling {name} ===");
    let operations = 100_000;

    let mut seq = SequenceBuilder::new()
        .capacity(4096)
        .block_size(32)
        .build::<u64>(kind);

    grow_and_drain(&mut seq, operations);
    random_edits(&mut seq, operations / 10, 42);
    queue_churn(&mut seq, operations / 2);

    println!("  Final size: {}", seq.len());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("seqkit DHAT Heap Profiling");
    println!("==========================\n");

    profile(
        "RingBuffer (dynamic)",
        SequenceKind::Ring(BufferPolicy::new(
            CapacityPolicy::Dynamic,
            OverflowPolicy::Reject,
        )),
    );
    profile(
        "RingBuffer (fixed, replace)",
        SequenceKind::Ring(BufferPolicy::new(
            CapacityPolicy::Fixed,
            OverflowPolicy::Replace,
        )),
    );
    profile("SqrtArray", SequenceKind::Sqrt);
    profile("BlockChain", SequenceKind::BlockChain);

    println!("\n==========================");
    println!("Profile written to dhat-heap.json");
}
