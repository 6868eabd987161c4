//! Mixed workload benchmarks over the sequence builder.
//!
//! Run with: `cargo bench --bench workloads`
//!
//! Every container kind replays the same seeded operation stream, so the
//! numbers compare layouts rather than random noise. A second group sweeps
//! the block size of [`BlockChain`] under random interior edits.
//!
//! For micro-ops (push/get/insert latency), see: `cargo bench --bench ops`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use seqkit::builder::{Sequence, SequenceBuilder, SequenceKind};
use seqkit::ds::{BlockChain, BufferPolicy, CapacityPolicy, OverflowPolicy};
use seqkit::traits::DequeSequence;

const PREFILL: usize = 4096;
const OPS: usize = 20_000;
const SEED: u64 = 42;

// ============================================================================
// Workload definitions
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Op {
    PushBack(u64),
    PushFront(u64),
    PopBack,
    PopFront,
    Insert(usize, u64),
    Remove(usize),
    Get(usize),
}

#[derive(Debug, Clone, Copy)]
enum Workload {
    /// FIFO churn at both ends.
    Queue,
    /// Uniform random interior edits.
    RandomEdit,
    /// Mostly reads with occasional edits.
    ReadMostly,
}

impl Workload {
    fn name(self) -> &'static str {
        match self {
            Workload::Queue => "queue",
            Workload::RandomEdit => "random_edit",
            Workload::ReadMostly => "read_mostly",
        }
    }

    /// Generates `ops` operations. Positions are raw draws, reduced modulo
    /// the live length when replayed.
    fn generate(self, ops: usize, seed: u64) -> Vec<Op> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..ops as u64)
            .map(|i| match self {
                Workload::Queue => match rng.random_range(0..4) {
                    0 | 1 => Op::PushBack(i),
                    2 => Op::PopFront,
                    _ => Op::PushFront(i),
                },
                Workload::RandomEdit => {
                    if rng.random_bool(0.5) {
                        Op::Insert(rng.random(), i)
                    } else {
                        Op::Remove(rng.random())
                    }
                },
                Workload::ReadMostly => match rng.random_range(0..10) {
                    0 => Op::Insert(rng.random(), i),
                    1 => Op::Remove(rng.random()),
                    2 => Op::PopBack,
                    3 => Op::PushBack(i),
                    _ => Op::Get(rng.random()),
                },
            })
            .collect()
    }
}

fn replay<S: DequeSequence<u64>>(seq: &mut S, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::PushBack(value) => {
                let _ = seq.push_back(value);
            },
            Op::PushFront(value) => {
                let _ = seq.push_front(value);
            },
            Op::PopBack => {
                black_box(seq.pop_back().ok());
            },
            Op::PopFront => {
                black_box(seq.pop_front().ok());
            },
            Op::Insert(raw, value) => {
                let pos = raw % (seq.len() + 1);
                let _ = seq.insert(pos, value);
            },
            Op::Remove(raw) => {
                if !seq.is_empty() {
                    black_box(seq.remove(raw % seq.len()).ok());
                }
            },
            Op::Get(raw) => {
                if !seq.is_empty() {
                    black_box(seq.get(raw % seq.len()));
                }
            },
        }
    }
}

fn kinds() -> Vec<(&'static str, SequenceKind)> {
    vec![
        (
            "ring_buffer",
            SequenceKind::Ring(BufferPolicy::new(
                CapacityPolicy::Dynamic,
                OverflowPolicy::Reject,
            )),
        ),
        ("sqrt_array", SequenceKind::Sqrt),
        ("block_chain", SequenceKind::BlockChain),
    ]
}

fn prefilled(kind: SequenceKind) -> Sequence<u64> {
    let mut seq = SequenceBuilder::new().build::<u64>(kind);
    for i in 0..PREFILL as u64 {
        let _ = seq.push_back(i);
    }
    seq
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_workloads(c: &mut Criterion) {
    for workload in [Workload::Queue, Workload::RandomEdit, Workload::ReadMostly] {
        let ops = workload.generate(OPS, SEED);
        let mut group = c.benchmark_group(format!("workload_{}", workload.name()));
        group.throughput(Throughput::Elements(OPS as u64));

        for (name, kind) in kinds() {
            group.bench_function(BenchmarkId::from_parameter(name), |b| {
                b.iter_batched(
                    || prefilled(kind),
                    |mut seq| {
                        replay(&mut seq, &ops);
                        seq
                    },
                    criterion::BatchSize::LargeInput,
                )
            });
        }

        group.finish();
    }
}

fn bench_block_size_sweep(c: &mut Criterion) {
    let ops = Workload::RandomEdit.generate(OPS, SEED);
    let mut group = c.benchmark_group("block_chain_block_size");
    group.throughput(Throughput::Elements(OPS as u64));

    for block_size in [4usize, 16, 64, 256] {
        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, &block_size| {
                b.iter_batched(
                    || {
                        let mut chain = BlockChain::with_block_size(block_size);
                        chain.extend(0..PREFILL as u64);
                        chain
                    },
                    |mut chain| {
                        replay(&mut chain, &ops);
                        chain
                    },
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_workloads, bench_block_size_sweep);
criterion_main!(benches);
