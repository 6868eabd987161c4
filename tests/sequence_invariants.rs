// ==============================================
// CROSS-CONTAINER INVARIANT TESTS (integration)
// ==============================================
//
// Behavior that must hold for every container in the library. These span
// multiple modules and belong here rather than in any single source file.

use seqkit::builder::{SequenceBuilder, SequenceKind};
use seqkit::ds::{BufferPolicy, CapacityPolicy, OverflowPolicy};
use seqkit::error::SequenceError;
use seqkit::traits::DequeSequence;

fn all_kinds() -> Vec<SequenceKind> {
    vec![
        SequenceKind::Ring(BufferPolicy::new(
            CapacityPolicy::Dynamic,
            OverflowPolicy::Reject,
        )),
        SequenceKind::Sqrt,
        SequenceKind::BlockChain,
    ]
}

fn contents<S: DequeSequence<i32>>(seq: &S) -> Vec<i32> {
    (0..seq.len()).map(|i| *seq.get(i).unwrap()).collect()
}

// ==============================================
// Worked Scenarios
// ==============================================

mod scenarios {
    use seqkit::ds::{
        BlockChain, BufferPolicy, CapacityPolicy, OverflowPolicy, RingBuffer, SqrtArray,
    };

    #[test]
    fn block_chain_appends_fill_blocks_to_capacity() {
        let mut chain = BlockChain::with_block_size(3);
        for i in 0..10 {
            chain.push_back(i);
        }

        let lens: Vec<usize> = chain.blocks().map(|block| block.len()).collect();
        assert_eq!(lens, vec![4, 4, 2]);
        assert!(chain.iter().copied().eq(0..10));
        chain.check_invariants().unwrap();
    }

    #[test]
    fn fixed_replace_ring_keeps_most_recent() {
        let mut ring = RingBuffer::new(
            5,
            BufferPolicy::new(CapacityPolicy::Fixed, OverflowPolicy::Replace),
        );
        for i in 1..=6 {
            ring.push_back(i).unwrap();
        }

        assert_eq!(ring.len(), 5);
        assert_eq!(ring.capacity(), 5);
        assert!(ring.iter().copied().eq(2..=6));
    }

    #[test]
    fn fixed_reject_ring_keeps_oldest() {
        let mut ring = RingBuffer::new(
            5,
            BufferPolicy::new(CapacityPolicy::Fixed, OverflowPolicy::Reject),
        );
        for i in 1..=5 {
            ring.push_back(i).unwrap();
        }

        assert!(ring.push_back(6).is_err());
        assert!(ring.iter().copied().eq(1..=5));
    }

    #[test]
    fn sqrt_array_block_capacities_grow_by_one() {
        let mut array = SqrtArray::new();
        for i in 0..20 {
            array.push_back(i);
        }

        let capacities: Vec<usize> = array.blocks().iter().map(|block| block.capacity()).collect();
        assert_eq!(capacities, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(array.blocks().last().map(|block| block.len()), Some(5));
        assert!(array.iter().copied().eq(0..20));
    }
}

// ==============================================
// Uniform Behavior Through the Builder
// ==============================================

#[test]
fn every_kind_preserves_order_under_mixed_edits() {
    for kind in all_kinds() {
        let mut seq = SequenceBuilder::new().block_size(3).build::<i32>(kind);
        for i in 0..8 {
            seq.push_back(i).unwrap();
        }
        seq.insert(3, 100).unwrap();
        seq.insert(0, 200).unwrap();
        assert_eq!(seq.remove(5), Ok(3));
        seq.push_front(-1).unwrap();

        assert_eq!(
            contents(&seq),
            vec![-1, 200, 0, 1, 2, 100, 4, 5, 6, 7],
            "{kind:?}"
        );
        seq.check_invariants().unwrap();
    }
}

#[test]
fn every_kind_reports_empty_and_out_of_range() {
    for kind in all_kinds() {
        let mut seq = SequenceBuilder::new().build::<i32>(kind);

        assert_eq!(seq.pop_back(), Err(SequenceError::EmptyContainer), "{kind:?}");
        assert_eq!(seq.pop_front(), Err(SequenceError::EmptyContainer), "{kind:?}");
        assert!(seq.remove(0).is_err(), "{kind:?}");
        assert_eq!(
            seq.insert(1, 5).map(|slot| *slot),
            Err(SequenceError::OutOfRange { pos: 1, len: 0 }),
            "{kind:?}"
        );
        assert!(seq.get(0).is_none());
        assert!(seq.is_empty());
    }
}

#[test]
fn every_kind_drains_from_both_ends() {
    for kind in all_kinds() {
        let mut seq = SequenceBuilder::new().block_size(4).build::<i32>(kind);
        for i in 0..50 {
            seq.push_back(i).unwrap();
        }

        let mut front = Vec::new();
        let mut back = Vec::new();
        while !seq.is_empty() {
            front.push(seq.pop_front().unwrap());
            if let Ok(value) = seq.pop_back() {
                back.push(value);
            }
        }
        back.reverse();
        front.extend(back);

        assert_eq!(front, (0..50).collect::<Vec<_>>(), "{kind:?}");
        seq.check_invariants().unwrap();
    }
}

#[test]
fn clear_allows_reuse() {
    for kind in all_kinds() {
        let mut seq = SequenceBuilder::new().block_size(3).build::<i32>(kind);
        for i in 0..30 {
            seq.push_back(i).unwrap();
        }
        seq.clear();
        assert!(seq.is_empty(), "{kind:?}");

        seq.push_back(7).unwrap();
        assert_eq!(seq.front(), Some(&7));
        assert_eq!(seq.back(), Some(&7));
        seq.check_invariants().unwrap();
    }
}

// ==============================================
// Builder Configuration Errors
// ==============================================

mod builder_errors {
    use seqkit::builder::{SequenceBuilder, SequenceKind};
    use seqkit::ds::{BufferPolicy, CapacityPolicy, MIN_BLOCK_SIZE, OverflowPolicy};

    #[test]
    fn block_size_below_minimum_is_rejected() {
        let result = SequenceBuilder::new()
            .block_size(MIN_BLOCK_SIZE - 1)
            .try_build::<u8>(SequenceKind::BlockChain);
        assert!(result.is_err());
    }

    #[test]
    fn block_size_is_ignored_for_other_kinds() {
        let result = SequenceBuilder::new()
            .block_size(1)
            .try_build::<u8>(SequenceKind::Sqrt);
        assert!(result.is_ok());
    }

    #[test]
    fn zero_capacity_fixed_ring_is_rejected() {
        let result = SequenceBuilder::new().try_build::<u8>(SequenceKind::Ring(
            BufferPolicy::new(CapacityPolicy::Fixed, OverflowPolicy::Replace),
        ));
        assert!(result.is_err());
    }

    #[test]
    #[should_panic]
    fn build_panics_on_invalid_config() {
        let _ = SequenceBuilder::new()
            .block_size(0)
            .build::<u8>(SequenceKind::BlockChain);
    }
}
