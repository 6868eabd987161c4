//! Blocked linked list with bounded per-node occupancy.
//!
//! A `BlockChain` stores its elements in a doubly linked list of small
//! fixed-capacity [`RingBuffer`] blocks. With block size `b`, every node
//! except the last holds between `b - 1` and `b + 1` elements, so a position
//! is found by skipping whole blocks and an edit only ever moves elements
//! across a bounded window of neighbouring nodes.
//!
//! ## Architecture
//!
//! ```text
//!   b = 3 (nodes hold 2..=4, capacity 4)
//!
//!   head                                                  tail
//!    │                                                      │
//!    ▼                                                      ▼
//!   ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//!   │ 0  1  2  3  │ ◄─► │ 4  5  6     │ ◄─► │ 7           │
//!   └─────────────┘     └─────────────┘     └─────────────┘
//!     full (b+1)          b                   last: any size ≥ 1
//!
//!   nodes live in a NodeList (SlotArena slots, SlotId links)
//! ```
//!
//! ## Rebalancing
//!
//! An insert into node `u` looks ahead at most `b` nodes for room:
//!
//! | Scenario     | Found                          | Action                          |
//! |--------------|--------------------------------|---------------------------------|
//! | `Shift(w)`   | non-full `w` within `b` steps  | shift one element per node back |
//! | `EndOfList`  | list ends first                | new tail node, then shift       |
//! | `Spread(w)`  | `b` full nodes                 | new node before `w`, level to b |
//!
//! A removal mirrors this with nodes holding exactly `b - 1`: `b` of them in
//! a row are gathered into `b - 1` nodes of `b`, and after the local remove
//! short nodes refill from their successors.
//!
//! ## Performance
//!
//! | Operation                  | Time          | Notes                         |
//! |----------------------------|---------------|-------------------------------|
//! | `get(pos)`                 | O(n / b)      | Walks from the nearer end     |
//! | `push_back` / `push_front` | O(1) / O(b)   | O(b²) worst case at the front |
//! | `insert` / `remove`        | O(b + n / b)  | Amortized over rebalancing    |
//! | `pop_front` / `pop_back`   | O(b)          | Refill walk                   |
//!
//! ## Example Usage
//!
//! ```
//! use seqkit::ds::BlockChain;
//!
//! let mut chain = BlockChain::with_block_size(3);
//! for v in 0..10 {
//!     chain.push_back(v);
//! }
//! chain.insert(4, 99).unwrap();
//! assert_eq!(chain[4], 99);
//! assert_eq!(chain.remove(4), Ok(99));
//! assert_eq!(chain.iter().copied().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
//! ```
//!
//! `debug_validate_invariants()` is available in debug/test builds.
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::ds::node_list::NodeList;
use crate::ds::ring_buffer::{BufferPolicy, CapacityPolicy, OverflowPolicy, RingBuffer};
use crate::ds::slot_arena::SlotId;
use crate::error::{ConfigError, InvariantError, SequenceError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::BlockChainMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::BlockChainMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    BlockChainMetricsReadRecorder, BlockChainMetricsRecorder, CoreMetricsRecorder,
    MetricsSnapshotProvider,
};
use crate::traits::{CoreSequence, DequeSequence};

/// Smallest accepted block size.
pub const MIN_BLOCK_SIZE: usize = 3;

/// Block size used by [`BlockChain::new`].
pub const DEFAULT_BLOCK_SIZE: usize = 16;

const BLOCK_POLICY: BufferPolicy =
    BufferPolicy::new(CapacityPolicy::Fixed, OverflowPolicy::Reject);

/// How an insert into a full node makes room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertScenario {
    /// The first non-full node within `b` steps.
    Shift(SlotId),
    /// The list ended before a non-full node was found.
    EndOfList,
    /// `b` full nodes in a row; the node after them.
    Spread(SlotId),
}

/// How a removal from a minimal node keeps neighbours in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveScenario {
    /// The first node within `b` steps holding other than `b - 1`.
    Shift(SlotId),
    /// The list ended before such a node was found.
    EndOfList,
    /// `b` nodes in a row hold exactly `b - 1`.
    Gather,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Location {
    node: SlotId,
    offset: usize,
}

/// Linked list of ring-buffer blocks with `b - 1..=b + 1` elements per node.
pub struct BlockChain<T> {
    nodes: NodeList<RingBuffer<T>>,
    len: usize,
    block_size: usize,
    #[cfg(feature = "metrics")]
    metrics: BlockChainMetrics,
}

impl<T> BlockChain<T> {
    /// Creates an empty chain with [`DEFAULT_BLOCK_SIZE`].
    pub fn new() -> Self {
        Self::with_block_size(DEFAULT_BLOCK_SIZE)
    }

    /// Creates an empty chain whose nodes hold around `block_size` elements.
    ///
    /// # Panics
    ///
    /// Panics if `block_size < MIN_BLOCK_SIZE`.
    pub fn with_block_size(block_size: usize) -> Self {
        match Self::try_with_block_size(block_size) {
            Ok(chain) => chain,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`with_block_size`](Self::with_block_size).
    pub fn try_with_block_size(block_size: usize) -> Result<Self, ConfigError> {
        if block_size < MIN_BLOCK_SIZE {
            return Err(ConfigError::new(format!(
                "block size must be at least {MIN_BLOCK_SIZE}, got {block_size}"
            )));
        }
        Ok(Self {
            nodes: NodeList::new(),
            len: 0,
            block_size,
            #[cfg(feature = "metrics")]
            metrics: BlockChainMetrics::default(),
        })
    }

    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of linked blocks.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, pos: usize) -> Option<&T> {
        let Location { node, offset } = self.locate(pos)?;
        self.nodes.get(node)?.get(offset)
    }

    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        let Location { node, offset } = self.locate(pos)?;
        self.nodes.get_mut(node)?.get_mut(offset)
    }

    pub fn front(&self) -> Option<&T> {
        self.nodes
            .head()
            .and_then(|id| self.nodes.get(id))
            .and_then(RingBuffer::front)
    }

    pub fn back(&self) -> Option<&T> {
        self.nodes
            .tail()
            .and_then(|id| self.nodes.get(id))
            .and_then(RingBuffer::back)
    }

    /// Iterates elements front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter().flat_map(RingBuffer::iter)
    }

    /// Iterates the blocks from head to tail.
    pub fn blocks(&self) -> impl Iterator<Item = &RingBuffer<T>> {
        self.nodes.iter()
    }

    /// Appends `value`, opening a new tail node when the tail is full.
    pub fn push_back(&mut self, value: T) -> &mut T {
        #[cfg(feature = "metrics")]
        {
            self.metrics.record_insert_call();
            self.metrics.record_push_back_fast();
        }

        let tail = match self.nodes.tail() {
            Some(tail) if self.block_len(tail) < self.block_size + 1 => tail,
            _ => self.push_node(),
        };
        let slot = Self::block_mut(&mut self.nodes, tail)
            .push_back(value)
            .expect("tail block has room");
        self.len += 1;
        slot
    }

    /// Prepends `value`; a full head node goes through the insert algorithm.
    pub fn push_front(&mut self, value: T) -> &mut T {
        let head = match self.nodes.head() {
            Some(head) => head,
            None => return self.push_back(value),
        };

        if self.block_len(head) > self.block_size {
            return match self.insert_interior(0, value) {
                Ok(slot) => slot,
                Err(err) => unreachable!("insert at the front of a non-empty chain failed: {err}"),
            };
        }

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_insert_call();
            self.metrics.record_push_front_fast();
        }

        let slot = Self::block_mut(&mut self.nodes, head)
            .push_front(value)
            .expect("head block has room");
        self.len += 1;
        slot
    }

    pub fn pop_front(&mut self) -> Result<T, SequenceError> {
        self.remove(0)
    }

    pub fn pop_back(&mut self) -> Result<T, SequenceError> {
        match self.len {
            0 => Err(SequenceError::EmptyContainer),
            len => self.remove(len - 1),
        }
    }

    /// Inserts `value` so that it ends up at position `pos`.
    ///
    /// `pos == len` appends. Fails with `OutOfRange` if `pos > len`.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<&mut T, SequenceError> {
        let len = self.len;
        if pos > len {
            return Err(SequenceError::OutOfRange { pos, len });
        }
        if pos == len {
            return Ok(self.push_back(value));
        }
        self.insert_interior(pos, value)
    }

    /// Removes and returns the element at `pos`.
    pub fn remove(&mut self, pos: usize) -> Result<T, SequenceError> {
        let len = self.len;
        if len == 0 {
            return Err(SequenceError::EmptyContainer);
        }
        let Location { node, offset } = self
            .locate(pos)
            .ok_or(SequenceError::OutOfRange { pos, len })?;

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        match self.remove_scenario(node) {
            RemoveScenario::Gather => {
                #[cfg(feature = "metrics")]
                self.metrics.record_gather();
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    nodes = self.nodes.len(),
                    block_size = self.block_size,
                    "block chain gather"
                );
                self.gather(node);
            },
            RemoveScenario::Shift(_) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_shift();
            },
            RemoveScenario::EndOfList => {
                #[cfg(feature = "metrics")]
                self.metrics.record_end_of_list();
            },
        }

        let value = Self::block_mut(&mut self.nodes, node)
            .remove(offset)
            .expect("located offset within block");
        self.len -= 1;
        self.refill_from(node);
        Ok(value)
    }

    /// Looks ahead from `node` for room to insert without overfilling.
    pub fn insert_scenario(&self, node: SlotId) -> InsertScenario {
        let mut current = Some(node);
        let mut steps = 0;
        loop {
            let Some(id) = current else {
                return InsertScenario::EndOfList;
            };
            if steps == self.block_size {
                return InsertScenario::Spread(id);
            }
            if self.block_len(id) <= self.block_size {
                return InsertScenario::Shift(id);
            }
            current = self.nodes.next(id);
            steps += 1;
        }
    }

    /// Looks ahead from `node` for a neighbour that can spare an element.
    pub fn remove_scenario(&self, node: SlotId) -> RemoveScenario {
        let mut current = Some(node);
        let mut steps = 0;
        loop {
            let Some(id) = current else {
                return RemoveScenario::EndOfList;
            };
            if steps == self.block_size {
                return RemoveScenario::Gather;
            }
            if self.block_len(id) != self.block_size - 1 {
                return RemoveScenario::Shift(id);
            }
            current = self.nodes.next(id);
            steps += 1;
        }
    }

    /// Drops every element and unlinks every node.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.nodes.clear();
        self.len = 0;
    }

    /// Checks node occupancy bounds, block capacities and the cached length.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.nodes.check_invariants()?;
        if self.block_size < MIN_BLOCK_SIZE {
            return Err(InvariantError::new(format!(
                "block size {} is below the minimum {MIN_BLOCK_SIZE}",
                self.block_size
            )));
        }

        let tail = self.nodes.tail();
        let mut total = 0usize;
        for (index, id) in self.nodes.iter_ids().enumerate() {
            let block = self
                .nodes
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("node {index} is not live")))?;
            if block.capacity() != self.block_size + 1 {
                return Err(InvariantError::new(format!(
                    "node {} has capacity {}, expected {}",
                    index,
                    block.capacity(),
                    self.block_size + 1
                )));
            }
            if block.is_empty() {
                return Err(InvariantError::new(format!("node {index} is empty")));
            }
            if Some(id) != tail && block.len() < self.block_size - 1 {
                return Err(InvariantError::new(format!(
                    "interior node {} holds {}, expected at least {}",
                    index,
                    block.len(),
                    self.block_size - 1
                )));
            }
            total += block.len();
        }

        if total != self.len {
            return Err(InvariantError::new(format!(
                "blocks hold {} elements but len is {}",
                total, self.len
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("block chain invariant violated: {err}");
        }
    }

    fn insert_interior(&mut self, pos: usize, value: T) -> Result<&mut T, SequenceError> {
        let len = self.len;
        let Location { node, offset } = self
            .locate(pos)
            .ok_or(SequenceError::OutOfRange { pos, len })?;

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        match self.insert_scenario(node) {
            InsertScenario::Shift(last) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_shift();
                self.shift_back(node, last);
            },
            InsertScenario::EndOfList => {
                #[cfg(feature = "metrics")]
                self.metrics.record_end_of_list();
                let tail = self.push_node();
                self.shift_back(node, tail);
            },
            InsertScenario::Spread(last) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_spread();
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    nodes = self.nodes.len(),
                    block_size = self.block_size,
                    "block chain spread"
                );
                self.spread(node, last);
            },
        }

        let slot = Self::block_mut(&mut self.nodes, node)
            .insert(offset, value)
            .expect("rebalanced block has room");
        self.len += 1;
        Ok(slot)
    }

    /// Finds the node holding `pos`, walking from the nearer end.
    fn locate(&self, pos: usize) -> Option<Location> {
        if pos >= self.len {
            return None;
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_locate_call();

        if pos <= self.len / 2 {
            let mut offset = pos;
            let mut current = self.nodes.head();
            while let Some(id) = current {
                let count = self.block_len(id);
                if offset < count {
                    return Some(Location { node: id, offset });
                }
                offset -= count;
                current = self.nodes.next(id);
                #[cfg(feature = "metrics")]
                self.metrics.record_locate_step();
            }
        } else {
            let mut end = self.len;
            let mut current = self.nodes.tail();
            while let Some(id) = current {
                let start = end.checked_sub(self.block_len(id))?;
                if pos >= start {
                    return Some(Location {
                        node: id,
                        offset: pos - start,
                    });
                }
                end = start;
                current = self.nodes.prev(id);
                #[cfg(feature = "metrics")]
                self.metrics.record_locate_step();
            }
        }
        None
    }

    /// Walking back from `last` to `first`, each node takes its
    /// predecessor's last element.
    fn shift_back(&mut self, first: SlotId, last: SlotId) {
        let mut current = last;
        while current != first {
            let prev = self.nodes.prev(current).expect("shift walk lost its predecessor");
            self.move_back_to_front(prev, current);
            current = prev;
        }
    }

    /// Opens an empty node before `last` and levels `first..=new` to `b` each.
    fn spread(&mut self, first: SlotId, last: SlotId) {
        let fresh = self
            .nodes
            .insert_before(last, Self::empty_block(self.block_size))
            .expect("spread target node missing");
        #[cfg(feature = "metrics")]
        self.metrics.record_node_alloc();

        let mut current = fresh;
        while current != first {
            let prev = self.nodes.prev(current).expect("spread walk lost its predecessor");
            while self.block_len(current) < self.block_size {
                self.move_back_to_front(prev, current);
            }
            current = prev;
        }
    }

    /// Fills `b - 1` nodes from `first` up to `b` each and unlinks the node
    /// they drained.
    fn gather(&mut self, first: SlotId) {
        let mut current = first;
        for _ in 1..self.block_size {
            let next = self.nodes.next(current).expect("gather walk lost its successor");
            while self.block_len(current) < self.block_size {
                self.move_front_to_back(next, current);
            }
            current = next;
        }
        debug_assert_eq!(self.block_len(current), 0, "gather left a non-empty node");
        self.nodes.remove(current);
        #[cfg(feature = "metrics")]
        self.metrics.record_node_free();
    }

    /// After a removal from `first`, short nodes pull one element each from
    /// their successor; an emptied node is unlinked.
    fn refill_from(&mut self, first: SlotId) {
        let mut current = first;
        while self.block_len(current) < self.block_size - 1 {
            let Some(next) = self.nodes.next(current) else {
                break;
            };
            self.move_front_to_back(next, current);
            current = next;
        }
        if self.block_len(current) == 0 {
            self.nodes.remove(current);
            #[cfg(feature = "metrics")]
            self.metrics.record_node_free();
        }
    }

    fn move_back_to_front(&mut self, from: SlotId, to: SlotId) {
        let (source, target) = self.nodes.pair_mut(from, to).expect("adjacent nodes missing");
        let value = source.pop_back().expect("source block empty");
        target.push_front(value).expect("target block full");
        #[cfg(feature = "metrics")]
        self.metrics.record_element_move();
    }

    fn move_front_to_back(&mut self, from: SlotId, to: SlotId) {
        let (source, target) = self.nodes.pair_mut(from, to).expect("adjacent nodes missing");
        let value = source.pop_front().expect("source block empty");
        target.push_back(value).expect("target block full");
        #[cfg(feature = "metrics")]
        self.metrics.record_element_move();
    }

    fn push_node(&mut self) -> SlotId {
        #[cfg(feature = "metrics")]
        self.metrics.record_node_alloc();
        self.nodes.push_back(Self::empty_block(self.block_size))
    }

    #[inline]
    fn block_len(&self, id: SlotId) -> usize {
        self.nodes.get(id).map_or(0, RingBuffer::len)
    }

    fn block_mut(nodes: &mut NodeList<RingBuffer<T>>, id: SlotId) -> &mut RingBuffer<T> {
        nodes.get_mut(id).expect("block chain node missing")
    }

    fn empty_block(block_size: usize) -> RingBuffer<T> {
        RingBuffer::new(block_size + 1, BLOCK_POLICY)
    }
}

#[cfg(feature = "metrics")]
impl<T> BlockChain<T> {
    pub fn metrics_snapshot(&self) -> BlockChainMetricsSnapshot {
        BlockChainMetricsSnapshot {
            insert_calls: self.metrics.insert_calls,
            remove_calls: self.metrics.remove_calls,
            clear_calls: self.metrics.clear_calls,
            push_back_fast: self.metrics.push_back_fast,
            push_front_fast: self.metrics.push_front_fast,
            shifts: self.metrics.shifts,
            spreads: self.metrics.spreads,
            gathers: self.metrics.gathers,
            end_of_list: self.metrics.end_of_list,
            nodes_allocated: self.metrics.nodes_allocated,
            nodes_freed: self.metrics.nodes_freed,
            element_moves: self.metrics.element_moves,
            locate_calls: self.metrics.locate_calls.get(),
            locate_steps: self.metrics.locate_steps.get(),
            len: self.len,
            node_count: self.nodes.len(),
            block_size: self.block_size,
        }
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<BlockChainMetricsSnapshot> for BlockChain<T> {
    fn snapshot(&self) -> BlockChainMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<T> Default for BlockChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BlockChain<T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            len: self.len,
            block_size: self.block_size,
            #[cfg(feature = "metrics")]
            metrics: BlockChainMetrics::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BlockChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockChain")
            .field("block_size", &self.block_size)
            .field("len", &self.len)
            .field(
                "blocks",
                &self.blocks().map(RingBuffer::len).collect::<Vec<_>>(),
            )
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Index<usize> for BlockChain<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len;
        self.get(index)
            .unwrap_or_else(|| panic!("index {index} out of range for length {len}"))
    }
}

impl<T> IndexMut<usize> for BlockChain<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        self.get_mut(index)
            .unwrap_or_else(|| panic!("index {index} out of range for length {len}"))
    }
}

impl<T> Extend<T> for BlockChain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for BlockChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Self::new();
        chain.extend(iter);
        chain
    }
}

impl<T> CoreSequence<T> for BlockChain<T> {
    fn len(&self) -> usize {
        BlockChain::len(self)
    }

    fn get(&self, pos: usize) -> Option<&T> {
        BlockChain::get(self, pos)
    }

    fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        BlockChain::get_mut(self, pos)
    }

    fn insert(&mut self, pos: usize, value: T) -> Result<&mut T, SequenceError> {
        BlockChain::insert(self, pos, value)
    }

    fn remove(&mut self, pos: usize) -> Result<T, SequenceError> {
        BlockChain::remove(self, pos)
    }

    fn push_back(&mut self, value: T) -> Result<&mut T, SequenceError> {
        Ok(BlockChain::push_back(self, value))
    }

    fn pop_back(&mut self) -> Result<T, SequenceError> {
        BlockChain::pop_back(self)
    }

    fn clear(&mut self) {
        BlockChain::clear(self)
    }
}

impl<T> DequeSequence<T> for BlockChain<T> {
    fn push_front(&mut self, value: T) -> Result<&mut T, SequenceError> {
        Ok(BlockChain::push_front(self, value))
    }

    fn pop_front(&mut self) -> Result<T, SequenceError> {
        BlockChain::pop_front(self)
    }

    fn front(&self) -> Option<&T> {
        BlockChain::front(self)
    }

    fn back(&self) -> Option<&T> {
        BlockChain::back(self)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        PushBack(u16),
        PushFront(u16),
        Insert(usize, u16),
        Remove(usize),
        PopFront,
        PopBack,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u16>().prop_map(Op::PushBack),
            any::<u16>().prop_map(Op::PushFront),
            (any::<usize>(), any::<u16>()).prop_map(|(pos, v)| Op::Insert(pos, v)),
            any::<usize>().prop_map(Op::Remove),
            Just(Op::PopFront),
            Just(Op::PopBack),
        ]
    }

    proptest! {
        /// Property: every edit keeps node occupancy bounds and Vec order
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_vec_model(
            block_size in MIN_BLOCK_SIZE..8,
            ops in prop::collection::vec(op_strategy(), 0..300)
        ) {
            let mut chain = BlockChain::with_block_size(block_size);
            let mut model: Vec<u16> = Vec::new();

            for op in ops {
                match op {
                    Op::PushBack(v) => {
                        chain.push_back(v);
                        model.push(v);
                    },
                    Op::PushFront(v) => {
                        chain.push_front(v);
                        model.insert(0, v);
                    },
                    Op::Insert(pos, v) => {
                        let pos = pos % (model.len() + 1);
                        chain.insert(pos, v).unwrap();
                        model.insert(pos, v);
                    },
                    Op::Remove(pos) => {
                        if model.is_empty() {
                            prop_assert_eq!(chain.remove(pos), Err(SequenceError::EmptyContainer));
                        } else {
                            let pos = pos % model.len();
                            prop_assert_eq!(chain.remove(pos), Ok(model.remove(pos)));
                        }
                    },
                    Op::PopFront => {
                        let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                        prop_assert_eq!(chain.pop_front().ok(), expected);
                    },
                    Op::PopBack => {
                        prop_assert_eq!(chain.pop_back().ok(), model.pop());
                    },
                }
                prop_assert!(chain.check_invariants().is_ok());
                prop_assert_eq!(chain.len(), model.len());
            }

            prop_assert_eq!(chain.iter().copied().collect::<Vec<_>>(), model);
        }

        /// Property: insert(pos, v) then remove(pos) returns v and restores order
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_insert_remove_round_trip(
            len in 0usize..80,
            pos in any::<usize>(),
            value in any::<i32>()
        ) {
            let mut chain: BlockChain<i32> = BlockChain::with_block_size(3);
            chain.extend(0..len as i32);
            let before: Vec<_> = chain.iter().copied().collect();
            let pos = pos % (len + 1);

            chain.insert(pos, value).unwrap();
            prop_assert_eq!(chain.get(pos), Some(&value));
            prop_assert_eq!(chain.remove(pos), Ok(value));
            prop_assert!(chain.check_invariants().is_ok());
            prop_assert_eq!(chain.iter().copied().collect::<Vec<_>>(), before);
        }
    }
}
