pub mod arena;
pub mod array_block;
pub mod block_chain;
pub mod node_list;
pub mod ring_buffer;
pub mod slot_arena;
pub mod sqrt_array;

pub use arena::Arena;
pub use array_block::ArrayBlock;
pub use block_chain::{
    BlockChain, DEFAULT_BLOCK_SIZE, InsertScenario, MIN_BLOCK_SIZE, RemoveScenario,
};
pub use node_list::NodeList;
pub use ring_buffer::{BufferPolicy, CapacityPolicy, OverflowPolicy, ResizePolicy, RingBuffer};
pub use slot_arena::{SlotArena, SlotId};
pub use sqrt_array::{ElementIndex, SqrtArray};
