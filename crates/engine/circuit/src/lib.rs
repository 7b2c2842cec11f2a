//! Redstone circuit inference over a voxel grid
//!
//! Given a block's type id, data value, and position, this crate answers
//! three questions about the circuits of a voxel world: which direction a
//! block faces, whether it emits redstone power and at what strength, and
//! which of its four horizontal neighbors a redstone wire cell is
//! topologically connected to.
//!
//! The world itself stays external. The connectivity rules read block
//! state through the narrow [`BlockLookup`] capability, so they run
//! unchanged against a live server grid or the in-memory [`MemoryGrid`]
//! used by the tests.

pub mod block_id;
mod facing;
mod grid;
mod power;
mod tables;
mod wire;

pub use facing::{
    chest_facing, furnace_facing, ladder_facing, repeater_facing, sign_facing, sign_post_facing,
    wall_facing,
};
pub use grid::{BlockLookup, BlockState, MemoryGrid, Opacity};
pub use power::{is_connector, power_level, PowerBehavior, PowerSource};
pub use tables::{is_storage_block, player_can_pass};
pub use wire::{ConnectionSet, WireRules};

/// Numeric block type identifier as supplied by the world grid.
pub type BlockTypeId = u16;

/// Per-block auxiliary state value, 0-15 for vanilla blocks.
pub type DataValue = u8;
