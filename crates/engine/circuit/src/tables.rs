//! Static block classification tables
//!
//! Membership sets for block properties that are not power related.
//! The id lists target the 1.6.2 block set and grow with the game
//! version; keep them sorted, the lookups binary search.

use crate::{block_id, BlockTypeId};

/// Block types a player can walk through.
const PLAYER_PASSABLE: [BlockTypeId; 49] = [
    0, 6, 8, 9, 10, 11, 27, 28, 30, 31, 32, 37, 38, 39, 40, 50, 51, 55, 59, 63, 64, 65, 66, 68,
    69, 70, 71, 72, 75, 76, 77, 83, 90, 96, 104, 105, 106, 115, 119, 127, 131, 132, 141, 142, 143,
    147, 148, 157, 171,
];

/// Storage container block types.
const STORAGE: [BlockTypeId; 5] = [
    block_id::DISPENSER,
    block_id::CHEST,
    block_id::TRAPPED_CHEST,
    block_id::HOPPER,
    block_id::DROPPER,
];

/// Whether a player can walk through this block type.
pub fn player_can_pass(id: BlockTypeId) -> bool {
    PLAYER_PASSABLE.binary_search(&id).is_ok()
}

/// Whether this block type is a container with an inventory.
pub fn is_storage_block(id: BlockTypeId) -> bool {
    STORAGE.binary_search(&id).is_ok()
}
