//! Block type id constants
//!
//! Numeric ids for the 1.6.2 block set, covering every type the
//! classification tables and decoders reference.

use crate::BlockTypeId;

pub const AIR: BlockTypeId = 0;
pub const STONE: BlockTypeId = 1;
pub const DISPENSER: BlockTypeId = 23;
pub const DETECTOR_RAIL: BlockTypeId = 28;
pub const CHEST: BlockTypeId = 54;
pub const REDSTONE_WIRE: BlockTypeId = 55;
pub const FURNACE: BlockTypeId = 61;
pub const LIT_FURNACE: BlockTypeId = 62;
pub const SIGN_POST: BlockTypeId = 63;
pub const LADDER: BlockTypeId = 65;
pub const WALL_SIGN: BlockTypeId = 68;
pub const LEVER: BlockTypeId = 69;
pub const STONE_PRESSURE_PLATE: BlockTypeId = 70;
pub const WOODEN_PRESSURE_PLATE: BlockTypeId = 72;
pub const REDSTONE_TORCH_OFF: BlockTypeId = 75;
pub const REDSTONE_TORCH_ON: BlockTypeId = 76;
pub const STONE_BUTTON: BlockTypeId = 77;
pub const REPEATER_OFF: BlockTypeId = 93;
pub const REPEATER_ON: BlockTypeId = 94;
pub const TRIPWIRE_HOOK: BlockTypeId = 131;
pub const WOODEN_BUTTON: BlockTypeId = 143;
pub const TRAPPED_CHEST: BlockTypeId = 146;
pub const LIGHT_PRESSURE_PLATE: BlockTypeId = 147;
pub const HEAVY_PRESSURE_PLATE: BlockTypeId = 148;
pub const COMPARATOR: BlockTypeId = 149;
pub const DAYLIGHT_SENSOR: BlockTypeId = 151;
pub const REDSTONE_BLOCK: BlockTypeId = 152;
pub const HOPPER: BlockTypeId = 154;
pub const DROPPER: BlockTypeId = 158;
