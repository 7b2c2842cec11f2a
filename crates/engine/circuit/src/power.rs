//! Power source classification and power inference

use crate::facing::repeater_facing;
use crate::{block_id, BlockTypeId, DataValue};
use serde::{Deserialize, Serialize};
use worldmath::Direction;

/// How a power source derives its emitted level from its data value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerBehavior {
    /// Emits 15 regardless of data value.
    AlwaysOn,
    /// Emits 0 regardless of data value.
    AlwaysOff,
    /// Emits the data value verbatim (0-15).
    DataValue,
    /// Emits 15 when bit 0x1 of the data value is set, else 0.
    Bit0x1,
    /// Emits 15 when bit 0x8 of the data value is set, else 0.
    Bit0x8,
}

/// The block kinds that can emit redstone power.
///
/// Each kind maps to exactly one block type id and carries two
/// orthogonal tags: its [`PowerBehavior`] and whether it is directional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerSource {
    DetectorRail,
    DaylightSensor,
    HeavyPressurePlate,
    Lever,
    LightPressurePlate,
    RedstoneBlock,
    Comparator,
    RepeaterOff,
    RepeaterOn,
    TorchOff,
    TorchOn,
    Wire,
    StoneButton,
    StonePressurePlate,
    TrappedChest,
    TripwireHook,
    WoodenButton,
    WoodenPressurePlate,
}

impl PowerSource {
    /// Classify a block type id, `None` for anything that is not a
    /// power source.
    pub fn from_id(id: BlockTypeId) -> Option<Self> {
        match id {
            block_id::DETECTOR_RAIL => Some(PowerSource::DetectorRail),
            block_id::DAYLIGHT_SENSOR => Some(PowerSource::DaylightSensor),
            block_id::HEAVY_PRESSURE_PLATE => Some(PowerSource::HeavyPressurePlate),
            block_id::LEVER => Some(PowerSource::Lever),
            block_id::LIGHT_PRESSURE_PLATE => Some(PowerSource::LightPressurePlate),
            block_id::REDSTONE_BLOCK => Some(PowerSource::RedstoneBlock),
            block_id::COMPARATOR => Some(PowerSource::Comparator),
            block_id::REPEATER_OFF => Some(PowerSource::RepeaterOff),
            block_id::REPEATER_ON => Some(PowerSource::RepeaterOn),
            block_id::REDSTONE_TORCH_OFF => Some(PowerSource::TorchOff),
            block_id::REDSTONE_TORCH_ON => Some(PowerSource::TorchOn),
            block_id::REDSTONE_WIRE => Some(PowerSource::Wire),
            block_id::STONE_BUTTON => Some(PowerSource::StoneButton),
            block_id::STONE_PRESSURE_PLATE => Some(PowerSource::StonePressurePlate),
            block_id::TRAPPED_CHEST => Some(PowerSource::TrappedChest),
            block_id::TRIPWIRE_HOOK => Some(PowerSource::TripwireHook),
            block_id::WOODEN_BUTTON => Some(PowerSource::WoodenButton),
            block_id::WOODEN_PRESSURE_PLATE => Some(PowerSource::WoodenPressurePlate),
            _ => None,
        }
    }

    /// The block type id this kind classifies.
    pub fn block_id(self) -> BlockTypeId {
        match self {
            PowerSource::DetectorRail => block_id::DETECTOR_RAIL,
            PowerSource::DaylightSensor => block_id::DAYLIGHT_SENSOR,
            PowerSource::HeavyPressurePlate => block_id::HEAVY_PRESSURE_PLATE,
            PowerSource::Lever => block_id::LEVER,
            PowerSource::LightPressurePlate => block_id::LIGHT_PRESSURE_PLATE,
            PowerSource::RedstoneBlock => block_id::REDSTONE_BLOCK,
            PowerSource::Comparator => block_id::COMPARATOR,
            PowerSource::RepeaterOff => block_id::REPEATER_OFF,
            PowerSource::RepeaterOn => block_id::REPEATER_ON,
            PowerSource::TorchOff => block_id::REDSTONE_TORCH_OFF,
            PowerSource::TorchOn => block_id::REDSTONE_TORCH_ON,
            PowerSource::Wire => block_id::REDSTONE_WIRE,
            PowerSource::StoneButton => block_id::STONE_BUTTON,
            PowerSource::StonePressurePlate => block_id::STONE_PRESSURE_PLATE,
            PowerSource::TrappedChest => block_id::TRAPPED_CHEST,
            PowerSource::TripwireHook => block_id::TRIPWIRE_HOOK,
            PowerSource::WoodenButton => block_id::WOODEN_BUTTON,
            PowerSource::WoodenPressurePlate => block_id::WOODEN_PRESSURE_PLATE,
        }
    }

    /// How this kind derives its power level.
    pub fn behavior(self) -> PowerBehavior {
        match self {
            PowerSource::RedstoneBlock | PowerSource::RepeaterOn | PowerSource::TorchOn => {
                PowerBehavior::AlwaysOn
            }
            PowerSource::Comparator | PowerSource::RepeaterOff | PowerSource::TorchOff => {
                PowerBehavior::AlwaysOff
            }
            PowerSource::DaylightSensor
            | PowerSource::HeavyPressurePlate
            | PowerSource::LightPressurePlate
            | PowerSource::Wire => PowerBehavior::DataValue,
            PowerSource::StonePressurePlate | PowerSource::WoodenPressurePlate => {
                PowerBehavior::Bit0x1
            }
            PowerSource::DetectorRail
            | PowerSource::Lever
            | PowerSource::StoneButton
            | PowerSource::TrappedChest
            | PowerSource::TripwireHook
            | PowerSource::WoodenButton => PowerBehavior::Bit0x8,
        }
    }

    /// Directional sources emit and accept power only along their
    /// repeater-style decoded facing.
    pub fn is_directional(self) -> bool {
        matches!(
            self,
            PowerSource::Comparator | PowerSource::RepeaterOff | PowerSource::RepeaterOn
        )
    }
}

/// Power level a block emits, 0-15.
///
/// Total function: unclassified block types degrade to 0, never fail.
/// Data-value encoded sources return the value verbatim; the grid
/// guarantees it stays in 0-15.
pub fn power_level(id: BlockTypeId, data: DataValue) -> u8 {
    let Some(source) = PowerSource::from_id(id) else {
        return 0;
    };
    match source.behavior() {
        PowerBehavior::AlwaysOn => 15,
        PowerBehavior::AlwaysOff => 0,
        PowerBehavior::DataValue => data,
        PowerBehavior::Bit0x1 => {
            if data & 0x1 != 0 {
                15
            } else {
                0
            }
        }
        PowerBehavior::Bit0x8 => {
            if data & 0x8 != 0 {
                15
            } else {
                0
            }
        }
    }
}

/// Whether a block can exchange power in the `from` direction.
///
/// Directional sources connect only along their decoded facing; every
/// other power source connects omnidirectionally. Non-sources never
/// connect.
pub fn is_connector(id: BlockTypeId, data: DataValue, from: Direction) -> bool {
    match PowerSource::from_id(id) {
        Some(source) if source.is_directional() => repeater_facing(data) == from,
        Some(_) => true,
        None => false,
    }
}
