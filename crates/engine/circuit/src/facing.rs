//! Orientation decoders
//!
//! Pure functions mapping a block's data value to the [`Direction`] it
//! represents. Out-of-range data decodes to `Direction::Error`, which
//! callers treat as "no usable facing".

use crate::{block_id, BlockTypeId, DataValue};
use worldmath::Direction;

/// Facing of a free-standing sign post.
///
/// Sign posts use the full 4-bit data value as a 16-point heading,
/// 0x0 = South stepping clockwise through the compass (0x8 = North).
pub fn sign_post_facing(data: DataValue) -> Direction {
    match data {
        0x0 => Direction::South,
        0x1 => Direction::SouthSouthwest,
        0x2 => Direction::Southwest,
        0x3 => Direction::WestSouthwest,
        0x4 => Direction::West,
        0x5 => Direction::WestNorthwest,
        0x6 => Direction::Northwest,
        0x7 => Direction::NorthNorthwest,
        0x8 => Direction::North,
        0x9 => Direction::NorthNortheast,
        0xA => Direction::Northeast,
        0xB => Direction::EastNortheast,
        0xC => Direction::East,
        0xD => Direction::EastSoutheast,
        0xE => Direction::Southeast,
        0xF => Direction::SouthSoutheast,
        _ => Direction::Error,
    }
}

/// Facing of a wall-mounted block: wall signs, ladders, furnaces, chests.
pub fn wall_facing(data: DataValue) -> Direction {
    match data {
        0x2 => Direction::North,
        0x3 => Direction::South,
        0x4 => Direction::West,
        0x5 => Direction::East,
        _ => Direction::Error,
    }
}

/// Facing of a repeater-family block (repeaters, comparators).
///
/// Only the low 2 bits encode the facing; the high bits carry delay and
/// lock state and are ignored.
pub fn repeater_facing(data: DataValue) -> Direction {
    match data & 0x3 {
        0x0 => Direction::North,
        0x1 => Direction::East,
        0x2 => Direction::South,
        0x3 => Direction::West,
        _ => Direction::Error,
    }
}

/// Facing of a sign block, or `None` if the block type is not a sign.
pub fn sign_facing(id: BlockTypeId, data: DataValue) -> Option<Direction> {
    match id {
        block_id::WALL_SIGN => Some(wall_facing(data)),
        block_id::SIGN_POST => Some(sign_post_facing(data)),
        _ => None,
    }
}

/// Ladders attach like wall signs.
pub fn ladder_facing(data: DataValue) -> Direction {
    wall_facing(data)
}

/// Furnaces face like wall signs.
pub fn furnace_facing(data: DataValue) -> Direction {
    wall_facing(data)
}

/// Chests face like wall signs.
pub fn chest_facing(data: DataValue) -> Direction {
    wall_facing(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_post_covers_the_compass() {
        assert_eq!(sign_post_facing(0x0), Direction::South);
        assert_eq!(sign_post_facing(0x4), Direction::West);
        assert_eq!(sign_post_facing(0x8), Direction::North);
        assert_eq!(sign_post_facing(0xC), Direction::East);
        // every 4-bit value maps to a distinct compass point
        let mut seen = std::collections::HashSet::new();
        for data in 0x0..=0xF {
            let dir = sign_post_facing(data);
            assert!(dir.is_horizontal());
            assert!(seen.insert(dir));
        }
    }

    #[test]
    fn test_sign_post_out_of_range() {
        assert_eq!(sign_post_facing(0x10), Direction::Error);
        assert_eq!(sign_post_facing(0xFF), Direction::Error);
    }

    #[test]
    fn test_wall_facing() {
        assert_eq!(wall_facing(2), Direction::North);
        assert_eq!(wall_facing(3), Direction::South);
        assert_eq!(wall_facing(4), Direction::West);
        assert_eq!(wall_facing(5), Direction::East);
        assert_eq!(wall_facing(0), Direction::Error);
        assert_eq!(wall_facing(6), Direction::Error);
    }

    #[test]
    fn test_repeater_ignores_high_bits() {
        assert_eq!(repeater_facing(0b0000), Direction::North);
        assert_eq!(repeater_facing(0b0001), Direction::East);
        assert_eq!(repeater_facing(0b0010), Direction::South);
        assert_eq!(repeater_facing(0b0011), Direction::West);
        // delay bits make no difference
        assert_eq!(repeater_facing(0b0110), repeater_facing(0b0010));
        assert_eq!(repeater_facing(0b1101), repeater_facing(0b0001));
    }

    #[test]
    fn test_sign_facing_dispatch() {
        assert_eq!(
            sign_facing(block_id::SIGN_POST, 0x8),
            Some(Direction::North)
        );
        assert_eq!(sign_facing(block_id::WALL_SIGN, 5), Some(Direction::East));
        // a non-sign block is "not a sign", not an error facing
        assert_eq!(sign_facing(block_id::STONE, 0x8), None);
    }

    #[test]
    fn test_wall_mount_aliases() {
        assert_eq!(ladder_facing(2), Direction::North);
        assert_eq!(furnace_facing(4), Direction::West);
        assert_eq!(chest_facing(5), Direction::East);
    }
}
