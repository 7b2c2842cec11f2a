//! Redstone wire connectivity rules
//!
//! Decides which of its four horizontal neighbors a redstone wire cell
//! is topologically connected to, and whether a neighboring block is a
//! direct power input to a target cell. All world reads go through the
//! [`BlockLookup`] capability; nothing here writes or retries.

use crate::grid::{BlockLookup, BlockState, Opacity};
use crate::power::is_connector;
use crate::{block_id, BlockTypeId, DataValue};
use glam::IVec3;
use serde::{Deserialize, Serialize};
use tracing::trace;
use worldmath::{Direction, Location};

/// Set of cardinal directions a wire cell connects to.
///
/// At most 4 members; a set computed by the wire rules is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectionSet(u8);

impl ConnectionSet {
    pub const EMPTY: ConnectionSet = ConnectionSet(0);

    /// All four cardinal directions.
    pub const ALL: ConnectionSet = ConnectionSet(0b1111);

    fn bit(direction: Direction) -> Option<u8> {
        match direction {
            Direction::North => Some(1 << 0),
            Direction::East => Some(1 << 1),
            Direction::South => Some(1 << 2),
            Direction::West => Some(1 << 3),
            _ => None,
        }
    }

    /// Add a cardinal direction. Other directions are not representable
    /// and are ignored.
    pub fn insert(&mut self, direction: Direction) {
        if let Some(bit) = Self::bit(direction) {
            self.0 |= bit;
        }
    }

    pub fn contains(self, direction: Direction) -> bool {
        Self::bit(direction).map_or(false, |bit| self.0 & bit != 0)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Member directions in compass order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::CARDINAL
            .into_iter()
            .filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for ConnectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = ConnectionSet::EMPTY;
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

/// Connectivity policy.
///
/// `unknown_is_transparent` controls how a cell with unresolvable
/// material is treated by the diagonal rules. The host engine this
/// behavior was ported from fails its material lookup on certain tile
/// entities and connects wires through them; keep `true` to match it,
/// set `false` to make unknown materials block diagonal runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireRules {
    pub unknown_is_transparent: bool,
}

impl Default for WireRules {
    fn default() -> Self {
        WireRules {
            unknown_is_transparent: true,
        }
    }
}

impl WireRules {
    fn passes_light(&self, state: &BlockState) -> bool {
        match state.opacity {
            Opacity::Opaque => false,
            Opacity::Transparent => true,
            Opacity::Unknown => self.unknown_is_transparent,
        }
    }

    /// Cardinal directions the redstone wire at `wire` connects to.
    ///
    /// Returns `None` when the cell is not a redstone wire or when a
    /// region the rules need is not resident — callers must distinguish
    /// that from a computed set, which is never empty.
    ///
    /// Each cardinal direction `d` is evaluated independently:
    /// 1. the neighbor in `d` accepts power toward the wire (direct
    ///    connector), done with `d`;
    /// 2. the cell above the wire passes light and the cell above the
    ///    neighbor is wire (run climbing one block), done with `d`;
    /// 3. the neighbor passes light and the cell below it is wire (run
    ///    dropping one block).
    /// Afterwards, a single connection implies a straight segment (its
    /// opposite joins the set), and no connection at all renders as a
    /// four-way cross (all cardinals join).
    pub fn wire_connections<G: BlockLookup>(
        &self,
        grid: &G,
        wire: &Location,
    ) -> Option<ConnectionSet> {
        let here = grid.block_at(wire)?;
        if here.id != block_id::REDSTONE_WIRE {
            trace!(pos = ?wire.pos, id = here.id, "not a wire cell");
            return None;
        }
        let above_wire = grid.block_at(&wire.offset(IVec3::Y))?;

        let mut connected = ConnectionSet::EMPTY;
        for direction in Direction::CARDINAL {
            let Some(step) = direction.unit_offset() else {
                continue;
            };
            let side_at = wire.offset(step);
            let side = grid.block_at(&side_at)?;

            if is_connector(side.id, side.data, direction.opposite()) {
                trace!(?direction, rule = 1, "wire connection");
                connected.insert(direction);
                continue;
            }
            if self.passes_light(&above_wire) {
                let diag_up = grid.block_at(&side_at.offset(IVec3::Y))?;
                if diag_up.id == block_id::REDSTONE_WIRE {
                    trace!(?direction, rule = 2, "wire connection");
                    connected.insert(direction);
                    continue;
                }
            }
            if self.passes_light(&side) {
                let diag_down = grid.block_at(&side_at.offset(IVec3::NEG_Y))?;
                if diag_down.id == block_id::REDSTONE_WIRE {
                    trace!(?direction, rule = 3, "wire connection");
                    connected.insert(direction);
                }
            }
        }

        if connected.len() == 1 {
            if let Some(only) = connected.iter().next() {
                connected.insert(only.opposite());
            }
        }
        if connected.is_empty() {
            connected = ConnectionSet::ALL;
        }
        Some(connected)
    }

    /// Whether the block at `input` is a direct power input to `target`.
    ///
    /// Only unit-distance cardinal adjacency counts: different worlds,
    /// vertical neighbors, and diagonal neighbors are never direct
    /// inputs. Wire inputs must actually connect toward the target;
    /// every other block defers to [`is_connector`].
    pub fn direct_input<G: BlockLookup>(
        &self,
        grid: &G,
        input: &Location,
        id: BlockTypeId,
        data: DataValue,
        target: &Location,
    ) -> bool {
        if !input.same_world(target) {
            trace!("input and target in different worlds");
            return false;
        }
        let delta = input.vector_to(target);
        if delta.length_squared() != 1 {
            return false;
        }
        let connection = Direction::from_offset(delta);
        if connection == Direction::Error {
            return false;
        }
        if id == block_id::REDSTONE_WIRE {
            return self
                .wire_connections(grid, input)
                .map_or(false, |set| set.contains(connection));
        }
        is_connector(id, data, connection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_set_insert_contains() {
        let mut set = ConnectionSet::EMPTY;
        assert!(set.is_empty());
        set.insert(Direction::North);
        set.insert(Direction::West);
        assert!(set.contains(Direction::North));
        assert!(set.contains(Direction::West));
        assert!(!set.contains(Direction::East));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_connection_set_ignores_non_cardinals() {
        let mut set = ConnectionSet::EMPTY;
        set.insert(Direction::Up);
        set.insert(Direction::Northeast);
        set.insert(Direction::Error);
        assert!(set.is_empty());
        assert!(!set.contains(Direction::Up));
    }

    #[test]
    fn test_connection_set_iter_order() {
        let set: ConnectionSet = [Direction::West, Direction::North].into_iter().collect();
        let members: Vec<Direction> = set.iter().collect();
        assert_eq!(members, vec![Direction::North, Direction::West]);
    }

    #[test]
    fn test_connection_set_all() {
        assert_eq!(ConnectionSet::ALL.len(), 4);
        for direction in Direction::CARDINAL {
            assert!(ConnectionSet::ALL.contains(direction));
        }
    }

    #[test]
    fn test_connection_set_serde_round_trip() {
        let set: ConnectionSet = [Direction::North, Direction::South].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        let back: ConnectionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
