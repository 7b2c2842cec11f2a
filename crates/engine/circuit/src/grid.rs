//! Grid lookup capability and an in-memory grid

use crate::{block_id, BlockTypeId, DataValue};
use glam::IVec3;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use worldmath::{Location, WorldId};

/// Opacity of a block's material as reported by the world.
///
/// `Unknown` covers hosts whose material lookup fails on certain tile
/// entities; the wire rules decide how to treat it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opacity {
    Opaque,
    Transparent,
    Unknown,
}

/// Type id, data value, and material opacity of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockState {
    pub id: BlockTypeId,
    pub data: DataValue,
    pub opacity: Opacity,
}

impl BlockState {
    pub fn new(id: BlockTypeId, data: DataValue, opacity: Opacity) -> Self {
        BlockState { id, data, opacity }
    }

    /// An empty cell.
    pub fn air() -> Self {
        BlockState {
            id: block_id::AIR,
            data: 0,
            opacity: Opacity::Transparent,
        }
    }
}

/// Read access to block state in a world.
///
/// This is the one capability the circuit engine consumes. `None`
/// means the region holding `at` is not resident; the engine treats
/// that as "not applicable" rather than guessing.
pub trait BlockLookup {
    fn block_at(&self, at: &Location) -> Option<BlockState>;
}

/// In-memory single-world grid.
///
/// Backs the integration tests and small embedders. Cells default to
/// air; positions marked unloaded read as not resident, as do lookups
/// from any other world.
#[derive(Debug, Clone)]
pub struct MemoryGrid {
    world: WorldId,
    cells: HashMap<IVec3, BlockState>,
    unloaded: HashSet<IVec3>,
}

impl MemoryGrid {
    pub fn new(world: WorldId) -> Self {
        MemoryGrid {
            world,
            cells: HashMap::new(),
            unloaded: HashSet::new(),
        }
    }

    pub fn world(&self) -> &WorldId {
        &self.world
    }

    /// Set one cell.
    pub fn set(mut self, pos: IVec3, state: BlockState) -> Self {
        self.cells.insert(pos, state);
        self
    }

    /// Fill an inclusive box with one state.
    pub fn fill(mut self, min: IVec3, max: IVec3, state: BlockState) -> Self {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.cells.insert(IVec3::new(x, y, z), state);
                }
            }
        }
        self
    }

    /// Mark a position as not resident.
    pub fn mark_unloaded(mut self, pos: IVec3) -> Self {
        self.unloaded.insert(pos);
        self
    }
}

impl BlockLookup for MemoryGrid {
    fn block_at(&self, at: &Location) -> Option<BlockState> {
        if at.world != self.world || self.unloaded.contains(&at.pos) {
            return None;
        }
        Some(self.cells.get(&at.pos).copied().unwrap_or_else(BlockState::air))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldmath::Dimension;

    fn overworld() -> WorldId {
        WorldId::new("world", Dimension::Overworld)
    }

    #[test]
    fn test_memory_grid_defaults_to_air() {
        let grid = MemoryGrid::new(overworld());
        let at = Location::new(overworld(), 3, 64, -2);
        assert_eq!(grid.block_at(&at), Some(BlockState::air()));
    }

    #[test]
    fn test_memory_grid_set_and_fill() {
        let stone = BlockState::new(block_id::STONE, 0, Opacity::Opaque);
        let grid = MemoryGrid::new(overworld())
            .fill(IVec3::ZERO, IVec3::new(1, 0, 1), stone)
            .set(IVec3::new(1, 0, 1), BlockState::air());

        assert_eq!(
            grid.block_at(&Location::new(overworld(), 0, 0, 1)),
            Some(stone)
        );
        assert_eq!(
            grid.block_at(&Location::new(overworld(), 1, 0, 1)),
            Some(BlockState::air())
        );
    }

    #[test]
    fn test_memory_grid_unloaded_reads_as_not_resident() {
        let grid = MemoryGrid::new(overworld()).mark_unloaded(IVec3::new(0, 64, 0));
        assert_eq!(grid.block_at(&Location::new(overworld(), 0, 64, 0)), None);
        assert!(grid.block_at(&Location::new(overworld(), 0, 65, 0)).is_some());
    }

    #[test]
    fn test_memory_grid_other_world_not_resident() {
        let grid = MemoryGrid::new(overworld());
        let nether = Location::new(WorldId::new("world", Dimension::Nether), 0, 0, 0);
        assert_eq!(grid.block_at(&nether), None);
    }
}
