//! World-qualified block locations

use crate::{Direction, DirectionError};
use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Dimension a world belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Overworld,
    Nether,
    End,
}

impl Dimension {
    /// Suffix used in qualified world names.
    pub fn suffix(self) -> &'static str {
        match self {
            Dimension::Overworld => "NORMAL",
            Dimension::Nether => "NETHER",
            Dimension::End => "END",
        }
    }
}

/// Identifies a world by name and dimension.
///
/// Locations in different worlds never interact; callers compare worlds
/// before doing any geometry across two locations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldId {
    name: String,
    dimension: Dimension,
}

impl WorldId {
    pub fn new(name: impl Into<String>, dimension: Dimension) -> Self {
        WorldId {
            name: name.into(),
            dimension,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The `name_DIMENSION` form used by the host server.
    pub fn qualified_name(&self) -> String {
        format!("{}_{}", self.name, self.dimension.suffix())
    }
}

/// A block position in a specific world.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub world: WorldId,
    pub pos: IVec3,
}

impl Location {
    pub fn new(world: WorldId, x: i32, y: i32, z: i32) -> Self {
        Location {
            world,
            pos: IVec3::new(x, y, z),
        }
    }

    pub fn from_pos(world: WorldId, pos: IVec3) -> Self {
        Location { world, pos }
    }

    /// True when both locations are in the same world.
    pub fn same_world(&self, other: &Location) -> bool {
        self.world == other.world
    }

    /// Displacement from `self` to `other`, ignoring worlds.
    pub fn vector_to(&self, other: &Location) -> IVec3 {
        other.pos - self.pos
    }

    /// The location displaced by `delta` in the same world.
    pub fn offset(&self, delta: IVec3) -> Location {
        Location {
            world: self.world.clone(),
            pos: self.pos + delta,
        }
    }

    /// The location `distance` blocks away in `direction`.
    ///
    /// Axis-aligned directions move by exact integer offsets. The 12
    /// intermediate compass points move by the truncated unit vector,
    /// which collapses toward the reference cell at small distances.
    pub fn toward(&self, direction: Direction, distance: i32) -> Result<Location, DirectionError> {
        let delta = match direction.unit_offset() {
            Some(step) => step * distance,
            None => (direction.unit_vector()? * distance as f32).as_ivec3(),
        };
        Ok(self.offset(delta))
    }
}
