//! 16-point compass direction model
//!
//! Block orientation in the world is expressed as one of 16 horizontal
//! compass points spaced 22.5° apart, plus `Up`, `Down`, and an `Error`
//! sentinel for "no usable facing". North points toward -Z, East toward
//! +X, and headings grow clockwise when viewed from above.

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Compass granularity in degrees.
const STEP_DEGREES: f64 = 22.5;

/// Snap threshold: half a compass step.
const HALF_STEP_DEGREES: f64 = 11.25;

/// Errors from heading and vector conversions on [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DirectionError {
    /// The operation needs one of the 16 horizontal compass directions.
    #[error("{0:?} has no compass heading")]
    NoHeading(Direction),

    /// The `Error` sentinel carries no spatial meaning.
    #[error("not a valid direction")]
    InvalidDirection,
}

/// A compass or vertical direction.
///
/// The 16 horizontal members are declared in heading order, so the enum
/// discriminant doubles as an index into the degree table: heading =
/// discriminant × 22.5°. `Up`, `Down`, and `Error` carry no heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthNortheast,
    Northeast,
    EastNortheast,
    East,
    EastSoutheast,
    Southeast,
    SouthSoutheast,
    South,
    SouthSouthwest,
    Southwest,
    WestSouthwest,
    West,
    WestNorthwest,
    Northwest,
    NorthNorthwest,
    Up,
    Down,
    Error,
}

impl Direction {
    /// The 16 horizontal directions in heading order.
    pub const COMPASS: [Direction; 16] = [
        Direction::North,
        Direction::NorthNortheast,
        Direction::Northeast,
        Direction::EastNortheast,
        Direction::East,
        Direction::EastSoutheast,
        Direction::Southeast,
        Direction::SouthSoutheast,
        Direction::South,
        Direction::SouthSouthwest,
        Direction::Southwest,
        Direction::WestSouthwest,
        Direction::West,
        Direction::WestNorthwest,
        Direction::Northwest,
        Direction::NorthNorthwest,
    ];

    /// The 4 cardinal directions.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The 4 ordinal (diagonal) directions.
    pub const ORDINAL: [Direction; 4] = [
        Direction::Northeast,
        Direction::Southeast,
        Direction::Southwest,
        Direction::Northwest,
    ];

    /// Index into [`Self::COMPASS`], `None` for `Up`/`Down`/`Error`.
    #[inline]
    fn compass_index(self) -> Option<usize> {
        let i = self as usize;
        (i < 16).then_some(i)
    }

    /// True for the 16 compass members.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        self.compass_index().is_some()
    }

    /// True for North, East, South, West.
    #[inline]
    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::South | Direction::West
        )
    }

    /// The opposite direction.
    ///
    /// Exact for all members: horizontal directions rotate half the
    /// compass by index, `Up`/`Down` swap, `Error` maps to itself.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Error => Direction::Error,
            _ => Self::COMPASS[(self as usize + 8) % 16],
        }
    }

    /// Heading in degrees, `0.0` at North growing clockwise.
    pub fn degrees(self) -> Result<f64, DirectionError> {
        match self.compass_index() {
            Some(i) => Ok(i as f64 * STEP_DEGREES),
            None => Err(DirectionError::NoHeading(self)),
        }
    }

    /// Heading in radians.
    pub fn radians(self) -> Result<f64, DirectionError> {
        Ok(self.degrees()?.to_radians())
    }

    /// Unit displacement in world space.
    ///
    /// North is -Z, East is +X, `Up` is +Y. The `Error` sentinel has no
    /// displacement and fails.
    pub fn unit_vector(self) -> Result<Vec3, DirectionError> {
        match self {
            Direction::Up => Ok(Vec3::Y),
            Direction::Down => Ok(Vec3::NEG_Y),
            Direction::Error => Err(DirectionError::InvalidDirection),
            _ => {
                let rad = self.radians()? as f32;
                Ok(Vec3::new(rad.sin(), 0.0, -rad.cos()))
            }
        }
    }

    /// Exact integer unit offset for the six axis-aligned directions.
    ///
    /// The 12 intermediate compass points do not land on the block grid
    /// and return `None`.
    pub fn unit_offset(self) -> Option<IVec3> {
        match self {
            Direction::North => Some(IVec3::NEG_Z),
            Direction::East => Some(IVec3::X),
            Direction::South => Some(IVec3::Z),
            Direction::West => Some(IVec3::NEG_X),
            Direction::Up => Some(IVec3::Y),
            Direction::Down => Some(IVec3::NEG_Y),
            _ => None,
        }
    }

    /// Classify an integer displacement as a cardinal direction.
    ///
    /// The displacement may have any magnitude along its axis; anything
    /// vertical, diagonal, or zero resolves to `Error`.
    pub fn from_offset(offset: IVec3) -> Self {
        match (offset.x.signum(), offset.y, offset.z.signum()) {
            (0, 0, -1) => Direction::North,
            (0, 0, 1) => Direction::South,
            (1, 0, 0) => Direction::East,
            (-1, 0, 0) => Direction::West,
            _ => Direction::Error,
        }
    }

    /// Snap a heading in degrees to the nearest compass direction.
    ///
    /// The heading is first normalized into `[0, 360)`, negative input
    /// wrapping. Ties round up: a heading exactly 11.25° past a compass
    /// point resolves to the next point clockwise, and anything at or
    /// past 348.75° wraps to North.
    pub fn nearest(degrees: f64) -> Self {
        let clamped = normalize_degrees(degrees);
        // min() guards the clamped == 360.0 case that rounding can
        // produce from tiny negative inputs.
        let slot = ((clamped / STEP_DEGREES) as usize).min(15);
        if clamped - slot as f64 * STEP_DEGREES >= HALF_STEP_DEGREES {
            Self::COMPASS[(slot + 1) % 16]
        } else {
            Self::COMPASS[slot]
        }
    }
}

/// Normalize a heading into `[0, 360)`, wrapping negative input.
pub fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::COMPASS {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Error.opposite(), Direction::Error);
    }

    #[test]
    fn test_opposite_pairs() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(
            Direction::NorthNortheast.opposite(),
            Direction::SouthSouthwest
        );
        assert_eq!(Direction::NorthNorthwest.opposite(), Direction::SouthSoutheast);
    }

    #[test]
    fn test_degrees_are_distinct_and_increasing() {
        let headings: Vec<f64> = Direction::COMPASS
            .iter()
            .map(|d| d.degrees().unwrap())
            .collect();
        for pair in headings.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(headings[0], 0.0);
        assert_eq!(headings[15], 337.5);
    }

    #[test]
    fn test_degrees_fail_without_heading() {
        assert_eq!(
            Direction::Up.degrees(),
            Err(DirectionError::NoHeading(Direction::Up))
        );
        assert_eq!(
            Direction::Error.radians(),
            Err(DirectionError::NoHeading(Direction::Error))
        );
    }

    #[test]
    fn test_nearest_snaps_exact_headings_to_themselves() {
        for dir in Direction::COMPASS {
            assert_eq!(Direction::nearest(dir.degrees().unwrap()), dir);
        }
    }

    #[test]
    fn test_nearest_tie_rounds_up() {
        assert_eq!(Direction::nearest(11.25), Direction::NorthNortheast);
        assert_eq!(Direction::nearest(33.75), Direction::Northeast);
        assert_eq!(Direction::nearest(11.24), Direction::North);
    }

    #[test]
    fn test_nearest_wraps_at_top_of_range() {
        assert_eq!(Direction::nearest(348.75), Direction::North);
        assert_eq!(Direction::nearest(359.9), Direction::North);
        assert_eq!(Direction::nearest(348.74), Direction::NorthNorthwest);
    }

    #[test]
    fn test_nearest_wraps_negative_input() {
        // -11.25 normalizes to 348.75, which ties up into North.
        assert_eq!(Direction::nearest(-11.25), Direction::North);
        assert_eq!(Direction::nearest(-22.5), Direction::NorthNorthwest);
        assert_eq!(Direction::nearest(-90.0), Direction::West);
        assert_eq!(Direction::nearest(382.5), Direction::NorthNortheast);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }

    #[test]
    fn test_unit_vector_horizontal() {
        let north = Direction::North.unit_vector().unwrap();
        assert!(north.distance(Vec3::new(0.0, 0.0, -1.0)) < 1e-6);

        let east = Direction::East.unit_vector().unwrap();
        assert!(east.distance(Vec3::new(1.0, 0.0, 0.0)) < 1e-6);

        let ne = Direction::Northeast.unit_vector().unwrap();
        let inv_sqrt2 = 1.0 / 2.0_f32.sqrt();
        assert!(ne.distance(Vec3::new(inv_sqrt2, 0.0, -inv_sqrt2)) < 1e-6);
    }

    #[test]
    fn test_unit_vector_vertical_and_error() {
        assert_eq!(Direction::Up.unit_vector().unwrap(), Vec3::Y);
        assert_eq!(Direction::Down.unit_vector().unwrap(), Vec3::NEG_Y);
        assert_eq!(
            Direction::Error.unit_vector(),
            Err(DirectionError::InvalidDirection)
        );
    }

    #[test]
    fn test_unit_offset() {
        assert_eq!(Direction::North.unit_offset(), Some(IVec3::NEG_Z));
        assert_eq!(Direction::South.unit_offset(), Some(IVec3::Z));
        assert_eq!(Direction::Up.unit_offset(), Some(IVec3::Y));
        assert_eq!(Direction::Northeast.unit_offset(), None);
        assert_eq!(Direction::Error.unit_offset(), None);
    }

    #[test]
    fn test_from_offset() {
        assert_eq!(Direction::from_offset(IVec3::new(0, 0, -1)), Direction::North);
        assert_eq!(Direction::from_offset(IVec3::new(0, 0, -5)), Direction::North);
        assert_eq!(Direction::from_offset(IVec3::new(3, 0, 0)), Direction::East);
        assert_eq!(Direction::from_offset(IVec3::new(-1, 0, 0)), Direction::West);
        // Vertical and diagonal displacements have no cardinal direction.
        assert_eq!(Direction::from_offset(IVec3::new(0, 1, 0)), Direction::Error);
        assert_eq!(Direction::from_offset(IVec3::new(1, 0, 1)), Direction::Error);
        assert_eq!(Direction::from_offset(IVec3::ZERO), Direction::Error);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Direction::WestNorthwest).unwrap();
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::WestNorthwest);
    }
}
