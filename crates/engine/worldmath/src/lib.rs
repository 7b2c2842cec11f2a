//! Compass directions and world locations for voxel circuit inference
//!
//! This crate holds the spatial vocabulary the circuit engine speaks:
//! a 16-point compass [`Direction`] model with degree headings, nearest
//! direction snapping and unit-vector conversion, and world-qualified
//! block [`Location`]s.
//!
//! Positions and offsets use `glam` integer vectors throughout.

mod direction;
mod location;

pub use direction::{normalize_degrees, Direction, DirectionError};
pub use location::{Dimension, Location, WorldId};
