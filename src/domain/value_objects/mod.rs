//! Immutable value types.

pub mod coordinates;

pub use coordinates::{Coordinates, InvalidCoordinates, EARTH_RADIUS_KM};
