//! Data models for the accessible spots browser
//!
//! - Spot: an immutable point of interest with accessibility attributes
//! - Coordinates: a latitude/longitude pair used by the map view

pub mod spot;

pub use spot::{Coordinates, Spot, SpotId};
