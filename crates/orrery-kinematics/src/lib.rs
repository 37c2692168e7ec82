//! Per-tick rotation and circular-orbit kinematics over a celestial tree.

mod orbit;
mod params;
mod update;

pub use orbit::{effective_orbit_radius, orbit_center_offset, orbit_local_position, orbit_trace};
pub use params::{KinematicsError, KinematicsParams, OrbitPlane};
pub use update::{tick, tick_n};
