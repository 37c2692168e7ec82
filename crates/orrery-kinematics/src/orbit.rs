//! Circular orbit geometry.

use glam::DVec3;
use orrery_bodies::{CelestialBody, CelestialSystem};

use crate::{KinematicsParams, OrbitPlane};

/// Orbit radius used for positioning: the configured radius measured from the
/// orbited body's surface, times the display scale.
pub fn effective_orbit_radius(
    system: &CelestialSystem,
    body: &CelestialBody,
    params: &KinematicsParams,
) -> f64 {
    let revolution = body.revolution();
    let around_radius = revolution
        .around
        .and_then(|id| system.get(id))
        .map_or(0.0, |around| around.radius());
    (revolution.orbit_radius + around_radius) * params.orbit_radius_scale
}

/// Orbit-local position at `angle_deg` on a circle of `radius`.
///
/// The out-of-plane component is copied from `base`.
pub fn orbit_local_position(angle_deg: f64, radius: f64, plane: OrbitPlane, base: DVec3) -> DVec3 {
    let theta = angle_deg.to_radians();
    let (u, v) = (theta.cos() * radius, theta.sin() * radius);
    match plane {
        OrbitPlane::Xy => DVec3::new(u, v, base.z),
        OrbitPlane::Xz => DVec3::new(u, base.y, v),
    }
}

/// Offset from the parent's absolute position to the center of the orbit
/// circle a body at orbit-local `local` moves on: the component of `local`
/// that the orbit plane does not touch.
pub fn orbit_center_offset(local: DVec3, plane: OrbitPlane) -> DVec3 {
    match plane {
        OrbitPlane::Xy => DVec3::new(0.0, 0.0, local.z),
        OrbitPlane::Xz => DVec3::new(0.0, local.y, 0.0),
    }
}

/// Closed polyline approximating an orbit circle around `center`.
///
/// Returns `segments + 1` points; the last one repeats the first.
pub fn orbit_trace(center: DVec3, radius: f64, segments: u32, plane: OrbitPlane) -> Vec<DVec3> {
    if segments == 0 {
        return Vec::new();
    }
    (0..=segments)
        .map(|i| {
            let angle = 360.0 * f64::from(i) / f64::from(segments);
            center + orbit_local_position(angle, radius, plane, DVec3::ZERO)
        })
        .collect()
}
