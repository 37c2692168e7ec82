//! The per-tick tree update.

use glam::DVec3;
use orrery_bodies::{BodyId, CelestialSystem};

use crate::{KinematicsParams, effective_orbit_radius, orbit_local_position};

/// Advance every attached body by one tick.
///
/// Bodies are visited pre-order, each frame of the walk carrying the parent's
/// absolute position for this tick, so a parent is always finalized before its
/// descendants read it. Skip-render bodies are not rotated or moved but their
/// descendants are still updated. Never fails; parameters are assumed valid
/// (see [`KinematicsParams::validate`]).
pub fn tick(system: &mut CelestialSystem, params: &KinematicsParams) {
    let mut stack: Vec<(BodyId, DVec3)> = vec![(system.root(), DVec3::ZERO)];

    while let Some((id, parent_absolute)) = stack.pop() {
        let Some(radius) = system
            .get(id)
            .map(|b| effective_orbit_radius(system, b, params))
        else {
            continue;
        };
        let Some(body) = system.get_mut(id) else {
            continue;
        };

        if !body.skip_render() {
            if body.angular_velocity() != 0.0 {
                body.rotation += body.angular_velocity() * params.rotation_scale;
            }

            if body.revolution().is_moving() {
                let angle = body.advance_orbit(params.orbit_scale);
                body.position = orbit_local_position(angle, radius, params.plane, body.position);
            }
        }

        body.absolute_position = body.position + parent_absolute;
        let absolute = body.absolute_position;
        stack.extend(body.descendants().iter().rev().map(|d| (*d, absolute)));
    }
}

/// Run `n` ticks back to back.
pub fn tick_n(system: &mut CelestialSystem, params: &KinematicsParams, n: u64) {
    for _ in 0..n {
        tick(system, params);
    }
}
