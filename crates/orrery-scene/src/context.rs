//! The scene context passed to the host loop and the renderer.

use glam::DVec3;
use orrery_bodies::CelestialSystem;
use orrery_kinematics::{
    KinematicsParams, effective_orbit_radius, orbit_center_offset, orbit_trace, tick_n,
};

use crate::{AxisLine, BodyVisual, OrbitTrace, SceneProperties};

/// Half-length of each reference axis line.
pub const AXIS_LENGTH: f64 = 5.0;

/// Segments per orbit trace circle.
pub const DEFAULT_TRACE_SEGMENTS: u32 = 32;

/// Everything one running scene needs: the body tree, how it moves, and what
/// is shown.
///
/// There is exactly one writer ([`tick`](Self::tick)) and readers only look at
/// the state between ticks.
#[derive(Clone, Debug)]
pub struct SceneContext {
    system: CelestialSystem,
    params: KinematicsParams,
    properties: SceneProperties,
    trace_segments: u32,
    ticks: u64,
}

impl SceneContext {
    pub fn new(system: CelestialSystem, params: KinematicsParams) -> Self {
        Self {
            system,
            params,
            properties: SceneProperties::default(),
            trace_segments: DEFAULT_TRACE_SEGMENTS,
            ticks: 0,
        }
    }

    pub fn with_properties(mut self, properties: SceneProperties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_trace_segments(mut self, segments: u32) -> Self {
        self.trace_segments = segments;
        self
    }

    pub fn system(&self) -> &CelestialSystem {
        &self.system
    }

    pub fn params(&self) -> &KinematicsParams {
        &self.params
    }

    pub fn properties(&self) -> &SceneProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut SceneProperties {
        &mut self.properties
    }

    /// Ticks run since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) {
        self.advance(1);
    }

    /// Advance the simulation by `n` ticks.
    pub fn advance(&mut self, n: u64) {
        tick_n(&mut self.system, &self.params, n);
        self.ticks += n;
        log::trace!("scene advanced to tick {}", self.ticks);
    }

    /// Current renderables, pre-order, skipping structural bodies.
    pub fn visuals(&self) -> Vec<BodyVisual> {
        let mut visuals = Vec::new();
        self.system.traverse(|_, body| {
            if body.skip_render() {
                return;
            }

            let orbit = (self.properties.show_orbits && body.revolution().does_revolve).then(|| {
                let parent_absolute = body
                    .parent()
                    .and_then(|p| self.system.get(p))
                    .map_or(DVec3::ZERO, |p| p.absolute_position);
                let center = parent_absolute + orbit_center_offset(body.position, self.params.plane);
                let radius = effective_orbit_radius(&self.system, body, &self.params);
                OrbitTrace {
                    center,
                    radius,
                    points: orbit_trace(center, radius, self.trace_segments, self.params.plane),
                }
            });

            visuals.push(BodyVisual {
                body: body.id(),
                self_id: body.self_id().to_string(),
                name: body.name().to_string(),
                kind: body.kind(),
                radius: body.radius(),
                surface_texture: body.surface_texture().map(str::to_string),
                position: body.absolute_position,
                rotation: body.rotation,
                mesh_visible: self.properties.show_mesh,
                orbit,
            });
        });
        visuals
    }

    /// X, Y and Z reference lines through the origin, when shown.
    pub fn reference_axes(&self) -> Option<[AxisLine; 3]> {
        if !self.properties.show_axes {
            return None;
        }
        Some([DVec3::X, DVec3::Y, DVec3::Z].map(|axis| AxisLine {
            start: -axis * AXIS_LENGTH,
            end: axis * AXIS_LENGTH,
        }))
    }
}
