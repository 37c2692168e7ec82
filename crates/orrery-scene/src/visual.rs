//! Renderer-facing snapshots of the scene.

use glam::DVec3;
use orrery_bodies::{BodyId, BodyKind};

/// One renderable per non-structural body, refreshed after every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyVisual {
    pub body: BodyId,
    pub self_id: String,
    pub name: String,
    pub kind: BodyKind,
    /// Sphere radius.
    pub radius: f64,
    /// Texture path for the asset loader, uninterpreted.
    pub surface_texture: Option<String>,
    /// Absolute position.
    pub position: DVec3,
    /// Accumulated self-rotation about X, in radians.
    pub rotation: f64,
    /// Whether the mesh should be drawn.
    pub mesh_visible: bool,
    /// Orbit line, present for revolving bodies while orbits are shown.
    pub orbit: Option<OrbitTrace>,
}

/// Closed polyline of a body's orbit.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitTrace {
    /// Absolute position of the orbit's center (the parent body).
    pub center: DVec3,
    pub radius: f64,
    pub points: Vec<DVec3>,
}

/// A reference axis line segment, colored by axis in the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLine {
    pub start: DVec3,
    pub end: DVec3,
}
