//! Per-body attributes and state.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::{BodyError, BodyId, BodyKind};

/// Circular revolution around another body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Revolution {
    /// Whether the body moves along its orbit at all.
    pub does_revolve: bool,
    /// Angular speed along the orbit, scaled per tick by the updater. Never negative.
    pub orbital_velocity: f64,
    /// Orbit radius measured from the surface of the body orbited.
    pub orbit_radius: f64,
    /// Accumulated orbital angle in degrees. Starts at 0 and is never reset.
    #[serde(skip)]
    pub current_angle: f64,
    /// The body orbited. Must be the parent or one of its ancestors.
    #[serde(skip)]
    pub around: Option<BodyId>,
}

impl Default for Revolution {
    fn default() -> Self {
        Self {
            does_revolve: false,
            orbital_velocity: 0.0,
            orbit_radius: 0.0,
            current_angle: 0.0,
            around: None,
        }
    }
}

impl Revolution {
    /// A revolving orbit around `around`.
    pub fn around(around: BodyId, orbit_radius: f64, orbital_velocity: f64) -> Self {
        Self {
            does_revolve: true,
            orbital_velocity,
            orbit_radius,
            current_angle: 0.0,
            around: Some(around),
        }
    }

    /// True when a tick will move the body along its orbit.
    pub fn is_moving(&self) -> bool {
        self.does_revolve && self.orbital_velocity != 0.0
    }
}

/// Construction input for a body. Every field is optional in serialized form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyAttributes {
    /// Display label.
    pub name: String,
    pub radius: f64,
    /// Signed self-rotation rate; the sign gives the direction.
    pub angular_velocity: f64,
    /// Opaque asset path handed to the renderer's texture loader.
    pub surface_texture: Option<String>,
    /// Initial orbit-local position.
    pub position: DVec3,
    pub revolution: Revolution,
}

impl BodyAttributes {
    /// Attributes with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: f64) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    pub fn with_texture(mut self, path: impl Into<String>) -> Self {
        self.surface_texture = Some(path.into());
        self
    }

    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_revolution(mut self, revolution: Revolution) -> Self {
        self.revolution = revolution;
        self
    }

    /// Check the numeric fields and the orbit reference.
    ///
    /// Existence of `revolution.around` inside a system is checked by
    /// [`CelestialSystem::create`](crate::CelestialSystem::create).
    pub fn validate(&self) -> Result<(), BodyError> {
        finite("radius", self.radius)?;
        finite("angular_velocity", self.angular_velocity)?;
        finite("revolution.orbital_velocity", self.revolution.orbital_velocity)?;
        finite("revolution.orbit_radius", self.revolution.orbit_radius)?;
        finite("position.x", self.position.x)?;
        finite("position.y", self.position.y)?;
        finite("position.z", self.position.z)?;

        non_negative("radius", self.radius)?;
        non_negative("revolution.orbit_radius", self.revolution.orbit_radius)?;
        non_negative("revolution.orbital_velocity", self.revolution.orbital_velocity)?;

        if self.revolution.does_revolve && self.revolution.around.is_none() {
            return Err(BodyError::MissingOrbitParent {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), BodyError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BodyError::NonFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), BodyError> {
    if value < 0.0 {
        Err(BodyError::Negative { field, value })
    } else {
        Ok(())
    }
}

/// A node of the celestial tree.
///
/// Attributes are fixed once validated by
/// [`CelestialSystem::create`](crate::CelestialSystem::create). Only the state
/// the kinematics updater owns is writable: the public position and rotation
/// fields, and the orbital angle through [`advance_orbit`](Self::advance_orbit).
#[derive(Clone, Debug)]
pub struct CelestialBody {
    /// Orbit-local position, relative to the parent.
    pub position: DVec3,
    /// Orbit-local position plus the parent's absolute position.
    pub absolute_position: DVec3,
    /// Accumulated self-rotation about the body's X axis, in radians.
    pub rotation: f64,
    pub(crate) name: String,
    pub(crate) radius: f64,
    pub(crate) angular_velocity: f64,
    pub(crate) surface_texture: Option<String>,
    pub(crate) revolution: Revolution,
    pub(crate) kind: BodyKind,
    pub(crate) id: BodyId,
    pub(crate) self_id: String,
    pub(crate) parent: Option<BodyId>,
    pub(crate) parent_id: Option<String>,
    pub(crate) descendants: Vec<BodyId>,
    pub(crate) skip_render: bool,
}

impl CelestialBody {
    pub(crate) fn new(id: BodyId, kind: BodyKind, self_id: String, attrs: BodyAttributes) -> Self {
        Self {
            position: attrs.position,
            absolute_position: attrs.position,
            rotation: 0.0,
            name: attrs.name,
            radius: attrs.radius,
            angular_velocity: attrs.angular_velocity,
            surface_texture: attrs.surface_texture,
            revolution: Revolution {
                current_angle: 0.0,
                ..attrs.revolution
            },
            kind,
            id,
            self_id,
            parent: None,
            parent_id: None,
            descendants: Vec::new(),
            skip_render: kind == BodyKind::Root,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed self-rotation rate.
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn surface_texture(&self) -> Option<&str> {
        self.surface_texture.as_deref()
    }

    pub fn revolution(&self) -> &Revolution {
        &self.revolution
    }

    /// Advance the orbital angle by `orbital_velocity * orbit_scale` degrees
    /// and return the new angle. No-op unless the body is moving.
    ///
    /// A negative `orbit_scale` is ignored so the angle never decreases.
    pub fn advance_orbit(&mut self, orbit_scale: f64) -> f64 {
        if self.revolution.is_moving() && orbit_scale > 0.0 {
            self.revolution.current_angle += self.revolution.orbital_velocity * orbit_scale;
        }
        self.revolution.current_angle
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Arena handle of this body.
    pub fn id(&self) -> BodyId {
        self.id
    }

    /// Unique `<kind>-<uuid>` label.
    pub fn self_id(&self) -> &str {
        &self.self_id
    }

    pub fn parent(&self) -> Option<BodyId> {
        self.parent
    }

    /// The parent's `self_id`, set once on attachment.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    /// Direct descendants in insertion order.
    pub fn descendants(&self) -> &[BodyId] {
        &self.descendants
    }

    /// Structural-only bodies have no visual representation.
    pub fn skip_render(&self) -> bool {
        self.skip_render
    }

    pub fn is_attached(&self) -> bool {
        self.parent.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let attrs = BodyAttributes::default();
        assert_eq!(attrs.radius, 0.0);
        assert_eq!(attrs.angular_velocity, 0.0);
        assert!(attrs.surface_texture.is_none());
        assert_eq!(attrs.position, DVec3::ZERO);
        assert!(!attrs.revolution.does_revolve);
        assert_eq!(attrs.revolution.orbit_radius, 0.0);
        assert_eq!(attrs.revolution.orbital_velocity, 0.0);
        assert_eq!(attrs.revolution.current_angle, 0.0);
        assert!(attrs.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let attrs: BodyAttributes = ron::from_str("(name: \"Io\", radius: 0.2)").unwrap();
        assert_eq!(attrs.name, "Io");
        assert_eq!(attrs.radius, 0.2);
        assert_eq!(attrs.revolution, Revolution::default());
    }

    #[test]
    fn test_non_finite_rejected() {
        let attrs = BodyAttributes::named("bad").with_radius(f64::NAN);
        assert!(matches!(
            attrs.validate(),
            Err(BodyError::NonFinite { field: "radius", .. })
        ));

        let attrs = BodyAttributes::named("bad").with_position(DVec3::new(0.0, f64::INFINITY, 0.0));
        assert!(matches!(
            attrs.validate(),
            Err(BodyError::NonFinite { field: "position.y", .. })
        ));
    }

    #[test]
    fn test_negative_radius_rejected() {
        let attrs = BodyAttributes::named("bad").with_radius(-1.0);
        assert!(matches!(
            attrs.validate(),
            Err(BodyError::Negative { field: "radius", .. })
        ));
    }

    #[test]
    fn test_revolving_without_parent_rejected() {
        let attrs = BodyAttributes::named("drifter").with_revolution(Revolution {
            does_revolve: true,
            orbital_velocity: 1.0,
            ..Default::default()
        });
        assert!(matches!(
            attrs.validate(),
            Err(BodyError::MissingOrbitParent { .. })
        ));
    }

    #[test]
    fn test_negative_orbital_velocity_rejected() {
        let attrs = BodyAttributes::named("retro")
            .with_revolution(Revolution::around(BodyId::ROOT, 2.0, -1.0));
        assert!(matches!(
            attrs.validate(),
            Err(BodyError::Negative {
                field: "revolution.orbital_velocity",
                ..
            })
        ));
    }

    #[test]
    fn test_advance_orbit_only_moves_forward() {
        let attrs = BodyAttributes::named("p")
            .with_revolution(Revolution::around(BodyId::ROOT, 1.0, 2.0));
        let mut body = CelestialBody::new(BodyId(1), BodyKind::Planet, "planet-x".into(), attrs);

        assert_eq!(body.advance_orbit(0.5), 1.0);
        assert_eq!(body.advance_orbit(-3.0), 1.0);
        assert_eq!(body.advance_orbit(0.25), 1.5);
    }

    #[test]
    fn test_advance_orbit_ignores_static_bodies() {
        let mut body = CelestialBody::new(
            BodyId(1),
            BodyKind::Star,
            "star-x".into(),
            BodyAttributes::named("s"),
        );
        assert_eq!(body.advance_orbit(1.0), 0.0);
    }

    #[test]
    fn test_is_moving() {
        let mut rev = Revolution::around(BodyId::ROOT, 1.0, 0.0);
        assert!(!rev.is_moving());
        rev.orbital_velocity = 2.0;
        assert!(rev.is_moving());
        rev.does_revolve = false;
        assert!(!rev.is_moving());
    }
}
