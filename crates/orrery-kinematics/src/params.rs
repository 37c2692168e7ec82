//! Tick scale constants and orbit plane selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Plane in which circular orbits are laid out.
///
/// The axis not in the plane keeps whatever orbit-local value the body had.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitPlane {
    #[default]
    Xy,
    Xz,
}

impl FromStr for OrbitPlane {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xy" => Ok(OrbitPlane::Xy),
            "xz" => Ok(OrbitPlane::Xz),
            other => Err(format!("unknown orbit plane {other:?}, expected xy or xz")),
        }
    }
}

impl fmt::Display for OrbitPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbitPlane::Xy => f.write_str("xy"),
            OrbitPlane::Xz => f.write_str("xz"),
        }
    }
}

/// Scale constants applied on every tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinematicsParams {
    /// Radians of self-rotation per tick per unit of angular velocity.
    pub rotation_scale: f64,
    /// Degrees of orbital angle per tick per unit of orbital velocity.
    pub orbit_scale: f64,
    /// Display factor applied to every effective orbit radius.
    pub orbit_radius_scale: f64,
    pub plane: OrbitPlane,
}

impl Default for KinematicsParams {
    fn default() -> Self {
        Self {
            rotation_scale: 0.01,
            orbit_scale: 1.0,
            orbit_radius_scale: 1.0,
            plane: OrbitPlane::Xy,
        }
    }
}

/// Errors raised when validating tick parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KinematicsError {
    #[error("{name} must be finite, got {value}")]
    NonFiniteParam { name: &'static str, value: f64 },
    #[error("{name} must not be negative, got {value}")]
    NegativeParam { name: &'static str, value: f64 },
}

impl KinematicsParams {
    /// Reject non-finite scales so that ticking stays NaN-free, and a negative
    /// `orbit_scale`, which would run orbits backwards.
    pub fn validate(&self) -> Result<(), KinematicsError> {
        for (name, value) in [
            ("rotation_scale", self.rotation_scale),
            ("orbit_scale", self.orbit_scale),
            ("orbit_radius_scale", self.orbit_radius_scale),
        ] {
            if !value.is_finite() {
                return Err(KinematicsError::NonFiniteParam { name, value });
            }
        }
        if self.orbit_scale < 0.0 {
            return Err(KinematicsError::NegativeParam {
                name: "orbit_scale",
                value: self.orbit_scale,
            });
        }
        Ok(())
    }
}
