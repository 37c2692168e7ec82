//! The built-in four-body demo: a sun, two planets and a moon.

use orrery_bodies::{BodyAttributes, BodyKind, CelestialSystem, Revolution};

use crate::{BodyDescription, SceneDescription, SceneError};

pub const TEXTURE_SUN: &str = "./assets/planets/sunmap.jpg";
pub const TEXTURE_MERCURY: &str = "./assets/planets/mercurymap.jpg";
pub const TEXTURE_EARTH: &str = "./assets/planets/earth_clouds_2048.jpg";
pub const TEXTURE_MOON: &str = "./assets/planets/moon_1024.jpg";

/// Orbit around whichever body the description is nested under.
fn orbit(orbit_radius: f64, orbital_velocity: f64) -> Revolution {
    Revolution {
        does_revolve: true,
        orbital_velocity,
        orbit_radius,
        ..Default::default()
    }
}

/// Description of the demo system.
///
/// With default kinematics the sun spins forward and the other bodies spin
/// backward; every orbiter advances one degree per tick. Orbit radii are
/// chosen so the effective radii are 2 (mercury), 4 (earth) and 1 (moon).
pub fn description() -> SceneDescription {
    let moon = BodyDescription {
        kind: BodyKind::Moon,
        attributes: BodyAttributes::named("moon")
            .with_radius(0.25)
            .with_angular_velocity(-1.5)
            .with_texture(TEXTURE_MOON)
            .with_revolution(orbit(0.5, 1.0)),
        descendants: Vec::new(),
    };
    let mercury = BodyDescription {
        kind: BodyKind::Planet,
        attributes: BodyAttributes::named("mercury")
            .with_radius(0.35)
            .with_angular_velocity(-0.5)
            .with_texture(TEXTURE_MERCURY)
            .with_revolution(orbit(1.0, 1.0)),
        descendants: Vec::new(),
    };
    let earth = BodyDescription {
        kind: BodyKind::Planet,
        attributes: BodyAttributes::named("earth")
            .with_radius(0.5)
            .with_angular_velocity(-2.0)
            .with_texture(TEXTURE_EARTH)
            .with_revolution(orbit(3.0, 1.0)),
        descendants: vec![moon],
    };
    let sun = BodyDescription {
        kind: BodyKind::Star,
        attributes: BodyAttributes::named("sun")
            .with_radius(1.0)
            .with_angular_velocity(1.0)
            .with_texture(TEXTURE_SUN),
        descendants: vec![mercury, earth],
    };
    SceneDescription { bodies: vec![sun] }
}

/// Build the demo system.
pub fn solar_system() -> Result<CelestialSystem, SceneError> {
    description().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_kinematics::{KinematicsParams, effective_orbit_radius};

    #[test]
    fn test_demo_shape() {
        let system = solar_system().unwrap();
        assert_eq!(system.len(), 5);
        let sun = system.find_by_name("sun").unwrap();
        let earth = system.find_by_name("earth").unwrap();
        let moon = system.find_by_name("moon").unwrap();
        assert_eq!(system.get(sun).unwrap().descendants().len(), 2);
        assert_eq!(system.get(moon).unwrap().parent(), Some(earth));
        assert_eq!(system.get(moon).unwrap().revolution().around, Some(earth));
        assert_eq!(system.depth_of(moon), Some(3));
    }

    #[test]
    fn test_demo_trace_radii() {
        let system = solar_system().unwrap();
        let params = KinematicsParams::default();
        for (name, expected) in [("mercury", 2.0), ("earth", 4.0), ("moon", 1.0)] {
            let body = system.get(system.find_by_name(name).unwrap()).unwrap();
            let radius = effective_orbit_radius(&system, body, &params);
            assert!((radius - expected).abs() < 1e-12, "{name}: {radius}");
        }
    }

    #[test]
    fn test_bundled_scene_file_matches_demo() {
        let bundled =
            SceneDescription::from_ron(include_str!("../../../scenes/solar_system.ron")).unwrap();
        assert_eq!(bundled, description());
    }
}
