//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use orrery_kinematics::{KinematicsParams, OrbitPlane};
use orrery_scene::{DEFAULT_TRACE_SEGMENTS, SceneProperties};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Tick scales and pacing.
    pub simulation: SimulationConfig,
    /// What gets drawn.
    pub display: DisplayConfig,
    /// Run length and scene selection.
    pub run: RunConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Radians of self-rotation per tick per unit of angular velocity.
    pub rotation_scale: f64,
    /// Degrees of orbital angle per tick per unit of orbital velocity.
    pub orbit_scale: f64,
    /// Display factor applied to orbit radii.
    pub orbit_radius_scale: f64,
    /// Plane orbits are laid out in.
    pub orbit_plane: OrbitPlane,
    /// Ticks per second in realtime mode.
    pub tick_rate: u32,
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Draw orbit trace lines.
    pub show_orbits: bool,
    /// Draw body meshes.
    pub show_mesh: bool,
    /// Draw reference axes.
    pub show_axes: bool,
    /// Segments per orbit trace circle.
    pub orbit_trace_segments: u32,
}

/// Run configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Number of ticks to simulate.
    pub ticks: u64,
    /// Scene description to load instead of the built-in demo.
    pub scene: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for SimulationConfig {
    fn default() -> Self {
        let params = KinematicsParams::default();
        Self {
            rotation_scale: params.rotation_scale,
            orbit_scale: params.orbit_scale,
            orbit_radius_scale: params.orbit_radius_scale,
            orbit_plane: params.plane,
            tick_rate: 60,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let props = SceneProperties::default();
        Self {
            show_orbits: props.show_orbits,
            show_mesh: props.show_mesh,
            show_axes: props.show_axes,
            orbit_trace_segments: DEFAULT_TRACE_SEGMENTS,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 360,
            scene: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Conversions ---

impl SimulationConfig {
    /// Tick parameters for the kinematics updater.
    pub fn kinematics_params(&self) -> KinematicsParams {
        KinematicsParams {
            rotation_scale: self.rotation_scale,
            orbit_scale: self.orbit_scale,
            orbit_radius_scale: self.orbit_radius_scale,
            plane: self.orbit_plane,
        }
    }
}

impl DisplayConfig {
    /// Initial display toggles for a scene.
    pub fn scene_properties(&self) -> SceneProperties {
        SceneProperties {
            show_orbits: self.show_orbits,
            show_mesh: self.show_mesh,
            show_axes: self.show_axes,
        }
    }
}

// --- Load / Save ---

/// File name of the persisted config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Where [`Config::load_or_create`] got its config from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Read from an existing file.
    Loaded(PathBuf),
    /// No file existed; defaults were written here.
    Created(PathBuf),
}

impl std::fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loaded(path) => write!(f, "loaded config from {}", path.display()),
            Self::Created(path) => write!(f, "created default config at {}", path.display()),
        }
    }
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    ///
    /// Nothing is logged here: callers usually run this before logging is
    /// initialized, so the returned [`ConfigOrigin`] is for them to report.
    pub fn load_or_create(config_dir: &Path) -> Result<(Self, ConfigOrigin), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                    path: config_path.clone(),
                    source,
                })?;
            let config: Config = ron::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: config_path.clone(),
                source,
            })?;
            Ok((config, ConfigOrigin::Loaded(config_path)))
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            Ok((config, ConfigOrigin::Created(config_path)))
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("rotation_scale: 0.01"));
        assert!(ron_str.contains("orbit_plane: Xy"));
        assert!(ron_str.contains("ticks: 360"));
    }

    #[test]
    fn test_missing_field_uses_default() {
        let ron_str = "(simulation: (orbit_scale: 0.05), run: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.simulation.orbit_scale, 0.05);
        assert_eq!(config.simulation.rotation_scale, 0.01);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_defaults_match_library_defaults() {
        let config = Config::default();
        assert_eq!(
            config.simulation.kinematics_params(),
            KinematicsParams::default()
        );
        assert_eq!(config.display.scene_properties(), SceneProperties::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.simulation.orbit_plane = OrbitPlane::Xz;
        config.run.ticks = 90;
        config.run.scene = Some(PathBuf::from("scenes/solar_system.ron"));

        config.save(dir.path()).unwrap();
        let (loaded, origin) = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
        assert_eq!(origin, ConfigOrigin::Loaded(dir.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let (config, origin) = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
        assert_eq!(origin, ConfigOrigin::Created(dir.path().join("config.ron")));
    }

    #[test]
    fn test_origin_reports_created_then_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let (_, first) = Config::load_or_create(dir.path()).unwrap();
        let (_, second) = Config::load_or_create(dir.path()).unwrap();

        assert!(matches!(first, ConfigOrigin::Created(_)));
        assert!(matches!(second, ConfigOrigin::Loaded(_)));
        assert!(first.to_string().starts_with("created default config at "));
        assert!(second.to_string().ends_with("config.ron"));
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        std::fs::write(&path, "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
        assert!(err.to_string().contains("config.ron"));
    }

    #[test]
    fn test_unwritable_dir_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();
        let err = Config::default().save(&blocker).unwrap_err();
        assert!(matches!(err, ConfigError::Write { .. }));
        assert_eq!(err.path(), Some(blocker.as_path()));
    }
}
