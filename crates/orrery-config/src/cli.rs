//! Command-line argument parsing for the orrery.

use std::path::PathBuf;

use clap::Parser;
use orrery_kinematics::OrbitPlane;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Celestial hierarchy simulator")]
pub struct CliArgs {
    /// Number of ticks to simulate.
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Degrees of orbital angle per tick per unit of orbital velocity.
    #[arg(long)]
    pub orbit_scale: Option<f64>,

    /// Radians of self-rotation per tick per unit of angular velocity.
    #[arg(long)]
    pub rotation_scale: Option<f64>,

    /// Orbit plane (xy or xz).
    #[arg(long)]
    pub plane: Option<OrbitPlane>,

    /// Scene description (.ron) to load instead of the built-in demo.
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pace ticks in real time at the configured tick rate.
    #[arg(long)]
    pub realtime: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ticks) = args.ticks {
            self.run.ticks = ticks;
        }
        if let Some(scale) = args.orbit_scale {
            self.simulation.orbit_scale = scale;
        }
        if let Some(scale) = args.rotation_scale {
            self.simulation.rotation_scale = scale;
        }
        if let Some(plane) = args.plane {
            self.simulation.orbit_plane = plane;
        }
        if let Some(ref scene) = args.scene {
            self.run.scene = Some(scene.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
