//! Build a scene from config and drive it.

use std::time::Duration;

use orrery_config::Config;
use orrery_scene::{BodyVisual, SceneContext, SceneDescription, demo};
use tracing::{debug, info};

use crate::AppError;
use crate::tick_loop::TickLoop;

/// Build the scene context described by `config`: the configured scene file,
/// or the built-in demo when none is set.
pub fn build_context(config: &Config) -> Result<SceneContext, AppError> {
    let params = config.simulation.kinematics_params();
    params.validate()?;

    let system = match &config.run.scene {
        Some(path) => SceneDescription::load(path)?.build()?,
        None => demo::solar_system()?,
    };
    info!(bodies = system.len() - 1, "scene ready");

    Ok(SceneContext::new(system, params)
        .with_properties(config.display.scene_properties())
        .with_trace_segments(config.display.orbit_trace_segments))
}

/// Run `ticks` ticks back to back.
pub fn run_headless(ctx: &mut SceneContext, ticks: u64) {
    ctx.advance(ticks);
    debug!(ticks = ctx.ticks(), "headless run finished");
}

/// Run `ticks` ticks paced at `tick_rate` per second.
pub fn run_realtime(ctx: &mut SceneContext, ticks: u64, tick_rate: u32) {
    let target = ctx.ticks() + ticks;
    let mut tick_loop = TickLoop::new(tick_rate);
    let pause = Duration::from_secs_f64(tick_loop.tick_dt() / 2.0);

    while ctx.ticks() < target {
        tick_loop.frame(|| {
            if ctx.ticks() < target {
                ctx.tick();
            }
        });
        std::thread::sleep(pause);
    }
    debug!(
        ticks = ctx.ticks(),
        frames = tick_loop.frame_count(),
        "realtime run finished"
    );
}

/// One line per renderable: name, kind, absolute position, rotation, orbit.
pub fn report(visuals: &[BodyVisual]) -> String {
    let mut out = String::new();
    for v in visuals {
        out.push_str(&format!(
            "{:<10} {:<6} pos=({:>8.3}, {:>8.3}, {:>8.3}) rot={:>8.3}",
            v.name, v.kind, v.position.x, v.position.y, v.position.z, v.rotation
        ));
        if let Some(orbit) = &v.orbit {
            out.push_str(&format!(" orbit_r={:.3}", orbit.radius));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use orrery_kinematics::OrbitPlane;

    #[test]
    fn test_build_demo_context() {
        let config = Config::default();
        let ctx = build_context(&config).unwrap();
        assert_eq!(ctx.visuals().len(), 4);
        assert_eq!(ctx.ticks(), 0);
    }

    #[test]
    fn test_build_from_scene_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.ron");
        std::fs::write(
            &path,
            "(bodies: [(kind: Star, attributes: (name: \"a\")), (kind: Star, attributes: (name: \"b\"))])",
        )
        .unwrap();
        let mut config = Config::default();
        config.run.scene = Some(path);

        let ctx = build_context(&config).unwrap();
        let names: Vec<String> = ctx.visuals().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_scene_file() {
        let mut config = Config::default();
        config.run.scene = Some("/nonexistent/scene.ron".into());
        assert!(matches!(build_context(&config), Err(AppError::Scene(_))));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let mut config = Config::default();
        config.simulation.orbit_scale = f64::INFINITY;
        assert!(matches!(
            build_context(&config),
            Err(AppError::Kinematics(_))
        ));
    }

    #[test]
    fn test_headless_quarter_orbit() {
        let mut config = Config::default();
        config.simulation.orbit_plane = OrbitPlane::Xz;
        let mut ctx = build_context(&config).unwrap();

        run_headless(&mut ctx, 90);

        let earth = ctx
            .visuals()
            .into_iter()
            .find(|v| v.name == "earth")
            .unwrap();
        assert!((earth.position - DVec3::new(0.0, 0.0, 4.0)).length() < 1e-9);
    }

    #[test]
    fn test_realtime_runs_exact_tick_count() {
        let mut config = Config::default();
        config.simulation.tick_rate = 1000;
        let mut ctx = build_context(&config).unwrap();
        run_realtime(&mut ctx, 5, config.simulation.tick_rate);
        assert_eq!(ctx.ticks(), 5);
    }

    #[test]
    fn test_report_lines() {
        let ctx = build_context(&Config::default()).unwrap();
        let text = report(&ctx.visuals());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("sun"));
        assert!(!lines[0].contains("orbit_r"));
        assert!(lines[2].contains("orbit_r=4.000"));
    }

    #[test]
    fn test_report_columns() {
        let ctx = build_context(&Config::default()).unwrap();
        let text = report(&ctx.visuals());
        assert!(text.ends_with('\n'));
        let moon = text.lines().find(|l| l.starts_with("moon")).unwrap();
        assert!(moon.starts_with("moon       moon   pos=("), "{moon}");
        assert!(moon.ends_with(" orbit_r=1.000"), "{moon}");
        assert!(moon.contains("rot=   0.000"), "{moon}");
    }
}
