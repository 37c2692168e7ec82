//! The `orrery` binary: load config, build a scene, tick it, print the result.

use clap::Parser;
use orrery_app::AppError;
use orrery_app::platform::PlatformDirs;
use orrery_app::runner;
use orrery_config::{CliArgs, Config};

fn run(args: CliArgs) -> Result<(), AppError> {
    let dirs = match &args.config {
        Some(root) => PlatformDirs::resolve_with_root(root),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_all()?;

    let (mut config, origin) = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(Some(dirs.log_dir.as_path()), cfg!(debug_assertions), Some(&config));
    tracing::info!(config = %dirs.config_dir.display(), "orrery starting");
    tracing::info!("{origin}");

    let mut ctx = runner::build_context(&config)?;
    if args.realtime {
        runner::run_realtime(&mut ctx, config.run.ticks, config.simulation.tick_rate);
    } else {
        runner::run_headless(&mut ctx, config.run.ticks);
    }

    println!("after {} ticks:", ctx.ticks());
    print!("{}", runner::report(&ctx.visuals()));
    Ok(())
}

fn main() {
    if let Err(e) = run(CliArgs::parse()) {
        eprintln!("orrery: {e}");
        std::process::exit(1);
    }
}
