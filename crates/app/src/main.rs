//! Headless demo runner
//!
//! Steps the simulation on its fixed tick for a configurable number of
//! ticks, logging the player path. Stands in for the windowed frontend,
//! which would drive the same loop from its frame timer and hand the
//! captured [`FrameState`] to the GPU.

use anyhow::Result;
use clap::Parser;
use glam::Vec2;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use field::Terrain;
use fieldwalk_app::{
    cli::Args, Camera, FixedTick, FrameState, InputSnapshot, MotionController, SimClock, SimConfig,
};
use fieldwalk_physics::Integrator;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    debug!(?config, "starting simulation");

    let mut terrain = if config.animate_lattice {
        Terrain::with_animation()
    } else {
        Terrain::new()
    };

    let mut camera = Camera::new(config.origin_vec(), config.target_vec(), config.up_vec());
    let mut controller =
        MotionController::new(&camera, config.move_speed, config.mouse_sensitivity);
    let mut integrator = Integrator::new(config.gravity, config.hit_radius);
    let mut clock = SimClock::new();
    let scheduler = FixedTick::new(config.tick_interval);
    let dt = scheduler.interval();

    let input = if args.walk {
        InputSnapshot {
            forward: true,
            ..Default::default()
        }
    } else {
        InputSnapshot::idle()
    };

    let mut next_report = 0.0;
    for _ in 0..args.ticks {
        terrain.set_time(clock.elapsed());
        controller.tick(&terrain, &mut camera, &mut integrator, &input, dt);
        clock.tick(dt);

        if clock.elapsed() >= next_report {
            let origin = camera.origin();
            info!(
                t = format!("{:.2}", clock.elapsed()),
                x = format!("{:.2}", origin.x),
                y = format!("{:.2}", origin.y),
                z = format!("{:.2}", origin.z),
                "player"
            );
            next_report += 1.0;
        }
    }

    let frame = FrameState::capture(&camera, &clock, Vec2::new(1024.0, 768.0));
    info!(origin = %frame.origin, time = frame.time, "final frame state");

    Ok(())
}
