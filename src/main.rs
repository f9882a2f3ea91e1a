//! Ball Arena entry point
//!
//! Headless driver: loads settings, ticks the arena on a fixed cadence and
//! logs what happens until no Regular ball is left.
//!
//! Usage: `ball-arena [settings.json]` (log level via `RUST_LOG`)

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use ball_arena::sim::{BallKind, TickEvent, World};
use ball_arena::{ConfigError, Settings};

/// Population summary every this many ticks
const SUMMARY_EVERY: u64 = 100;

fn load_settings() -> Result<Settings, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => {
            log::info!("Using default settings");
            Ok(Settings::default())
        }
    }
}

fn log_summary(world: &World) {
    log::info!(
        "tick {}: {} regular, {} monster, {} repellent, total radius {}",
        world.time_ticks(),
        world.count_kind(BallKind::Regular),
        world.count_kind(BallKind::Monster),
        world.count_kind(BallKind::Repellent),
        world.total_radius(),
    );
}

fn run(settings: &Settings) -> Result<(), ConfigError> {
    let mut world = World::from_settings(settings)?;
    if let Some(seed) = world.seed() {
        log::info!("Arena initialized with seed: {}", seed);
    }
    log_summary(&world);

    let interval = Duration::from_millis(settings.tick_interval_ms);
    while !world.is_finished() {
        if settings.max_ticks.is_some_and(|max| world.time_ticks() >= max) {
            log::warn!("Stopping at tick limit with {} regular balls left", world.regular_count());
            break;
        }

        thread::sleep(interval);
        world.tick();

        for event in world.events() {
            match event {
                TickEvent::Finished => {}
                other => log::debug!("tick {}: {:?}", world.time_ticks(), other),
            }
        }
        if world.time_ticks() % SUMMARY_EVERY == 0 {
            log_summary(&world);
        }
    }

    log_summary(&world);
    for view in world.snapshot() {
        log::info!(
            "  #{} {} r={} at ({}, {}) rgb({}, {}, {})",
            view.id,
            view.label,
            view.radius,
            view.pos.x,
            view.pos.y,
            view.color.r,
            view.color.g,
            view.color.b,
        );
    }
    if log::log_enabled!(log::Level::Debug) {
        if let Ok(json) = serde_json::to_string(&world.arena_snapshot()) {
            log::debug!("{json}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ball Arena starting...");

    let result = load_settings().and_then(|settings| run(&settings));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
