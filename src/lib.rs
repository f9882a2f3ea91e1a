//! Ball Arena - a deterministic arena of merging, devouring and repelling balls
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, world state)
//! - `settings`: Data-driven arena configuration
//! - `error`: Setup errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

/// Arena configuration constants
pub mod consts {
    /// Number of balls spawned into a fresh arena
    pub const BALL_COUNT: usize = 15;

    /// Default arena dimensions (pixels)
    pub const ARENA_WIDTH: u32 = 800;
    pub const ARENA_HEIGHT: u32 = 600;

    /// Spawn radius range (min inclusive, max exclusive)
    pub const BALL_RADIUS_MIN: u32 = 10;
    pub const BALL_RADIUS_MAX: u32 = 20;

    /// Largest per-tick velocity component (either sign)
    pub const BALL_MAX_SPEED: u16 = 4;

    /// Extra inset from the arena edges when spawning, on top of the diameter
    pub const SPAWN_MARGIN: u32 = 30;

    /// Kind label sits this far above the ball's top-left corner
    pub const LABEL_OFFSET: i32 = 15;

    /// Driver cadence (milliseconds between ticks)
    pub const TICK_INTERVAL_MS: u64 = 30;
}
