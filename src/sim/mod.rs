//! Deterministic simulation module
//!
//! All arena logic lives here. This module must be pure and deterministic:
//! - One step per tick, integer arithmetic only
//! - Seeded RNG only, injected at generation time
//! - Stable iteration order (insertion order of the ball list)
//! - No rendering or platform dependencies

pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::{combine_colors, int_distance};
pub use snapshot::{ArenaSnapshot, BallView};
pub use state::{Ball, BallKind, Bounds, MonsterMotion, Rgb};
pub use tick::TickEvent;
pub use world::World;
