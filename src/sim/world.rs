//! The arena: owns every ball, the bounds and the finished flag.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Ball, BallKind, Bounds, Rgb};
use super::tick::TickEvent;
use crate::error::ConfigResult;
use crate::settings::Settings;

/// Complete arena state (deterministic for a given seed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Seed the population was generated from, if any
    pub(super) seed: Option<u64>,
    /// Live balls in insertion order
    pub(super) balls: Vec<Ball>,
    pub(super) bounds: Bounds,
    /// Set once no Regular is left; never cleared
    pub(super) finished: bool,
    /// Ticks run so far
    pub(super) time_ticks: u64,
    /// Events of the most recent tick
    #[serde(skip)]
    pub(super) events: Vec<TickEvent>,
    next_id: u32,
}

impl World {
    /// Empty arena
    pub fn new(bounds: Bounds) -> Self {
        Self {
            seed: None,
            balls: Vec::new(),
            bounds,
            finished: false,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 0,
        }
    }

    /// Arena holding `balls` in the given order; ids are reassigned from 0
    pub fn from_balls(bounds: Bounds, balls: impl IntoIterator<Item = Ball>) -> Self {
        let mut world = Self::new(bounds);
        for ball in balls {
            world.spawn(ball);
        }
        world
    }

    /// Arena populated from settings, seeded from `settings.seed` or entropy
    pub fn from_settings(settings: &Settings) -> ConfigResult<Self> {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut world = Self::generate(settings, &mut rng)?;
        world.seed = Some(seed);
        Ok(world)
    }

    /// Arena populated with `settings.ball_count` random balls drawn from `rng`
    pub fn generate<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> ConfigResult<Self> {
        settings.validate()?;

        let width = i32::try_from(settings.arena_width).unwrap_or(i32::MAX);
        let height = i32::try_from(settings.arena_height).unwrap_or(i32::MAX);
        let speed = i32::from(settings.max_speed);

        let mut world = Self::new(Bounds::from_size(settings.arena_width, settings.arena_height));
        for _ in 0..settings.ball_count {
            let kind = BallKind::ALL[rng.random_range(0..BallKind::ALL.len())];
            let radius = rng.random_range(settings.radius_min..settings.radius_max);
            let color = Rgb::new(rng.random(), rng.random(), rng.random());

            // Keep the whole ball plus the margin clear of every edge
            let inset = u64::from(radius) * 2 + u64::from(settings.spawn_margin);
            let inset = i32::try_from(inset).unwrap_or(i32::MAX);
            let x = rng.random_range(inset..width - inset);
            let y = rng.random_range(inset..height - inset);

            let dx = rng.random_range(-speed..=speed);
            let dy = rng.random_range(-speed..=speed);

            world.spawn(Ball::with_motion(
                radius,
                color,
                IVec2::new(x, y),
                dx,
                dy,
                kind,
                settings.monster_motion,
            ));
        }

        log::info!(
            "Generated arena {}x{}: {} regular, {} monster, {} repellent",
            settings.arena_width,
            settings.arena_height,
            world.count_kind(BallKind::Regular),
            world.count_kind(BallKind::Monster),
            world.count_kind(BallKind::Repellent),
        );
        Ok(world)
    }

    /// Append a ball, assigning the next id
    fn spawn(&mut self, mut ball: Ball) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        ball.id = id;
        self.balls.push(ball);
        id
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Events recorded during the last tick that ran
    pub fn events(&self) -> &[TickEvent] {
        &self.events
    }

    pub fn count_kind(&self, kind: BallKind) -> usize {
        self.balls.iter().filter(|b| b.kind() == kind).count()
    }

    pub fn regular_count(&self) -> usize {
        self.count_kind(BallKind::Regular)
    }

    /// Sum of all radii, dead balls included
    pub fn total_radius(&self) -> u64 {
        self.balls.iter().map(|b| u64::from(b.radius)).sum()
    }
}
