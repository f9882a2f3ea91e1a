//! Fixed-step simulation tick
//!
//! One tick: move every ball, resolve each touching pair once, drop dead
//! Regulars, then re-check whether any Regular is left.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::state::Ball;
use super::world::World;

/// Something that happened during a tick. Ids refer to `Ball::id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickEvent {
    /// Regular absorbed a smaller (or equal) Regular
    Merged { absorber: u32, absorbed: u32 },
    /// Monster swallowed a Regular
    Devoured { monster: u32, victim: u32 },
    /// Regular bounced off a Repellent, possibly taking its color
    Repelled {
        ball: u32,
        repellent: u32,
        recolored: bool,
    },
    /// Two Repellents traded colors
    ColorsSwapped { a: u32, b: u32 },
    /// Repellent lost half its radius to a Monster
    Shrunk { ball: u32, monster: u32, radius: u32 },
    /// Dead Regular pruned from the arena
    Removed { id: u32 },
    /// Last Regular is gone
    Finished,
}

/// Mutable access to two distinct slots
fn pair_mut(balls: &mut [Ball], i: usize, j: usize) -> (&mut Ball, &mut Ball) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = balls.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = balls.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

impl World {
    /// Advance the arena by one tick. Does nothing once finished.
    pub fn tick(&mut self) {
        if self.finished {
            return;
        }
        self.events.clear();

        for ball in &mut self.balls {
            ball.move_within(&self.bounds);
        }

        self.resolve_collisions();
        self.prune_dead();

        if !self.balls.iter().any(Ball::is_regular) {
            self.finished = true;
            self.events.push(TickEvent::Finished);
            log::info!("Arena finished after {} ticks", self.time_ticks + 1);
        }

        self.time_ticks += 1;
    }

    /// Visit ordered pairs in insertion order; the first ordering of a
    /// touching pair initiates, the reverse ordering is skipped.
    fn resolve_collisions(&mut self) {
        let n = self.balls.len();
        let mut resolved: HashSet<(usize, usize)> = HashSet::new();

        for i in 0..n {
            for j in 0..n {
                if i == j || resolved.contains(&(i.min(j), i.max(j))) {
                    continue;
                }

                let (ball, other) = pair_mut(&mut self.balls, i, j);
                if ball.is_dead() || other.is_dead() || !ball.intersects(other) {
                    continue;
                }

                if let Some(event) = ball.collide(other) {
                    log::trace!("tick {}: {:?}", self.time_ticks, event);
                    self.events.push(event);
                }
                resolved.insert((i.min(j), i.max(j)));
            }
        }
    }

    /// Remove Regulars with no radius left. Other kinds stay even at zero.
    fn prune_dead(&mut self) {
        let events = &mut self.events;
        self.balls.retain(|ball| {
            let dead = ball.is_regular() && ball.is_dead();
            if dead {
                events.push(TickEvent::Removed { id: ball.id });
            }
            !dead
        });
    }
}
