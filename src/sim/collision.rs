//! Collision detection and response between balls
//!
//! Detection compares the stored top-left corners, not the circle centers,
//! and truncates the distance to an integer before comparing. Response is a
//! fixed table over the two kinds; the initiating ball is whichever one the
//! tick loop visits first.

use glam::IVec2;

use super::state::{Ball, BallKind, Rgb};
use super::tick::TickEvent;

/// Euclidean distance between two points, truncated toward zero
pub fn int_distance(a: IVec2, b: IVec2) -> u128 {
    let dx = u128::from((i64::from(a.x) - i64::from(b.x)).unsigned_abs());
    let dy = u128::from((i64::from(a.y) - i64::from(b.y)).unsigned_abs());
    (dx * dx + dy * dy).isqrt()
}

/// Blend two colors after a merge.
///
/// `c2` counts twice as much as `c1`. `weight` is the absorbed ball's radius;
/// a zero weight is treated as one.
pub fn combine_colors(c1: Rgb, c2: Rgb, weight: u32) -> Rgb {
    let w = u64::from(weight.max(1));
    let mix = |a: u8, b: u8| -> u8 {
        let value = (u64::from(a) * w + u64::from(b) * (w * 2)) / (w * 3);
        u8::try_from(value).unwrap_or(u8::MAX)
    };
    Rgb {
        r: mix(c1.r, c2.r),
        g: mix(c1.g, c2.g),
        b: mix(c1.b, c2.b),
    }
}

impl Ball {
    /// True if the two balls touch or overlap
    pub fn intersects(&self, other: &Ball) -> bool {
        int_distance(self.pos, other.pos) <= u128::from(self.radius) + u128::from(other.radius)
    }

    /// Apply the collision response with `self` as the initiating side.
    ///
    /// Returns what happened, or `None` when the kind pair has no rule.
    pub fn collide(&mut self, other: &mut Ball) -> Option<TickEvent> {
        match (self.kind(), other.kind()) {
            (BallKind::Regular, BallKind::Regular) => {
                if self.radius > other.radius {
                    self.radius = self.radius.saturating_add(other.radius);
                    self.color = combine_colors(self.color, other.color, other.radius);
                    other.radius = 0;
                    Some(TickEvent::Merged {
                        absorber: self.id,
                        absorbed: other.id,
                    })
                } else {
                    // Ties go to `other`
                    other.radius = other.radius.saturating_add(self.radius);
                    other.color = combine_colors(self.color, other.color, self.radius);
                    self.radius = 0;
                    Some(TickEvent::Merged {
                        absorber: other.id,
                        absorbed: self.id,
                    })
                }
            }
            (BallKind::Regular, BallKind::Monster) => {
                other.radius = other.radius.saturating_add(self.radius);
                self.radius = 0;
                Some(TickEvent::Devoured {
                    monster: other.id,
                    victim: self.id,
                })
            }
            (BallKind::Regular, BallKind::Repellent) => {
                let recolored = self.color != other.color;
                if recolored {
                    self.color = other.color;
                }
                self.vel.x = -self.vel.x;
                Some(TickEvent::Repelled {
                    ball: self.id,
                    repellent: other.id,
                    recolored,
                })
            }
            (BallKind::Repellent, BallKind::Repellent) => {
                if self.color == other.color {
                    return None;
                }
                std::mem::swap(&mut self.color, &mut other.color);
                Some(TickEvent::ColorsSwapped {
                    a: self.id,
                    b: other.id,
                })
            }
            (BallKind::Repellent, BallKind::Monster) => {
                self.radius /= 2;
                Some(TickEvent::Shrunk {
                    ball: self.id,
                    monster: other.id,
                    radius: self.radius,
                })
            }
            (BallKind::Repellent, BallKind::Regular) | (BallKind::Monster, _) => None,
        }
    }
}
