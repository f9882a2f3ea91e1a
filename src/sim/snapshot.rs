//! Read-only view of the arena for whoever draws it.
//!
//! Built between ticks; holds copies, so the renderer can never touch the
//! live collection.

use glam::IVec2;
use serde::Serialize;

use super::state::{BallKind, Rgb};
use super::world::World;
use crate::consts::LABEL_OFFSET;

/// Everything needed to draw one ball and its kind label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BallView {
    pub id: u32,
    pub radius: u32,
    pub color: Rgb,
    /// Top-left of the circle's bounding box
    pub pos: IVec2,
    /// Bounding box edge length
    pub diameter: u32,
    pub kind: BallKind,
    pub label: &'static str,
    /// Where the label text starts
    pub label_pos: IVec2,
}

/// Snapshot of the whole arena
#[derive(Debug, Clone, Serialize)]
pub struct ArenaSnapshot {
    pub time_ticks: u64,
    pub finished: bool,
    pub width: i32,
    pub height: i32,
    pub balls: Vec<BallView>,
}

impl World {
    /// Per-ball views in draw order
    pub fn snapshot(&self) -> Vec<BallView> {
        self.balls
            .iter()
            .map(|ball| BallView {
                id: ball.id,
                radius: ball.radius,
                color: ball.color,
                pos: ball.pos,
                diameter: ball.radius.saturating_mul(2),
                kind: ball.kind(),
                label: ball.kind().label(),
                label_pos: ball.pos - IVec2::new(0, LABEL_OFFSET),
            })
            .collect()
    }

    pub fn arena_snapshot(&self) -> ArenaSnapshot {
        ArenaSnapshot {
            time_ticks: self.time_ticks,
            finished: self.finished,
            width: self.bounds.width(),
            height: self.bounds.height(),
            balls: self.snapshot(),
        }
    }
}
