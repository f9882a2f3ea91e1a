//! Ball state and core simulation types

use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Ball kinds. Fixed at spawn; decides both movement and collision response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallKind {
    /// Merges with other Regulars, gets eaten by Monsters
    Regular,
    /// Stationary absorber
    Monster,
    /// Trades colors with other Repellents, shrinks against Monsters
    Repellent,
}

impl BallKind {
    pub const ALL: [BallKind; 3] = [BallKind::Regular, BallKind::Monster, BallKind::Repellent];

    /// Label drawn above the ball
    pub fn label(&self) -> &'static str {
        match self {
            BallKind::Regular => "Regular",
            BallKind::Monster => "Monster",
            BallKind::Repellent => "Repellent",
        }
    }
}

impl fmt::Display for BallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether monsters honour the velocity they were created with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MonsterMotion {
    /// Monsters never move
    #[default]
    Stationary,
    /// Monsters keep their spawn velocity and bounce like everything else
    Drifting,
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Arena rectangle in pixels. Right/bottom are exclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    /// Bounds of a drawing surface with its origin at (0, 0)
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            top: 0,
            right: i32::try_from(width).unwrap_or(i32::MAX),
            bottom: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    /// Assigned by the world on insertion
    pub id: u32,
    /// Zero means destroyed
    pub radius: u32,
    pub color: Rgb,
    /// Top-left corner of the bounding box, not the center
    pub pos: IVec2,
    /// Per-tick delta
    pub vel: IVec2,
    kind: BallKind,
}

impl Ball {
    /// Create a ball. Monsters are always created at rest.
    pub fn new(radius: u32, color: Rgb, pos: IVec2, dx: i32, dy: i32, kind: BallKind) -> Self {
        Self::with_motion(radius, color, pos, dx, dy, kind, MonsterMotion::Stationary)
    }

    /// Create a ball, letting `motion` decide whether a Monster keeps (dx, dy)
    pub fn with_motion(
        radius: u32,
        color: Rgb,
        pos: IVec2,
        dx: i32,
        dy: i32,
        kind: BallKind,
        motion: MonsterMotion,
    ) -> Self {
        let vel = match (kind, motion) {
            (BallKind::Monster, MonsterMotion::Stationary) => IVec2::ZERO,
            _ => IVec2::new(dx, dy),
        };
        Self {
            id: 0,
            radius,
            color,
            pos,
            vel,
            kind,
        }
    }

    pub fn kind(&self) -> BallKind {
        self.kind
    }

    pub fn is_regular(&self) -> bool {
        self.kind == BallKind::Regular
    }

    pub fn is_dead(&self) -> bool {
        self.radius == 0
    }

    /// Bounding box edge length
    pub fn diameter(&self) -> i32 {
        i32::try_from(self.radius.saturating_mul(2)).unwrap_or(i32::MAX)
    }

    /// Advance by one tick of velocity, then reflect off the arena edges.
    ///
    /// Edges are tested against the new position on every call, so a ball
    /// resting on or past an edge flips direction again each tick until it
    /// gets clear.
    pub fn move_within(&mut self, bounds: &Bounds) {
        self.pos += self.vel;

        let size = self.diameter();
        if self.pos.x <= bounds.left || self.pos.x.saturating_add(size) >= bounds.right {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y <= bounds.top || self.pos.y.saturating_add(size) >= bounds.bottom {
            self.vel.y = -self.vel.y;
        }
    }
}
