//! Arena settings
//!
//! Loaded from a JSON file by the driver; every field falls back to its default
//! so partial files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, ConfigResult};
use crate::sim::MonsterMotion;

/// Arena settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Population ===
    /// Number of balls spawned at startup
    pub ball_count: usize,
    /// Smallest spawn radius (inclusive)
    pub radius_min: u32,
    /// Largest spawn radius (exclusive)
    pub radius_max: u32,
    /// Velocity components are drawn from -max_speed..=max_speed
    pub max_speed: u16,
    /// Inset from the arena edges on top of the ball diameter
    pub spawn_margin: u32,
    /// Whether monsters keep their spawn velocity
    pub monster_motion: MonsterMotion,

    // === Arena ===
    pub arena_width: u32,
    pub arena_height: u32,

    // === Driver ===
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
    /// Stop the driver after this many ticks even if Regular balls remain
    pub max_ticks: Option<u64>,
    /// RNG seed (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_count: BALL_COUNT,
            radius_min: BALL_RADIUS_MIN,
            radius_max: BALL_RADIUS_MAX,
            max_speed: BALL_MAX_SPEED,
            spawn_margin: SPAWN_MARGIN,
            monster_motion: MonsterMotion::default(),

            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            tick_interval_ms: TICK_INTERVAL_MS,
            max_ticks: None,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Largest radius a spawned ball can have
    pub fn largest_radius(&self) -> u32 {
        self.radius_max.saturating_sub(1)
    }

    /// Smallest arena extent that still leaves room to spawn the largest ball
    pub fn required_extent(&self) -> u64 {
        (u64::from(self.largest_radius()) * 2 + u64::from(self.spawn_margin)) * 2
    }

    /// Reject setups the spawner cannot satisfy
    pub fn validate(&self) -> ConfigResult<()> {
        if self.ball_count == 0 {
            return Err(ConfigError::ZeroBallCount);
        }
        if self.radius_min >= self.radius_max {
            return Err(ConfigError::EmptyRadiusRange {
                min: self.radius_min,
                max: self.radius_max,
            });
        }

        let required = self.required_extent();
        for (axis, size) in [("width", self.arena_width), ("height", self.arena_height)] {
            // Positions are i32, so anything past i32::MAX is unusable
            let usable = size.min(i32::MAX.unsigned_abs());
            if u64::from(usable) <= required {
                return Err(ConfigError::ArenaTooSmall {
                    axis,
                    size,
                    required,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.ball_count, 15);
        assert_eq!(settings.max_speed, 4);
        assert_eq!(settings.monster_motion, MonsterMotion::Stationary);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "ball_count": 4, "seed": 7 }"#).unwrap();
        assert_eq!(settings.ball_count, 4);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.arena_width, ARENA_WIDTH);
        assert_eq!(settings.radius_max, BALL_RADIUS_MAX);
    }

    #[test]
    fn test_monster_motion_from_json() {
        let settings = Settings::from_json(r#"{ "monster_motion": "Drifting" }"#).unwrap();
        assert_eq!(settings.monster_motion, MonsterMotion::Drifting);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(42),
            max_ticks: Some(500),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_zero_balls() {
        let err = Settings::from_json(r#"{ "ball_count": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroBallCount));
    }

    #[test]
    fn test_rejects_empty_radius_range() {
        let settings = Settings {
            radius_min: 20,
            radius_max: 20,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::EmptyRadiusRange { min: 20, max: 20 })
        ));
    }

    #[test]
    fn test_rejects_tiny_arena() {
        // Largest radius 19 needs (38 + 30) * 2 = 136 pixels
        let settings = Settings {
            arena_height: 136,
            ..Default::default()
        };
        match settings.validate() {
            Err(ConfigError::ArenaTooSmall {
                axis,
                size,
                required,
            }) => {
                assert_eq!(axis, "height");
                assert_eq!(size, 136);
                assert_eq!(required, 136);
            }
            other => panic!("expected ArenaTooSmall, got {other:?}"),
        }

        let settings = Settings {
            arena_height: 137,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_huge_radius() {
        let err = Settings::from_json(r#"{ "radius_max": 4294967295 }"#).unwrap_err();
        match err {
            ConfigError::ArenaTooSmall { axis, required, .. } => {
                assert_eq!(axis, "width");
                assert_eq!(required, (u64::from(u32::MAX - 1) * 2 + 30) * 2);
            }
            other => panic!("expected ArenaTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_huge_margin() {
        let err = Settings::from_json(r#"{ "spawn_margin": 4294967295 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ArenaTooSmall { axis: "width", .. }));
    }

    #[test]
    fn test_arena_beyond_i32_is_clamped() {
        // Margin fits a u32 arena but not the i32 coordinate space
        let settings = Settings {
            arena_width: u32::MAX,
            arena_height: u32::MAX,
            spawn_margin: i32::MAX.unsigned_abs(),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ArenaTooSmall { size: u32::MAX, .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/nonexistent/ball-arena.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
