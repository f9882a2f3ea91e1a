//! Setup errors

use std::path::PathBuf;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rejected arena setup. The simulation itself never fails once built.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ball count must be at least 1")]
    ZeroBallCount,

    #[error("radius range {min}..{max} is empty")]
    EmptyRadiusRange { min: u32, max: u32 },

    #[error("arena {axis} of {size} is too small, spawning needs more than {required}")]
    ArenaTooSmall {
        axis: &'static str,
        size: u32,
        required: u64,
    },

    #[error("failed to read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
