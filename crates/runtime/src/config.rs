//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::core::BoardGeometry;
use crate::types::{BOARD_DIM, DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, DEFAULT_TARGET_FPS};

/// Highest frame rate accepted from configuration.
pub const MAX_TARGET_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("target frame rate must be at least 1")]
    ZeroFrameRate,

    #[error("target frame rate {fps} exceeds the maximum of {MAX_TARGET_FPS}")]
    FrameRateTooHigh { fps: u32 },

    #[error("frame {width}x{height} cannot hold an 8x8 board (need height >= 8 and width >= height rounded to whole squares)")]
    FrameTooSmall { width: u32, height: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub frame_width: u32,
    pub frame_height: u32,
    pub target_fps: u32,
    pub assets_dir: PathBuf,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            assets_dir: PathBuf::from("assets/sprites"),
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables, falling back to defaults for anything
    /// unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let number = |key: &str, default: u32| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            frame_width: number("CLICK_CHESS_FRAME_WIDTH", defaults.frame_width),
            frame_height: number("CLICK_CHESS_FRAME_HEIGHT", defaults.frame_height),
            target_fps: number("CLICK_CHESS_FPS", defaults.target_fps),
            assets_dir: non_empty("CLICK_CHESS_ASSETS")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            log_path: non_empty("CLICK_CHESS_LOG_PATH").map(PathBuf::from),
            log_filter: non_empty("CLICK_CHESS_LOG").unwrap_or(defaults.log_filter),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if self.target_fps > MAX_TARGET_FPS {
            return Err(ConfigError::FrameRateTooHigh {
                fps: self.target_fps,
            });
        }
        let square = self.frame_height / BOARD_DIM as u32;
        if square == 0 || self.frame_width < square * BOARD_DIM as u32 {
            return Err(ConfigError::FrameTooSmall {
                width: self.frame_width,
                height: self.frame_height,
            });
        }
        Ok(())
    }

    pub fn square_px(&self) -> u32 {
        self.geometry().square_px()
    }

    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::from_frame_height(self.frame_height)
    }

    /// Wall-clock budget for one frame cycle.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}
