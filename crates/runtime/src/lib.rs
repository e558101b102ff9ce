//! Application runtime: configuration, logging, the platform boundary, and the
//! fixed-rate frame loop that ties selection, rules, and rendering together.
//!
//! # Environment Variables
//!
//! - `CLICK_CHESS_FRAME_WIDTH` / `CLICK_CHESS_FRAME_HEIGHT`: frame size in pixels (default 512)
//! - `CLICK_CHESS_FPS`: frame cycles per second (default 15)
//! - `CLICK_CHESS_ASSETS`: sprite directory (default `assets/sprites`)
//! - `CLICK_CHESS_LOG_PATH`: write logs to this file; unset disables logging
//! - `CLICK_CHESS_LOG`: log filter directive (default `info`)

pub mod config;
pub mod frame_loop;
pub mod logging;
pub mod platform;

pub use click_chess_assets as assets;
pub use click_chess_core as core;
pub use click_chess_term as term;
pub use click_chess_types as types;

pub use config::{AppConfig, ConfigError};
pub use frame_loop::{CycleOutcome, FrameLoop};
pub use logging::init_logging;
pub use platform::{Platform, PlatformEvent, TerminalPlatform};
