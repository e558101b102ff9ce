//! Terminal chess board (default binary).
//!
//! Two players share one mouse: click a piece, then click where it should go.
//! Press `q` or `Esc` to leave.

use anyhow::{Context, Result};

use click_chess::assets::AssetStore;
use click_chess::engine::StandardRules;
use click_chess::runtime::{init_logging, AppConfig, FrameLoop, TerminalPlatform};
use click_chess::term::BoardRenderer;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    config.validate().context("invalid configuration")?;
    init_logging(&config)?;
    tracing::info!(?config, "starting");

    // Sprites load before the terminal is touched, so a bad asset directory is an
    // ordinary error message rather than a garbled screen.
    let geometry = config.geometry();
    let assets = AssetStore::load(&config.assets_dir, geometry.square_px())
        .with_context(|| format!("loading sprites from {}", config.assets_dir.display()))?;
    let renderer = BoardRenderer::new(assets, geometry);
    let mut frame_loop = FrameLoop::new(StandardRules::new(), renderer, &config);

    let mut platform = TerminalPlatform::new(geometry.board_px());
    platform.enter()?;

    let result = frame_loop.run(&mut platform);

    // Always try to restore terminal state.
    let _ = platform.exit();
    tracing::info!(status = frame_loop.engine().status().as_str(), "shutting down");
    result
}
