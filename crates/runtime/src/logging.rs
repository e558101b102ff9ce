//! Log setup.
//!
//! The board owns the terminal, so logs never go to stdout or stderr. They go to
//! the file named by `CLICK_CHESS_LOG_PATH`, or nowhere.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Install the global subscriber. Returns `false` when logging is disabled.
pub fn init_logging(config: &AppConfig) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_without_a_path() {
        let config = AppConfig::default();
        assert!(!init_logging(&config).unwrap());
    }
}
