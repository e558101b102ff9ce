use std::io;
use std::path::PathBuf;

/// Errors raised while loading sprite assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The asset directory itself is missing.
    #[error("asset directory not found: {}", .path.display())]
    DirectoryMissing { path: PathBuf },

    /// An expected sprite file does not exist.
    #[error("missing sprite {}", .path.display())]
    Missing { path: PathBuf },

    /// The file exists but could not be read.
    #[error("cannot read sprite {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid sprite JSON.
    #[error("sprite {} is not valid JSON: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON parsed but does not describe a consistent image.
    #[error("sprite {} is invalid: {message}", .path.display())]
    Invalid { path: PathBuf, message: String },
}

/// Result type alias for asset operations
pub type AssetResult<T> = Result<T, AssetError>;
