//! Piece sprites.
//!
//! Sprites are small JSON pixel maps (see [`sprite`]) named `<owner>_<kind>.json`,
//! e.g. `white_knight.json`. [`AssetStore::load`] reads all twelve, scales them to
//! one board square, and fails if any is missing or malformed. After that every
//! lookup succeeds.

pub mod error;
pub mod sprite;
pub mod store;

pub use click_chess_types as types;

pub use error::{AssetError, AssetResult};
pub use sprite::{parse_hex_color, Sprite};
pub use store::AssetStore;
