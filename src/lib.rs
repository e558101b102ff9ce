//! Click Chess (workspace facade crate).
//!
//! Re-exports the member crates under `click_chess::{types,core,engine,assets,term,input,runtime}`
//! so binaries, benches, and integration tests have a single import root.

pub use click_chess_assets as assets;
pub use click_chess_core as core;
pub use click_chess_engine as engine;
pub use click_chess_input as input;
pub use click_chess_runtime as runtime;
pub use click_chess_term as term;
pub use click_chess_types as types;
