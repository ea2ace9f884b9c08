//! Output formatting
//!
//! Board rendering and the fixed message catalogue. Everything here builds
//! strings; printing and color happen in the command layer.

pub mod board;
pub mod messages;

pub use board::render_board;
