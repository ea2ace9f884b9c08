//! Command implementations

pub mod play;

pub use play::{play_from, run};
