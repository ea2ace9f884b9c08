//! Core game types
//!
//! The target word, the evolving game state, and the rules that decide
//! when a game is won or lost.

pub mod game;
pub mod word;

pub use game::{ALLOWED_MISSES, GameState, TurnOutcome};
pub use word::{Word, WordError};
