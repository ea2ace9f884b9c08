//! Game vocabulary
//!
//! The embedded word list and the random chooser that picks a target word
//! for each game.

pub mod chooser;
mod embedded;

pub use chooser::choose_word;
pub use embedded::{WORDS, WORDS_COUNT};
