//! Random word selection

use super::embedded::WORDS;
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Pick the target word for a new game
///
/// Accepts any RNG so callers can pass a seeded generator for
/// reproducible games.
///
/// # Panics
/// Panics if the embedded vocabulary is empty or holds an invalid word.
/// Both are compile-time properties of [`WORDS`], checked by tests.
pub fn choose_word<R: Rng + ?Sized>(rng: &mut R) -> Word {
    let text = WORDS
        .choose(rng)
        .copied()
        .expect("vocabulary is non-empty");
    Word::new(text).expect("vocabulary entries are valid words")
}
