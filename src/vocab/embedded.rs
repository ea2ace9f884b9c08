//! Embedded vocabulary
//!
//! The words players guess against, compiled into the binary so the game
//! runs without any files on disk. The theme is functional-programming
//! jargon.

/// Number of words in the vocabulary
pub const WORDS_COUNT: usize = 12;

/// Every word the game can choose from
pub const WORDS: [&str; WORDS_COUNT] = [
    "functor",
    "applicative",
    "monad",
    "invariant",
    "contravariant",
    "foldable",
    "traverse",
    "semigroup",
    "monoid",
    "category",
    "function",
    "composition",
];
