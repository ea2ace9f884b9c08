//! Purely Functional Hangman
//!
//! Classic console hangman played over a small functional-programming
//! vocabulary, with a budget of eight misses per game.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, TurnOutcome, Word};
//!
//! // Start a game and make some guesses
//! let word = Word::new("monad").unwrap();
//! let state = GameState::new("Player", word)
//!     .with_guess('m')
//!     .with_guess('z');
//!
//! assert_eq!(state.failures(), 1);
//! assert_eq!(state.outcome('z'), TurnOutcome::Incorrect);
//! ```

// Core domain types
pub mod core;

// Embedded vocabulary
pub mod vocab;

// Board and message formatting
pub mod output;

// Console abstraction over stdin/stdout
pub mod console;

// Command implementations
pub mod commands;
