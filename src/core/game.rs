//! Hangman game state and win/loss rules
//!
//! A game is the target word, the player's name, and the set of letters
//! guessed so far. State transitions are pure: guessing returns a new state
//! rather than mutating in place, so each turn can be inspected and tested
//! on its own.

use super::word::Word;
use rustc_hash::FxHashSet;

/// How many wrong guesses a player survives
///
/// The game is lost on the guess after this many misses.
pub const ALLOWED_MISSES: usize = 8;

/// A single hangman game in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    name: String,
    word: Word,
    guesses: FxHashSet<char>,
}

/// What a guess did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Every letter of the word has been guessed
    Won,
    /// Too many misses
    Lost,
    /// The letter is in the word, game continues
    Correct,
    /// The letter is not in the word, game continues
    Incorrect,
}

impl TurnOutcome {
    /// Whether this outcome ends the game
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl GameState {
    /// Start a fresh game for a player and target word
    #[must_use]
    pub fn new(name: impl Into<String>, word: Word) -> Self {
        Self {
            name: name.into(),
            word,
            guesses: FxHashSet::default(),
        }
    }

    /// The player's name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The word being guessed
    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// All letters guessed so far
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &FxHashSet<char> {
        &self.guesses
    }

    /// The state after guessing a letter
    ///
    /// Repeating an earlier guess returns an equal state, so a duplicate
    /// never adds a miss.
    #[must_use]
    pub fn with_guess(&self, letter: char) -> Self {
        let mut guesses = self.guesses.clone();
        guesses.insert(letter);
        Self {
            name: self.name.clone(),
            word: self.word.clone(),
            guesses,
        }
    }

    /// Guessed letters in alphabetical order, for display
    #[must_use]
    pub fn sorted_guesses(&self) -> Vec<char> {
        let mut sorted: Vec<char> = self.guesses.iter().copied().collect();
        sorted.sort_unstable();
        sorted
    }

    /// Count of guesses that are not in the word
    #[must_use]
    pub fn failures(&self) -> usize {
        self.guesses
            .iter()
            .filter(|&&letter| !self.word.contains(letter))
            .count()
    }

    /// Whether the player has run out of misses
    #[must_use]
    pub fn player_lost(&self) -> bool {
        self.failures() > ALLOWED_MISSES
    }

    /// Whether every letter of the word has been guessed
    #[must_use]
    pub fn player_won(&self) -> bool {
        self.word.letters().is_subset(&self.guesses)
    }

    /// Classify the game after a guess
    ///
    /// A guess that completes the word wins even when it is also the guess
    /// that would have exhausted the misses, so the win check comes first.
    #[must_use]
    pub fn outcome(&self, guess: char) -> TurnOutcome {
        if self.player_won() {
            TurnOutcome::Won
        } else if self.player_lost() {
            TurnOutcome::Lost
        } else if self.word.contains(guess) {
            TurnOutcome::Correct
        } else {
            TurnOutcome::Incorrect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str) -> GameState {
        GameState::new("Tester", Word::new(word).unwrap())
    }

    #[test]
    fn new_game_has_no_guesses() {
        let state = game("monad");
        assert!(state.guesses().is_empty());
        assert_eq!(state.failures(), 0);
        assert!(!state.player_won());
        assert!(!state.player_lost());
    }

    #[test]
    fn with_guess_records_letter() {
        let state = game("monad").with_guess('m');
        assert!(state.guesses().contains(&'m'));
        assert_eq!(state.guesses().len(), 1);
    }

    #[test]
    fn with_guess_leaves_original_untouched() {
        let start = game("monad");
        let next = start.with_guess('m');
        assert!(start.guesses().is_empty());
        assert_eq!(next.guesses().len(), 1);
    }

    #[test]
    fn with_guess_duplicate_is_idempotent() {
        let once = game("monad").with_guess('z');
        let twice = once.with_guess('z');
        assert_eq!(once, twice);
        assert_eq!(twice.failures(), 1);
    }

    #[test]
    fn failures_count_only_misses() {
        let state = game("monad")
            .with_guess('m')
            .with_guess('z')
            .with_guess('o')
            .with_guess('x');
        assert_eq!(state.failures(), 2);
    }

    #[test]
    fn player_won_requires_every_letter() {
        let mut state = game("monad");
        for letter in ['m', 'o', 'n', 'a'] {
            state = state.with_guess(letter);
            assert!(!state.player_won());
        }
        state = state.with_guess('d');
        assert!(state.player_won());
    }

    #[test]
    fn player_won_ignores_extra_misses() {
        let mut state = game("monad");
        for letter in ['m', 'o', 'n', 'a', 'd', 'z', 'x'] {
            state = state.with_guess(letter);
        }
        assert!(state.player_won());
    }

    #[test]
    fn player_lost_after_too_many_misses() {
        let mut state = game("monad");
        // Eight misses are survivable
        for letter in ['b', 'c', 'e', 'f', 'g', 'h', 'i', 'j'] {
            state = state.with_guess(letter);
        }
        assert_eq!(state.failures(), ALLOWED_MISSES);
        assert!(!state.player_lost());

        // The ninth is not
        state = state.with_guess('k');
        assert!(state.player_lost());
    }

    #[test]
    fn outcome_correct_and_incorrect() {
        let state = game("monad").with_guess('m');
        assert_eq!(state.outcome('m'), TurnOutcome::Correct);

        let state = state.with_guess('z');
        assert_eq!(state.outcome('z'), TurnOutcome::Incorrect);
    }

    #[test]
    fn outcome_win_beats_loss() {
        // Final letter lands with the miss budget already spent: the
        // completed word still wins.
        let mut state = game("monad");
        for letter in ['b', 'c', 'e', 'f', 'g', 'h', 'i', 'j', 'm', 'o', 'n', 'a'] {
            state = state.with_guess(letter);
        }
        assert_eq!(state.failures(), ALLOWED_MISSES);

        state = state.with_guess('d');
        assert!(state.player_won());
        assert_eq!(state.outcome('d'), TurnOutcome::Won);
    }

    #[test]
    fn outcome_terminal_flags() {
        assert!(TurnOutcome::Won.is_terminal());
        assert!(TurnOutcome::Lost.is_terminal());
        assert!(!TurnOutcome::Correct.is_terminal());
        assert!(!TurnOutcome::Incorrect.is_terminal());
    }

    #[test]
    fn sorted_guesses_are_alphabetical() {
        let state = game("monad")
            .with_guess('z')
            .with_guess('a')
            .with_guess('m');
        assert_eq!(state.sorted_guesses(), vec!['a', 'm', 'z']);
    }
}
