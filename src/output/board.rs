//! Board rendering
//!
//! Pure string builders for the three-row board shown after every guess:
//! the masked word, a placeholder row, and the sorted guesses. Formatting
//! stays separate from printing so tests can assert on exact output.

use crate::core::{GameState, Word};

/// The word with unguessed letters hidden
///
/// Each letter occupies a three-column cell: `" c "` once guessed, blank
/// until then, so the row keeps its width as letters appear.
#[must_use]
pub fn masked_row(state: &GameState) -> String {
    state
        .word()
        .text()
        .chars()
        .map(|c| {
            if state.guesses().contains(&c) {
                format!(" {c} ")
            } else {
                "   ".to_string()
            }
        })
        .collect()
}

/// One dash cell per letter of the word
#[must_use]
pub fn placeholder_row(word: &Word) -> String {
    " - ".repeat(word.letter_count())
}

/// The letters guessed so far
#[must_use]
pub fn guesses_row(guesses: &[char]) -> String {
    format!("Guesses: {guesses:?}")
}

/// The full board for the current state
///
/// # Examples
/// ```
/// use hangman::core::{GameState, Word};
/// use hangman::output::render_board;
///
/// let state = GameState::new("Player", Word::new("cat").unwrap())
///     .with_guess('a')
///     .with_guess('c');
/// let board = render_board(&state);
/// assert_eq!(board, " c  a    \n -  -  - \nGuesses: ['a', 'c']");
/// ```
#[must_use]
pub fn render_board(state: &GameState) -> String {
    [
        masked_row(state),
        placeholder_row(state.word()),
        guesses_row(&state.sorted_guesses()),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(word: &str, guesses: &[char]) -> GameState {
        let mut state = GameState::new("Tester", Word::new(word).unwrap());
        for &letter in guesses {
            state = state.with_guess(letter);
        }
        state
    }

    #[test]
    fn masked_row_hides_unguessed_letters() {
        let state = state_with("cat", &[]);
        assert_eq!(masked_row(&state), "         ");
    }

    #[test]
    fn masked_row_reveals_guessed_letters() {
        let state = state_with("cat", &['a', 'c']);
        assert_eq!(masked_row(&state), " c  a    ");
    }

    #[test]
    fn masked_row_reveals_repeated_letters_everywhere() {
        let state = state_with("monoid", &['o']);
        assert_eq!(masked_row(&state), "    o     o       ");
    }

    #[test]
    fn masked_row_ignores_wrong_guesses() {
        let state = state_with("cat", &['z']);
        assert_eq!(masked_row(&state), "         ");
    }

    #[test]
    fn placeholder_row_matches_word_length() {
        let word = Word::new("cat").unwrap();
        assert_eq!(placeholder_row(&word), " -  -  - ");
    }

    #[test]
    fn guesses_row_empty() {
        assert_eq!(guesses_row(&[]), "Guesses: []");
    }

    #[test]
    fn guesses_row_lists_letters() {
        assert_eq!(guesses_row(&['a', 'c', 'z']), "Guesses: ['a', 'c', 'z']");
    }

    #[test]
    fn render_board_stacks_three_rows() {
        let state = state_with("cat", &['a', 'c']);
        let expected = concat!(" c  a    ", "\n", " -  -  - ", "\nGuesses: ['a', 'c']");
        assert_eq!(render_board(&state), expected);
    }

    #[test]
    fn render_board_fresh_game() {
        let state = state_with("monad", &[]);
        let expected = concat!("               ", "\n", " -  -  -  -  - ", "\nGuesses: []");
        assert_eq!(render_board(&state), expected);
    }
}
