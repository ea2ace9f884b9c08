//! Interactive hangman session
//!
//! Drives one full game over a [`Console`]: greet the player, pick a word,
//! then loop reading guesses and printing the board until the game ends.

use crate::console::Console;
use crate::core::{GameState, TurnOutcome};
use crate::output::messages::{
    CORRECT_GUESS, EMPTY_CHOICE, LETTER_PROMPT, NAME_PROMPT, WELCOME, WRONG_GUESS, greeting,
    loss_message, win_message,
};
use crate::output::render_board;
use crate::vocab::choose_word;
use colored::Colorize;
use rand::Rng;
use std::io;

/// Run one complete game from welcome to win or loss
///
/// The word is drawn from the embedded vocabulary with `rng`, so a seeded
/// generator replays the same game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run<C: Console, R: Rng + ?Sized>(console: &mut C, rng: &mut R) -> io::Result<()> {
    console.write_line(WELCOME)?;

    let name = prompt_name(console)?;
    console.write_line(&greeting(&name))?;

    let word = choose_word(rng);
    play_from(console, GameState::new(name, word))?;
    Ok(())
}

/// Play out a game from a prepared state
///
/// Shows the board once up front, then runs the guess loop. Exposed
/// separately from [`run`] so a session can start from a known word.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_from<C: Console>(console: &mut C, state: GameState) -> io::Result<GameState> {
    print_board(console, &state)?;
    game_loop(console, state)
}

fn game_loop<C: Console>(console: &mut C, mut state: GameState) -> io::Result<GameState> {
    loop {
        let guess = prompt_letter(console)?;
        state = state.with_guess(guess);
        print_board(console, &state)?;

        let outcome = state.outcome(guess);
        match outcome {
            TurnOutcome::Won => {
                let message = win_message(state.name());
                console.write_line(&message.bright_green().bold().to_string())?;
            }
            TurnOutcome::Lost => {
                let message = loss_message(state.name(), state.word());
                console.write_line(&message.bright_red().bold().to_string())?;
            }
            TurnOutcome::Correct => console.write_line(CORRECT_GUESS)?,
            TurnOutcome::Incorrect => console.write_line(WRONG_GUESS)?,
        }

        if outcome.is_terminal() {
            return Ok(state);
        }
    }
}

/// Print the three-row board followed by a blank separator line
fn print_board<C: Console>(console: &mut C, state: &GameState) -> io::Result<()> {
    console.write_line(&render_board(state))?;
    console.write_line("")
}

/// Ask for the player's name
///
/// The answer is taken as-is, so leading and trailing spaces survive into
/// the greeting.
fn prompt_name<C: Console>(console: &mut C) -> io::Result<String> {
    console.write_line(NAME_PROMPT)?;
    console.read_line()
}

/// Ask for a letter until the player provides one
///
/// The guess is the first character of the trimmed, lowercased input. A
/// line with no usable character gets a reminder and a fresh prompt.
fn prompt_letter<C: Console>(console: &mut C) -> io::Result<char> {
    loop {
        console.write_line(LETTER_PROMPT)?;
        let input = console.read_line()?;

        match input.trim().to_lowercase().chars().next() {
            Some(letter) => return Ok(letter),
            None => console.write_line(EMPTY_CHOICE)?,
        }
    }
}
