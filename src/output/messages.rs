//! Player-facing messages
//!
//! Every line the game says, as plain text. Color is applied at the print
//! site, not here, so assertions on message content stay simple.

use crate::core::Word;

/// Shown once at startup
pub const WELCOME: &str = "Welcome to purely functional hangman!";

/// Asks for the player's name
pub const NAME_PROMPT: &str = "What is your name?";

/// Asks for the next guess
pub const LETTER_PROMPT: &str = "Please enter a letter";

/// Shown when the input held no usable character
pub const EMPTY_CHOICE: &str = "You did not enter a character.";

/// Shown after a guess that is in the word
pub const CORRECT_GUESS: &str = "You guessed correctly!";

/// Shown after a guess that is not in the word
pub const WRONG_GUESS: &str = "That's wrong, but keep trying!";

/// Greets the player by name before the first board
#[must_use]
pub fn greeting(name: &str) -> String {
    format!("Welcome {name}, let's begin!")
}

/// The message for a won game
#[must_use]
pub fn win_message(name: &str) -> String {
    format!("Congratulations {name}, you won the game!")
}

/// The message for a lost game, revealing the word
#[must_use]
pub fn loss_message(name: &str, word: &Word) -> String {
    format!("Sorry {name}, you lost the game. The word was {word}")
}
