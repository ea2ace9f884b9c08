//! Console abstraction
//!
//! The game talks to the player through the [`Console`] trait so the same
//! loop runs against real stdin/stdout in the binary and a scripted
//! console in tests.

pub mod script;
pub mod stdio;

pub use script::ScriptedConsole;
pub use stdio::StdConsole;

use std::io;

/// Line-oriented console I/O
pub trait Console {
    /// Read one line of input, without its line terminator
    ///
    /// Returns an empty string at end of input.
    ///
    /// # Errors
    /// Returns an error if reading fails.
    fn read_line(&mut self) -> io::Result<String>;

    /// Write one line of output, terminated by a newline
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}
