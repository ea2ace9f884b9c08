//! Real terminal console

use super::Console;
use std::io::{self, Write};

/// Console backed by process stdin and stdout
///
/// Output is flushed after every line so prompts appear before the game
/// blocks on input.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<String> {
        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input)?;
        if bytes == 0 {
            // End of input, treat as an empty line
            return Ok(String::new());
        }
        if input.ends_with('\n') {
            input.pop();
            if input.ends_with('\r') {
                input.pop();
            }
        }
        Ok(input)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{text}")?;
        stdout.flush()
    }
}
