//! Scripted console for tests

use super::Console;
use std::collections::VecDeque;
use std::io;

/// Console that replays a fixed input script and records output
///
/// Reading past the end of the script is an error rather than an endless
/// empty line, so a game loop that consumes more input than a test
/// provided fails fast instead of spinning.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Build a console that will serve the given lines in order
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Every line written so far, in order
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// All output joined into one newline-separated string
    #[must_use]
    pub fn printed(&self) -> String {
        self.output.join("\n")
    }

    /// How many scripted lines are still unread
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<String> {
        self.input.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted")
        })
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }
}
