//! Scripted Terminal Module
//!
//! In-memory [`Terminal`] implementation fed a queue of lines and
//! keystrokes. Everything printed is recorded, and relative cursor
//! movement is counted, so tests can assert that a render/cleanup cycle
//! left the cursor where it started.

use std::collections::VecDeque;
use std::io;

use super::terminal::{Keystroke, Terminal};

/// Terminal double driven by pre-scripted input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTerminal {
    lines: VecDeque<String>,
    keys: VecDeque<Keystroke>,
    /// Every `print`/`print_line` chunk, in order.
    pub output: Vec<String>,
    /// Total columns moved right.
    pub rights: usize,
    /// Total columns moved left.
    pub lefts: usize,
    /// Total rows moved up.
    pub ups: usize,
    /// Number of clear-to-end-of-screen calls.
    pub clears: usize,
}

impl ScriptedTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script full-line responses, consumed in order by `read_line`.
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Script keystrokes, consumed in order by `read_key`.
    pub fn with_keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = Keystroke>,
    {
        self.keys.extend(keys);
        self
    }

    /// Everything printed so far, concatenated.
    pub fn printed(&self) -> String {
        self.output.concat()
    }

    fn exhausted(what: &str) -> io::Error {
        io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("script ran out of {}", what),
        )
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self) -> io::Result<String> {
        self.lines
            .pop_front()
            .ok_or_else(|| Self::exhausted("lines"))
    }

    fn read_key(&mut self, decode_special: bool) -> io::Result<Keystroke> {
        let key = self
            .keys
            .pop_front()
            .ok_or_else(|| Self::exhausted("keystrokes"))?;
        if decode_special {
            return Ok(key);
        }
        Ok(match key {
            Keystroke::Enter => Keystroke::Char('\r'),
            Keystroke::Backspace => Keystroke::Char('\x7f'),
            other => other,
        })
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn print_line(&mut self, text: &str) -> io::Result<()> {
        self.output.push(format!("{}\n", text));
        Ok(())
    }

    fn move_right(&mut self, columns: usize) -> io::Result<()> {
        self.rights += columns;
        Ok(())
    }

    fn move_left(&mut self, columns: usize) -> io::Result<()> {
        self.lefts += columns;
        Ok(())
    }

    fn move_up(&mut self, rows: usize) -> io::Result<()> {
        self.ups += rows;
        Ok(())
    }

    fn clear_to_end_of_screen(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn underline(&self, text: &str) -> String {
        format!("_{}_", text)
    }
}
