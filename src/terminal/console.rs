//! Console Terminal Module
//!
//! Real-console implementation of the [`Terminal`] trait: crossterm for
//! raw-mode keystroke capture, plain ANSI escape sequences for cursor
//! movement and clearing.

use std::io::{self, Write};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode},
};

use super::terminal::{Keystroke, Terminal};

/// Terminal backed by the process stdin/stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleTerminal;

impl ConsoleTerminal {
    pub fn new() -> Self {
        Self
    }

    fn next_key(&self, decode_special: bool) -> io::Result<Keystroke> {
        loop {
            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                }) => match code {
                    KeyCode::Enter => {
                        return Ok(if decode_special {
                            Keystroke::Enter
                        } else {
                            Keystroke::Char('\r')
                        })
                    }
                    KeyCode::Backspace => {
                        return Ok(if decode_special {
                            Keystroke::Backspace
                        } else {
                            Keystroke::Char('\x7f')
                        })
                    }
                    KeyCode::Char(c) => return Ok(Keystroke::Char(c)),
                    _ => {} // Ignore navigation and function keys
                },
                _ => {} // Ignore non-key events
            }
        }
    }
}

impl Terminal for ConsoleTerminal {
    fn read_line(&mut self) -> io::Result<String> {
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
    }

    fn read_key(&mut self, decode_special: bool) -> io::Result<Keystroke> {
        // Raw mode only for the duration of the read
        enable_raw_mode()?;
        let key = self.next_key(decode_special);

        // Always disable raw mode on exit
        let _ = disable_raw_mode();

        key
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        print!("{}", text);
        io::stdout().flush()
    }

    fn print_line(&mut self, text: &str) -> io::Result<()> {
        println!("{}", text);
        io::stdout().flush()
    }

    fn move_right(&mut self, columns: usize) -> io::Result<()> {
        if columns > 0 {
            print!("\x1B[{}C", columns);
            io::stdout().flush()?;
        }
        Ok(())
    }

    fn move_left(&mut self, columns: usize) -> io::Result<()> {
        if columns > 0 {
            print!("\x1B[{}D", columns);
            io::stdout().flush()?;
        }
        Ok(())
    }

    fn move_up(&mut self, rows: usize) -> io::Result<()> {
        if rows > 0 {
            print!("\x1B[{}A", rows);
            io::stdout().flush()?;
        }
        Ok(())
    }

    fn clear_to_end_of_screen(&mut self) -> io::Result<()> {
        print!("\x1B[0J");
        io::stdout().flush()
    }

    fn underline(&self, text: &str) -> String {
        format!("\x1B[4m{}\x1B[0m", text)
    }
}
