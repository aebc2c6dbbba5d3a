//! The user I/O collaborator boundary.
//!
//! The mission core never touches a terminal; everything it says or hears
//! goes through the four operations of [`UserIo`]. [`ConsoleIo`] is the
//! real-terminal implementation; tests substitute a scripted double.

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};

/// Four-operation boundary between the shell and the outside world.
pub trait UserIo {
    /// Write `text` followed by a newline.
    fn write_line(&mut self, text: &str);
    /// Write `text` with no trailing newline (inline prompts).
    fn write(&mut self, text: &str);
    /// Read one line, without its trailing newline.
    ///
    /// Returns `None` at end of input; the shell exits cleanly rather
    /// than re-prompting forever.
    fn read_line(&mut self) -> Option<String>;
    /// Clear the screen.
    fn clear(&mut self);
}

/// Terminal-backed [`UserIo`] over stdin/stdout.
#[derive(Debug, Default)]
pub struct ConsoleIo;

impl ConsoleIo {
    /// Create a terminal collaborator.
    pub fn new() -> Self {
        Self
    }
}

impl UserIo for ConsoleIo {
    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }

    fn write(&mut self, text: &str) {
        print!("{text}");
        // The prompt must be visible before the read blocks.
        let _ = io::stdout().flush();
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while line.ends_with(['\n', '\r']) {
                    line.pop();
                }
                Some(line)
            }
        }
    }

    fn clear(&mut self) {
        let _ = crossterm::execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }
}
