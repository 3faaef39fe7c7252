//! TerminalRenderer: owns stdout and flushes text frames to the terminal.
//!
//! Raw mode is acquired in `enter` and must be released via `exit` on every
//! path out of the game loop. The screen is cleared once; each frame is
//! then drawn from the home position so the board animates in place.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{cursor, style::Print, terminal, QueueableCommand};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Enable raw mode, hide the cursor and clear the screen once.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal. The final frame stays on the primary screen.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(cursor::Show)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a frame from the home position, one queued write per line and a
    /// single flush. Raw mode needs the explicit carriage return.
    pub fn draw(&mut self, frame: &str) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        for line in frame.lines() {
            self.stdout.queue(Print(line))?;
            self.stdout.queue(Print("\r\n"))?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
