//! Input source capability - a bounded, non-blocking key poll.
//!
//! The game loop never blocks on the keyboard: `poll_key` returns within
//! the given timeout whether or not anything is pending, so the gravity
//! timer keeps running while the player does nothing.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// A source of polled key presses.
pub trait InputSource {
    /// Return the next pending key press, or `None` once `timeout` elapses.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
}

/// Crossterm-backed input source. Crossterm's event backend covers every
/// supported platform, so this is the only implementation selected at
/// startup.
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}
