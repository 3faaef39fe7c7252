//! Input module - the keyboard capability for the game loop.
//!
//! `map` is the pure key-to-action translation; `source` is the bounded,
//! non-blocking poll the loop suspends on.

pub mod map;
pub mod source;

pub use map::{handle_key_event, should_quit};
pub use source::{CrosstermInput, InputSource};
