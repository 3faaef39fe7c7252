//! Terminal rendering module.
//!
//! A pure view maps game state to a text frame; the renderer owns stdout
//! and the raw-mode lifecycle.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw frames in place (home the cursor, overwrite) for flicker-free
//!   animation without clearing the screen every frame

pub mod game_view;
pub mod renderer;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
