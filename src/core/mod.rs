//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod shape;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{FallingPiece, GameState};
pub use rng::{PieceQueue, SimpleRng};
pub use shape::{spawn_shape, Shape};
