//! Terminal falling-block puzzle game.
//!
//! `core` holds the pure game logic, `term` the text renderer, `input` the
//! keyboard capability. The binary in `main.rs` wires them into the loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
