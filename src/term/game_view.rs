//! GameView: maps `core::GameState` onto a text frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{spawn_shape, GameState};
use crate::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_GAP, PREVIEW_SIZE};

const GRID_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Two-character glyphs per board cell
const FILLED: &str = "[]";
const EMPTY: &str = "· ";

/// Columns between the board frame and the preview column
const PREVIEW_INDENT: &str = "    ";

/// A lightweight text renderer for the game.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into a fresh string.
    pub fn render(&self, state: &GameState) -> String {
        let mut out = String::new();
        self.render_into(state, &mut out);
        out
    }

    /// Render into a caller-owned buffer, reusing its allocation.
    ///
    /// Callers should keep one buffer and pass it in every frame.
    pub fn render_into(&self, state: &GameState, out: &mut String) {
        out.clear();

        // Project the falling piece onto a copy of the settled grid.
        // Cells outside the visible area (spawn overhang) are skipped.
        let mut grid = [0u8; GRID_SIZE];
        grid.copy_from_slice(state.board().cells());
        if let Some(piece) = state.active() {
            for (dx, dy) in piece.shape.occupied() {
                let x = piece.x + dx;
                let y = piece.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    grid[(y as usize) * (BOARD_WIDTH as usize) + (x as usize)] = 1;
                }
            }
        }

        let previews = state.preview();

        self.push_border(out);
        if !previews.is_empty() {
            out.push_str(PREVIEW_INDENT);
            out.push_str("Next Shapes:");
        }
        out.push('\n');

        for y in 0..BOARD_HEIGHT as usize {
            out.push('|');
            for x in 0..BOARD_WIDTH as usize {
                let filled = grid[y * BOARD_WIDTH as usize + x] != 0;
                out.push_str(if filled { FILLED } else { EMPTY });
            }
            out.push('|');
            self.push_preview_row(previews, y, out);
            out.push('\n');
        }

        self.push_border(out);
        out.push('\n');

        out.push_str(&format!("Score: {}\n", state.score()));
        out.push_str("Controls: A=left, D=right, W=rotate, S=drop, Q=quit\n");
    }

    fn push_border(&self, out: &mut String) {
        out.push('+');
        for _ in 0..BOARD_WIDTH {
            out.push_str("--");
        }
        out.push('+');
    }

    /// Preview column for one board row. Previews are fixed 4x4 boxes
    /// stacked beside the board, with blank rows between them.
    fn push_preview_row(&self, previews: &[ShapeKind], row: usize, out: &mut String) {
        if previews.is_empty() {
            return;
        }

        let stride = PREVIEW_SIZE + PREVIEW_GAP;
        let block = row / stride;
        let row_in_block = row % stride;
        if block >= previews.len() || row_in_block >= PREVIEW_SIZE {
            return;
        }

        let shape = spawn_shape(previews[block]);
        out.push_str(PREVIEW_INDENT);
        for x in 0..PREVIEW_SIZE {
            let filled = (x as u8) < shape.width()
                && (row_in_block as u8) < shape.height()
                && shape.at(x as u8, row_in_block as u8) != 0;
            out.push_str(if filled { FILLED } else { "  " });
        }
    }
}
