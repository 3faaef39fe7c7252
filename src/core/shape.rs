//! Shape module - tetromino grids and the rotation transform
//!
//! A shape is a small 0/1 grid stored row-major in a flat fixed-capacity
//! buffer, the same layout the board uses. Only the seven spawn
//! orientations are cataloged; rotation derives new grids on demand.

use arrayvec::ArrayVec;

use crate::types::ShapeKind;

/// A shape bounding box never exceeds 4x4 cells
const MAX_CELLS: usize = 16;

/// An immutable 0/1 cell grid with an explicit bounding box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: ArrayVec<u8, MAX_CELLS>,
}

impl Shape {
    /// Build a shape from row slices. All rows must share one length.
    fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        debug_assert!(rows.iter().all(|row| row.len() == width));

        let mut cells = ArrayVec::new();
        for row in rows {
            cells
                .try_extend_from_slice(row)
                .expect("shape grid exceeds the 4x4 bounding box");
        }

        Self {
            width: width as u8,
            height: height as u8,
            cells,
        }
    }

    /// Bounding box width in cells
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Bounding box height in cells
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell value at (x, y) within the bounding box
    pub fn at(&self, x: u8, y: u8) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.cells[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Iterate occupied cells as (x, y) offsets from the top-left corner
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != 0)
            .map(move |(i, _)| ((i % width) as i8, (i / width) as i8))
    }

    /// 90 degree clockwise rotation: reverse the row order, then transpose.
    ///
    /// Output cell (row i, col j) equals input cell (row height-1-j, col i),
    /// so an h x w grid becomes a w x h grid.
    pub fn rotated(&self) -> Shape {
        let (w, h) = (self.width as usize, self.height as usize);

        let mut cells = ArrayVec::new();
        for i in 0..w {
            for j in 0..h {
                cells.push(self.cells[(h - 1 - j) * w + i]);
            }
        }

        Shape {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

/// Canonical spawn-orientation grid for a shape kind
pub fn spawn_shape(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        ShapeKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        ShapeKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        ShapeKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        ShapeKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        ShapeKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        ShapeKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}
