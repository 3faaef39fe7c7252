//! Game state module - the per-tick controller
//!
//! Ties together board, shapes and the piece queue: applies input actions,
//! advances gravity on an elapsed-time accumulator, locks pieces, clears
//! lines and spawns replacements until the stack tops out.

use crate::core::shape::{spawn_shape, Shape};
use crate::core::{Board, PieceQueue};
use crate::types::{
    DescendMode, GameAction, GameConfig, ShapeKind, BOARD_WIDTH, FALL_FLOOR_MS, FALL_START_MS,
    FALL_STEP_MS, POINTS_PER_LINE,
};

/// The active falling piece: a shape grid plus the board offset of its
/// top-left cell. Replaced wholesale on every spawn; the shape is replaced
/// (not mutated) on rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallingPiece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl FallingPiece {
    /// Create a piece horizontally centered at the top of the board
    pub fn spawn(kind: ShapeKind) -> Self {
        let shape = spawn_shape(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8;
        Self { shape, x, y: 0 }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<FallingPiece>,
    queue: PieceQueue,
    config: GameConfig,
    score: u32,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    started: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given configuration and RNG seed
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            queue: PieceQueue::new(config.look_ahead, seed),
            config,
            score: 0,
            fall_interval_ms: FALL_START_MS,
            fall_timer_ms: 0,
            started: false,
            game_over: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current milliseconds per gravity step
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&FallingPiece> {
        self.active.as_ref()
    }

    /// Upcoming pieces, soonest first (empty when look-ahead is disabled)
    pub fn preview(&self) -> &[ShapeKind] {
        self.queue.preview()
    }

    /// Apply a player action to the falling piece.
    /// Returns whether the action changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Descend => match self.config.descend {
                DescendMode::SingleStep => self.try_move(0, 1),
                DescendMode::FullDrop => self.full_drop(),
            },
        }
    }

    /// Advance game time. Gravity fires once the accumulated time reaches
    /// the current fall interval; the accumulator then restarts from zero.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.started || self.game_over {
            return;
        }

        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms >= self.fall_interval_ms {
            self.fall_timer_ms = 0;
            self.gravity_step();
        }
    }

    /// Try to shift the active piece; rejected moves leave it in place
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        if self.board.collides(&piece.shape, piece.x + dx, piece.y + dy) {
            return false;
        }

        piece.x += dx;
        piece.y += dy;
        true
    }

    /// Rotation is all-or-nothing: the rotated grid replaces the current
    /// one only when it fits at the unchanged offset.
    fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let rotated = piece.shape.rotated();
        if self.board.collides(&rotated, piece.x, piece.y) {
            return false;
        }

        piece.shape = rotated;
        true
    }

    /// Drop to the lowest non-colliding row without locking; the lock
    /// happens on the next gravity tick, so the piece can still be slid.
    fn full_drop(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let mut moved = false;
        while !self.board.collides(&piece.shape, piece.x, piece.y + 1) {
            piece.y += 1;
            moved = true;
        }
        moved
    }

    /// One forced descent; a blocked descent locks the piece instead
    fn gravity_step(&mut self) {
        let Some(piece) = self.active.as_mut() else {
            return;
        };

        if !self.board.collides(&piece.shape, piece.x, piece.y + 1) {
            piece.y += 1;
            return;
        }

        self.lock_piece();
    }

    /// Settle the piece, clear lines, update score and speed, respawn
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.merge(&piece.shape, piece.x, piece.y);

        let cleared = self.board.clear_full_rows();
        self.score += (cleared as u32) * POINTS_PER_LINE;
        if cleared > 0 {
            self.fall_interval_ms = self
                .fall_interval_ms
                .saturating_sub(FALL_STEP_MS)
                .max(FALL_FLOOR_MS);
        }

        self.spawn_piece();
    }

    /// Spawn the next piece from the queue. A piece that collides at its
    /// spawn cell ends the game; it stays placed so the final frame shows it.
    fn spawn_piece(&mut self) {
        let piece = FallingPiece::spawn(self.queue.draw());
        if self.board.collides(&piece.shape, piece.x, piece.y) {
            self.game_over = true;
        }
        self.active = Some(piece);
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn set_active(&mut self, piece: FallingPiece) {
        self.active = Some(piece);
    }
}
