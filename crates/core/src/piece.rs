//! The active falling piece.

use crate::pieces::{base_shape, rotate_shape, PieceShape, SPAWN_POSITION};
use crate::rng::RandomSource;
use crate::types::PieceKind;
use crate::Board;

/// Active falling piece
///
/// Holds its current (possibly rotated) shape and an anchor. Absolute block
/// positions are `anchor + offset` for each of the four offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    kind: PieceKind,
    shape: PieceShape,
    x: i8,
    y: i8,
    placed: bool,
}

impl Tetromino {
    /// Create a piece of `kind` at the spawn anchor in its base orientation.
    pub fn new(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            shape: base_shape(kind),
            x,
            y,
            placed: false,
        }
    }

    /// Spawn a piece, drawing the kind from `rng` when none is given.
    ///
    /// The board is not consulted; callers decide what a blocked spawn means.
    pub fn spawn<R: RandomSource + ?Sized>(kind: Option<PieceKind>, rng: &mut R) -> Self {
        Self::new(kind.unwrap_or_else(|| rng.next_kind()))
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Current block offsets relative to the anchor.
    pub fn shape(&self) -> PieceShape {
        self.shape
    }

    /// Anchor position `(x, y)`.
    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Absolute board positions of the four blocks.
    pub fn blocks(&self) -> [(i8, i8); 4] {
        self.shape.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check whether the piece fits after translating by `(dx, dy)`.
    pub fn can_move(&self, dx: i8, dy: i8, board: &Board) -> bool {
        self.blocks()
            .iter()
            .all(|&(x, y)| board.is_valid(x + dx, y + dy))
    }

    /// Translate the anchor. Only call after `can_move` accepted the same delta.
    pub fn move_by(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Rotate a quarter turn about the local origin if the result fits at the
    /// current anchor. Returns false and leaves the shape untouched otherwise.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let rotated = rotate_shape(&self.shape);
        let fits = rotated
            .iter()
            .all(|&(dx, dy)| board.is_valid(self.x + dx, self.y + dy));

        if fits {
            self.shape = rotated;
        }
        fits
    }

    /// Write this piece into the board. Only call once it can no longer fall.
    pub fn place_on_board(&mut self, board: &mut Board) {
        board.commit(&self.blocks(), self.kind);
        self.placed = true;
    }
}
