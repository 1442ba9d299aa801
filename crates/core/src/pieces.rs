//! Pieces module - base shape catalog and the origin rotation
//!
//! Shapes are four block offsets in a local frame whose origin is the piece
//! anchor. Rotation maps every offset `(x, y)` to `(y, -x)` around that
//! origin. There is no centered pivot and no kick table, so a rotated piece
//! can shift visually and rotation near walls simply fails.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Offset of a single block relative to the piece anchor
pub type BlockOffset = (i8, i8);

/// Shape of a piece - 4 block offsets from the anchor
pub type PieceShape = [BlockOffset; 4];

/// Spawn anchor: horizontally centered on the top row.
pub const SPAWN_POSITION: (i8, i8) = ((BOARD_WIDTH / 2) as i8 - 1, 0);

/// Base (spawn) shape for a piece kind
pub fn base_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::Straight => [(0, 0), (1, 0), (2, 0), (3, 0)],
        PieceKind::Square => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::T => [(1, 0), (2, 0), (3, 0), (2, 1)],
        PieceKind::L => [(0, 1), (0, 2), (0, 3), (1, 3)],
        PieceKind::Skew => [(0, 1), (1, 1), (1, 0), (2, 0)],
    }
}

/// Rotate every offset a quarter turn about the local origin: (x, y) -> (y, -x).
pub fn rotate_shape(shape: &PieceShape) -> PieceShape {
    shape.map(|(x, y)| (y, -x))
}
