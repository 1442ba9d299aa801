use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
use crate::Tetromino;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Absolute block positions.
    pub blocks: [(i8, i8); 4],
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        let (x, y) = value.position();
        Self {
            kind: value.kind(),
            x,
            y,
            blocks: value.blocks(),
        }
    }
}

/// Everything the renderer reads once per tick.
///
/// Board cells are `0` for empty and `PieceKind::index() + 1` for filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub elapsed_ms: u64,
    pub drop_interval_ms: u32,
    pub game_over: bool,
    pub pieces_spawned: u32,
}

impl GameSnapshot {
    /// Elapsed play time as `(minutes, seconds)`.
    pub fn clock(&self) -> (u64, u64) {
        let total_secs = self.elapsed_ms / 1000;
        (total_secs / 60, total_secs % 60)
    }

    /// Piece kind stored in a board cell, if any.
    pub fn cell_kind(&self, x: usize, y: usize) -> Option<PieceKind> {
        let v = *self.board.get(y)?.get(x)?;
        v.checked_sub(1)
            .and_then(|i| PieceKind::from_index(usize::from(i)))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            elapsed_ms: 0,
            drop_interval_ms: 0,
            game_over: false,
            pieces_spawned: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_splits_minutes_and_seconds() {
        let snap = GameSnapshot {
            elapsed_ms: 125_999,
            ..GameSnapshot::default()
        };
        assert_eq!(snap.clock(), (2, 5));
    }

    #[test]
    fn cell_kind_decodes_grid_values() {
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = 1;
        snap.board[19][1] = 5;
        assert_eq!(snap.cell_kind(0, 19), Some(PieceKind::Straight));
        assert_eq!(snap.cell_kind(1, 19), Some(PieceKind::Skew));
        assert_eq!(snap.cell_kind(2, 19), None);
        assert_eq!(snap.cell_kind(99, 0), None);
    }
}
