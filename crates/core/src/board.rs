//! Board module - manages the game grid
//!
//! The board is a 13x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..12 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices removed by a single [`Board::clear_full_rows`] call.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 13 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        let start = y * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Rows from top (y = 0) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(WIDTH)
    }

    /// Write `kind` into every given position.
    ///
    /// Positions outside the board are skipped; occupancy is not checked.
    pub fn commit(&mut self, blocks: &[(i8, i8)], kind: PieceKind) {
        for &(x, y) in blocks {
            self.set(x, y, Some(kind));
        }
    }

    /// Remove every full row and pad the top with empty rows.
    ///
    /// Non-full rows keep their relative order. Returns the indices of the
    /// removed rows (pre-clear coordinates, sorted bottom to top).
    /// Uses a two-pointer pass with no allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = HEIGHT;

        // Scan from bottom to top
        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * WIDTH;
                    self.cells
                        .copy_within(src_start..src_start + WIDTH, write_y * WIDTH);
                }
            }
        }

        // Everything above the last written row is fresh empty space
        self.cells[..write_y * WIDTH].fill(None);

        cleared_rows
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board into a u8 grid: 0 = empty, `kind.index() + 1` = filled.
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, cell) in dst.iter_mut().zip(src) {
                *d = cell.map_or(0, |kind| kind.index() as u8 + 1);
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(12, 0), Some(12));
        assert_eq!(Board::index(0, 1), Some(13));
        assert_eq!(Board::index(12, 19), Some(259));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(13, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(PieceKind::Straight));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.cells[0], Some(PieceKind::Straight));
        assert_eq!(board.cells[10 * 13 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_clear_keeps_order_of_remaining_rows() {
        let mut board = Board::new();
        board.set(0, 16, Some(PieceKind::L));
        board.set(1, 18, Some(PieceKind::Skew));
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 17, Some(PieceKind::Square));
            board.set(x, 19, Some(PieceKind::Square));
        }

        let cleared = board.clear_full_rows();

        assert_eq!(cleared.as_slice(), &[19, 17]);
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::L)));
        assert_eq!(board.get(1, 19), Some(Some(PieceKind::Skew)));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::new();
        board.set(2, 3, Some(PieceKind::Skew));

        let mut grid = [[0u8; WIDTH]; HEIGHT];
        board.write_u8_grid(&mut grid);

        assert_eq!(grid[3][2], 5);
        assert_eq!(grid.iter().flatten().filter(|&&v| v != 0).count(), 1);
    }
}
