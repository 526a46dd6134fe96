//! Grid module - manages the playfield
//!
//! The grid is 22 rows x 10 columns; each cell holds 0 (empty) or the id of
//! the shape that locked there. The top two rows are the spawn buffer.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: `Position { row, column }`, row 0 at the top.

use arrayvec::ArrayVec;

use crate::shapes::Piece;
use crate::types::{Position, ShapeKind, EMPTY_CELL, GRID_COLUMNS, GRID_ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = GRID_ROWS * GRID_COLUMNS;

/// The playfield - flat row-major array of cell ids
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [u8; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [EMPTY_CELL; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(p: Position) -> Option<usize> {
        if Self::contains(p) {
            Some(p.row as usize * GRID_COLUMNS + p.column as usize)
        } else {
            None
        }
    }

    #[inline(always)]
    fn contains(p: Position) -> bool {
        p.row >= 0
            && (p.row as usize) < GRID_ROWS
            && p.column >= 0
            && (p.column as usize) < GRID_COLUMNS
    }

    pub fn rows(&self) -> usize {
        GRID_ROWS
    }

    pub fn columns(&self) -> usize {
        GRID_COLUMNS
    }

    /// Cell id at `p`, or None if out of bounds
    pub fn get(&self, p: Position) -> Option<u8> {
        Self::index(p).map(|idx| self.cells[idx])
    }

    /// Set the cell at `p` to a shape id or empty.
    /// Returns false if out of bounds.
    pub fn set(&mut self, p: Position, cell: Option<ShapeKind>) -> bool {
        match Self::index(p) {
            Some(idx) => {
                self.cells[idx] = cell.map_or(EMPTY_CELL, ShapeKind::id);
                true
            }
            None => false,
        }
    }

    /// Whether `p` lies on the grid
    pub fn is_inside(&self, p: Position) -> bool {
        Self::contains(p)
    }

    /// Whether the cell at `p` holds no block.
    ///
    /// Callers must check [`Grid::is_inside`] first. An out-of-bounds query
    /// trips a debug assertion; release builds report it as occupied.
    pub fn is_empty(&self, p: Position) -> bool {
        debug_assert!(Self::contains(p), "is_empty queried outside the grid: {:?}", p);
        matches!(self.get(p), Some(EMPTY_CELL))
    }

    fn row_slice(&self, r: usize) -> &[u8] {
        let start = r * GRID_COLUMNS;
        &self.cells[start..start + GRID_COLUMNS]
    }

    /// Cells of row `r`, left to right
    pub fn row(&self, r: usize) -> Option<&[u8]> {
        (r < GRID_ROWS).then(|| self.row_slice(r))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, r: usize) -> bool {
        r < GRID_ROWS && self.row_slice(r).iter().all(|&c| c != EMPTY_CELL)
    }

    /// Check if a row holds no blocks
    pub fn is_row_empty(&self, r: usize) -> bool {
        r < GRID_ROWS && self.row_slice(r).iter().all(|&c| c == EMPTY_CELL)
    }

    /// Clear row `r` and shift every row above it down by one.
    /// Row 0 becomes empty; rows below `r` are untouched.
    pub fn clear_row(&mut self, r: usize) {
        if r >= GRID_ROWS {
            return;
        }

        // Rows above `r` move down one; copy_within handles the overlap.
        self.cells.copy_within(0..r * GRID_COLUMNS, GRID_COLUMNS);
        self.cells[..GRID_COLUMNS].fill(EMPTY_CELL);
    }

    /// Clear every full row, scanning top to bottom.
    /// Returns the cleared row indices in scan order. A locked piece fills at
    /// most four rows, but a grid built by hand may hold more.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, GRID_ROWS> {
        let mut cleared = ArrayVec::new();

        // Clearing row r only moves rows above it, so rows below r keep their
        // index and the scan can continue downwards.
        for r in 0..GRID_ROWS {
            if self.is_row_full(r) {
                self.clear_row(r);
                cleared.push(r);
            }
        }

        cleared
    }

    /// Whether every tile of `piece` is inside the grid and on an empty cell
    pub fn fits(&self, piece: &Piece) -> bool {
        piece
            .tile_positions()
            .iter()
            .all(|&p| self.is_inside(p) && self.is_empty(p))
    }

    /// Write the piece's shape id into each of its tiles.
    /// Tiles outside the grid are skipped.
    pub fn lock(&mut self, piece: &Piece) {
        for p in piece.tile_positions() {
            self.set(p, Some(piece.kind));
        }
    }

    /// Raw cells, row-major
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Copy the grid into a fixed 2D array (for snapshots)
    pub fn write_rows(&self, out: &mut [[u8; GRID_COLUMNS]; GRID_ROWS]) {
        for (r, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row_slice(r));
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
