//! Shapes module - tetromino cell tables and the piece in play
//!
//! Every kind carries four precomputed rotation states. Rotating is a pure
//! change of state; whether the result fits is decided by the game state.

use crate::types::{Position, Rotation, ShapeKind};

/// Cells of a shape in one rotation, relative to the piece offset
pub type ShapeCells = [Position; 4];

const fn p(row: i32, column: i32) -> Position {
    Position::new(row, column)
}

/// Rotation tables indexed by `Rotation::index()`.
const I_CELLS: [ShapeCells; 4] = [
    [p(1, 0), p(1, 1), p(1, 2), p(1, 3)],
    [p(0, 2), p(1, 2), p(2, 2), p(3, 2)],
    [p(2, 0), p(2, 1), p(2, 2), p(2, 3)],
    [p(0, 1), p(1, 1), p(2, 1), p(3, 1)],
];

const J_CELLS: [ShapeCells; 4] = [
    [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(0, 2), p(1, 1), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 2)],
    [p(0, 1), p(1, 1), p(2, 0), p(2, 1)],
];

const L_CELLS: [ShapeCells; 4] = [
    [p(0, 2), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(2, 2)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 0)],
    [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
];

// Same square in every state.
const O_CELLS: [ShapeCells; 4] = [[p(0, 0), p(0, 1), p(1, 0), p(1, 1)]; 4];

const S_CELLS: [ShapeCells; 4] = [
    [p(0, 1), p(0, 2), p(1, 0), p(1, 1)],
    [p(0, 1), p(1, 1), p(1, 2), p(2, 2)],
    [p(1, 1), p(1, 2), p(2, 0), p(2, 1)],
    [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
];

const T_CELLS: [ShapeCells; 4] = [
    [p(0, 1), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(1, 2), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 1)],
    [p(0, 1), p(1, 0), p(1, 1), p(2, 1)],
];

const Z_CELLS: [ShapeCells; 4] = [
    [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
    [p(0, 2), p(1, 1), p(1, 2), p(2, 1)],
    [p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
    [p(0, 1), p(1, 0), p(1, 1), p(2, 0)],
];

fn table(kind: ShapeKind) -> &'static [ShapeCells; 4] {
    match kind {
        ShapeKind::I => &I_CELLS,
        ShapeKind::J => &J_CELLS,
        ShapeKind::L => &L_CELLS,
        ShapeKind::O => &O_CELLS,
        ShapeKind::S => &S_CELLS,
        ShapeKind::T => &T_CELLS,
        ShapeKind::Z => &Z_CELLS,
    }
}

/// Get the cell offsets for a shape kind and rotation
pub fn get_cells(kind: ShapeKind, rotation: Rotation) -> ShapeCells {
    table(kind)[rotation.index()]
}

/// Offset a freshly spawned piece is placed at.
///
/// The I piece starts one row higher because its North cells sit on row 1.
pub fn spawn_offset(kind: ShapeKind) -> Position {
    match kind {
        ShapeKind::I => p(-1, 3),
        ShapeKind::O => p(0, 4),
        _ => p(0, 3),
    }
}

/// A shape in play: kind, rotation state and grid offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub offset: Position,
}

impl Piece {
    /// Create a piece at its spawn offset in the North state
    pub fn spawn(kind: ShapeKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            offset: spawn_offset(kind),
        }
    }

    /// Cell offsets for the current rotation
    pub fn cells(&self) -> ShapeCells {
        get_cells(self.kind, self.rotation)
    }

    /// Absolute grid positions occupied by the piece
    pub fn tile_positions(&self) -> [Position; 4] {
        self.cells().map(|cell| cell + self.offset)
    }

    /// Same piece one rotation state clockwise
    pub fn rotated_cw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }

    /// Same piece one rotation state counter-clockwise
    pub fn rotated_ccw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_ccw(),
            ..*self
        }
    }

    /// Same piece translated by (rows, columns)
    pub fn moved(&self, rows: i32, columns: i32) -> Self {
        Self {
            offset: self.offset + p(rows, columns),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_four_distinct_cells() {
        for kind in ShapeKind::ALL {
            for state in 0..4 {
                let cells = get_cells(kind, Rotation::from_index(state));
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(cells[i], cells[j], "{:?} state {}", kind, state);
                    }
                }
            }
        }
    }

    #[test]
    fn rotation_states_differ_except_o() {
        for kind in ShapeKind::ALL {
            let north = get_cells(kind, Rotation::North);
            let east = get_cells(kind, Rotation::East);
            if kind == ShapeKind::O {
                assert_eq!(north, east);
            } else {
                assert_ne!(north, east, "{:?}", kind);
            }
        }
    }

    #[test]
    fn spawn_tiles_sit_in_buffer_rows() {
        for kind in ShapeKind::ALL {
            let piece = Piece::spawn(kind);
            for tile in piece.tile_positions() {
                assert!((0..2).contains(&tile.row), "{:?} {:?}", kind, tile);
                assert!((0..10).contains(&tile.column), "{:?} {:?}", kind, tile);
            }
        }
    }

    #[test]
    fn rotation_does_not_move_offset() {
        let piece = Piece::spawn(ShapeKind::T).moved(5, 1);
        let rotated = piece.rotated_cw();
        assert_eq!(rotated.offset, piece.offset);
        assert_eq!(rotated.rotation, Rotation::East);
        assert_eq!(rotated.rotated_ccw(), piece);
    }

    #[test]
    fn tile_positions_add_offset() {
        let piece = Piece::spawn(ShapeKind::O);
        assert_eq!(
            piece.tile_positions(),
            [p(0, 4), p(0, 5), p(1, 4), p(1, 5)]
        );
    }
}
