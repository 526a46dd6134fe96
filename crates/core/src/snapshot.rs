use crate::shapes::Piece;
use crate::types::{Position, Rotation, ShapeKind, GRID_COLUMNS, GRID_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: ShapeKind,
    pub rotation: Rotation,
    pub offset: Position,
    pub tiles: [Position; 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.kind,
            rotation: value.rotation,
            offset: value.offset,
            tiles: value.tile_positions(),
        }
    }
}

/// Read-only copy of everything a front end needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cells: [[u8; GRID_COLUMNS]; GRID_ROWS],
    /// None once the game is over.
    pub current: Option<ActiveSnapshot>,
    /// Rows the ghost sits below the active piece.
    pub ghost_offset: u32,
    pub next: ShapeKind,
    pub held: Option<ShapeKind>,
    pub can_hold: bool,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[0u8; GRID_COLUMNS]; GRID_ROWS];
        self.current = None;
        self.ghost_offset = 0;
        self.next = ShapeKind::I;
        self.held = None;
        self.can_hold = true;
        self.score = 0;
        self.lines = 0;
        self.game_over = false;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Absolute tiles of the ghost piece, if there is an active piece.
    pub fn ghost_tiles(&self) -> Option<[Position; 4]> {
        let rows = self.ghost_offset as i32;
        self.current
            .map(|active| active.tiles.map(|t| Position::new(t.row + rows, t.column)))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            cells: [[0u8; GRID_COLUMNS]; GRID_ROWS],
            current: None,
            ghost_offset: 0,
            next: ShapeKind::I,
            held: None,
            can_hold: true,
            score: 0,
            lines: 0,
            game_over: false,
        };
        s.clear();
        s
    }
}
