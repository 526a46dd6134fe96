//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data with no I/O, making them usable from the core
//! rules, the session runtime and any front end.
//!
//! # Grid Dimensions
//!
//! - **Rows**: 22 (indexed 0-21, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Spawn buffer**: the top 2 rows, where new pieces appear
//!
//! # Gravity Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_DELAY_MS` | 1000 | Gravity delay at score 0 |
//! | `MIN_DELAY_MS` | 75 | Gravity delay floor |
//! | `DELAY_STEP_MS` | 25 | Delay removed per scoring step |
//! | `POINTS_PER_STEP` | 100 | Score needed for one step |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Position, Rotation, ShapeKind, GRID_COLUMNS, GRID_ROWS};
//!
//! let kind = ShapeKind::from_id(6).unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//!
//! let p = Position::new(1, 2) + Position::new(3, 4);
//! assert_eq!(p, Position::new(4, 6));
//!
//! assert_eq!(GRID_ROWS, 22);
//! assert_eq!(GRID_COLUMNS, 10);
//! ```

use std::ops::Add;

/// Grid height in cells, including the spawn buffer.
pub const GRID_ROWS: usize = 22;

/// Grid width in cells.
pub const GRID_COLUMNS: usize = 10;

/// Hidden rows at the top of the grid where pieces spawn.
pub const SPAWN_BUFFER_ROWS: usize = 2;

/// Gravity delay at score 0.
pub const MAX_DELAY_MS: u32 = 1000;

/// Gravity never gets faster than this.
pub const MIN_DELAY_MS: u32 = 75;

/// Delay removed for every `POINTS_PER_STEP` points scored.
pub const DELAY_STEP_MS: u32 = 25;

/// Score that buys one `DELAY_STEP_MS` decrease (one single-line clear).
pub const POINTS_PER_STEP: u32 = 100;

/// Line clear scoring table, indexed by rows cleared in one lock.
///
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Value stored in an empty grid cell.
pub const EMPTY_CELL: u8 = 0;

/// A (row, column) coordinate on the grid.
///
/// Rows grow downwards, columns grow to the right. Values are signed so that
/// shape offsets and spawn positions above the grid can be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            row: self.row + rhs.row,
            column: self.column + rhs.column,
        }
    }
}

/// The seven tetromino kinds
///
/// Discriminants are the ids written into the grid when a piece locks:
/// - **I** = 1, **J** = 2, **L** = 3, **O** = 4, **S** = 5, **T** = 6, **Z** = 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeKind {
    I = 1,
    J = 2,
    L = 3,
    O = 4,
    S = 5,
    T = 6,
    Z = 7,
}

impl ShapeKind {
    /// All kinds in id order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Grid id of this kind (1-7).
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a kind by grid id
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_id(1), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_id(7), Some(ShapeKind::Z));
    /// assert_eq!(ShapeKind::from_id(0), None);
    /// assert_eq!(ShapeKind::from_id(8), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Parse kind from its letter (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "t" => Some(ShapeKind::T),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::O => "o",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
        }
    }
}

/// Rotation states
///
/// - **North**: spawn orientation (state 0)
/// - **East**: one clockwise turn (state 1)
/// - **South**: two turns (state 2)
/// - **West**: one counter-clockwise turn (state 3)
///
/// The cycle is North → East → South → West → North, so the state is always
/// the rotation count modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Rotation state number (0-3).
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from any state number, taken modulo 4.
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Commands accepted by the game state
///
/// None of them carries arguments or reports success; acceptance is only
/// visible through the resulting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    MoveDown,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Swap the active piece with the hold slot (once per piece)
    Hold,
    /// Drop the piece to its landing row and lock it
    Drop,
}

impl Command {
    /// Every command, in protocol order.
    pub const ALL: [Command; 7] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::MoveDown,
        Command::RotateCw,
        Command::RotateCcw,
        Command::Hold,
        Command::Drop,
    ];

    /// Parse command from string (case-insensitive, short aliases allowed)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("cw"), Some(Command::RotateCw));
    /// assert_eq!(Command::from_str("DROP"), Some(Command::Drop));
    /// assert_eq!(Command::from_str("jump"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "movedown" | "down" => Some(Command::MoveDown),
            "rotatecw" | "cw" => Some(Command::RotateCw),
            "rotateccw" | "ccw" => Some(Command::RotateCcw),
            "hold" => Some(Command::Hold),
            "drop" => Some(Command::Drop),
            _ => None,
        }
    }

    /// Convert to camelCase string for the protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::Hold => "hold",
            Command::Drop => "drop",
        }
    }
}

/// Summary of a single lock, kept until an observer takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub shape: ShapeKind,
    pub rows_cleared: u32,
    pub score_awarded: u32,
    pub game_over: bool,
}
