//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has
//! **no dependencies** on rendering, input devices, timers or I/O, making it:
//!
//! - **Deterministic**: the same seed and command sequence produce the same game
//! - **Testable**: every rule is reachable from plain function calls
//! - **Single-writer**: no internal locking; callers serialize commands
//!
//! # Module Structure
//!
//! - [`grid`]: 22x10 playfield with collision queries and line clearing
//! - [`game_state`]: falling piece, hold slot, score and game-over detection
//! - [`shapes`]: tetromino rotation tables and the piece in play
//! - [`queue`]: seeded next-piece randomizer without immediate repeats
//! - [`scoring`]: line clear points and the gravity delay curve
//! - [`snapshot`]: read-only state copies for front ends
//!
//! # Game Rules
//!
//! - **Rotation**: four fixed states per shape, no wall kicks; a rotation
//!   either fits as computed or is rejected
//! - **Lock**: a piece locks when it cannot move down, or immediately on drop
//! - **Line clear**: every full row is removed and the rows above fall
//! - **Hold**: once per spawned piece
//! - **Game over**: the next piece does not fit at its spawn position
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::Command;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::RotateCw);
//! game.apply(Command::Drop);
//!
//! assert!(!game.game_over());
//! assert_eq!(game.take_last_event().map(|e| e.rows_cleared), Some(0));
//! ```

pub mod game_state;
pub mod grid;
pub mod queue;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::Grid;
pub use queue::BlockQueue;
pub use scoring::{line_clear_score, GravityCurve};
pub use shapes::{get_cells, spawn_offset, Piece};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
