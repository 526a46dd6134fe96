//! Game state module - owns the grid, the falling piece, hold and queue
//!
//! Commands never report success. A move or rotation that would leave the
//! grid or overlap a locked block is dropped and the piece stays where it
//! was; front ends only observe the resulting state.
//!
//! Once `game_over` is set every command is a no-op. Callers are still
//! expected to check [`GameState::game_over`] before dispatching input.

use crate::grid::Grid;
use crate::queue::BlockQueue;
use crate::scoring::line_clear_score;
use crate::shapes::Piece;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, LockEvent, Position, ShapeKind};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    current: Piece,
    held: Option<ShapeKind>,
    /// Cleared by a successful hold, restored when the next piece spawns.
    can_hold: bool,
    queue: BlockQueue,
    score: u32,
    lines: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    game_over: bool,
}

impl GameState {
    /// Create a new game on an empty grid with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::from_parts(Grid::new(), BlockQueue::new(seed))
    }

    /// Start a game on an existing grid, spawning the first piece from `queue`.
    ///
    /// If that piece does not fit, the game starts in the game-over state.
    pub fn from_parts(grid: Grid, mut queue: BlockQueue) -> Self {
        let current = Piece::spawn(queue.take_next());
        let game_over = !grid.fits(&current);

        Self {
            grid,
            current,
            held: None,
            can_hold: true,
            queue,
            score: 0,
            lines: 0,
            last_event: None,
            game_over,
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The falling piece, or None once the game is over
    pub fn current(&self) -> Option<Piece> {
        (!self.game_over).then_some(self.current)
    }

    pub fn current_tiles(&self) -> Option<[Position; 4]> {
        self.current().map(|p| p.tile_positions())
    }

    pub fn next_shape(&self) -> ShapeKind {
        self.queue.peek_next()
    }

    pub fn held(&self) -> Option<ShapeKind> {
        self.held
    }

    pub fn seed(&self) -> u64 {
        self.queue.seed()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a command
    pub fn apply(&mut self, command: Command) {
        if self.game_over {
            log::debug!("{} ignored after game over", command.as_str());
            return;
        }
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveDown => self.move_down(),
            Command::RotateCw => self.rotate_cw(),
            Command::RotateCcw => self.rotate_ccw(),
            Command::Hold => self.hold(),
            Command::Drop => self.drop(),
        }
    }

    pub fn move_left(&mut self) {
        self.try_move(0, -1);
    }

    pub fn move_right(&mut self) {
        self.try_move(0, 1);
    }

    /// Move down one row, or lock the piece if it cannot move
    pub fn move_down(&mut self) {
        if self.game_over {
            log::debug!("move_down ignored after game over");
            return;
        }
        if !self.try_move(1, 0) {
            self.lock_current();
        }
    }

    pub fn rotate_cw(&mut self) {
        self.try_place(self.current.rotated_cw());
    }

    pub fn rotate_ccw(&mut self) {
        self.try_place(self.current.rotated_ccw());
    }

    /// Rows the piece can still fall before it would stop fitting
    pub fn drop_distance(&self) -> u32 {
        let mut distance = 0;
        while self.grid.fits(&self.current.moved(distance as i32 + 1, 0)) {
            distance += 1;
        }
        distance
    }

    /// Absolute tiles of the ghost piece
    pub fn ghost_tiles(&self) -> Option<[Position; 4]> {
        let distance = self.drop_distance() as i32;
        self.current().map(|p| p.moved(distance, 0).tile_positions())
    }

    /// Drop the piece to its landing row and lock it
    pub fn drop(&mut self) {
        if self.game_over {
            log::debug!("drop ignored after game over");
            return;
        }
        let distance = self.drop_distance();
        self.current = self.current.moved(distance as i32, 0);
        self.lock_current();
    }

    /// Swap the falling piece with the hold slot
    ///
    /// Allowed once per spawned piece. With an empty slot the falling piece is
    /// stored and the next one comes from the queue. The incoming piece
    /// restarts at its spawn offset.
    ///
    /// Contract: if the incoming piece would not fit at its spawn offset the
    /// hold is refused and nothing changes, queue included.
    pub fn hold(&mut self) {
        if self.game_over || !self.can_hold {
            return;
        }

        let incoming = self.held.unwrap_or_else(|| self.queue.peek_next());
        let candidate = Piece::spawn(incoming);
        if !self.grid.fits(&candidate) {
            log::debug!("hold refused: {:?} does not fit at spawn", incoming);
            return;
        }

        if self.held.is_none() {
            self.queue.take_next();
        }
        log::debug!("hold: {:?} -> slot, {:?} active", self.current.kind, incoming);
        self.held = Some(self.current.kind);
        self.current = candidate;
        self.can_hold = false;
    }

    /// Try to move the falling piece
    fn try_move(&mut self, rows: i32, columns: i32) -> bool {
        self.try_place(self.current.moved(rows, columns))
    }

    /// Replace the falling piece with `candidate` if it fits
    fn try_place(&mut self, candidate: Piece) -> bool {
        if self.game_over || !self.grid.fits(&candidate) {
            return false;
        }
        self.current = candidate;
        true
    }

    /// Lock the falling piece, clear rows, score and spawn the next piece
    fn lock_current(&mut self) {
        let locked = self.current;
        self.grid.lock(&locked);

        let cleared = self.grid.clear_full_rows();
        let rows = cleared.len();
        let awarded = line_clear_score(rows);
        self.score = self.score.saturating_add(awarded);
        self.lines += rows as u32;
        if rows > 0 {
            log::debug!("cleared rows {:?} (+{})", cleared.as_slice(), awarded);
        }

        self.current = Piece::spawn(self.queue.take_next());
        self.can_hold = true;

        if !self.grid.fits(&self.current) {
            self.game_over = true;
            log::info!("game over: score {} lines {}", self.score, self.lines);
        }

        self.last_event = Some(LockEvent {
            shape: locked.kind,
            rows_cleared: rows as u32,
            score_awarded: awarded,
            game_over: self.game_over,
        });
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.cells);

        out.current = self.current().map(ActiveSnapshot::from);
        out.ghost_offset = if self.game_over { 0 } else { self.drop_distance() };
        out.next = self.queue.peek_next();
        out.held = self.held;
        out.can_hold = self.can_hold;
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rotation, GRID_COLUMNS, GRID_ROWS};

    fn with_first(kind: ShapeKind) -> GameState {
        GameState::from_parts(Grid::new(), BlockQueue::starting_with(kind, 12345))
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert!(state.held.is_none());
        assert!(state.can_hold);
        assert_eq!(state.current.rotation, Rotation::North);
        assert_ne!(state.current.kind, state.next_shape());
    }

    #[test]
    fn test_move_left_until_wall() {
        let mut state = with_first(ShapeKind::O);
        let start = state.current.offset;

        for _ in 0..20 {
            state.move_left();
        }
        assert_eq!(state.current.offset, Position::new(start.row, 0));

        for _ in 0..20 {
            state.move_right();
        }
        assert_eq!(
            state.current.offset,
            Position::new(start.row, GRID_COLUMNS as i32 - 2)
        );
    }

    #[test]
    fn test_rotate_blocked_at_wall_is_rejected() {
        let mut state = with_first(ShapeKind::I);
        // At spawn the vertical states would poke above row 0.
        state.rotate_ccw();
        assert_eq!(state.current.rotation, Rotation::North);

        // Vertical I in the West state occupies column offset + 1.
        state.move_down();
        state.rotate_ccw();
        assert_eq!(state.current.rotation, Rotation::West);
        for _ in 0..10 {
            state.move_left();
        }
        assert_eq!(state.current.offset.column, -1);

        // Back to horizontal would need column -1: no kicks, so it stays put.
        state.rotate_cw();
        assert_eq!(state.current.rotation, Rotation::West);
    }

    #[test]
    fn test_drop_locks_and_spawns() {
        let mut state = with_first(ShapeKind::O);
        let next = state.next_shape();

        state.drop();

        let floor = GRID_ROWS as i32 - 1;
        assert_eq!(state.grid.get(Position::new(floor, 4)), Some(ShapeKind::O.id()));
        assert_eq!(state.current.kind, next);
        let event = state.take_last_event().unwrap();
        assert_eq!(event.shape, ShapeKind::O);
        assert_eq!(event.rows_cleared, 0);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_hold_empty_slot_takes_from_queue() {
        let mut state = with_first(ShapeKind::T);
        let next = state.next_shape();

        state.hold();

        assert_eq!(state.held, Some(ShapeKind::T));
        assert_eq!(state.current.kind, next);
        assert_eq!(state.current, Piece::spawn(next));
        assert!(!state.can_hold);
    }

    #[test]
    fn test_hold_swap_resets_to_spawn() {
        let mut state = with_first(ShapeKind::T);
        state.hold();
        state.drop();
        assert!(state.can_hold);

        let active = state.current.kind;
        state.move_right();
        state.rotate_cw();
        state.hold();

        assert_eq!(state.current, Piece::spawn(ShapeKind::T));
        assert_eq!(state.held, Some(active));
    }

    #[test]
    fn test_hold_refused_when_incoming_blocked() {
        let mut state = with_first(ShapeKind::I);
        state.hold();
        state.drop();

        // Block the I spawn row but leave the current piece alone.
        let current = state.current;
        state.current = current.moved(10, 0);
        for c in 0..GRID_COLUMNS as i32 {
            state.grid.set(Position::new(0, c), Some(ShapeKind::Z));
        }
        let before = state.snapshot();

        state.hold();

        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_commands_ignored_after_game_over() {
        let mut state = with_first(ShapeKind::O);
        state.game_over = true;
        let before = state.clone();

        for cmd in Command::ALL {
            state.apply(cmd);
        }

        assert_eq!(state.grid, before.grid);
        assert_eq!(state.current, before.current);
        assert_eq!(state.score, before.score);
        assert_eq!(state.held, before.held);
        assert!(state.current().is_none());
    }

    #[test]
    fn test_ghost_tiles_on_floor() {
        let state = with_first(ShapeKind::O);
        let ghost = state.ghost_tiles().unwrap();
        let bottom = GRID_ROWS as i32 - 1;
        assert!(ghost.iter().all(|t| t.row == bottom || t.row == bottom - 1));
        assert_eq!(state.snapshot().ghost_tiles(), Some(ghost));
    }
}
