//! Protocol module - line-delimited JSON for headless front ends
//!
//! Inbound, one request per line, either as JSON
//! (`{"type":"command","action":"moveLeft"}`, `{"type":"restart"}`) or
//! as a bare word (`left`, `restart`).
//! Outbound, every message carries a `type` tag and a sequence number.

use serde::{Deserialize, Serialize};

use crate::core::{ActiveSnapshot, GameSnapshot};
use crate::error::SessionError;
use crate::session::{SessionEvent, SessionRequest};
use crate::types::{Command, GRID_COLUMNS, GRID_ROWS};

// ============== Client -> Game ==============

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundMessage {
    Command { action: String },
    Restart,
}

/// Parse one input line.
///
/// Blank lines yield `Ok(None)`. The bare word `restart` starts a new game.
pub fn parse_input_line(line: &str) -> Result<Option<SessionRequest>, SessionError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let action = if line.starts_with('{') {
        match serde_json::from_str::<InboundMessage>(line)? {
            InboundMessage::Command { action } => action,
            InboundMessage::Restart => return Ok(Some(SessionRequest::Restart)),
        }
    } else if line.eq_ignore_ascii_case("restart") {
        return Ok(Some(SessionRequest::Restart));
    } else {
        line.to_string()
    };

    Command::from_str(&action)
        .map(|command| Some(SessionRequest::Command(command)))
        .ok_or(SessionError::UnknownCommand(action))
}

// ============== Game -> Client ==============

#[derive(Debug, Clone, Serialize)]
pub struct BoardMessage {
    pub rows: usize,
    pub columns: usize,
    /// 0 = empty, 1-7 = shape id
    pub cells: [[u8; GRID_COLUMNS]; GRID_ROWS],
}

#[derive(Debug, Clone, Serialize)]
pub struct ActiveMessage {
    pub shape: &'static str,
    pub rotation: &'static str,
    pub row: i32,
    pub column: i32,
    /// Absolute `[row, column]` of each tile.
    pub tiles: [[i32; 2]; 4],
}

impl From<ActiveSnapshot> for ActiveMessage {
    fn from(value: ActiveSnapshot) -> Self {
        Self {
            shape: value.shape.as_str(),
            rotation: value.rotation.as_str(),
            row: value.offset.row,
            column: value.offset.column,
            tiles: value.tiles.map(|t| [t.row, t.column]),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ObservationMessage {
    pub seq: u64,
    pub board: BoardMessage,
    pub current: Option<ActiveMessage>,
    pub ghost_offset: u32,
    pub next: &'static str,
    pub hold: Option<&'static str>,
    pub can_hold: bool,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl ObservationMessage {
    pub fn from_snapshot(seq: u64, snap: &GameSnapshot) -> Self {
        Self {
            seq,
            board: BoardMessage {
                rows: GRID_ROWS,
                columns: GRID_COLUMNS,
                cells: snap.cells,
            },
            current: snap.current.map(ActiveMessage::from),
            ghost_offset: snap.ghost_offset,
            next: snap.next.as_str(),
            hold: snap.held.map(|k| k.as_str()),
            can_hold: snap.can_hold,
            score: snap.score,
            lines: snap.lines,
            game_over: snap.game_over,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    Observation(ObservationMessage),
    Locked {
        seq: u64,
        shape: &'static str,
        rows_cleared: u32,
        score_awarded: u32,
    },
    GameOver {
        seq: u64,
        final_score: u32,
        lines: u32,
    },
    Error {
        seq: u64,
        message: String,
    },
}

impl OutboundMessage {
    pub fn from_event(seq: u64, event: &SessionEvent) -> Self {
        match event {
            SessionEvent::Snapshot(snap) => {
                Self::Observation(ObservationMessage::from_snapshot(seq, snap))
            }
            SessionEvent::Locked(lock) => Self::Locked {
                seq,
                shape: lock.shape.as_str(),
                rows_cleared: lock.rows_cleared,
                score_awarded: lock.score_awarded,
            },
            SessionEvent::GameOver { final_score, lines } => Self::GameOver {
                seq,
                final_score: *final_score,
                lines: *lines,
            },
        }
    }

    pub fn error(seq: u64, err: &SessionError) -> Self {
        Self::Error {
            seq,
            message: err.to_string(),
        }
    }

    /// Serialize as a single JSON line (without the trailing newline).
    pub fn to_line(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }
}
