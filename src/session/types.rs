//! Values handed across the session store boundary.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{CellState, Cells, PlayerId, BOARD_SIZE};

/// Opaque session identifier.
pub type SessionId = String;

/// Player position inside a session: `0` or `1`.
pub type Slot = usize;

/// Number of slots in a session.
pub const SLOTS: usize = 2;

/// Session lifecycle. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    WaitingForPlayers,
    Placing,
    InProgress,
    Finished,
}

impl GameStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::WaitingForPlayers => "waiting_for_players",
            GameStatus::Placing => "placing",
            GameStatus::InProgress => "in_progress",
            GameStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public player id for a slot.
pub const fn player_id_for(slot: Slot) -> PlayerId {
    slot as PlayerId + 1
}

/// What a player receives on creating or joining a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTicket {
    pub session_id: SessionId,
    pub player_id: PlayerId,
    pub player_token: String,
    pub status: GameStatus,
}

/// Result string of every successful store shot.
pub const SHOT_ACCEPTED: &str = "OK";

/// Acknowledgement of a shot. The per-cell outcome is read from the next view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotReport {
    pub result: &'static str,
    pub next_turn_player_id: PlayerId,
    pub status: GameStatus,
}

/// Unmasked copy of one board's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    pub cells: Cells,
}

impl BoardView {
    /// The board as its opponent may see it: ships hidden, shots shown.
    pub fn masked(&self) -> BoardView {
        let mut cells = self.cells;
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = cell.masked();
            }
        }
        BoardView { cells }
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    pub const fn width(&self) -> usize {
        BOARD_SIZE
    }

    pub const fn height(&self) -> usize {
        BOARD_SIZE
    }
}

/// Read-only snapshot of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub status: GameStatus,
    pub turn: Slot,
    pub ready: [bool; SLOTS],
    pub boards: [BoardView; SLOTS],
}
