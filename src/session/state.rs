//! State of a single session and the rules of its lifecycle.

use crate::core::{Board, Coordinate, Orientation, Placement, ShipKind, ShotResult, Structure};

use super::error::StoreError;
use super::types::{
    player_id_for, BoardView, GameStatus, GameView, ShotReport, Slot, SHOT_ACCEPTED, SLOTS,
};

/// One two-player game as kept by the store.
#[derive(Debug)]
pub struct Session {
    boards: [Board; SLOTS],
    joined: [bool; SLOTS],
    ready: [bool; SLOTS],
    turn: Slot,
    tokens: [String; SLOTS],
    status: GameStatus,
}

impl Session {
    /// A fresh session with slot 0 already joined.
    pub fn new(tokens: [String; SLOTS]) -> Self {
        Self {
            boards: [Board::new(), Board::new()],
            joined: [true, false],
            ready: [false, false],
            turn: 0,
            tokens,
            status: GameStatus::WaitingForPlayers,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn token(&self, slot: Slot) -> Result<&str, StoreError> {
        Ok(&self.tokens[check_slot(slot)?])
    }

    /// Take slot 1 and move on to placing.
    pub fn join(&mut self, session_id: &str) -> Result<Slot, StoreError> {
        if self.joined[1] {
            return Err(StoreError::AlreadyFull(session_id.to_owned()));
        }
        self.joined[1] = true;
        self.status = GameStatus::Placing;
        Ok(1)
    }

    /// Slot whose token equals `token` exactly.
    pub fn slot_for_token(&self, token: &str) -> Option<Slot> {
        self.tokens.iter().position(|t| t == token)
    }

    pub fn place_ship(
        &mut self,
        slot: Slot,
        kind: ShipKind,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<(), StoreError> {
        let slot = self.joined_slot(slot)?;
        if self.status == GameStatus::Finished {
            return Err(StoreError::IllegalStateTransition("Game finished."));
        }
        let placement = Placement::new(start, orientation);
        self.boards[slot].place_structure(&Structure::new(kind), placement)?;
        Ok(())
    }

    /// Mark `slot` ready. Play starts once both slots are ready.
    pub fn ready_up(&mut self, slot: Slot) -> Result<GameStatus, StoreError> {
        let slot = self.joined_slot(slot)?;
        self.ready[slot] = true;
        if self.status == GameStatus::Placing && self.ready.iter().all(|r| *r) {
            self.status = GameStatus::InProgress;
        }
        Ok(self.status)
    }

    /// Fire from `slot` at the opponent's board.
    pub fn shoot(
        &mut self,
        slot: Slot,
        target: Coordinate,
    ) -> Result<(ShotReport, ShotResult), StoreError> {
        let slot = check_slot(slot)?;
        if self.status != GameStatus::InProgress {
            return Err(StoreError::IllegalStateTransition("Game not in progress."));
        }
        if self.turn != slot {
            return Err(StoreError::IllegalStateTransition("Not your turn."));
        }

        let enemy = 1 - slot;
        let outcome = self.boards[enemy].handle_shot(target)?;

        if self.boards[enemy].all_destroyed() {
            self.status = GameStatus::Finished;
        } else {
            self.turn = enemy;
        }

        let report = ShotReport {
            result: SHOT_ACCEPTED,
            next_turn_player_id: player_id_for(self.turn),
            status: self.status,
        };
        Ok((report, outcome))
    }

    pub fn view(&self) -> GameView {
        GameView {
            status: self.status,
            turn: self.turn,
            ready: self.ready,
            boards: [
                BoardView {
                    cells: *self.boards[0].cells(),
                },
                BoardView {
                    cells: *self.boards[1].cells(),
                },
            ],
        }
    }

    fn joined_slot(&self, slot: Slot) -> Result<Slot, StoreError> {
        let slot = check_slot(slot)?;
        if !self.joined[slot] {
            return Err(StoreError::IllegalStateTransition("Player not joined."));
        }
        Ok(slot)
    }
}

fn check_slot(slot: Slot) -> Result<Slot, StoreError> {
    if slot < SLOTS {
        Ok(slot)
    } else {
        Err(StoreError::InvalidIdentifier(slot))
    }
}
