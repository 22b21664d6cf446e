use super::board::Board;
use super::common::{BoardError, ShotResult};
use super::coordinate::{Coordinate, Placement};
use super::structure::{ShipKind, Structure};

/// Numeric player identifier. Stable, not a position.
pub type PlayerId = u32;

/// A player and the board they own.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    board: Board,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            board: Board::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Build a ship of `kind` and place it on this player's board.
    pub fn place_ship(&mut self, kind: ShipKind, placement: Placement) -> Result<(), BoardError> {
        self.board.place_structure(&Structure::new(kind), placement)
    }

    pub fn receive_shot(&mut self, coord: Coordinate) -> Result<ShotResult, BoardError> {
        self.board.handle_shot(coord)
    }

    pub fn has_lost(&self) -> bool {
        self.board.all_destroyed()
    }

    pub fn reset(&mut self) {
        self.board.reset();
    }
}
