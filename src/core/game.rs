use super::common::{GameError, ShotResult};
use super::coordinate::{Coordinate, Placement};
use super::grid::CellState;
use super::player::{Player, PlayerId};
use super::structure::ShipKind;

const FIRST: usize = 0;
const SECOND: usize = 1;

/// Ids handed out by [`Match::new`].
pub const DEFAULT_PLAYER_IDS: [PlayerId; 2] = [1, 2];

/// A local two-player match: turn arbitration and win detection.
///
/// Once a winner is set the turn and both boards are frozen until
/// [`Match::reset`].
#[derive(Debug, Clone)]
pub struct Match {
    players: [Player; 2],
    turn: usize,
    winner: Option<PlayerId>,
}

impl Match {
    /// A match between players `1` and `2`, player `1` to move.
    pub fn new() -> Self {
        Self::from_ids(DEFAULT_PLAYER_IDS[FIRST], DEFAULT_PLAYER_IDS[SECOND])
    }

    /// A match between `first` and `second`, `first` to move.
    ///
    /// The two ids must differ; a repeated id is rejected as
    /// [`GameError::InvalidIdentifier`].
    pub fn with_ids(first: PlayerId, second: PlayerId) -> Result<Self, GameError> {
        if first == second {
            return Err(GameError::InvalidIdentifier(second));
        }
        Ok(Self::from_ids(first, second))
    }

    fn from_ids(first: PlayerId, second: PlayerId) -> Self {
        Self {
            players: [Player::new(first), Player::new(second)],
            turn: FIRST,
            winner: None,
        }
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player_by_id(&self, id: PlayerId) -> Result<&Player, GameError> {
        Ok(&self.players[self.index_for(id)?])
    }

    pub fn current_player_id(&self) -> PlayerId {
        self.players[self.turn].id()
    }

    pub fn opponent_player_id(&self) -> PlayerId {
        self.players[SECOND - self.turn].id()
    }

    pub fn is_player_turn(&self, id: PlayerId) -> bool {
        self.current_player_id() == id
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Place a ship on the board of player `id`.
    pub fn place_ship(
        &mut self,
        id: PlayerId,
        kind: ShipKind,
        placement: Placement,
    ) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::IllegalState("Game is over."));
        }
        let index = self.index_for(id)?;
        self.players[index].place_ship(kind, placement)?;
        Ok(())
    }

    /// Place a ship on the board of whoever is to move.
    pub fn place_ship_for_current_player(
        &mut self,
        kind: ShipKind,
        placement: Placement,
    ) -> Result<(), GameError> {
        self.place_ship(self.current_player_id(), kind, placement)
    }

    /// Fire from `attacker` at `target` on the other player's board.
    ///
    /// Returns the state of the target cell afterwards (`Hit` or `Miss`).
    pub fn shoot(&mut self, attacker: PlayerId, target: Coordinate) -> Result<CellState, GameError> {
        self.fire(attacker, target).map(|r| r.cell_state())
    }

    /// Like [`Match::shoot`] but reports whether the shot sank a ship.
    pub fn fire(&mut self, attacker: PlayerId, target: Coordinate) -> Result<ShotResult, GameError> {
        if self.is_over() {
            return Err(GameError::IllegalState("Game is over."));
        }
        let attacker_index = self.index_for(attacker)?;
        if attacker_index != self.turn {
            return Err(GameError::IllegalState("Not this player's turn."));
        }

        let defender_index = SECOND - attacker_index;
        let result = self.players[defender_index].receive_shot(target)?;

        if self.players[defender_index].has_lost() {
            self.winner = Some(attacker);
        } else {
            self.turn = defender_index;
        }
        Ok(result)
    }

    /// The player to move fires at `target`.
    pub fn shoot_current(&mut self, target: Coordinate) -> Result<CellState, GameError> {
        self.fire_current(target).map(|r| r.cell_state())
    }

    pub fn fire_current(&mut self, target: Coordinate) -> Result<ShotResult, GameError> {
        self.fire(self.current_player_id(), target)
    }

    /// Restore both boards, give the move back to the first player and clear
    /// the winner.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.turn = FIRST;
        self.winner = None;
    }

    fn index_for(&self, id: PlayerId) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.id() == id)
            .ok_or(GameError::InvalidIdentifier(id))
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
