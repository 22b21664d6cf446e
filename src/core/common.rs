//! Common types for the rules engine: errors, error kinds and shot results.

use thiserror::Error;

use super::coordinate::Coordinate;
use super::structure::ShipKind;

/// Category of a failure, shared by every layer of the crate.
///
/// Adapters map a kind to whatever their protocol uses for status codes; the
/// engine itself only classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A coordinate falls outside the grid.
    OutOfBounds,
    /// A placement touches an already occupied cell.
    Collision,
    /// A shot targets a cell that was already resolved.
    AlreadyShot,
    /// An occupied cell has no recorded structure. Internal inconsistency.
    UndefinedShot,
    /// Unknown session id.
    NotFound,
    /// Both player slots of a session are taken.
    AlreadyFull,
    /// Missing or wrong credential.
    Unauthorized,
    /// Unknown player id or slot index.
    InvalidIdentifier,
    /// Malformed coordinate, orientation or boat-type label.
    InvalidFormat,
    /// The action is not allowed in the current status or turn.
    IllegalStateTransition,
}

/// Errors returned by [`Board`](super::Board) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Coordinate or footprint cell outside `[0, BOARD_SIZE)`.
    #[error("coordinate ({row}, {col}) is out of board bounds")]
    OutOfBounds { row: usize, col: usize },
    /// Footprint or its neighbourhood touches a non-empty cell.
    #[error("structure placement collides with existing structures")]
    Collision,
    /// The cell was already hit or missed.
    #[error("cell {0} has already been shot")]
    AlreadyShot(Coordinate),
    /// Occupied cell without an owning structure.
    #[error("shot at occupied cell {0} does not correspond to any structure")]
    UndefinedShot(Coordinate),
}

impl BoardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            BoardError::Collision => ErrorKind::Collision,
            BoardError::AlreadyShot(_) => ErrorKind::AlreadyShot,
            BoardError::UndefinedShot(_) => ErrorKind::UndefinedShot,
        }
    }
}

/// Errors produced while parsing human-entered labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid coordinate string")]
    InvalidCoordinate,
    #[error("Invalid row character")]
    InvalidRow,
    #[error("Invalid column character")]
    InvalidColumn,
    #[error("Invalid orientation (use N/S/E/W)")]
    InvalidOrientation,
    #[error("Invalid boat type")]
    InvalidBoatType,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidFormat
    }
}

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot damaged a ship that is still afloat.
    Hit(ShipKind),
    /// Shot removed the last hit point of a ship.
    Sunk(ShipKind),
}

impl ShotResult {
    /// Cell state the target ends up in.
    pub fn cell_state(&self) -> super::CellState {
        match self {
            ShotResult::Miss => super::CellState::Miss,
            ShotResult::Hit(_) | ShotResult::Sunk(_) => super::CellState::Hit,
        }
    }
}

/// Errors returned by [`Match`](super::Match) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),
    /// No player in the match carries this id.
    #[error("unknown player id {0}")]
    InvalidIdentifier(u32),
    /// The match is over, or the player acted out of turn.
    #[error("{0}")]
    IllegalState(&'static str),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::Board(e) => e.kind(),
            GameError::InvalidIdentifier(_) => ErrorKind::InvalidIdentifier,
            GameError::IllegalState(_) => ErrorKind::IllegalStateTransition,
        }
    }
}
