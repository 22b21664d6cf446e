//! Commonly used types and utilities for ease of import.

pub use crate::core::{
    Board, BoardError, CellState, Coordinate, ErrorKind, GameError, Match, Orientation, Placement,
    PlayerId, ShipKind, ShotResult, Structure, BOARD_SIZE, FLEET,
};

#[cfg(feature = "std")]
pub use crate::session::{GameStatus, GameView, SessionStore, StoreError};
