//! Core rules engine (no_std compatible)
//!
//! Grid, structures, boards, players and the two-player match. Everything
//! here is synchronous and knows nothing about sessions, tokens or locking.
//! It builds on `alloc` alone, so the engine can be used without the `std`
//! feature.

pub mod board;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod game;
pub mod grid;
pub mod player;
pub mod structure;

// Re-export commonly used types
pub use board::{Board, PlacedStructure};
pub use common::{BoardError, ErrorKind, GameError, ParseError, ShotResult};
pub use config::*;
pub use coordinate::{Coordinate, Orientation, Placement};
pub use game::{Match, DEFAULT_PLAYER_IDS};
pub use grid::{CellState, Cells, Grid};
pub use player::{Player, PlayerId};
pub use structure::{ShipKind, Structure};
