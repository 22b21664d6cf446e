//! Multi-session game service: lifecycle, per-player tokens and locking
//! around the rules engine.

#![cfg(feature = "std")]

mod error;
mod state;
mod store;
pub mod token;
mod types;

pub use error::StoreError;
pub use state::Session;
pub use store::SessionStore;
pub use types::{
    player_id_for, BoardView, GameStatus, GameView, PlayerTicket, SessionId, ShotReport, Slot,
    SHOT_ACCEPTED, SLOTS,
};
