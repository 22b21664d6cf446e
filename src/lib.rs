#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod server;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use console::{parse_placement, Console, PlacementInput};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use session::{
    BoardView, GameStatus, GameView, PlayerTicket, SessionStore, ShotReport, Slot, StoreError,
};
#[cfg(feature = "std")]
pub use ui::{render_board, RenderOptions};
