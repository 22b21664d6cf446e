use thiserror::Error;

use crate::core::{BoardError, ErrorKind};

use super::types::Slot;

/// Errors returned by [`SessionStore`](super::SessionStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Game not found.")]
    NotFound(String),
    #[error("Game already has 2 players.")]
    AlreadyFull(String),
    #[error("Invalid player.")]
    InvalidIdentifier(Slot),
    #[error("{0}")]
    IllegalStateTransition(&'static str),
    #[error(transparent)]
    Board(#[from] BoardError),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound(_) => ErrorKind::NotFound,
            StoreError::AlreadyFull(_) => ErrorKind::AlreadyFull,
            StoreError::InvalidIdentifier(_) => ErrorKind::InvalidIdentifier,
            StoreError::IllegalStateTransition(_) => ErrorKind::IllegalStateTransition,
            StoreError::Board(e) => e.kind(),
        }
    }
}
