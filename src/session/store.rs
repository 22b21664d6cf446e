//! Concurrency-safe registry of independent sessions.
//!
//! The registry map is guarded by a reader/writer lock that is only held long
//! enough to look up or insert a session handle. Each session then has its
//! own mutex, held for the whole of an operation on it, so work on one
//! session never waits for another.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use tracing::{debug, error, info, instrument, warn};

use crate::core::{BoardError, Coordinate, Orientation, ShipKind};

use super::error::StoreError;
use super::state::Session;
use super::token::{random_id, random_token, strip_bearer, SESSION_ID_LEN};
use super::types::{
    player_id_for, GameStatus, GameView, PlayerTicket, SessionId, ShotReport, Slot,
};

type SessionHandle = Arc<Mutex<Session>>;

/// Registry of sessions, keyed by session id. Sessions are never evicted.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SessionHandle>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions ever created.
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Open a new session. The caller becomes player 1.
    #[instrument(skip(self))]
    pub fn create_game(&self) -> PlayerTicket {
        let mut rng = rand::rng();
        let tokens = [random_token(&mut rng), random_token(&mut rng)];
        let player_token = tokens[0].clone();
        let session = Session::new(tokens);
        let status = session.status();

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let session_id = loop {
            let candidate = random_id(&mut rng, SESSION_ID_LEN);
            if let Entry::Vacant(slot) = sessions.entry(candidate.clone()) {
                slot.insert(Arc::new(Mutex::new(session)));
                break candidate;
            }
        };
        drop(sessions);

        info!(session_id = %session_id, "created session");
        PlayerTicket {
            session_id,
            player_id: player_id_for(0),
            player_token,
            status,
        }
    }

    /// Take the second seat of `session_id`.
    #[instrument(skip(self))]
    pub fn join_game(&self, session_id: &str) -> Result<PlayerTicket, StoreError> {
        let handle = self.handle(session_id)?;
        let mut session = lock(&handle);
        let slot = session.join(session_id).inspect_err(|_| {
            warn!(session_id, "join rejected, session is full");
        })?;
        let player_token = session.token(slot)?.to_owned();
        info!(session_id, slot, "player joined");
        Ok(PlayerTicket {
            session_id: session_id.to_owned(),
            player_id: player_id_for(slot),
            player_token,
            status: session.status(),
        })
    }

    /// Resolve a `Bearer <token>` credential to the slot it belongs to.
    ///
    /// Returns `None` for an unknown session, a credential without the
    /// prefix, or a token matching neither slot.
    #[instrument(skip(self, credential))]
    pub fn authenticate(&self, session_id: &str, credential: &str) -> Option<Slot> {
        let handle = self.handle(session_id).ok()?;
        let token = strip_bearer(credential)?;
        let slot = lock(&handle).slot_for_token(token);
        if slot.is_none() {
            debug!(session_id, "credential matches no player");
        }
        slot
    }

    /// Place a ship for the player in `slot`.
    #[instrument(skip(self))]
    pub fn place_ship(
        &self,
        session_id: &str,
        slot: Slot,
        kind: ShipKind,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<(), StoreError> {
        let handle = self.handle(session_id)?;
        let mut session = lock(&handle);
        session.place_ship(slot, kind, start, orientation)?;
        debug!(session_id, slot, %kind, %start, %orientation, "ship placed");
        Ok(())
    }

    /// Mark the player in `slot` ready and return the resulting status.
    #[instrument(skip(self))]
    pub fn ready_up(&self, session_id: &str, slot: Slot) -> Result<GameStatus, StoreError> {
        let handle = self.handle(session_id)?;
        let mut session = lock(&handle);
        let status = session.ready_up(slot)?;
        info!(session_id, slot, %status, "player ready");
        Ok(status)
    }

    /// Fire from `slot` at the opponent's board.
    #[instrument(skip(self))]
    pub fn shoot(
        &self,
        session_id: &str,
        slot: Slot,
        target: Coordinate,
    ) -> Result<ShotReport, StoreError> {
        let handle = self.handle(session_id)?;
        let mut session = lock(&handle);
        let (report, outcome) = session.shoot(slot, target).inspect_err(|e| {
            if let StoreError::Board(BoardError::UndefinedShot(_)) = e {
                error!(session_id, slot, %target, "occupied cell without a structure");
            }
        })?;
        debug!(session_id, slot, %target, ?outcome, "shot resolved");
        if report.status == GameStatus::Finished {
            info!(session_id, winner = player_id_for(slot), "game finished");
        }
        Ok(report)
    }

    /// Snapshot of a session, or `None` if the id is unknown.
    pub fn view(&self, session_id: &str) -> Option<GameView> {
        let handle = self.handle(session_id).ok()?;
        let view = lock(&handle).view();
        Some(view)
    }

    fn handle(&self, session_id: &str) -> Result<SessionHandle, StoreError> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(session_id.to_owned()))
    }
}

/// Session state is only written after all checks pass, so a poisoned lock
/// still guards a consistent session.
fn lock(handle: &Mutex<Session>) -> MutexGuard<'_, Session> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}
