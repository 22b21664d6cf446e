use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::core::{Coordinate, Orientation, ShipKind};
use crate::session::{player_id_for, SessionStore, Slot};

use super::dto::{
    BoardBody, GameBody, OkBody, PlaceRequest, ShootRequest, ShotBody, StatusBody, TicketBody,
    YouBody,
};
use super::error::ApiError;

type Store = State<Arc<SessionStore>>;

pub async fn create_game(State(store): Store) -> Json<TicketBody> {
    Json(store.create_game().into())
}

pub async fn join_game(
    State(store): Store,
    Path(id): Path<String>,
) -> Result<Json<TicketBody>, ApiError> {
    let ticket = store.join_game(&id)?;
    Ok(Json(ticket.into()))
}

pub async fn get_game(
    State(store): Store,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<GameBody>, ApiError> {
    let slot = authorize(&store, &id, &headers)?;
    let view = store
        .view(&id)
        .ok_or_else(|| ApiError::new(StatusCode::NOT_FOUND, "Game not found."))?;
    let enemy = 1 - slot;
    Ok(Json(GameBody {
        game_id: id,
        status: view.status,
        turn_player_id: player_id_for(view.turn),
        you: YouBody {
            player_id: player_id_for(slot),
            ready: view.ready[slot],
        },
        your_board: BoardBody::from(&view.boards[slot]),
        enemy_board: BoardBody::from(&view.boards[enemy].masked()),
    }))
}

pub async fn place_ship(
    State(store): Store,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<OkBody>, ApiError> {
    let slot = authorize(&store, &id, &headers)?;
    let request: PlaceRequest = parse_json(&body)?;
    let (Some(kind), Some(start), Some(orientation)) =
        (request.kind, request.start, request.orientation)
    else {
        return Err(ApiError::bad_request(
            "Missing fields: type/start/orientation",
        ));
    };

    let kind: ShipKind = kind.parse()?;
    let start: Coordinate = start.parse()?;
    let orientation: Orientation = orientation.parse()?;
    store.place_ship(&id, slot, kind, start, orientation)?;
    Ok(Json(OkBody { ok: true }))
}

pub async fn ready_up(
    State(store): Store,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<StatusBody>, ApiError> {
    let slot = authorize(&store, &id, &headers)?;
    let status = store.ready_up(&id, slot)?;
    Ok(Json(StatusBody { status }))
}

pub async fn shoot(
    State(store): Store,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ShotBody>, ApiError> {
    let slot = authorize(&store, &id, &headers)?;
    let request: ShootRequest = parse_json(&body)?;
    let target: Coordinate = request
        .target
        .ok_or_else(|| ApiError::bad_request("Missing field: target"))?
        .parse()?;
    let report = store.shoot(&id, slot, target)?;
    Ok(Json(report.into()))
}

pub async fn fallback() -> ApiError {
    ApiError::not_found()
}

/// Slot of the player whose bearer token is in the `Authorization` header.
fn authorize(store: &SessionStore, id: &str, headers: &HeaderMap) -> Result<Slot, ApiError> {
    let credential = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            debug!(session_id = id, "missing authorization header");
            ApiError::unauthorized()
        })?;
    store
        .authenticate(id, credential)
        .ok_or_else(ApiError::unauthorized)
}

/// Bodies are parsed regardless of `Content-Type`.
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "rejected request body");
        ApiError::invalid_json()
    })
}
