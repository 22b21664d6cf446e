//! JSON bodies exchanged over HTTP.

use serde::{Deserialize, Serialize};

use crate::core::{CellState, PlayerId};
use crate::session::{BoardView, GameStatus, PlayerTicket, ShotReport};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketBody {
    pub game_id: String,
    pub player_id: PlayerId,
    pub player_token: String,
    pub status: GameStatus,
}

impl From<PlayerTicket> for TicketBody {
    fn from(ticket: PlayerTicket) -> Self {
        Self {
            game_id: ticket.session_id,
            player_id: ticket.player_id,
            player_token: ticket.player_token,
            status: ticket.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardBody {
    pub width: usize,
    pub height: usize,
    /// Row-major, `width * height` entries.
    pub cells: Vec<CellState>,
}

impl From<&BoardView> for BoardBody {
    fn from(view: &BoardView) -> Self {
        Self {
            width: view.width(),
            height: view.height(),
            cells: view.iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouBody {
    pub player_id: PlayerId,
    pub ready: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameBody {
    pub game_id: String,
    pub status: GameStatus,
    pub turn_player_id: PlayerId,
    pub you: YouBody,
    pub your_board: BoardBody,
    /// Ships hidden.
    pub enemy_board: BoardBody,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub start: Option<String>,
    pub orientation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkBody {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBody {
    pub status: GameStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShootRequest {
    pub target: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotBody {
    pub result: String,
    pub next_turn_player_id: PlayerId,
    pub status: GameStatus,
}

impl From<ShotReport> for ShotBody {
    fn from(report: ShotReport) -> Self {
        Self {
            result: report.result.to_owned(),
            next_turn_player_id: report.next_turn_player_id,
            status: report.status,
        }
    }
}
