//! JSON-over-HTTP front end for the session store.
//!
//! | Route                      | Auth   | Body                           |
//! |----------------------------|--------|--------------------------------|
//! | `POST /games`              | no     |                                |
//! | `POST /games/{id}/join`    | no     |                                |
//! | `GET  /games/{id}`         | bearer |                                |
//! | `POST /games/{id}/place`   | bearer | `{type, start, orientation}`   |
//! | `POST /games/{id}/ready`   | bearer |                                |
//! | `POST /games/{id}/shoot`   | bearer | `{target}`                     |

#![cfg(feature = "std")]

mod dto;
mod error;
mod handlers;

use std::sync::Arc;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::session::SessionStore;

pub use dto::{
    BoardBody, GameBody, OkBody, PlaceRequest, ShootRequest, ShotBody, StatusBody, TicketBody,
    YouBody,
};
pub use error::{status_for, ApiError};

/// Default listen address of `serve`.
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

pub fn router(store: Arc<SessionStore>) -> Router {
    Router::new()
        .route("/games", post(handlers::create_game))
        .route("/games/{id}", get(handlers::get_game))
        .route("/games/{id}/join", post(handlers::join_game))
        .route("/games/{id}/place", post(handlers::place_ship))
        .route("/games/{id}/ready", post(handlers::ready_up))
        .route("/games/{id}/shoot", post(handlers::shoot))
        .fallback(handlers::fallback)
        .with_state(store)
}

/// Listen on `bind` until Ctrl-C.
pub async fn serve(bind: &str, store: Arc<SessionStore>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl-C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
