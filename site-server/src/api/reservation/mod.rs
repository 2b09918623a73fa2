//! Reservation API Module

mod handler;

pub use handler::{ReservationReceipt, ReservationRequest};

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Reservation router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservation", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::submit))
}
