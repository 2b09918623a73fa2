//! Contact API Module

mod handler;

pub use handler::{ContactRequest, SubmissionReceipt};

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Contact router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/contact", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::submit))
}
