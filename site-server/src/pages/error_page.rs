//! Static error and not-found pages
//!
//! Both render without touching the upstream CMS, and [`show`] must never
//! fail: it is the redirect target of every other page's error path.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use minijinja::context;

use crate::core::ServerState;

/// Last-resort body when even the error template cannot render
const FALLBACK_HTML: &str =
    "<!DOCTYPE html><html><body><h1>Something went wrong</h1>\
     <p>We encountered an unexpected error. Please try again later.</p></body></html>";

/// `GET /somethingwentwrong`
pub async fn show(State(state): State<ServerState>) -> Response {
    let html = state
        .renderer
        .render(
            "somethingwentwrong.html",
            context! {
                title => "Something went wrong — ELEMENTA",
                back_href => "/",
            },
        )
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Error template failed to render");
            FALLBACK_HTML.to_string()
        });

    Html(html).into_response()
}

/// 404 body, shared by the router fallback and the tenant dispatcher
pub(crate) fn not_found_response(state: &ServerState) -> Response {
    let html = state
        .renderer
        .render(
            "not_found.html",
            context! {
                title => "Not Found — ELEMENTA",
            },
        )
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Not-found template failed to render");
            "<!DOCTYPE html><html><body><h1>404 — Page not found</h1></body></html>".to_string()
        });

    (StatusCode::NOT_FOUND, Html(html)).into_response()
}

/// Router fallback handler
pub async fn not_found(State(state): State<ServerState>) -> Response {
    not_found_response(&state)
}
