//! About page (shared by the main site and tenant sites)

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use minijinja::context;

use crate::core::ServerState;
use crate::pages::PageResult;

pub async fn show(State(state): State<ServerState>) -> PageResult {
    let html = state.renderer.render(
        "about.html",
        context! {
            title => "About — ELEMENTA",
            tenant_name => None::<String>,
        },
    )?;
    Ok(Html(html).into_response())
}
