//! Reservation page
//!
//! Booking form with branch dropdown and the 16:00–22:00 time window
//! exposed as input constraints. Same pre-selection rules as the contact
//! page.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use minijinja::context;

use crate::core::ServerState;
use crate::pages::PageResult;
use crate::pages::contact::{FormPageParams, branch_options, selected_branch_id};

pub async fn show(
    State(state): State<ServerState>,
    Query(params): Query<FormPageParams>,
) -> PageResult {
    let tenants = state.cms.fetch_tenants(100).await;
    let selected = selected_branch_id(&tenants, params.tenant.as_deref(), params.branch.as_deref());

    let html = state.renderer.render(
        "reservation.html",
        context! {
            title => "Reservation — ELEMENTA",
            tenant_name => None::<String>,
            branches => branch_options(&tenants),
            selected_branch_id => selected,
            min_date => chrono::Local::now().format("%Y-%m-%d").to_string(),
        },
    )?;
    Ok(Html(html).into_response())
}
