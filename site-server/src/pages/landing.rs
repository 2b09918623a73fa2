//! Group landing page
//!
//! The root of the main domain: catchphrases and quotes from the
//! `HomeInformation` singleton plus one card per branch linking to its
//! subdomain site.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse};
use minijinja::context;
use serde::Serialize;
use shared::Tenant;

use crate::core::ServerState;
use crate::pages::PageResult;
use crate::tenancy::{base_domain, tenant_url};

#[derive(Debug, Serialize)]
struct BranchCard {
    name: String,
    slug: String,
    address: Option<String>,
    url: String,
    logo_url: Option<String>,
}

fn branch_cards(tenants: &[Tenant], scheme: &str, base: &str, api_url: &str) -> Vec<BranchCard> {
    tenants
        .iter()
        .map(|t| BranchCard {
            name: t.name.clone(),
            slug: t.slug.clone(),
            address: t.address.clone(),
            url: tenant_url(scheme, &t.slug, base),
            logo_url: t.logo.as_ref().map(|l| format!("{}{}", api_url, l.url)),
        })
        .collect()
}

pub async fn show(State(state): State<ServerState>, headers: HeaderMap) -> PageResult {
    // Both fetches fall back to empty on failure; the page still renders
    let (tenants, home) = tokio::join!(
        state.cms.fetch_tenants(100),
        state.cms.fetch_home_information()
    );

    let host = headers
        .get(http::header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let base = base_domain(host);
    let scheme = if base.contains("localhost") { "http" } else { "https" };

    let branches = branch_cards(&tenants, scheme, &base, &state.config.api_url);
    let quotes: Vec<String> = home
        .as_ref()
        .map(|h| h.quotes.iter().map(|q| q.quote.clone()).collect())
        .unwrap_or_default();

    let html = state.renderer.render(
        "landing.html",
        context! {
            title => "ELEMENTA",
            catch_phrase_1 => home.as_ref().map(|h| h.catch_phrase_1.clone()),
            catch_phrase_2 => home.as_ref().map(|h| h.catch_phrase_2.clone()),
            quotes => quotes,
            branches => branches,
        },
    )?;

    Ok(Html(html).into_response())
}
