//! Contact page
//!
//! Renders the contact form with a branch dropdown. `?tenant=` (slug) or
//! `?branch=` (display name) pre-select a branch; tenant sites pin the
//! dropdown to their own branch.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use minijinja::context;
use serde::{Deserialize, Serialize};
use shared::Tenant;

use crate::core::ServerState;
use crate::pages::PageResult;

/// Pre-selection query parameters shared by the form pages
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FormPageParams {
    /// Branch display name (legacy links)
    pub branch: Option<String>,
    /// Tenant slug
    pub tenant: Option<String>,
}

/// One dropdown entry
#[derive(Debug, Serialize)]
pub(crate) struct BranchOption {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
}

pub(crate) fn branch_options(tenants: &[Tenant]) -> Vec<BranchOption> {
    tenants
        .iter()
        .map(|t| BranchOption {
            id: t.id.clone(),
            name: t.name.clone(),
            address: t.address.clone(),
        })
        .collect()
}

/// Branch to pre-select: tenant slug first (exact, then case-insensitive),
/// then branch name, then the first branch.
pub(crate) fn selected_branch_id(
    tenants: &[Tenant],
    tenant_slug: Option<&str>,
    branch_name: Option<&str>,
) -> Option<String> {
    if let Some(slug) = tenant_slug {
        let found = tenants
            .iter()
            .find(|t| t.slug == slug)
            .or_else(|| tenants.iter().find(|t| t.slug.eq_ignore_ascii_case(slug)));
        if let Some(t) = found {
            return Some(t.id.clone());
        }
    }

    if let Some(name) = branch_name
        && let Some(t) = tenants.iter().find(|t| t.name == name)
    {
        return Some(t.id.clone());
    }

    tenants.first().map(|t| t.id.clone())
}

pub async fn show(
    State(state): State<ServerState>,
    Query(params): Query<FormPageParams>,
) -> PageResult {
    let tenants = state.cms.fetch_tenants(100).await;
    let selected = selected_branch_id(&tenants, params.tenant.as_deref(), params.branch.as_deref());

    let html = state.renderer.render(
        "contact.html",
        context! {
            title => "Contact — ELEMENTA",
            tenant_name => None::<String>,
            branches => branch_options(&tenants),
            selected_branch_id => selected,
        },
    )?;
    Ok(Html(html).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant(id: &str, name: &str, slug: &str) -> Tenant {
        Tenant {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            domain: None,
            menu: None,
            logo: None,
            address: None,
            phone: None,
            email: None,
            hero_title: None,
            hero_subtitle: None,
            hero_description: None,
            hero_image: None,
            short_about_title: None,
            short_about_text: None,
            new_menu: vec![],
        }
    }

    #[test]
    fn tenant_slug_wins_over_branch_name() {
        let tenants = vec![tenant("1", "Gold", "gold"), tenant("2", "Red Bistro", "red")];

        assert_eq!(
            selected_branch_id(&tenants, Some("red"), Some("Gold")).as_deref(),
            Some("2")
        );
        // Case-insensitive fallback
        assert_eq!(
            selected_branch_id(&tenants, Some("GOLD"), None).as_deref(),
            Some("1")
        );
    }

    #[test]
    fn branch_name_then_first_as_fallback() {
        let tenants = vec![tenant("1", "Gold", "gold"), tenant("2", "Red Bistro", "red")];

        assert_eq!(
            selected_branch_id(&tenants, None, Some("Red Bistro")).as_deref(),
            Some("2")
        );
        assert_eq!(selected_branch_id(&tenants, None, None).as_deref(), Some("1"));
        assert_eq!(selected_branch_id(&[], None, None), None);
    }
}
