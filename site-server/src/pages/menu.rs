//! Menu page (main site)
//!
//! Branch picker plus the selected branch's menu file. `?branch=` accepts
//! a slug or a display name.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use minijinja::context;
use serde::{Deserialize, Serialize};
use shared::Tenant;

use crate::core::ServerState;
use crate::pages::PageResult;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MenuParams {
    pub branch: Option<String>,
}

#[derive(Debug, Serialize)]
struct MenuBranch {
    name: String,
    slug: String,
    has_menu: bool,
}

fn pick_branch<'a>(tenants: &'a [Tenant], wanted: Option<&str>) -> Option<&'a Tenant> {
    match wanted {
        Some(key) => tenants
            .iter()
            .find(|t| t.slug == key || t.name == key)
            .or_else(|| tenants.first()),
        None => tenants.first(),
    }
}

pub async fn show(
    State(state): State<ServerState>,
    Query(params): Query<MenuParams>,
) -> PageResult {
    let tenants = state.cms.fetch_tenants(100).await;
    let selected = pick_branch(&tenants, params.branch.as_deref());

    let branches: Vec<MenuBranch> = tenants
        .iter()
        .map(|t| MenuBranch {
            name: t.name.clone(),
            slug: t.slug.clone(),
            has_menu: t.menu.is_some(),
        })
        .collect();

    let menu_url = selected
        .and_then(|t| t.menu.as_ref())
        .map(|m| m.public_url(&state.config.api_url));

    let html = state.renderer.render(
        "menu.html",
        context! {
            title => "Menu — ELEMENTA",
            tenant_name => None::<String>,
            branches => branches,
            selected_name => selected.map(|t| t.name.clone()),
            menu_url => menu_url,
        },
    )?;
    Ok(Html(html).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MediaRef;

    fn tenant(name: &str, slug: &str, with_menu: bool) -> Tenant {
        Tenant {
            id: slug.into(),
            name: name.into(),
            slug: slug.into(),
            domain: None,
            menu: with_menu.then(|| MediaRef {
                url: "/menu.pdf".into(),
                filename: Some("menu.pdf".into()),
            }),
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
    fn branch_param_matches_slug_or_name() {
        let tenants = vec![tenant("Gold", "gold", true), tenant("Red Bistro", "red", false)];

        assert_eq!(pick_branch(&tenants, Some("red")).unwrap().slug, "red");
        assert_eq!(pick_branch(&tenants, Some("Red Bistro")).unwrap().slug, "red");
        // Unknown values fall back to the first branch
        assert_eq!(pick_branch(&tenants, Some("nope")).unwrap().slug, "gold");
        assert_eq!(pick_branch(&tenants, None).unwrap().slug, "gold");
        assert!(pick_branch(&[], None).is_none());
    }
}
