//! Tenant page dispatcher
//!
//! `/tenant/{slug}[/{page}]` — normally reached through the subdomain
//! rewrite. Fetches the tenant record once, then renders the variant
//! selected by the remaining path segment. Unknown tenants and unknown
//! segments are a 404, never an error page.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use minijinja::context;

use crate::core::ServerState;
use crate::pages::contact::branch_options;
use crate::pages::error_page::not_found_response;
use crate::pages::gallery::gallery_cards;
use crate::pages::{PageError, PageResult};
use shared::Tenant;

/// How many tenant-filtered gallery images the home page features
const FEATURED_GALLERY_COUNT: usize = 6;

/// Page variants a tenant site serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    About,
    Menu,
    Gallery,
    Contact,
    Reservation,
    SomethingWentWrong,
}

impl PageKind {
    /// Exact-match dispatch on the remaining sub-path.
    pub fn from_sub_path(sub_path: &str) -> Option<Self> {
        match sub_path.trim_matches('/') {
            "" | "home" => Some(Self::Home),
            "about" => Some(Self::About),
            "menu" => Some(Self::Menu),
            "gallery" => Some(Self::Gallery),
            "contact" => Some(Self::Contact),
            "reservation" => Some(Self::Reservation),
            "somethingwentwrong" => Some(Self::SomethingWentWrong),
            _ => None,
        }
    }
}

/// `GET /tenant/{slug}`
pub async fn show_root(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> PageResult {
    dispatch(state, slug, String::new()).await
}

/// `GET /tenant/{slug}/{*page}`
pub async fn show_page(
    State(state): State<ServerState>,
    Path((slug, page)): Path<(String, String)>,
) -> PageResult {
    dispatch(state, slug, page).await
}

async fn dispatch(state: ServerState, slug: String, sub_path: String) -> PageResult {
    let Some(kind) = PageKind::from_sub_path(&sub_path) else {
        return Ok(not_found_response(&state));
    };

    // Tenant lookup failure and "no such tenant" both land here
    let Some(tenant) = state.cms.fetch_tenant_by_slug(&slug).await else {
        return Ok(not_found_response(&state));
    };

    match kind {
        PageKind::Home => render_home(&state, &tenant).await,
        PageKind::Menu => render_menu(&state, &tenant),
        PageKind::About => render_simple(&state, &tenant, "about.html", "About"),
        PageKind::Gallery => render_gallery(&state, &tenant).await,
        PageKind::Contact => render_form(&state, &tenant, "contact.html", "Contact"),
        PageKind::Reservation => render_form(&state, &tenant, "reservation.html", "Reservation"),
        PageKind::SomethingWentWrong => {
            render_simple(&state, &tenant, "somethingwentwrong.html", "Something went wrong")
        }
    }
}

async fn render_home(state: &ServerState, tenant: &Tenant) -> PageResult {
    let gallery = state.cms.fetch_gallery(Some(&tenant.id)).await;
    let featured: Vec<_> = gallery_cards(&gallery, &state.config.api_url)
        .into_iter()
        .take(FEATURED_GALLERY_COUNT)
        .collect();

    let api_url = &state.config.api_url;
    let hero_image = tenant.hero_image.as_ref().map(|m| m.public_url(api_url));
    let new_menu_images: Vec<String> = tenant
        .new_menu
        .iter()
        .filter_map(|item| item.src.as_ref().map(|m| m.public_url(api_url)))
        .collect();

    let html = state.renderer.render(
        "tenant_home.html",
        context! {
            title => tenant.name.clone(),
            tenant_name => tenant.name.clone(),
            tenant_id => tenant.id.clone(),
            hero_title => tenant.hero_title.clone().unwrap_or_else(|| tenant.name.clone()),
            hero_subtitle => tenant.hero_subtitle.clone(),
            hero_description => tenant.hero_description.clone(),
            hero_image => hero_image,
            short_about_title => tenant.short_about_title.clone(),
            short_about_text => tenant.short_about_text.clone(),
            featured_gallery => featured,
            new_menu_images => new_menu_images,
        },
    )?;
    Ok(Html(html).into_response())
}

fn render_menu(state: &ServerState, tenant: &Tenant) -> PageResult {
    // No uploaded menu is a placeholder, not a failure
    let Some(menu) = tenant.menu.as_ref() else {
        let html = state.renderer.render(
            "menu_unavailable.html",
            context! {
                title => format!("Menu — {}", tenant.name),
                tenant_name => tenant.name.clone(),
            },
        )?;
        return Ok(Html(html).into_response());
    };

    let html = state.renderer.render(
        "tenant_menu.html",
        context! {
            title => format!("Menu — {}", tenant.name),
            tenant_name => tenant.name.clone(),
            menu_url => menu.public_url(&state.config.api_url),
        },
    )?;
    Ok(Html(html).into_response())
}

async fn render_gallery(state: &ServerState, tenant: &Tenant) -> PageResult {
    let items = state.cms.fetch_gallery(Some(&tenant.id)).await;
    let cards = gallery_cards(&items, &state.config.api_url);

    let html = state.renderer.render(
        "gallery.html",
        context! {
            title => format!("Gallery — {}", tenant.name),
            tenant_name => tenant.name.clone(),
            images => cards,
        },
    )?;
    Ok(Html(html).into_response())
}

/// Contact/reservation with the dropdown pinned to this tenant
fn render_form(state: &ServerState, tenant: &Tenant, template: &str, label: &str) -> PageResult {
    let tenants = std::slice::from_ref(tenant);
    let html = state.renderer.render(
        template,
        context! {
            title => format!("{} — {}", label, tenant.name),
            tenant_name => tenant.name.clone(),
            branches => branch_options(tenants),
            selected_branch_id => tenant.id.clone(),
            min_date => chrono::Local::now().format("%Y-%m-%d").to_string(),
        },
    )?;
    Ok(Html(html).into_response())
}

fn render_simple(
    state: &ServerState,
    tenant: &Tenant,
    template: &str,
    label: &str,
) -> Result<Response, PageError> {
    let html = state.renderer.render(
        template,
        context! {
            title => format!("{} — {}", label, tenant.name),
            tenant_name => tenant.name.clone(),
            back_href => "/",
        },
    )?;
    Ok(Html(html).into_response())
}
