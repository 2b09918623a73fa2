//! Gallery page
//!
//! Grid of all branches' gallery images; tenant sites reuse the same
//! template with a branch-filtered list.

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use minijinja::context;
use serde::Serialize;
use shared::{GalleryItem, MediaRef};

use crate::core::ServerState;
use crate::pages::PageResult;

/// One rendered gallery tile
#[derive(Debug, Serialize)]
pub(crate) struct GalleryCard {
    pub src: String,
    pub alt: String,
    pub branch: String,
    pub caption: String,
}

/// Map gallery items to renderable tiles (items without an image are dropped)
pub(crate) fn gallery_cards(items: &[GalleryItem], api_url: &str) -> Vec<GalleryCard> {
    items
        .iter()
        .filter_map(|item| {
            let image = item.image.as_ref()?;
            let src = MediaRef {
                url: image.url.clone(),
                filename: image.filename.clone(),
            }
            .public_url(api_url);

            Some(GalleryCard {
                src,
                alt: item
                    .caption
                    .clone()
                    .or_else(|| image.alt.clone())
                    .unwrap_or_else(|| "Gallery image".to_string()),
                branch: item
                    .branch
                    .as_ref()
                    .map(|b| b.name.clone())
                    .unwrap_or_default(),
                caption: item.caption.clone().unwrap_or_default(),
            })
        })
        .collect()
}

pub async fn show(State(state): State<ServerState>) -> PageResult {
    let items = state.cms.fetch_gallery(None).await;
    let cards = gallery_cards(&items, &state.config.api_url);

    let html = state.renderer.render(
        "gallery.html",
        context! {
            title => "Gallery — ELEMENTA",
            tenant_name => None::<String>,
            images => cards,
        },
    )?;
    Ok(Html(html).into_response())
}
