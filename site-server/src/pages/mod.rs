//! Site pages
//!
//! Server-rendered HTML routes. Main-domain pages live at the root paths;
//! tenant variants live under `/tenant/{slug}` and are normally reached
//! through the subdomain rewrite middleware.
//!
//! # 路由列表
//!
//! | 路径 | 说明 |
//! |------|------|
//! | / | 集团落地页 (分店入口) |
//! | /about, /menu, /gallery, /contact, /reservation | 主站页面 |
//! | /somethingwentwrong | 静态错误页 |
//! | /tenant/{slug}[/{page}] | 租户页面分发 |

pub mod about;
pub mod assets;
pub mod contact;
pub mod error_page;
pub mod gallery;
pub mod landing;
pub mod menu;
pub mod reservation;
pub mod tenant;

use axum::{
    Router,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};

use crate::core::ServerState;

/// Page router (tenant routes included)
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(landing::show))
        .route("/about", get(about::show))
        .route("/menu", get(menu::show))
        .route("/gallery", get(gallery::show))
        .route("/contact", get(contact::show))
        .route("/reservation", get(reservation::show))
        .route("/somethingwentwrong", get(error_page::show))
        .route("/tenant/{slug}", get(tenant::show_root))
        .route("/tenant/{slug}/{*page}", get(tenant::show_page))
}

/// Failure while building a page.
///
/// Converted to a redirect to the static error page — the server-side
/// counterpart of a rendering error boundary. [`error_page::show`] itself
/// never returns this type, so the redirect cannot loop.
pub struct PageError(anyhow::Error);

impl<E: Into<anyhow::Error>> From<E> for PageError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self.0, "Page render failed");
        Redirect::to("/somethingwentwrong").into_response()
    }
}

/// Result alias for page handlers
pub type PageResult = Result<Response, PageError>;
