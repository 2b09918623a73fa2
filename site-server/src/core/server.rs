//! Server Implementation
//!
//! HTTP 服务器启动和管理

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::api;
use crate::core::{Config, Result, ServerState};
use crate::middleware::logging::log_request;
use crate::pages;
use crate::tenancy::rewrite::rewrite_tenant_request;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::new()
        // Pages (server-rendered HTML)
        .merge(pages::router())
        // Lead-capture API
        .merge(api::contact::router())
        .merge(api::reservation::router())
        // Embedded static assets
        .merge(pages::assets::router())
        // Anything else renders the 404 page
        .fallback(pages::error_page::not_found)
}

/// Attach state and the middleware stack.
///
/// 子域名重写必须在路由匹配之前执行，所以作为 Router 级别的 layer 应用。
pub fn init_router(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        .layer(middleware::from_fn(rewrite_tenant_request))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (for tests and embedding)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<()> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config),
        };

        let app = init_router(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("🍽️ Elementa Site Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
