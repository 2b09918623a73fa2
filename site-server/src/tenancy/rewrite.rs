//! Tenant rewrite middleware
//!
//! Maps subdomain requests onto the internal `/tenant/{slug}` routes.
//! The rewrite is server-side only: the response is produced under the
//! rewritten path while the client keeps the URL it requested.

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use http::uri::{PathAndQuery, Uri};

use super::resolver::{resolve_subdomain, strip_port};

/// Paths the rewrite must never touch: the lead-capture API, embedded
/// assets and the favicon.
fn is_excluded(path: &str) -> bool {
    path.starts_with("/api/") || path.starts_with("/assets/") || path == "/favicon.ico"
}

/// Rewritten path for a request, or `None` when it must pass through.
///
/// `hostname` must already have its port stripped. Paths that are
/// excluded, already tenant-scoped, or arrive without a resolvable
/// subdomain are untouched.
pub fn rewrite_path(hostname: &str, path: &str) -> Option<String> {
    if is_excluded(path) || path.starts_with("/tenant/") {
        return None;
    }

    let subdomain = resolve_subdomain(hostname)?;

    // Root collapses to the bare tenant path; everything else is appended
    Some(if path == "/" {
        format!("/tenant/{}", subdomain)
    } else {
        format!("/tenant/{}{}", subdomain, path)
    })
}

/// Axum middleware applying [`rewrite_path`] to the request URI in place.
pub async fn rewrite_tenant_request(mut req: Request, next: Next) -> Response {
    let host = req
        .headers()
        .get(http::header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let hostname = strip_port(host);

    if let Some(new_path) = rewrite_path(hostname, req.uri().path()) {
        let path_and_query = match req.uri().query() {
            Some(query) => format!("{}?{}", new_path, query),
            None => new_path,
        };

        // A host header producing an unparsable target is passed through
        if let Ok(pq) = path_and_query.parse::<PathAndQuery>() {
            let mut parts = req.uri().clone().into_parts();
            parts.path_and_query = Some(pq);
            if let Ok(uri) = Uri::from_parts(parts) {
                tracing::debug!(host = %host, uri = %uri, "Rewriting to tenant route");
                *req.uri_mut() = uri;
            }
        }
    }

    next.run(req).await
}
