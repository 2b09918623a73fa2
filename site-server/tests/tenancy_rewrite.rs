//! Rewrite middleware end-to-end: the Host header decides which route a
//! request lands on, without the request path changing for the client.

use axum::{
    Router,
    body::Body,
    extract::Path,
    http::{Request, StatusCode},
    middleware,
    routing::get,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use site_server::tenancy::rewrite_tenant_request;

/// Probe router echoing which route matched
fn probe_app() -> Router {
    Router::new()
        .route("/", get(|| async { "main:landing" }))
        .route("/menu", get(|| async { "main:menu" }))
        .route(
            "/tenant/{slug}",
            get(|Path(slug): Path<String>| async move { format!("tenant:{}:home", slug) }),
        )
        .route(
            "/tenant/{slug}/{*page}",
            get(|Path((slug, page)): Path<(String, String)>| async move {
                format!("tenant:{}:{}", slug, page)
            }),
        )
        .route("/api/echo", get(|| async { "api:echo" }))
        .layer(middleware::from_fn(rewrite_tenant_request))
}

async fn send(app: Router, host: &str, path: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(path)
                .header("host", host)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn subdomain_root_hits_tenant_home() {
    let (status, body) = send(probe_app(), "acme.domain.tld", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "tenant:acme:home");
}

#[tokio::test]
async fn subdomain_paths_are_prefixed() {
    let (status, body) = send(probe_app(), "acme.domain.tld", "/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "tenant:acme:menu");
}

#[tokio::test]
async fn localhost_subdomains_work_with_ports() {
    let (_, body) = send(probe_app(), "gold.localhost:3001", "/").await;
    assert_eq!(body, "tenant:gold:home");

    let (_, body) = send(probe_app(), "localhost:3001", "/menu").await;
    assert_eq!(body, "main:menu");
}

#[tokio::test]
async fn bare_and_reserved_hosts_stay_on_main_routes() {
    let (_, body) = send(probe_app(), "domain.tld", "/menu").await;
    assert_eq!(body, "main:menu");

    let (_, body) = send(probe_app(), "www.domain.tld", "/").await;
    assert_eq!(body, "main:landing");

    let (_, body) = send(probe_app(), "admin.domain.tld", "/").await;
    assert_eq!(body, "main:landing");
}

#[tokio::test]
async fn tenant_paths_are_not_double_prefixed() {
    // Already-rewritten form requested directly from a subdomain host
    let (status, body) = send(probe_app(), "acme.domain.tld", "/tenant/acme").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "tenant:acme:home");

    let (_, body) = send(probe_app(), "acme.domain.tld", "/tenant/acme/menu").await;
    assert_eq!(body, "tenant:acme:menu");
}

#[tokio::test]
async fn api_paths_are_excluded_from_rewriting() {
    let (status, body) = send(probe_app(), "acme.domain.tld", "/api/echo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "api:echo");
}

#[tokio::test]
async fn query_strings_survive_the_rewrite() {
    let app = Router::new()
        .route(
            "/tenant/{slug}/{*page}",
            get(
                |Path((slug, page)): Path<(String, String)>,
                 axum::extract::RawQuery(query): axum::extract::RawQuery| async move {
                    format!("{}:{}:{}", slug, page, query.unwrap_or_default())
                },
            ),
        )
        .layer(middleware::from_fn(rewrite_tenant_request));

    let (_, body) = send(app, "acme.domain.tld", "/contact?branch=Gold").await;
    assert_eq!(body, "acme:contact:branch=Gold");
}
