//! Full-stack flows against a stub CMS: tenant pages by Host header,
//! read-failure fallbacks, and the lead-capture submission order.

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    routing::post,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use site_server::{Config, ServerState, core::init_router};

/// Records which mutations the stub saw, in order
#[derive(Clone, Default)]
struct StubCms {
    mutations: Arc<Mutex<Vec<String>>>,
}

async fn graphql(State(stub): State<StubCms>, axum::Json(req): axum::Json<Value>) -> axum::Json<Value> {
    let query = req["query"].as_str().unwrap_or("");
    let variables = &req["variables"];

    let gold = json!({
        "id": "tenant-gold",
        "name": "Gold House",
        "slug": "gold",
        "domain": "gold.example.com",
        "menu": null,
        "logo": null,
        "address": "12 River Road",
        "phone": "0281234567",
        "email": "gold@example.com",
        "heroTitle": "Gold House",
        "heroSubtitle": "Slow food, fast friends",
        "heroDescription": null,
        "heroImage": null,
        "shortAboutTitle": null,
        "shortAboutText": "Our first branch.",
        "newMenu": []
    });

    let data = if query.contains("getTenants") {
        json!({ "Tenants": { "docs": [gold], "totalDocs": 1, "limit": 100 } })
    } else if query.contains("getTenant") {
        let docs = if variables["slug"] == "gold" { json!([gold]) } else { json!([]) };
        json!({ "Tenants": { "docs": docs } })
    } else if query.contains("HomeInformation") {
        json!({ "HomeInformation": {
            "CatchPhrase1": "Taste the difference",
            "CatchPhrase2": "Every day, every branch",
            "quote_s_": [ { "quote": "Best kitchen in town", "id": "q1" } ]
        } })
    } else if query.contains("getGallery") {
        json!({ "Galleries": { "docs": [], "totalDocs": 0 } })
    } else if query.contains("getCustomer") {
        json!({ "Customers": { "docs": [] } })
    } else if query.contains("CreateCustomer") {
        stub.mutations.lock().unwrap().push("createCustomer".to_string());
        json!({ "createCustomer": {
            "id": "cust-1",
            "customerName": variables["customerName"],
            "customerPhone": variables["customerPhone"]
        } })
    } else if query.contains("CreateContactMessage") {
        stub.mutations.lock().unwrap().push(format!(
            "createContactMessage:{}",
            variables["customer"].as_str().unwrap_or("?")
        ));
        json!({ "createContactMessage": { "id": "msg-1", "message": variables["message"], "status": "Pending" } })
    } else if query.contains("CreateReservation") {
        stub.mutations.lock().unwrap().push(format!(
            "createReservation:{}",
            variables["customer"].as_str().unwrap_or("?")
        ));
        json!({ "createReservation": {
            "id": "res-1",
            "reservationDateTime": variables["reservationDateTime"],
            "numberOfGuests": variables["numberOfGuests"]
        } })
    } else {
        json!({})
    };

    axum::Json(json!({ "data": data }))
}

/// Spawn the stub and return (graphql endpoint, mutation log)
async fn start_stub_cms() -> (String, Arc<Mutex<Vec<String>>>) {
    let stub = StubCms::default();
    let log = stub.mutations.clone();

    let app = Router::new()
        .route("/api/graphql", post(graphql))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/api/graphql", addr), log)
}

fn site_app(endpoint: &str) -> Router {
    let config = Config::with_overrides(endpoint, 0);
    init_router(ServerState::initialize(&config))
}

async fn get_page(app: Router, host: &str, path: &str) -> (StatusCode, String) {
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

async fn post_json(app: Router, path: &str, payload: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("host", "example.com")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn tenant_home_renders_from_subdomain() {
    let (endpoint, _) = start_stub_cms().await;
    let (status, body) = get_page(site_app(&endpoint), "gold.example.com", "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Gold House"));
    assert!(body.contains("Our first branch."));
}

#[tokio::test]
async fn unknown_tenant_is_not_found() {
    let (endpoint, _) = start_stub_cms().await;
    let (status, body) = get_page(site_app(&endpoint), "nope.example.com", "/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404"));
}

#[tokio::test]
async fn unknown_tenant_sub_path_is_not_found() {
    let (endpoint, _) = start_stub_cms().await;
    let (status, _) = get_page(site_app(&endpoint), "gold.example.com", "/backstage").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_menu_renders_placeholder() {
    // The stub's tenant has no uploaded menu file
    let (endpoint, _) = start_stub_cms().await;
    let (status, body) = get_page(site_app(&endpoint), "gold.example.com", "/menu").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Menu Not Available"));
}

#[tokio::test]
async fn landing_renders_home_information() {
    let (endpoint, _) = start_stub_cms().await;
    let (status, body) = get_page(site_app(&endpoint), "example.com", "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Taste the difference"));
    assert!(body.contains("Gold House"));
    // Branch cards link to the tenant subdomain
    assert!(body.contains("https://gold.example.com"));
}

#[tokio::test]
async fn landing_still_renders_when_cms_is_down() {
    // Nothing listens here; reads fall back to empty instead of failing
    let app = site_app("http://127.0.0.1:9/api/graphql");
    let (status, body) = get_page(app, "example.com", "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ELEMENTA"));
}

#[tokio::test]
async fn error_page_renders_without_upstream() {
    let app = site_app("http://127.0.0.1:9/api/graphql");
    let (status, body) = get_page(app, "example.com", "/somethingwentwrong").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Something went wrong"));
}

#[tokio::test]
async fn contact_submission_creates_customer_then_message() {
    let (endpoint, log) = start_stub_cms().await;
    let payload = json!({
        "name": "Nguyen Van A",
        "phone": "0912345678",
        "branchId": "tenant-gold",
        "message": "Do you have vegetarian options?"
    });

    let (status, body) = post_json(site_app(&endpoint), "/api/contact", payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "0000");
    assert_eq!(body["data"]["id"], "msg-1");

    // The unknown phone forces customer creation before the message,
    // and the message must reference the created customer id
    let mutations = log.lock().unwrap().clone();
    assert_eq!(
        mutations,
        vec!["createCustomer", "createContactMessage:cust-1"]
    );
}

#[tokio::test]
async fn reservation_submission_creates_customer_then_reservation() {
    let (endpoint, log) = start_stub_cms().await;
    let date = (chrono::Local::now() + chrono::Duration::days(3))
        .format("%Y-%m-%d")
        .to_string();
    let payload = json!({
        "name": "Nguyen Van A",
        "phone": "0912345678",
        "branchId": "tenant-gold",
        "date": date,
        "time": "18:30",
        "guests": 4,
        "notes": "Window table please"
    });

    let (status, body) = post_json(site_app(&endpoint), "/api/reservation", payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "0000");
    assert_eq!(body["data"]["id"], "res-1");

    let mutations = log.lock().unwrap().clone();
    assert_eq!(mutations, vec!["createCustomer", "createReservation:cust-1"]);
}

#[tokio::test]
async fn invalid_phone_is_rejected_before_any_write() {
    let (endpoint, log) = start_stub_cms().await;
    let payload = json!({
        "name": "Nguyen Van A",
        "phone": "12345",
        "branchId": "tenant-gold",
        "message": ""
    });

    let (status, body) = post_json(site_app(&endpoint), "/api/contact", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn write_failure_surfaces_as_upstream_error() {
    // CMS unreachable: the lookup falls back to None, the create fails
    let app = site_app("http://127.0.0.1:9/api/graphql");
    let payload = json!({
        "name": "Nguyen Van A",
        "phone": "0912345678",
        "branchId": "tenant-gold",
        "message": "hello"
    });

    let (status, body) = post_json(app, "/api/contact", payload).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "E8001");
}
