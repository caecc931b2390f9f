use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use storefront::api;
use storefront::db;
use storefront::infrastructure::{AppState, InMemoryStore};
use storefront::seed;
use storefront::server;
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a router over a seeded in-memory SQLite database
async fn setup_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    seed::seed_catalog(&db).await.expect("Failed to seed");
    api::api_router(AppState::new(db))
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .method(method)
        .body(Body::empty())
        .unwrap();
    read(app.clone().oneshot(req).await.unwrap()).await
}

async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    read(app.clone().oneshot(req).await.unwrap()).await
}

async fn read(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_listing_hides_out_of_stock_products() {
    let app = setup_app().await;

    let (status, body) = send(&app, "GET", "/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    let names: Vec<&str> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert!(!names.contains(&"Tablette Gamma"));
    assert!(!names.contains(&"Casque Audio Epsilon"));
    assert_eq!(names[0], "Smartphone Alpha");
}

#[tokio::test]
async fn test_product_detail_statuses() {
    let app = setup_app().await;

    let (status, body) = send(&app, "GET", "/products/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Tablette Gamma");
    assert_eq!(body["serial_number"], "SN345678");

    let (status, _) = send(&app, "GET", "/products/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for bad in ["/products/-1", "/products/abc", "/products/0"] {
        let (status, _) = send(&app, "GET", bad).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", bad);
    }
}

#[tokio::test]
async fn test_buy_in_stock_product() {
    let app = setup_app().await;

    let (status, body) = send(&app, "POST", "/buy/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["new_stock"], 24);

    let (_, log) = send(&app, "GET", "/transactions").await;
    assert_eq!(log["total"], 1);
    assert_eq!(log["transactions"][0]["product_id"], 1);
    assert_eq!(log["transactions"][0]["product_serial_number"], "SN123456");
}

#[tokio::test]
async fn test_buy_out_of_stock_product() {
    let app = setup_app().await;

    let (status, body) = send(&app, "POST", "/buy/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "out of stock");

    let (_, detail) = send(&app, "GET", "/products/3").await;
    assert_eq!(detail["stock"], 0);
    let (_, log) = send(&app, "GET", "/transactions").await;
    assert_eq!(log["total"], 0);
}

#[tokio::test]
async fn test_buy_unknown_product() {
    let app = setup_app().await;

    let (status, body) = send(&app, "POST", "/buy/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "not found");
}

#[tokio::test]
async fn test_buy_with_malformed_id() {
    let app = setup_app().await;

    for bad in ["/buy/-1", "/buy/abc"] {
        let (status, body) = send(&app, "POST", bad).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", bad);
        assert_eq!(body["success"], false);
    }

    let (_, log) = send(&app, "GET", "/transactions").await;
    assert_eq!(log["total"], 0);
}

#[tokio::test]
async fn test_admin_form_creates_product() {
    let app = setup_app().await;

    let (status, body) = post_form(
        &app,
        "/admin/products",
        "name=Webcam+Theta&year=2024&price=79.90&stock=3&serialNumber=SN890123",
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 8);
    assert_eq!(body["product"]["name"], "Webcam Theta");

    let (status, detail) = send(&app, "GET", "/products/8").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["stock"], 3);
}

#[tokio::test]
async fn test_admin_form_with_missing_fields_inserts_nothing() {
    let app = setup_app().await;

    let (status, body) = post_form(&app, "/admin/products", "name=Webcam&year=soon&price=10").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["year", "stock", "serial_number"]);

    let (status, _) = send(&app, "GET", "/products/8").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_in_memory_store_serves_same_api() {
    let app = api::api_router(AppState::in_memory(Arc::new(InMemoryStore::with_catalog())));

    let (status, body) = send(&app, "POST", "/buy/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["new_stock"], 59);

    let (_, body) = send(&app, "POST", "/buy/5").await;
    assert_eq!(body["message"], "out of stock");
}

#[tokio::test]
async fn test_full_router_nests_api_and_greets() {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let app = server::build_router(AppState::new(db), &[]);

    let (status, body) = send(&app, "GET", "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/api/hello/Alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Bonjour Alice!");
}
