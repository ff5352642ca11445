//! End-to-end tests: the real HTTP server over a temporary SQLite file.
//!
//!   cargo test --test api_test

use std::time::Duration;

use inventory_service::{build_server, create_pool, run_migrations, AppContext, DbConfig};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

/// A running server plus the directory holding its database file. Dropping it
/// removes the file.
struct TestServer {
    base_url: String,
    _dir: TempDir,
}

fn free_port() -> u16 {
    // Bind to port 0 to let the OS assign a free port, then release it.
    std::net::TcpListener::bind("127.0.0.1:0")
        .expect("bind failed")
        .local_addr()
        .expect("addr failed")
        .port()
}

/// Wait until `url` answers at all, retrying every `interval` for up to
/// `timeout` total. Panics if the server never comes up.
async fn wait_for_http(url: &str, timeout: Duration, interval: Duration) {
    let client = Client::new();
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if tokio::time::Instant::now() > deadline {
            panic!("server did not become ready within {:?}", timeout);
        }
        if client.get(url).send().await.is_ok() {
            return;
        }
        tokio::time::sleep(interval).await;
    }
}

async fn start_server() -> TestServer {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = DbConfig {
        url: dir.path().join("inventory.db").to_string_lossy().into_owned(),
        pool_size: 4,
        ..DbConfig::default()
    };
    let pool = create_pool(&config).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");

    let port = free_port();
    let server = build_server(AppContext::from_pool(pool), "127.0.0.1", port)
        .expect("Failed to bind the inventory service");
    actix_web::rt::spawn(server);

    let base_url = format!("http://127.0.0.1:{}", port);
    wait_for_http(
        &format!("{}/products", base_url),
        Duration::from_secs(10),
        Duration::from_millis(100),
    )
    .await;

    TestServer {
        base_url,
        _dir: dir,
    }
}

async fn post_json(http: &Client, url: String, body: Value) -> (StatusCode, Value) {
    let resp = http
        .post(url)
        .json(&body)
        .send()
        .await
        .expect("POST failed");
    let status = resp.status();
    (status, resp.json().await.expect("response is not JSON"))
}

async fn get_json(http: &Client, url: String) -> (StatusCode, Value) {
    let resp = http.get(url).send().await.expect("GET failed");
    let status = resp.status();
    (status, resp.json().await.expect("response is not JSON"))
}

#[actix_web::test]
async fn products_lifecycle_over_http() {
    let server = start_server().await;
    let http = Client::new();

    let (status, body) = get_json(&http, format!("{}/products", server.base_url)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let mut ids = Vec::new();
    for code in ["ABC123", "ABC124"] {
        let payload = json!({
            "productCode": code,
            "name": "ProdK",
            "inventory": 30,
            "price": 10,
            "status": "In Stock"
        });
        let (status, created) =
            post_json(&http, format!("{}/products", server.base_url), payload.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["productCode"], payload["productCode"]);
        ids.push(created["id"].as_i64().expect("id"));
    }
    assert_eq!(ids, vec![1, 2]);

    let (status, fetched) = get_json(&http, format!("{}/product/2", server.base_url)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["productCode"], "ABC124");
    assert_eq!(fetched["status"], "In Stock");

    let (status, listed) = get_json(&http, format!("{}/products", server.base_url)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(2));

    let (status, missing) = get_json(&http, format!("{}/product/11", server.base_url)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["error"], "product 11 not found");

    let (status, _) = get_json(&http, format!("{}/product/eleven", server.base_url)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn orders_and_bulk_items_over_http() {
    let server = start_server().await;
    let http = Client::new();

    let (status, order) = post_json(
        &http,
        format!("{}/orders", server.base_url),
        json!({
            "customerName": "Donald",
            "total": 110,
            "status": "approved",
            "items": [
                { "product_id": 2, "quantity": 10 },
                { "product_id": 3, "quantity": 4 }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["id"], 1);
    assert_eq!(order["items"].as_array().map(Vec::len), Some(2));

    let (status, _) = post_json(
        &http,
        format!("{}/orderitems", server.base_url),
        json!([
            { "order_id": 1, "product_id": 5, "quantity": 1 },
            { "order_id": 77, "product_id": 6, "quantity": 1 }
        ]),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, orders) = get_json(&http, format!("{}/orders", server.base_url)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        orders[0]["items"],
        json!([
            { "order_id": 1, "product_id": 2, "quantity": 10 },
            { "order_id": 1, "product_id": 3, "quantity": 4 },
            { "order_id": 1, "product_id": 5, "quantity": 1 }
        ])
    );

    let (status, doc) = get_json(&http, format!("{}/api-docs/openapi.json", server.base_url)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/orderitems"].is_object());
}
