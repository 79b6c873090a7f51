mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn fetch_unknown_id_returns_404() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/entries/does-not-exist", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 404);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].is_string());

    app.cleanup().await;
}

#[tokio::test]
async fn fetch_blank_id_returns_400() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    // A whitespace-only id routes to the by-id handler but is not resolvable.
    let response = client
        .get(format!("{}/entries/%20", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 400);

    app.cleanup().await;
}
