//! Real TCP round-trip through `HttpServer` and its shutdown handle

use serde_json::{json, Value};
use waitlist_api_http::{HttpServer, HttpServerConfig};
use waitlist_integration_tests::TestContext;

#[tokio::test]
async fn test_serve_join_and_shutdown() {
    let ctx = TestContext::new().await;
    let config = HttpServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    let mut handle = HttpServer::new(config, ctx.app_state())
        .start()
        .await
        .unwrap();
    let base_url = format!("http://{}", handle.local_addr());
    let client = reqwest::Client::new();

    let liveness = client.get(&base_url).send().await.unwrap();
    assert_eq!(liveness.text().await.unwrap(), "The server is working");

    let joined: Value = client
        .post(format!("{}/join_queue", base_url))
        .json(&json!({"user_id": "u1", "venue_id": "3"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(joined["position"], 1);

    // Release the keep-alive connection before shutting down
    drop(client);
    handle.stop();
    handle.stopped().await.unwrap();

    let after = reqwest::Client::new().get(&base_url).send().await;
    assert!(after.is_err());
}

#[tokio::test]
async fn test_dropped_handle_keeps_serving() {
    let ctx = TestContext::new().await;
    let config = HttpServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    let handle = HttpServer::new(config, ctx.app_state())
        .start()
        .await
        .unwrap();
    let base_url = format!("http://{}", handle.local_addr());
    drop(handle);
    tokio::task::yield_now().await;

    let liveness = reqwest::Client::new().get(&base_url).send().await.unwrap();
    assert_eq!(liveness.text().await.unwrap(), "The server is working");
}
