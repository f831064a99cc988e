use crate::common::{unreachable_server, TestContext};

#[tokio::test]
async fn health_reports_connected_database() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].as_str().is_some_and(|t| t.contains('T')));
}

#[tokio::test]
async fn health_stays_ok_when_database_is_down() {
    let (server, _frontend) = unreachable_server();

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "disconnected");
}
