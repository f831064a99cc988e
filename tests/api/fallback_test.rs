use axum::http::StatusCode;

use crate::common::{TestContext, INDEX_HTML};

#[tokio::test]
async fn unknown_api_path_returns_json_not_found() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/does-not-exist").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&serde_json::json!({
        "success": false,
        "error": "Ressource non trouvée"
    }));
}

#[tokio::test]
async fn wrong_method_on_api_path_is_not_served_by_frontend() {
    let ctx = TestContext::new();

    let response = ctx.server.delete("/api/stages").await;
    assert_ne!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn frontend_assets_are_served() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/app.js").await;
    response.assert_status_ok();
    response.assert_text("console.log('stages');");
}

#[tokio::test]
async fn unknown_page_falls_back_to_index() {
    let ctx = TestContext::new();

    let root = ctx.server.get("/").await;
    root.assert_status_ok();
    root.assert_text(INDEX_HTML);

    let deep_link = ctx.server.get("/dashboard/admin").await;
    deep_link.assert_status_ok();
    deep_link.assert_text(INDEX_HTML);
}

#[tokio::test]
async fn api_root_with_trailing_slash_returns_json_not_found() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&serde_json::json!({
        "success": false,
        "error": "Ressource non trouvée"
    }));

    ctx.server.get("/api").await.assert_status(StatusCode::NOT_FOUND);
}
