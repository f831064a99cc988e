use axum::http::StatusCode;

use crate::common::{test_email, test_password, unreachable_server, TestContext};

#[tokio::test]
async fn validate_stage_marks_it_valide_durably() {
    let ctx = TestContext::new();
    let alice = ctx.register_student("Alice", &test_email(), test_password()).await;
    let stage = ctx.declare_stage(alice, "Acme").await;

    let response = ctx.server.post(&format!("/api/stages/{stage}/validate")).await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Stage valide avec succès");
    assert_eq!(body["stage"]["id"], stage);
    assert_eq!(body["stage"]["statut"], "valide");
    assert_eq!(body["stage"]["etudiant_nom"], "Alice");

    let fetched: serde_json::Value = ctx.server.get(&format!("/api/stages/{stage}")).await.json();
    assert_eq!(fetched["statut"], "valide");
}

#[tokio::test]
async fn reject_stage_accepts_put() {
    let ctx = TestContext::new();
    let alice = ctx.register_student("Alice", &test_email(), test_password()).await;
    let stage = ctx.declare_stage(alice, "Acme").await;

    let response = ctx.server.put(&format!("/api/stages/{stage}/reject")).await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Stage refuse avec succès");
    assert_eq!(body["stage"]["statut"], "refuse");

    let fetched: serde_json::Value = ctx.server.get(&format!("/api/stages/{stage}")).await.json();
    assert_eq!(fetched["statut"], "refuse");
}

#[tokio::test]
async fn reviewing_twice_is_allowed() {
    let ctx = TestContext::new();
    let alice = ctx.register_student("Alice", &test_email(), test_password()).await;
    let stage = ctx.declare_stage(alice, "Acme").await;

    ctx.server
        .post(&format!("/api/stages/{stage}/validate"))
        .await
        .assert_status_ok();
    let again = ctx.server.put(&format!("/api/stages/{stage}/validate")).await;
    again.assert_status_ok();
    let body: serde_json::Value = again.json();
    assert_eq!(body["stage"]["statut"], "valide");
}

#[tokio::test]
async fn reviewing_unknown_stage_returns_not_found() {
    let ctx = TestContext::new();

    for path in ["/api/stages/77/validate", "/api/stages/77/reject"] {
        let response = ctx.server.post(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Stage non trouvé");
    }
}

#[tokio::test]
async fn reviewing_when_database_is_down_returns_server_error() {
    let (server, _frontend) = unreachable_server();

    server
        .post("/api/stages/1/validate")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
