use axum::http::StatusCode;
use serde_json::json;

use crate::common::{test_email, test_password, unreachable_server, TestContext};

fn stage_payload(id_etudiant: serde_json::Value) -> serde_json::Value {
    json!({
        "id_etudiant": id_etudiant,
        "entreprise": "  Acme  ",
        "sujet": " Backend ",
        "date_debut": "2024-01-01",
        "date_fin": "2024-03-01"
    })
}

#[tokio::test]
async fn create_stage_returns_created_with_pending_status() {
    let ctx = TestContext::new();
    let student = ctx.register_student("Alice", &test_email(), test_password()).await;

    let response = ctx.server.post("/api/stages").json(&stage_payload(json!(student))).await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Stage déclaré avec succès");

    let id = body["id"].as_i64().unwrap();
    let stage: serde_json::Value = ctx.server.get(&format!("/api/stages/{id}")).await.json();
    assert_eq!(stage["statut"], "en_attente");
    assert_eq!(stage["entreprise"], "Acme");
    assert_eq!(stage["sujet"], "Backend");
    assert_eq!(stage["date_debut"], "2024-01-01");
    assert_eq!(stage["date_fin"], "2024-03-01");
    assert_eq!(stage["etudiant_nom"], "Alice");
    assert!(stage["date_declaration"].is_string());
}

#[tokio::test]
async fn create_stage_accepts_student_id_as_string() {
    let ctx = TestContext::new();
    let student = ctx.register_student("Alice", &test_email(), test_password()).await;

    let response = ctx
        .server
        .post("/api/stages")
        .json(&stage_payload(json!(student.to_string())))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn create_stage_with_end_not_after_start_is_rejected() {
    let ctx = TestContext::new();
    let student = ctx.register_student("Alice", &test_email(), test_password()).await;

    for (debut, fin) in [("2024-03-01", "2024-03-01"), ("2024-03-01", "2024-01-01")] {
        let response = ctx
            .server
            .post("/api/stages")
            .json(&json!({
                "id_etudiant": student,
                "entreprise": "Acme",
                "sujet": "Backend",
                "date_debut": debut,
                "date_fin": fin
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "La date de fin doit être après la date de début");
    }

    assert_eq!(ctx.store.stage_count(), 0);
}

#[tokio::test]
async fn create_stage_with_malformed_dates_is_rejected() {
    let ctx = TestContext::new();
    let student = ctx.register_student("Alice", &test_email(), test_password()).await;

    let response = ctx
        .server
        .post("/api/stages")
        .json(&json!({
            "id_etudiant": student,
            "entreprise": "Acme",
            "sujet": "Backend",
            "date_debut": "01/01/2024",
            "date_fin": "2024-03-01"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Format de date invalide. Utilisez YYYY-MM-DD");
    assert_eq!(ctx.store.stage_count(), 0);
}

#[tokio::test]
async fn create_stage_names_the_first_missing_field() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/stages")
        .json(&json!({
            "id_etudiant": 1,
            "entreprise": "Acme",
            "sujet": "",
            "date_debut": "2024-01-01"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Le champ sujet est requis");
}

#[tokio::test]
async fn create_stage_with_non_numeric_student_id_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx.server.post("/api/stages").json(&stage_payload(json!("abc"))).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(ctx.store.stage_count(), 0);
}

#[tokio::test]
async fn create_stage_for_unknown_student_returns_not_found() {
    let ctx = TestContext::new();

    let response = ctx.server.post("/api/stages").json(&stage_payload(json!(999))).await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Étudiant non trouvé");
    assert_eq!(ctx.store.stage_count(), 0);
}

#[tokio::test]
async fn create_stage_for_admin_returns_not_found() {
    let ctx = TestContext::new();
    let admin = ctx.seed_admin("Direction", "admin@ecole.fr", "adminpass").await;

    let response = ctx.server.post("/api/stages").json(&stage_payload(json!(admin))).await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(ctx.store.stage_count(), 0);
}

#[tokio::test]
async fn create_stage_when_database_is_down_returns_server_error() {
    let (server, _frontend) = unreachable_server();

    let response = server.post("/api/stages").json(&stage_payload(json!(1))).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Erreur de connexion à la base de données");
}
