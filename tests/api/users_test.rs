use axum::http::StatusCode;

use crate::common::{test_email, test_password, unreachable_server, TestContext};

#[tokio::test]
async fn get_unknown_user_returns_not_found() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/users/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Utilisateur non trouvé");
}

#[tokio::test]
async fn get_user_with_non_integer_id_returns_not_found() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/users/abc").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_students_is_sorted_by_name_and_excludes_admins() {
    let ctx = TestContext::new();
    ctx.register_student("Charlie", &test_email(), test_password()).await;
    ctx.register_student("Alice", &test_email(), test_password()).await;
    ctx.register_student("Bob", &test_email(), test_password()).await;
    ctx.seed_admin("Aaron", "admin@ecole.fr", "adminpass").await;

    let response = ctx.server.get("/api/etudiants").await;
    response.assert_status_ok();

    let students: Vec<serde_json::Value> = response.json();
    let names: Vec<&str> = students.iter().map(|s| s["nom"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
    assert!(students.iter().all(|s| s["role"] == "etudiant"));
    assert!(students.iter().all(|s| s.get("password_hash").is_none()));
}

#[tokio::test]
async fn list_students_on_empty_database() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/etudiants").await;
    response.assert_status_ok();
    response.assert_json(&serde_json::json!([]));
}

#[tokio::test]
async fn user_reads_when_database_is_down_return_server_error() {
    let (server, _frontend) = unreachable_server();

    server.get("/api/users/1").await.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    server.get("/api/etudiants").await.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
