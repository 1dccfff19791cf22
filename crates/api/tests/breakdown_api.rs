//! Integration tests for the breakdown endpoints.
//!
//! The extraction service itself is external, so these cover the request
//! validation and job plumbing reachable without a credential.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn breakdown_without_credential_returns_503(pool: PgPool) {
    let app = build_test_app(pool);

    let project = body_json(
        post_json(app.clone(), "/api/v1/projects", &json!({ "name": "Script" })).await,
    )
    .await;
    let project_id = project["id"].as_i64().unwrap();

    let response = post_json(
        app,
        &format!("/api/v1/projects/{project_id}/breakdown"),
        &json!({ "filename": "script.pdf", "pdf_base64": "JVBERi0=" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let error = body_json(response).await;
    assert_eq!(error["code"], "MISSING_CREDENTIAL");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn breakdown_for_missing_project_returns_404(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/projects/999999/breakdown",
        &json!({ "pdf_base64": "JVBERi0=" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_job_poll_returns_400(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(
        app,
        "/api/v1/breakdown/jobs/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await;
    assert_eq!(error["code"], "BAD_REQUEST");
}
