//! End-to-end tests for the scheduling flow: project setup, scene bulk
//! saves, stripboard views, moves, and day remapping.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: Project CRUD and cached totals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn project_and_scene_bulk_save(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/projects", &json!({ "name": "Pilot" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let project = body_json(response).await;
    let project_id = project["id"].as_i64().unwrap();
    assert_eq!(project["scene_count"], 0);

    // Bulk replace with two scenes; pages derive from the eighths strings.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/scenes"),
        &json!([
            { "scene_number": "1", "page_eighths": "1 4/8" },
            { "scene_number": "2", "page_eighths": "4/8" },
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let scenes = body_json(response).await;
    assert_eq!(scenes.as_array().unwrap().len(), 2);
    assert_eq!(scenes[0]["pages"], 1.5);
    assert_eq!(scenes[1]["pages"], 0.5);

    let response = get(app.clone(), &format!("/api/v1/projects/{project_id}")).await;
    let project = body_json(response).await;
    assert_eq!(project["scene_count"], 2);
    assert_eq!(project["total_pages"], 2.0);

    // A malformed eighths string rejects the whole save.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/scenes"),
        &json!([{ "scene_number": "3", "page_eighths": "9/8" }]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await;
    assert_eq!(error["code"], "VALIDATION_ERROR");

    // The failed save changed nothing.
    let response = get(app, &format!("/api/v1/projects/{project_id}")).await;
    let project = body_json(response).await;
    assert_eq!(project["scene_count"], 2);
}

// ---------------------------------------------------------------------------
// Test: Element creation classifies free-text categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn element_category_is_classified_at_ingestion(pool: PgPool) {
    let app = build_test_app(pool);

    let project = body_json(
        post_json(app.clone(), "/api/v1/projects", &json!({ "name": "Elements" })).await,
    )
    .await;
    let project_id = project["id"].as_i64().unwrap();
    let base = format!("/api/v1/projects/{project_id}/elements");

    let element = body_json(
        post_json(
            app.clone(),
            &base,
            &json!({ "name": "Police Cruiser", "category": "Picture Vehicle" }),
        )
        .await,
    )
    .await;
    assert_eq!(element["category"], "vehicle");

    let element = body_json(
        post_json(
            app.clone(),
            &base,
            &json!({ "name": "Crowd", "category": "Background Extras" }),
        )
        .await,
    )
    .await;
    assert_eq!(element["category"], "extra");

    let element = body_json(
        post_json(app.clone(), &base, &json!({ "name": "Mystery", "category": "???" })).await,
    )
    .await;
    assert_eq!(element["category"], "other");

    // Listing puts cast first; these two are non-cast so order is by
    // category then name.
    let listed = body_json(get(app, &base).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Test: Stripboard view, cross-bucket move, day remap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn stripboard_move_and_remap_flow(pool: PgPool) {
    let app = build_test_app(pool);

    let project = body_json(
        post_json(app.clone(), "/api/v1/projects", &json!({ "name": "Board" })).await,
    )
    .await;
    let project_id = project["id"].as_i64().unwrap();

    let scenes = body_json(
        put_json(
            app.clone(),
            &format!("/api/v1/projects/{project_id}/scenes"),
            &json!([
                { "scene_number": "1" },
                { "scene_number": "2" },
            ]),
        )
        .await,
    )
    .await;
    let scene1 = scenes[0]["id"].as_i64().unwrap();
    let scene2 = scenes[1]["id"].as_i64().unwrap();

    let response = post_json(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/stripboards"),
        &json!({ "name": "Main" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let board = body_json(response).await;
    let board_id = board["id"].as_i64().unwrap();

    // Save the strip list; both scenes are unscheduled.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/stripboards/{board_id}"),
        &json!({ "strips": [
            { "scene_id": scene1, "sort_order": 0.0 },
            { "scene_id": scene2, "sort_order": 1.0 },
        ]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let view = body_json(response).await;
    let buckets = view["data"]["buckets"].as_array().unwrap();
    assert_eq!(buckets.len(), 1); // unscheduled only
    assert!(buckets[0]["shoot_day"].is_null());
    let strip2 = buckets[0]["strips"][1]["strip"]["id"].as_i64().unwrap();

    // Plan one shooting day; no scene is scheduled, so nothing remaps.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/stripboards/{board_id}/days"),
        &json!({ "days": ["2024-09-01"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let board = body_json(response).await;
    assert_eq!(board["shooting_days"], json!(["2024-09-01"]));

    // The planned day renders as an empty bucket.
    let view = body_json(get(app.clone(), &format!("/api/v1/stripboards/{board_id}")).await).await;
    let buckets = view["data"]["buckets"].as_array().unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[1]["shoot_day"], "2024-09-01");
    assert!(buckets[1]["strips"].as_array().unwrap().is_empty());

    // Move the bottom unscheduled strip down across the bucket boundary: its
    // scene gets the day, and it lands first (alone) in that bucket.
    let response = post_json(
        app.clone(),
        &format!("/api/v1/stripboards/{board_id}/move"),
        &json!({ "strip_id": strip2, "direction": "down" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let outcome = body_json(response).await;
    assert!(outcome["data"]["Rebucketed"].is_object(), "got {outcome}");

    let scene = body_json(get(app.clone(), &format!("/api/v1/scenes/{scene2}")).await).await;
    assert_eq!(scene["shoot_day"], "2024-09-01");

    let view = body_json(get(app.clone(), &format!("/api/v1/stripboards/{board_id}")).await).await;
    let buckets = view["data"]["buckets"].as_array().unwrap();
    assert_eq!(buckets[0]["strips"].as_array().unwrap().len(), 1);
    assert_eq!(buckets[1]["strips"].as_array().unwrap().len(), 1);
    assert_eq!(
        buckets[1]["strips"][0]["scene"]["id"].as_i64().unwrap(),
        scene2
    );

    // Moving further down from the bottom of the last day bucket is a no-op.
    let outcome = body_json(
        post_json(
            app.clone(),
            &format!("/api/v1/stripboards/{board_id}/move"),
            &json!({ "strip_id": strip2, "direction": "down" }),
        )
        .await,
    )
    .await;
    assert_eq!(outcome["data"], "NoOp");

    // Remap the single shooting day onto a new date: the scheduled scene
    // follows it positionally.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/stripboards/{board_id}/days"),
        &json!({ "days": ["2024-10-15"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let scene = body_json(get(app.clone(), &format!("/api/v1/scenes/{scene2}")).await).await;
    assert_eq!(scene["shoot_day"], "2024-10-15");

    // Shrink the range to empty: the scene becomes unscheduled again.
    put_json(
        app.clone(),
        &format!("/api/v1/stripboards/{board_id}/days"),
        &json!({ "days": [] }),
    )
    .await;
    let scene = body_json(get(app.clone(), &format!("/api/v1/scenes/{scene2}")).await).await;
    assert!(scene["shoot_day"].is_null());

    // Board deletion cascades to strips but leaves scenes alone.
    let response = delete(app.clone(), &format!("/api/v1/stripboards/{board_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get(app, &format!("/api/v1/scenes/{scene1}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: Scene update with shoot-day clearing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn scene_update_distinguishes_absent_from_null_shoot_day(pool: PgPool) {
    let app = build_test_app(pool);

    let project = body_json(
        post_json(app.clone(), "/api/v1/projects", &json!({ "name": "Days" })).await,
    )
    .await;
    let project_id = project["id"].as_i64().unwrap();

    let scene = body_json(
        post_json(
            app.clone(),
            &format!("/api/v1/projects/{project_id}/scenes"),
            &json!({ "scene_number": "7", "shoot_day": "2024-04-01" }),
        )
        .await,
    )
    .await;
    let scene_id = scene["id"].as_i64().unwrap();

    // Omitted shoot_day leaves the assignment alone.
    let updated = body_json(
        put_json(
            app.clone(),
            &format!("/api/v1/scenes/{scene_id}"),
            &json!({ "synopsis": "Rooftop chase" }),
        )
        .await,
    )
    .await;
    assert_eq!(updated["shoot_day"], "2024-04-01");
    assert_eq!(updated["synopsis"], "Rooftop chase");

    // Explicit null clears it.
    let updated = body_json(
        put_json(
            app.clone(),
            &format!("/api/v1/scenes/{scene_id}"),
            &json!({ "shoot_day": null }),
        )
        .await,
    )
    .await;
    assert!(updated["shoot_day"].is_null());
}

// ---------------------------------------------------------------------------
// Test: Missing resources return 404 with the standard error envelope
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_resources_return_404(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app.clone(), "/api/v1/projects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error = body_json(response).await;
    assert_eq!(error["code"], "NOT_FOUND");
    assert!(error["error"].as_str().unwrap().contains("Project"));

    let response = get(app, "/api/v1/stripboards/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
