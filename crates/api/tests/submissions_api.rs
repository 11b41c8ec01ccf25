//! Integration tests for the submission endpoints.
//!
//! Each test drives the full router (middleware included) against an
//! in-memory store.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use contact_db::store::SubmissionStore;
use serde_json::json;
use tower::ServiceExt;

fn ann() -> serde_json::Value {
    json!({ "store": "bigw", "name": "Ann", "email": "a@x.com", "message": "hi" })
}

// ---------------------------------------------------------------------------
// Test: the full lifecycle scenario
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_list_update_delete_lifecycle() {
    let (app, _store) = build_test_app().await;

    let response = post_json(app.clone(), "/api/submit-form", ann()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, json!({ "success": true, "id": 1 }));

    let json = body_json(get(app.clone(), "/api/submissions").await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["submissions"].as_array().unwrap().len(), 1);
    assert_eq!(json["submissions"][0]["id"], 1);
    assert_eq!(json["submissions"][0]["store"], "bigw");

    let response = put_json(
        app.clone(),
        "/api/submissions/1",
        json!({ "store": "bws", "name": "Ann", "email": "a@x.com", "message": "hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true }));

    let json = body_json(get(app.clone(), "/api/submissions").await).await;
    assert_eq!(json["submissions"][0]["store"], "bws");

    let response = delete(app.clone(), "/api/submissions/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true }));

    let json = body_json(get(app.clone(), "/api/submissions").await).await;
    assert_eq!(json, json!({ "success": true, "submissions": [] }));

    let response = delete(app, "/api/submissions/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Submission not found");
}

// ---------------------------------------------------------------------------
// Test: submit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_returns_fresh_ids_for_identical_bodies() {
    let (app, store) = build_test_app().await;

    let first = body_json(post_json(app.clone(), "/api/submit-form", ann()).await).await;
    let second = body_json(post_json(app, "/api/submit-form", ann()).await).await;

    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);
    assert_eq!(store.list_submissions().await.unwrap().len(), 2);
}

#[tokio::test]
async fn submit_records_created_at_and_fields() {
    let (app, store) = build_test_app().await;
    let before = chrono::Utc::now();

    post_json(app, "/api/submit-form", ann()).await;

    let rows = store.list_submissions().await.unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(
        (row.store.as_str(), row.name.as_str(), row.email.as_str(), row.message.as_str()),
        ("bigw", "Ann", "a@x.com", "hi")
    );
    assert!(row.created_at >= before);
}

#[tokio::test]
async fn submit_with_missing_field_is_rejected_and_not_stored() {
    let (app, store) = build_test_app().await;

    for field in ["store", "name", "email", "message"] {
        let mut body = ann();
        body.as_object_mut().unwrap().remove(field);

        let response = post_json(app.clone(), "/api/submit-form", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "missing {field}");

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "INVALID_INPUT");
        let message = json["message"].as_str().unwrap();
        assert!(message.starts_with("All fields are required"));
        assert!(message.contains(field));
    }

    assert!(store.list_submissions().await.unwrap().is_empty());
}

#[tokio::test]
async fn submit_with_blank_field_is_rejected() {
    let (app, store) = build_test_app().await;

    let mut body = ann();
    body["name"] = json!("   ");
    let response = post_json(app, "/api/submit-form", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.list_submissions().await.unwrap().is_empty());
}

#[tokio::test]
async fn submit_accepts_any_non_empty_email() {
    let (app, _store) = build_test_app().await;

    let mut body = ann();
    body["email"] = json!("not-an-email");
    let response = post_json(app, "/api/submit-form", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn submit_stores_optional_role() {
    let (app, store) = build_test_app().await;

    let mut body = ann();
    body["role"] = json!("Manager");
    post_json(app.clone(), "/api/submit-form", body).await;

    let rows = store.list_submissions().await.unwrap();
    assert_eq!(rows[0].role.as_deref(), Some("Manager"));

    let json = body_json(get(app, "/api/submissions").await).await;
    assert_eq!(json["submissions"][0]["role"], "Manager");
}

#[tokio::test]
async fn submit_with_malformed_json_returns_400_envelope() {
    let (app, store) = build_test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/submit-form")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "success": false, "message": "Invalid JSON body", "code": "INVALID_INPUT" })
    );

    // A non-string field is malformed input too, and the serde detail stays
    // in the logs.
    let mut body = ann();
    body["store"] = json!(42);
    let response = post_json(app, "/api/submit-form", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let message = body_json(response).await["message"].as_str().unwrap().to_string();
    assert_eq!(message, "Invalid JSON body");
    assert!(!message.contains("invalid type"));

    assert!(store.list_submissions().await.unwrap().is_empty());
}

#[tokio::test]
async fn submit_without_json_content_type_returns_400() {
    let (app, _store) = build_test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/submit-form")
        .body(Body::from(ann().to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
}

// ---------------------------------------------------------------------------
// Test: list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_is_empty_when_nothing_submitted() {
    let (app, _store) = build_test_app().await;

    let response = get(app, "/api/submissions").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "success": true, "submissions": [] })
    );
}

#[tokio::test]
async fn list_is_ordered_by_id() {
    let (app, _store) = build_test_app().await;
    for store in ["bigw", "bws", "kmart"] {
        let mut body = ann();
        body["store"] = json!(store);
        post_json(app.clone(), "/api/submit-form", body).await;
    }
    delete(app.clone(), "/api/submissions/2").await;

    let json = body_json(get(app, "/api/submissions").await).await;
    let ids: Vec<i64> = json["submissions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [1, 3]);
}

// ---------------------------------------------------------------------------
// Test: update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_unknown_id_returns_404_and_changes_nothing() {
    let (app, store) = build_test_app().await;
    post_json(app.clone(), "/api/submit-form", ann()).await;

    let response = put_json(app, "/api/submissions/99", ann()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
    let rows = store.list_submissions().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].store, "bigw");
}

#[tokio::test]
async fn update_preserves_id_and_created_at() {
    let (app, store) = build_test_app().await;
    post_json(app.clone(), "/api/submit-form", ann()).await;
    let before = store.list_submissions().await.unwrap().remove(0);

    put_json(
        app,
        "/api/submissions/1",
        json!({ "store": "bws", "name": "Bo", "email": "b@x.com", "message": "bye" }),
    )
    .await;

    let after = store.list_submissions().await.unwrap().remove(0);
    assert_eq!(after.id, before.id);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.name, "Bo");
    assert_eq!(after.email, "b@x.com");
    assert_eq!(after.message, "bye");
}

#[tokio::test]
async fn update_with_missing_field_returns_400() {
    let (app, store) = build_test_app().await;
    post_json(app.clone(), "/api/submit-form", ann()).await;

    let response = put_json(app, "/api/submissions/1", json!({ "store": "bws" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.list_submissions().await.unwrap()[0].store, "bigw");
}

#[tokio::test]
async fn update_with_non_numeric_id_returns_400() {
    let (app, _store) = build_test_app().await;

    let response = put_json(app, "/api/submissions/abc", ann()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_INPUT");
}

// ---------------------------------------------------------------------------
// Test: delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_with_non_numeric_id_returns_400() {
    let (app, _store) = build_test_app().await;

    for id in ["abc", "1.5", "-1", "0"] {
        let response = delete(app.clone(), &format!("/api/submissions/{id}")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "id {id}");
        assert_eq!(body_json(response).await["success"], false);
    }
}

#[tokio::test]
async fn delete_removes_only_the_target() {
    let (app, store) = build_test_app().await;
    post_json(app.clone(), "/api/submit-form", ann()).await;
    post_json(app.clone(), "/api/submit-form", ann()).await;

    let response = delete(app, "/api/submissions/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let rows = store.list_submissions().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 2);
}

// ---------------------------------------------------------------------------
// Test: store failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_failure_maps_to_500_without_leaking_details() {
    let (app, store) = build_test_app().await;
    store.set_unavailable(true);

    let responses = [
        post_json(app.clone(), "/api/submit-form", ann()).await,
        get(app.clone(), "/api/submissions").await,
        put_json(app.clone(), "/api/submissions/1", ann()).await,
        delete(app.clone(), "/api/submissions/1").await,
        get(app, "/api/roles").await,
    ];

    for response in responses {
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(
            json,
            json!({ "success": false, "message": "Database error", "code": "STORE_UNAVAILABLE" })
        );
    }
}

#[tokio::test]
async fn validation_runs_before_the_store_is_touched() {
    let (app, store) = build_test_app().await;
    store.set_unavailable(true);

    let response = post_json(app, "/api/submit-form", json!({ "store": "bigw" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
