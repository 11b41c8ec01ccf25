//! Integration tests for the role listing endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use contact_db::store::SubmissionStore;

#[tokio::test]
async fn roles_are_seeded_and_sorted_by_name() {
    let (app, _store) = build_test_app().await;

    let response = get(app, "/api/roles").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let names: Vec<&str> = json["roles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["role_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["BA", "CA", "Manager"]);

    for role in json["roles"].as_array().unwrap() {
        assert!(role["id"].is_i64());
    }
}

#[tokio::test]
async fn repeated_initialize_does_not_duplicate_roles() {
    let (app, store) = build_test_app().await;
    store.initialize().await.unwrap();
    store.initialize().await.unwrap();

    let json = body_json(get(app, "/api/roles").await).await;

    assert_eq!(json["roles"].as_array().unwrap().len(), 3);
}
