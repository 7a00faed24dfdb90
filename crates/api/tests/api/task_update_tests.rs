//! Integration tests for PUT /api/tasks/{id}.

use crate::common::*;
use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test]
async fn update_only_completed_leaves_other_fields() {
    let client = TaskFlowClient::seeded();
    let before = client.get_task(SEED_TASK_ID).await.unwrap();

    let after = client
        .update_task(SEED_TASK_ID, &json!({"completed": true}))
        .await
        .unwrap();

    assert!(after.completed);
    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(after.priority, before.priority);
}

#[rstest]
#[tokio::test]
async fn update_with_empty_title_keeps_title() {
    let client = TaskFlowClient::seeded();

    let after = client
        .update_task(SEED_TASK_ID, &json!({"title": ""}))
        .await
        .unwrap();

    assert_eq!(after.title, "Welcome to TaskFlow");
}

#[rstest]
#[tokio::test]
async fn update_with_empty_description_clears_it() {
    let client = TaskFlowClient::seeded();

    let after = client
        .update_task(SEED_TASK_ID, &json!({"description": ""}))
        .await
        .unwrap();

    assert_eq!(after.description, "");
}

#[rstest]
#[tokio::test]
async fn update_with_completed_false_reopens() {
    let client = TaskFlowClient::seeded();
    client.toggle_task(SEED_TASK_ID).await.unwrap();

    let after = client
        .update_task(SEED_TASK_ID, &json!({"completed": false}))
        .await
        .unwrap();

    assert!(!after.completed);
}

#[rstest]
#[tokio::test]
async fn update_ignores_immutable_fields() {
    let client = TaskFlowClient::seeded();

    let after = client
        .update_task(
            SEED_TASK_ID,
            &json!({
                "id": "hijacked",
                "categoryId": "2",
                "createdAt": "1999-01-01T00:00:00.000Z",
                "title": "Renamed"
            }),
        )
        .await
        .unwrap();

    assert_eq!(after.id, SEED_TASK_ID);
    assert_eq!(after.category_id, "1");
    assert_eq!(after.created_at, FIXED_INSTANT);
    assert_eq!(after.title, "Renamed");
}

#[rstest]
#[case(json!({"priority": "low"}), "low")]
#[case(json!({"priority": ""}), "high")]
#[case(json!({"priority": null}), "high")]
#[case(json!({}), "high")]
#[tokio::test]
async fn update_priority(#[case] body: serde_json::Value, #[case] expected: &str) {
    let client = TaskFlowClient::seeded();

    let after = client.update_task(SEED_TASK_ID, &body).await.unwrap();

    assert_eq!(after.priority, expected);
}

#[rstest]
#[tokio::test]
async fn update_with_unknown_priority_is_rejected_without_change() {
    let client = TaskFlowClient::seeded();
    let before = client.get_task(SEED_TASK_ID).await.unwrap();

    let result = client
        .update_task(SEED_TASK_ID, &json!({"title": "Renamed", "priority": "urgent"}))
        .await;

    assert_bad_request(&result, "Priority must be one of: low, medium, high");
    assert_eq!(client.get_task(SEED_TASK_ID).await.unwrap(), before);
}

#[rstest]
#[tokio::test]
async fn update_unknown_task_is_not_found() {
    let client = TaskFlowClient::seeded();

    let result = client
        .update_task("missing", &json!({"priority": "urgent"}))
        .await;

    assert_not_found(&result, "Task not found");
}

#[rstest]
#[tokio::test]
async fn update_with_array_body_is_rejected() {
    let client = TaskFlowClient::seeded();
    let before = client.get_task(SEED_TASK_ID).await.unwrap();

    let response = client
        .send_raw(Method::PUT, "/api/tasks/1", r#"["Renamed", "", true]"#)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(client.get_task(SEED_TASK_ID).await.unwrap(), before);
}
