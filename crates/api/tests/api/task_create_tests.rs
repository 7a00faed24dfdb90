//! Integration tests for POST /api/tasks.

use crate::common::*;
use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test]
async fn create_task_applies_defaults() {
    let client = TaskFlowClient::empty();

    let result = client.create_task(&TaskFactory::titled("Buy milk")).await;

    assert_success(&result);
    let task = result.unwrap();
    assert_eq!(task.id, "gen-1");
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, "");
    assert!(!task.completed);
    assert_eq!(task.category_id, "1");
    assert_eq!(task.priority, "medium");
    assert_eq!(task.created_at, FIXED_INSTANT);
}

#[rstest]
#[tokio::test]
async fn create_task_echoes_supplied_fields() {
    let client = TaskFlowClient::empty();
    let body = TaskFactory::full("Report", "Quarterly numbers", "2", "high");

    let task = client.create_task(&body).await.unwrap();

    assert_eq!(task.description, "Quarterly numbers");
    assert_eq!(task.category_id, "2");
    assert_eq!(task.priority, "high");
}

#[rstest]
#[tokio::test]
async fn create_task_grows_store_by_one_with_unique_ids() {
    let client = TaskFlowClient::seeded();

    let first = client.create_task(&TaskFactory::titled("a")).await.unwrap();
    let second = client.create_task(&TaskFactory::titled("a")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(first.id, SEED_TASK_ID);
    assert_eq!(client.list_tasks().await.unwrap().len(), 3);
}

#[rstest]
#[tokio::test]
async fn create_task_keeps_insertion_order() {
    let client = TaskFlowClient::empty();
    for title in ["one", "two", "three"] {
        client.create_task(&TaskFactory::titled(title)).await.unwrap();
    }

    let titles: Vec<String> = client
        .list_tasks()
        .await
        .unwrap()
        .into_iter()
        .map(|task| task.title)
        .collect();

    assert_eq!(titles, vec!["one", "two", "three"]);
}

#[rstest]
#[case(json!({}))]
#[case(json!({"title": ""}))]
#[case(json!({"title": null}))]
#[case(json!({"description": "no title"}))]
#[tokio::test]
async fn create_task_without_title_is_rejected(#[case] body: serde_json::Value) {
    let client = TaskFlowClient::seeded();

    let result = client.create_task(&body).await;

    assert_bad_request(&result, "Title is required");
    assert_eq!(client.list_tasks().await.unwrap().len(), 1);
}

#[rstest]
#[case("urgent")]
#[case("HIGH")]
#[tokio::test]
async fn create_task_with_unknown_priority_is_rejected(#[case] priority: &str) {
    let client = TaskFlowClient::empty();

    let result = client
        .create_task(&TaskFactory::with_priority("x", priority))
        .await;

    assert_bad_request(&result, "Priority must be one of: low, medium, high");
    assert!(client.list_tasks().await.unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn create_task_accepts_body_without_content_type() {
    let client = TaskFlowClient::empty();

    let response = client
        .send_raw(Method::POST, "/api/tasks", r#"{"title":"raw"}"#)
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["title"], "raw");
}

#[rstest]
#[tokio::test]
async fn create_task_with_empty_body_is_missing_title() {
    let client = TaskFlowClient::empty();

    let response = client.send_raw(Method::POST, "/api/tasks", "").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({"error": "Title is required"}));
}

#[rstest]
#[case("{not json")]
#[case(r#"{"title": 42}"#)]
#[case(r#"{"title": "x", "categoryId": false}"#)]
#[case(r#"["x"]"#)]
#[case(r#"["Buy milk", "", "1", "high"]"#)]
#[tokio::test]
async fn create_task_with_malformed_body_is_rejected(#[case] body: &str) {
    let client = TaskFlowClient::empty();

    let response = client.send_raw(Method::POST, "/api/tasks", body).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.json()["error"].as_str().unwrap().to_string();
    assert!(message.starts_with("Invalid request body: "), "{message}");
    assert!(client.list_tasks().await.unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn create_task_with_array_body_names_expected_shape() {
    let client = TaskFlowClient::empty();

    let response = client.send_raw(Method::POST, "/api/tasks", r#"["Buy milk"]"#).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json(),
        json!({"error": "Invalid request body: expected a JSON object"})
    );
}
