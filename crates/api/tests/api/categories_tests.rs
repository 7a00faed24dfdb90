//! Integration tests for /api/categories.

use crate::common::*;
use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test]
async fn list_categories_returns_seed() {
    let client = TaskFlowClient::seeded();

    let categories = client.list_categories().await.unwrap();

    assert_eq!(
        categories,
        vec![
            CategoryDto {
                id: "1".to_string(),
                name: "Personal".to_string(),
                color: "#3B82F6".to_string(),
            },
            CategoryDto {
                id: "2".to_string(),
                name: "Work".to_string(),
                color: "#10B981".to_string(),
            },
        ]
    );
}

#[rstest]
#[tokio::test]
async fn create_category_with_only_name_uses_default_color() {
    let client = TaskFlowClient::seeded();

    let category = client
        .create_category(&CategoryFactory::named("Errands"))
        .await
        .unwrap();

    assert_eq!(category.id, "gen-1");
    assert_eq!(category.name, "Errands");
    assert_eq!(category.color, "#6366F1");
    assert_eq!(client.list_categories().await.unwrap().len(), 3);
}

#[rstest]
#[tokio::test]
async fn create_category_keeps_color_verbatim() {
    let client = TaskFlowClient::empty();

    let category = client
        .create_category(&CategoryFactory::coloured("Odd", "rebeccapurple"))
        .await
        .unwrap();

    assert_eq!(category.color, "rebeccapurple");
}

#[rstest]
#[case(json!({}))]
#[case(json!({"name": ""}))]
#[case(json!({"color": "#000000"}))]
#[tokio::test]
async fn create_category_without_name_is_rejected(#[case] body: serde_json::Value) {
    let client = TaskFlowClient::seeded();

    let result = client.create_category(&body).await;

    assert_bad_request(&result, "Name is required");
    assert_eq!(client.list_categories().await.unwrap().len(), 2);
}

#[rstest]
#[tokio::test]
async fn delete_category_removes_it() {
    let client = TaskFlowClient::seeded();

    assert_success(&client.delete_category("2").await);

    let remaining: Vec<String> = client
        .list_categories()
        .await
        .unwrap()
        .into_iter()
        .map(|category| category.id)
        .collect();
    assert_eq!(remaining, vec!["1"]);
}

#[rstest]
#[tokio::test]
async fn delete_unknown_category_is_not_found() {
    let client = TaskFlowClient::seeded();

    let result = client.delete_category("missing").await;

    assert_not_found(&result, "Category not found");
}

#[rstest]
#[tokio::test]
async fn delete_category_leaves_referencing_tasks_dangling() {
    let client = TaskFlowClient::seeded();

    client.delete_category("1").await.unwrap();

    let task = client.get_task(SEED_TASK_ID).await.unwrap();
    assert_eq!(task.category_id, "1");
    assert_eq!(client.stats().await.unwrap().total_tasks, 1);
}

#[rstest]
#[tokio::test]
async fn task_may_reference_unknown_category() {
    let client = TaskFlowClient::seeded();

    let task = client
        .create_task(&TaskFactory::full("x", "", "no-such-category", "low"))
        .await
        .unwrap();

    assert_eq!(task.category_id, "no-such-category");
}

#[rstest]
#[case(r##"["Home", "#000"]"##)]
#[case(r#"["x"]"#)]
#[tokio::test]
async fn create_category_with_array_body_is_rejected(#[case] body: &str) {
    let client = TaskFlowClient::seeded();

    let response = client.send_raw(Method::POST, "/api/categories", body).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json(),
        json!({"error": "Invalid request body: expected a JSON object"})
    );
    assert_eq!(client.list_categories().await.unwrap().len(), 2);
}
