//! Integration tests for GET /health.

use crate::common::*;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn health_returns_ok_message() {
    let client = TaskFlowClient::seeded();

    let result = client.health().await;

    assert_success(&result);
    let response = result.unwrap();
    assert_eq!(response.status, "ok");
    assert_eq!(response.message, "TaskFlow API is running");
}

#[rstest]
#[tokio::test]
async fn health_does_not_depend_on_board_contents() {
    let client = TaskFlowClient::empty();

    assert_success(&client.health().await);
}
