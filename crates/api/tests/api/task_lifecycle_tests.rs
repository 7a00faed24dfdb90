//! Integration tests for GET, DELETE and PATCH .../complete on a single task.

use crate::common::*;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn get_task_returns_exact_record() {
    let client = TaskFlowClient::empty();
    let created = client
        .create_task(&TaskFactory::full("Read", "a book", "2", "low"))
        .await
        .unwrap();

    let fetched = client.get_task(&created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[rstest]
#[case("does-not-exist")]
#[case("00000000-0000-0000-0000-000000000000")]
#[case("%20")]
#[tokio::test]
async fn get_unknown_task_is_not_found(#[case] task_id: &str) {
    let client = TaskFlowClient::seeded();

    let result = client.get_task(task_id).await;

    assert_not_found(&result, "Task not found");
}

#[rstest]
#[tokio::test]
async fn delete_task_removes_it() {
    let client = TaskFlowClient::seeded();

    let result = client.delete_task(SEED_TASK_ID).await;

    assert_success(&result);
    assert_not_found(&client.get_task(SEED_TASK_ID).await, "Task not found");
    assert!(client.list_tasks().await.unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn delete_task_twice_is_not_found() {
    let client = TaskFlowClient::seeded();
    client.delete_task(SEED_TASK_ID).await.unwrap();

    let result = client.delete_task(SEED_TASK_ID).await;

    assert_not_found(&result, "Task not found");
}

#[rstest]
#[tokio::test]
async fn delete_task_keeps_order_of_others() {
    let client = TaskFlowClient::empty();
    let mut identifiers = Vec::new();
    for title in ["a", "b", "c"] {
        identifiers.push(client.create_task(&TaskFactory::titled(title)).await.unwrap().id);
    }

    client.delete_task(&identifiers[1]).await.unwrap();

    let titles: Vec<String> = client
        .list_tasks()
        .await
        .unwrap()
        .into_iter()
        .map(|task| task.title)
        .collect();
    assert_eq!(titles, vec!["a", "c"]);
}

#[rstest]
#[tokio::test]
async fn toggle_three_times_alternates() {
    let client = TaskFlowClient::seeded();

    let mut states = Vec::new();
    for _ in 0..3 {
        states.push(client.toggle_task(SEED_TASK_ID).await.unwrap().completed);
    }

    assert_eq!(states, vec![true, false, true]);
}

#[rstest]
#[tokio::test]
async fn toggle_changes_only_completed() {
    let client = TaskFlowClient::seeded();
    let before = client.get_task(SEED_TASK_ID).await.unwrap();

    let after = client.toggle_task(SEED_TASK_ID).await.unwrap();

    assert_eq!(
        TaskDto {
            completed: before.completed,
            ..after.clone()
        },
        before
    );
    assert!(after.completed);
}

#[rstest]
#[tokio::test]
async fn toggle_unknown_task_is_not_found() {
    let client = TaskFlowClient::seeded();

    let result = client.toggle_task("missing").await;

    assert_not_found(&result, "Task not found");
}
