//! Records the board starts with when seeding is enabled.

use crate::category::{Category, CategoryIdentifier, CategoryStore};
use crate::common::Timestamp;
use crate::task::{Priority, Task, TaskIdentifier, TaskStore};

pub const WELCOME_TASK_IDENTIFIER: &str = "1";
pub const WELCOME_TASK_TITLE: &str = "Welcome to TaskFlow";
pub const WELCOME_TASK_DESCRIPTION: &str = "Your first task is here!";

#[must_use]
pub fn seed_tasks(created_at: Timestamp) -> TaskStore {
    let mut store = TaskStore::new();
    store.insert(Task::new(
        TaskIdentifier::new(WELCOME_TASK_IDENTIFIER),
        WELCOME_TASK_TITLE,
        WELCOME_TASK_DESCRIPTION,
        CategoryIdentifier::fallback(),
        Priority::High,
        created_at,
    ));
    store
}

#[must_use]
pub fn seed_categories() -> CategoryStore {
    let mut store = CategoryStore::new();
    store.insert(Category::new(
        CategoryIdentifier::new("1"),
        "Personal",
        "#3B82F6",
    ));
    store.insert(Category::new(CategoryIdentifier::new("2"), "Work", "#10B981"));
    store
}
