pub mod categories;
pub mod docs;
pub mod health;
pub mod stats;
pub mod tasks;

use crate::errors::ApiError;

// Re-export handlers for convenient access
pub use categories::{create_category, delete_category, list_categories};
pub use docs::api_docs;
pub use health::health_check;
pub use stats::get_stats;
pub use tasks::{create_task, delete_task, get_task, list_tasks, toggle_task_completion, update_task};

/// Fallback for any path the router does not know.
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Route")
}
