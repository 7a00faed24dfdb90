//! API integration tests per resource.

pub mod categories_tests;
pub mod health_tests;
pub mod task_create_tests;
pub mod task_lifecycle_tests;
pub mod task_update_tests;
