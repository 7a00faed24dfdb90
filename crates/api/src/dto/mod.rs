pub mod request;
pub mod response;

pub use request::{CreateCategoryRequest, CreateTaskRequest, UpdateTaskRequest};
pub use response::{ErrorResponse, HealthResponse};
