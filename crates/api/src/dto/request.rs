//! Request DTOs for API endpoints.
//!
//! Every field is optional at the wire level. JSON `null` decodes to `None`
//! and is treated the same as an omitted field. Presence and emptiness
//! checks happen in the domain layer.

use serde::Deserialize;
use taskflow_domain::{NewCategory, NewTask, TaskPatch};

// =============================================================================
// Task Requests
// =============================================================================

/// Body of `POST /api/tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category_id: Option<String>,

    #[serde(default)]
    pub priority: Option<String>,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(request: CreateTaskRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            category_id: request.category_id,
            priority: request.priority,
        }
    }
}

/// Body of `PUT /api/tasks/{id}`. `id`, `categoryId` and `createdAt` are
/// ignored if sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub completed: Option<bool>,

    #[serde(default)]
    pub priority: Option<String>,
}

impl From<UpdateTaskRequest> for TaskPatch {
    fn from(request: UpdateTaskRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            completed: request.completed,
            priority: request.priority,
        }
    }
}

// =============================================================================
// Category Requests
// =============================================================================

/// Body of `POST /api/categories`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub color: Option<String>,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(request: CreateCategoryRequest) -> Self {
        Self {
            name: request.name,
            color: request.color,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
