use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use taskflow_domain::{Task, TaskIdentifier};

use crate::dto::request::{CreateTaskRequest, UpdateTaskRequest};
use crate::errors::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

// =============================================================================
// List Tasks Handler
// =============================================================================

pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.board.list_tasks())
}

// =============================================================================
// Create Task Handler
// =============================================================================

pub async fn create_task(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = state.board.create_task(request.into())?;

    Ok((StatusCode::CREATED, Json(task)))
}

// =============================================================================
// Get Task Handler
// =============================================================================

pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let task = state.board.get_task(&TaskIdentifier::from(task_id))?;

    Ok(Json(task))
}

// =============================================================================
// Update Task Handler
// =============================================================================

pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    JsonBody(request): JsonBody<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    let task = state
        .board
        .update_task(&TaskIdentifier::from(task_id), &request.into())?;

    Ok(Json(task))
}

// =============================================================================
// Delete Task Handler
// =============================================================================

pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.board.delete_task(&TaskIdentifier::from(task_id))?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Toggle Completion Handler
// =============================================================================

pub async fn toggle_task_completion(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let task = state.board.toggle_task(&TaskIdentifier::from(task_id))?;

    Ok(Json(task))
}
