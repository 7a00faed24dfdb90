use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use taskflow_domain::{Category, CategoryIdentifier};

use crate::dto::request::CreateCategoryRequest;
use crate::errors::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.board.list_categories())
}

pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let category = state.board.create_category(request.into())?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// Tasks that reference the removed category are left as they are.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .board
        .delete_category(&CategoryIdentifier::from(category_id))?;

    Ok(StatusCode::NO_CONTENT)
}
