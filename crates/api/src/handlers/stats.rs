use axum::Json;
use axum::extract::State;
use taskflow_domain::TaskStatistics;

use crate::state::AppState;

/// Recomputed from the board on every call.
pub async fn get_stats(State(state): State<AppState>) -> Json<TaskStatistics> {
    Json(state.board.statistics())
}
