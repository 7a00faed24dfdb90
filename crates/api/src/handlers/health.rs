use axum::Json;

use crate::dto::response::HealthResponse;

// =============================================================================
// Health Check Handler
// =============================================================================

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

// =============================================================================
// Tests
// =============================================================================
