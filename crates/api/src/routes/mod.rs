//! Routing definitions for the TaskFlow API.

use axum::Router;
use axum::routing::{delete, get, patch};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::errors::panic_response;
use crate::handlers;
use crate::state::AppState;

// =============================================================================
// Router Creation
// =============================================================================

/// Creates the main router with all routes and middleware.
///
/// Paths that match nothing get `404 {"error": "Route not found"}`.
///
/// ```ignore
/// use taskflow_api::routes::create_router;
/// use taskflow_api::state::AppState;
/// use taskflow_domain::TaskBoard;
///
/// let router = create_router(AppState::new(TaskBoard::with_system_defaults(true)));
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Tasks
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/{id}",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .route(
            "/tasks/{id}/complete",
            patch(handlers::toggle_task_completion),
        )
        // Categories
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route("/categories/{id}", delete(handlers::delete_category))
        // Statistics
        .route("/stats", get(handlers::get_stats));

    let router = Router::new()
        .nest("/api", api)
        .route("/health", get(handlers::health_check))
        .route("/api-docs", get(handlers::api_docs))
        .fallback(handlers::route_not_found)
        .with_state(state);

    with_middleware(router)
}

/// Panic recovery innermost so the 500 is traced and carries CORS headers.
fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
}

/// Any origin, method and header is allowed.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

// =============================================================================
// Tests
// =============================================================================
