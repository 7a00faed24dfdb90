use std::any::Any;

use axum::response::{IntoResponse, Response};

use super::ApiError;

/// Renders a handler panic as a 500 [`ApiError::InternalError`].
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`. The panic
/// message goes to the log only.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "handler panicked".to_string());

    ApiError::internal(detail).into_response()
}
