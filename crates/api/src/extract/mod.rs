//! Request extractors.
//!
//! [`JsonBody`] is a lenient replacement for `axum::Json`: it ignores the
//! `Content-Type` header, treats an empty body as `{}`, and reports decode
//! failures through [`ApiError`] so clients always get `{"error": ...}`.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ApiError;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        decode_body(&bytes).map(Self)
    }
}

/// Decodes a JSON body, mapping a blank body to `T::default()`.
///
/// # Errors
///
/// [`ApiError::BadRequest`] for malformed JSON, a top-level value other than
/// an object, or a field of the wrong type.
pub fn decode_body<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let value: Value =
        serde_json::from_slice(bytes).map_err(|error| ApiError::bad_request(error.to_string()))?;
    // Derived structs also accept sequences, filling fields by position.
    if !value.is_object() {
        return Err(ApiError::bad_request("expected a JSON object"));
    }
    serde_json::from_value(value).map_err(|error| ApiError::bad_request(error.to_string()))
}
