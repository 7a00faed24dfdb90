//! API error handling and response conversion.
//!
//! - [`ApiError`]: the error type returned by every handler
//! - [`conversion`]: conversions from board errors
//! - [`panic`]: 500 response for a panicking handler

pub mod api_error;
pub mod conversion;
pub mod panic;

pub use api_error::ApiError;
pub use panic::panic_response;
