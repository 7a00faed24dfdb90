//! `From` implementations turning board errors into API errors.

use taskflow_domain::common::{BoardError, RequiredField};

use super::api_error::ApiError;

// =============================================================================
// From<BoardError> for ApiError
// =============================================================================

impl From<BoardError> for ApiError {
    fn from(error: BoardError) -> Self {
        let message = error.to_string();
        match error {
            BoardError::NotFound { entity } => Self::not_found(entity.to_string()),
            BoardError::MissingField { field } => {
                Self::validation_field(field_name(field), message)
            }
            BoardError::InvalidPriority { .. } => Self::validation_field("priority", message),
        }
    }
}

const fn field_name(field: RequiredField) -> &'static str {
    match field {
        RequiredField::Title => "title",
        RequiredField::Name => "name",
    }
}

// =============================================================================
// Tests
// =============================================================================
