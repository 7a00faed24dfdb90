//! Error types shared by the task and category stores.

use std::fmt;

use thiserror::Error;

// =============================================================================
// RequiredField
// =============================================================================

/// Fields that must be present and non-empty at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    /// `title` of a task.
    Title,
    /// `name` of a category.
    Name,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Title => "Title",
            Self::Name => "Name",
        };
        write!(formatter, "{label}")
    }
}

// =============================================================================
// EntityKind
// =============================================================================

/// The kind of record a lookup was performed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Task,
    Category,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Task => "Task",
            Self::Category => "Category",
        };
        write!(formatter, "{label}")
    }
}

// =============================================================================
// BoardError
// =============================================================================

/// Failures reported by store and board operations.
///
/// Every variant is raised before any state is touched, so a failed
/// operation never leaves a store partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A required field was absent or empty.
    #[error("{field} is required")]
    MissingField { field: RequiredField },

    /// No record with the requested identifier exists.
    #[error("{entity} not found")]
    NotFound { entity: EntityKind },

    /// A priority value outside `low | medium | high` was supplied.
    #[error("Priority must be one of: low, medium, high")]
    InvalidPriority { value: String },
}

impl BoardError {
    #[must_use]
    pub const fn missing_field(field: RequiredField) -> Self {
        Self::MissingField { field }
    }

    #[must_use]
    pub const fn task_not_found() -> Self {
        Self::NotFound {
            entity: EntityKind::Task,
        }
    }

    #[must_use]
    pub const fn category_not_found() -> Self {
        Self::NotFound {
            entity: EntityKind::Category,
        }
    }

    #[must_use]
    pub fn invalid_priority(value: impl Into<String>) -> Self {
        Self::InvalidPriority {
            value: value.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
