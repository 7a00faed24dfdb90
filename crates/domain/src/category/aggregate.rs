use serde::{Deserialize, Serialize};

use super::CategoryIdentifier;
use crate::common::{BoardError, RequiredField};

/// Colour given to categories created without one.
pub const DEFAULT_COLOR: &str = "#6366F1";

// =============================================================================
// NewCategory
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCategory {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl NewCategory {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

// =============================================================================
// Category
// =============================================================================

/// A named, coloured grouping. The colour is stored verbatim; no format is
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryIdentifier,
    name: String,
    color: String,
}

impl Category {
    #[must_use]
    pub fn new(id: CategoryIdentifier, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }

    /// # Errors
    ///
    /// [`BoardError::MissingField`] if the name is absent or empty.
    pub fn create(draft: NewCategory, id: CategoryIdentifier) -> Result<Self, BoardError> {
        let name = match draft.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(BoardError::missing_field(RequiredField::Name)),
        };
        let color = draft
            .color
            .filter(|color| !color.is_empty())
            .unwrap_or_else(|| DEFAULT_COLOR.to_string());

        Ok(Self::new(id, name, color))
    }

    #[must_use]
    pub const fn id(&self) -> &CategoryIdentifier {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}
