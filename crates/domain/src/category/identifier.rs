use std::fmt;

use serde::{Deserialize, Serialize};

/// Id used by tasks that do not name a category.
pub const FALLBACK_CATEGORY_IDENTIFIER: &str = "1";

// =============================================================================
// CategoryIdentifier
// =============================================================================

/// Opaque category id. Tasks hold one of these without any guarantee that
/// the category still exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryIdentifier(String);

impl CategoryIdentifier {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn fallback() -> Self {
        Self(FALLBACK_CATEGORY_IDENTIFIER.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CategoryIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CategoryIdentifier {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for CategoryIdentifier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
