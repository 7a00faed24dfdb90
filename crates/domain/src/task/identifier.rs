use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// TaskIdentifier
// =============================================================================

/// Opaque task id.
///
/// Any string is accepted so that lookups with unknown or malformed ids
/// surface as "not found" rather than as a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskIdentifier(String);

impl TaskIdentifier {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TaskIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TaskIdentifier {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TaskIdentifier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
