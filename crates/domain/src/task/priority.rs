use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::BoardError;

// =============================================================================
// Priority
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parses an optional raw priority.
    ///
    /// An empty string counts as "not supplied" and yields `Ok(None)`, the
    /// same as an absent value. Anything else must name a known priority.
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidPriority`] for a non-empty value other than
    /// `low`, `medium` or `high`.
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, BoardError> {
        match raw {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}

impl FromStr for Priority {
    type Err = BoardError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(BoardError::invalid_priority(other)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================
