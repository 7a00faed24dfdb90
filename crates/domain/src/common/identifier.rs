//! Identifier generation port.
//!
//! Task and category ids are opaque strings. Production uses random UUIDs;
//! tests use [`SequentialGenerator`] to get predictable values.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces fresh opaque identifiers.
///
/// Implementations must be `Send + Sync` because the board is shared across
/// request handlers.
pub trait IdentifierGenerator: Send + Sync {
    fn generate(&self) -> String;
}

// =============================================================================
// UuidGenerator
// =============================================================================

/// Random v4 UUIDs in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdentifierGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().hyphenated().to_string()
    }
}

// =============================================================================
// SequentialGenerator
// =============================================================================

/// `{prefix}{n}` with `n` counting up from 1.
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialGenerator {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new("id-")
    }
}

impl IdentifierGenerator for SequentialGenerator {
    fn generate(&self) -> String {
        let value = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{}{}", self.prefix, value)
    }
}

// =============================================================================
// Tests
// =============================================================================
