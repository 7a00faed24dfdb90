mod clock;
mod errors;
mod identifier;
mod timestamp;

// Re-export clock types
pub use clock::{Clock, FixedClock, SystemClock};

// Re-export error types
pub use errors::{BoardError, EntityKind, RequiredField};

// Re-export identifier generation
pub use identifier::{IdentifierGenerator, SequentialGenerator, UuidGenerator};

// Re-export timestamp
pub use timestamp::Timestamp;
