mod aggregate;
mod identifier;
mod store;

// Re-export aggregate types
pub use aggregate::{Category, DEFAULT_COLOR, NewCategory};

// Re-export identifier
pub use identifier::CategoryIdentifier;

// Re-export store
pub use store::CategoryStore;
