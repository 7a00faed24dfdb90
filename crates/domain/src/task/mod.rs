mod aggregate;
mod identifier;
mod priority;
mod store;

// Re-export aggregate types
pub use aggregate::{NewTask, Task, TaskPatch};

// Re-export identifier
pub use identifier::TaskIdentifier;

// Re-export priority
pub use priority::Priority;

// Re-export store
pub use store::TaskStore;
