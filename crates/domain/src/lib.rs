//! Domain layer for TaskFlow.
//!
//! This crate holds the task and category records, the in-memory stores
//! that own them, the derived statistics view, and [`TaskBoard`], which
//! guards both stores behind a single lock and is what the API layer talks
//! to. Nothing here performs I/O; time and identifier generation come in
//! through the [`common::Clock`] and [`common::IdentifierGenerator`] ports.

pub mod board;
pub mod category;
pub mod common;
pub mod seed;
pub mod stats;
pub mod task;

pub use board::TaskBoard;
pub use category::{Category, CategoryIdentifier, CategoryStore, NewCategory};
pub use common::{
    BoardError, Clock, EntityKind, FixedClock, IdentifierGenerator, RequiredField,
    SequentialGenerator, SystemClock, Timestamp, UuidGenerator,
};
pub use stats::TaskStatistics;
pub use task::{NewTask, Priority, Task, TaskIdentifier, TaskPatch, TaskStore};
