//! The shared task board.
//!
//! [`TaskBoard`] pairs the task and category stores under one
//! [`parking_lot::RwLock`]. Reads take the shared lock; each mutation holds
//! the exclusive lock for its whole read-modify-write. Every method is
//! synchronous, so the lock can never be held across an `.await`.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::category::{Category, CategoryIdentifier, CategoryStore, NewCategory};
use crate::common::{BoardError, Clock, IdentifierGenerator, SystemClock, UuidGenerator};
use crate::seed::{seed_categories, seed_tasks};
use crate::stats::TaskStatistics;
use crate::task::{NewTask, Task, TaskIdentifier, TaskPatch, TaskStore};

#[derive(Debug, Default)]
struct Collections {
    tasks: TaskStore,
    categories: CategoryStore,
}

pub struct TaskBoard {
    collections: RwLock<Collections>,
    clock: Arc<dyn Clock>,
    identifiers: Arc<dyn IdentifierGenerator>,
}

impl std::fmt::Debug for TaskBoard {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let collections = self.collections.read();
        formatter
            .debug_struct("TaskBoard")
            .field("tasks", &collections.tasks.list_all().len())
            .field("categories", &collections.categories.list_all().len())
            .finish_non_exhaustive()
    }
}

impl TaskBoard {
    /// An empty board.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, identifiers: Arc<dyn IdentifierGenerator>) -> Self {
        Self {
            collections: RwLock::new(Collections::default()),
            clock,
            identifiers,
        }
    }

    /// A board holding the welcome task and the two starter categories.
    #[must_use]
    pub fn seeded(clock: Arc<dyn Clock>, identifiers: Arc<dyn IdentifierGenerator>) -> Self {
        let collections = Collections {
            tasks: seed_tasks(clock.now()),
            categories: seed_categories(),
        };
        Self {
            collections: RwLock::new(collections),
            clock,
            identifiers,
        }
    }

    /// Wall clock and random UUIDs, optionally seeded.
    #[must_use]
    pub fn with_system_defaults(seed: bool) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let identifiers: Arc<dyn IdentifierGenerator> = Arc::new(UuidGenerator);
        if seed {
            Self::seeded(clock, identifiers)
        } else {
            Self::new(clock, identifiers)
        }
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    #[must_use]
    pub fn list_tasks(&self) -> Vec<Task> {
        self.collections.read().tasks.list_all().to_vec()
    }

    /// # Errors
    ///
    /// [`BoardError::MissingField`] for an absent or empty title and
    /// [`BoardError::InvalidPriority`] for an unknown priority.
    pub fn create_task(&self, draft: NewTask) -> Result<Task, BoardError> {
        let mut collections = self.collections.write();
        let id = self.fresh_identifier(|candidate| {
            collections
                .tasks
                .contains(&TaskIdentifier::new(candidate))
        });
        let task = collections
            .tasks
            .create(draft, TaskIdentifier::new(id), self.clock.now())?;
        tracing::debug!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// # Errors
    ///
    /// [`BoardError::NotFound`] if no task has this id.
    pub fn get_task(&self, id: &TaskIdentifier) -> Result<Task, BoardError> {
        self.collections.read().tasks.get(id).cloned()
    }

    /// # Errors
    ///
    /// [`BoardError::NotFound`] if no task has this id, otherwise
    /// [`BoardError::InvalidPriority`] for an unknown priority.
    pub fn update_task(&self, id: &TaskIdentifier, patch: &TaskPatch) -> Result<Task, BoardError> {
        let task = self.collections.write().tasks.update(id, patch)?;
        tracing::debug!(task_id = %id, "task updated");
        Ok(task)
    }

    /// # Errors
    ///
    /// [`BoardError::NotFound`] if no task has this id.
    pub fn delete_task(&self, id: &TaskIdentifier) -> Result<(), BoardError> {
        self.collections.write().tasks.delete(id)?;
        tracing::debug!(task_id = %id, "task deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// [`BoardError::NotFound`] if no task has this id.
    pub fn toggle_task(&self, id: &TaskIdentifier) -> Result<Task, BoardError> {
        let task = self.collections.write().tasks.toggle_complete(id)?;
        tracing::debug!(task_id = %id, completed = task.is_completed(), "task toggled");
        Ok(task)
    }

    // =========================================================================
    // Categories
    // =========================================================================

    #[must_use]
    pub fn list_categories(&self) -> Vec<Category> {
        self.collections.read().categories.list_all().to_vec()
    }

    /// # Errors
    ///
    /// [`BoardError::MissingField`] for an absent or empty name.
    pub fn create_category(&self, draft: NewCategory) -> Result<Category, BoardError> {
        let mut collections = self.collections.write();
        let id = self.fresh_identifier(|candidate| {
            collections
                .categories
                .contains(&CategoryIdentifier::new(candidate))
        });
        let category = collections
            .categories
            .create(draft, CategoryIdentifier::new(id))?;
        tracing::debug!(category_id = %category.id(), "category created");
        Ok(category)
    }

    /// Removes a category. Tasks pointing at it keep their `category_id`.
    ///
    /// # Errors
    ///
    /// [`BoardError::NotFound`] if no category has this id.
    pub fn delete_category(&self, id: &CategoryIdentifier) -> Result<(), BoardError> {
        self.collections.write().categories.delete(id)?;
        tracing::debug!(category_id = %id, "category deleted");
        Ok(())
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    #[must_use]
    pub fn statistics(&self) -> TaskStatistics {
        let collections = self.collections.read();
        TaskStatistics::compute(&collections.tasks, &collections.categories)
    }

    fn fresh_identifier(&self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let candidate = self.identifiers.generate();
            if !taken(&candidate) {
                return candidate;
            }
            tracing::warn!(identifier = %candidate, "generated identifier already in use");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
