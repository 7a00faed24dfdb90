//! Ordered in-memory collection of tasks.

use super::{NewTask, Task, TaskIdentifier, TaskPatch};
use crate::common::{BoardError, Timestamp};

/// Tasks in insertion order.
///
/// The store does not generate identifiers itself; callers hand in a fresh
/// id so that uniqueness and clock concerns stay with the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    #[must_use]
    pub fn list_all(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn contains(&self, id: &TaskIdentifier) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Appends an already built task. Used for seeding.
    pub fn insert(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Validates `draft`, appends the new task and returns a copy of it.
    ///
    /// # Errors
    ///
    /// Whatever [`Task::create`] rejects. The store is unchanged on error.
    pub fn create(
        &mut self,
        draft: NewTask,
        id: TaskIdentifier,
        created_at: Timestamp,
    ) -> Result<Task, BoardError> {
        let task = Task::create(draft, id, created_at)?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// # Errors
    ///
    /// [`BoardError::NotFound`] if no task has this id.
    pub fn get(&self, id: &TaskIdentifier) -> Result<&Task, BoardError> {
        self.tasks
            .iter()
            .find(|task| task.id() == id)
            .ok_or_else(BoardError::task_not_found)
    }

    /// Applies `patch` to the task with `id`.
    ///
    /// # Errors
    ///
    /// [`BoardError::NotFound`] takes precedence over an invalid priority in
    /// the patch.
    pub fn update(&mut self, id: &TaskIdentifier, patch: &TaskPatch) -> Result<Task, BoardError> {
        let task = self.get_mut(id)?;
        task.apply(patch)?;
        Ok(task.clone())
    }

    /// Removes the task with `id`, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// [`BoardError::NotFound`] if no task has this id.
    pub fn delete(&mut self, id: &TaskIdentifier) -> Result<Task, BoardError> {
        let index = self.position(id).ok_or_else(BoardError::task_not_found)?;
        Ok(self.tasks.remove(index))
    }

    /// # Errors
    ///
    /// [`BoardError::NotFound`] if no task has this id.
    pub fn toggle_complete(&mut self, id: &TaskIdentifier) -> Result<Task, BoardError> {
        let task = self.get_mut(id)?;
        task.toggle_completion();
        Ok(task.clone())
    }

    fn get_mut(&mut self, id: &TaskIdentifier) -> Result<&mut Task, BoardError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(BoardError::task_not_found)
    }

    fn position(&self, id: &TaskIdentifier) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

// =============================================================================
// Tests
// =============================================================================
