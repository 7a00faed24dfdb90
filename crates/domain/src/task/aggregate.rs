//! Task record and its creation/update inputs.

use serde::{Deserialize, Serialize};

use super::{Priority, TaskIdentifier};
use crate::category::CategoryIdentifier;
use crate::common::{BoardError, RequiredField, Timestamp};

// =============================================================================
// NewTask
// =============================================================================

/// Raw creation input. Every field may be missing; validation happens in
/// [`Task::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub priority: Option<String>,
}

impl NewTask {
    /// Input with only a title set.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

// =============================================================================
// TaskPatch
// =============================================================================

/// Partial update input. `None` means "field not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
}

// =============================================================================
// Task
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskIdentifier,
    title: String,
    description: String,
    completed: bool,
    category_id: CategoryIdentifier,
    priority: Priority,
    created_at: Timestamp,
}

impl Task {
    /// Builds a task from already validated parts.
    #[must_use]
    pub fn new(
        id: TaskIdentifier,
        title: impl Into<String>,
        description: impl Into<String>,
        category_id: CategoryIdentifier,
        priority: Priority,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
            category_id,
            priority,
            created_at,
        }
    }

    /// Validates `draft` and builds an incomplete task.
    ///
    /// # Errors
    ///
    /// - [`BoardError::MissingField`] if the title is absent or empty.
    /// - [`BoardError::InvalidPriority`] if a non-empty priority is not one
    ///   of `low`, `medium`, `high`.
    pub fn create(
        draft: NewTask,
        id: TaskIdentifier,
        created_at: Timestamp,
    ) -> Result<Self, BoardError> {
        let title = match draft.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(BoardError::missing_field(RequiredField::Title)),
        };
        let priority = Priority::parse_optional(draft.priority.as_deref())?.unwrap_or_default();
        let category_id = draft
            .category_id
            .filter(|value| !value.is_empty())
            .map_or_else(CategoryIdentifier::fallback, CategoryIdentifier::from);

        Ok(Self::new(
            id,
            title,
            draft.description.unwrap_or_default(),
            category_id,
            priority,
            created_at,
        ))
    }

    #[must_use]
    pub const fn id(&self) -> &TaskIdentifier {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub const fn category_id(&self) -> &CategoryIdentifier {
        &self.category_id
    }

    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Applies a partial update in place.
    ///
    /// `title` and `priority` are only overwritten when the supplied value is
    /// non-empty, while `description` and `completed` are overwritten
    /// whenever present, so `description: ""` clears the description and
    /// `completed: false` reopens the task.
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidPriority`] if a non-empty priority is not
    /// recognised. Nothing is modified in that case.
    pub fn apply(&mut self, patch: &TaskPatch) -> Result<(), BoardError> {
        let priority = Priority::parse_optional(patch.priority.as_deref())?;

        // FIXME: `title: ""` is dropped silently while `description: ""` is
        // applied. Probably a latent defect, kept for wire compatibility.
        if let Some(title) = patch.title.as_ref().filter(|title| !title.is_empty()) {
            self.title.clone_from(title);
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(priority) = priority {
            self.priority = priority;
        }
        Ok(())
    }

    /// Flips the completion flag.
    pub const fn toggle_completion(&mut self) {
        self.completed = !self.completed;
    }
}

// =============================================================================
// Tests
// =============================================================================
