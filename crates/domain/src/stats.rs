//! Aggregate counts over both stores.
//!
//! Computed from scratch on every request; nothing is cached.

use serde::{Deserialize, Serialize};

use crate::category::CategoryStore;
use crate::task::TaskStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatistics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    /// Whole-number percentage in `0..=100`.
    pub completion_rate: u32,
    pub total_categories: usize,
}

impl TaskStatistics {
    #[must_use]
    pub fn compute(tasks: &TaskStore, categories: &CategoryStore) -> Self {
        let total_tasks = tasks.list_all().len();
        let completed_tasks = tasks.completed_count();

        Self {
            total_tasks,
            completed_tasks,
            pending_tasks: total_tasks - completed_tasks,
            completion_rate: completion_rate(completed_tasks, total_tasks),
            total_categories: categories.list_all().len(),
        }
    }
}

/// `round(completed / total * 100)` with halves rounded up, or 0 for an
/// empty board. Integer arithmetic only.
#[must_use]
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u128;
    let total = total as u128;
    let rate = (completed * 200 + total) / (total * 2);
    u32::try_from(rate).unwrap_or(100)
}

// =============================================================================
// Tests
// =============================================================================
