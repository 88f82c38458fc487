//! Swarm task records and progress derivation
//!
//! A swarm task is a decomposed unit of work: one natural-language query
//! split into an ordered list of subtasks, each owned by a named agent. The
//! records arrive as read-only snapshots from an external orchestrator; this
//! module only derives display state and never advances the lifecycle.

use crate::{DurationMs, TaskStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One unit of the task decomposition, owned by a single agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: Uuid,
    pub agent_name: String,
    /// Machine-readable action identifier (e.g. "search-listings").
    pub action: String,
    pub description: String,
    pub status: TaskStatus,
    /// 0-100, meaningful only while Running.
    pub progress: u8,
    /// Set only once the subtask completes.
    pub duration_ms: Option<DurationMs>,
}

impl Subtask {
    /// Gauge ratio for the progress bar. A producer violating the 0-100
    /// contract is clamped rather than passed through; 0 and 100 are
    /// untouched.
    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.progress.min(100)) / 100.0
    }
}

/// A decomposed unit of work executed by the agent swarm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwarmTask {
    pub id: Uuid,
    /// The original natural-language request.
    pub query: String,
    pub status: TaskStatus,
    /// Execution/display order, immutable once created.
    pub subtasks: Vec<Subtask>,
    /// Combined output, present only when the whole task completed.
    pub synthesized_result: Option<String>,
    pub total_duration_ms: Option<DurationMs>,
}

/// Aggregate progress derived from a task snapshot.
///
/// `derive(None)` yields the all-zero "no active task" state; callers render
/// an explicit empty panel from it instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskProgress {
    pub completed: usize,
    pub total: usize,
    /// `round(100 * completed / total)`, 0 when there are no subtasks.
    pub percent: u8,
    /// Synthesis panel gate: task Completed AND a synthesized result is
    /// present. A stale result on a non-completed task stays hidden.
    pub show_synthesis: bool,
}

impl TaskProgress {
    pub fn derive(task: Option<&SwarmTask>) -> Self {
        let Some(task) = task else {
            return Self::default();
        };

        let total = task.subtasks.len();
        let completed = task
            .subtasks
            .iter()
            .filter(|s| s.status == TaskStatus::Completed)
            .count();
        let percent = if total == 0 {
            0
        } else {
            (100.0 * completed as f64 / total as f64).round() as u8
        };
        let show_synthesis =
            task.status == TaskStatus::Completed && task.synthesized_result.is_some();

        Self {
            completed,
            total,
            percent,
            show_synthesis,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
