use serde::{Deserialize, Serialize};

use super::ids::{SessionId, TaskId};

/// Lifecycle state of a pomodoro session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Running,
    Completed,
    Interrupted,
    Paused,
}

/// One timed focus session against a task.
///
/// Sessions are log entries: produced by the timer (or the sample dataset),
/// carried through dataset serialization unchanged, and aggregated for stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroSession {
    pub id: SessionId,
    pub task_id: TaskId,
    /// Epoch milliseconds
    pub start_time: i64,
    /// Epoch milliseconds
    pub end_time: i64,
    /// Minutes
    pub duration: u32,
    pub status: SessionStatus,
    /// Epoch milliseconds
    pub created_at: i64,
}
