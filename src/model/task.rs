use serde::{Deserialize, Serialize};

use super::ids::{TagId, TaskId, TodoId};

/// A unit of work inside a todo, sized in pomodoros.
///
/// Every task belongs to exactly one todo (`todo_id`); reminders may also
/// reference tasks directly by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEntity {
    pub id: TaskId,
    pub todo_id: TodoId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub estimated_pomodoros: u32,
    pub completed_pomodoros: u32,
    pub is_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<TagId>>,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds
    pub updated_at: i64,
}
