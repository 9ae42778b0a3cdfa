use serde::{Deserialize, Serialize};

use super::ids::{ProjectId, TagId, TodoId};

/// Todo priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Normal,
}

impl Priority {
    /// Accent color used when rendering the priority marker
    pub fn color(self) -> &'static str {
        match self {
            Priority::High => "#fb2c36",
            Priority::Normal => "#4a5565",
        }
    }

    /// Sort rank: high sorts before normal
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Normal => 1,
        }
    }
}

/// A top-level todo item, optionally assigned to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoEntity {
    pub id: TodoId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    /// Epoch milliseconds
    pub start_date: i64,
    /// Epoch milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<TagId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds
    pub updated_at: i64,
}
