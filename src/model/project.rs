use serde::{Deserialize, Serialize};

use super::ids::ProjectId;

/// A project grouping todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntity {
    pub id: ProjectId,
    pub project_name: String,
    pub color: String,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds
    pub updated_at: i64,
}
