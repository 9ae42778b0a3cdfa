use serde::{Deserialize, Serialize};

use super::ids::TagId;

/// A label attached to todos, tasks, and reminders.
///
/// `color` is a hex string (`"#3b82f6"`) used as the chip background; the
/// foreground is derived from it (see [`crate::util::color::contrast_color`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagEntity {
    pub id: TagId,
    pub text: String,
    pub color: String,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds
    pub updated_at: i64,
}
