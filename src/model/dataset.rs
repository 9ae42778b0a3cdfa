use serde::{Deserialize, Serialize};

use super::project::ProjectEntity;
use super::reminder::ReminderEntity;
use super::session::PomodoroSession;
use super::tag::TagEntity;
use super::task::TaskEntity;
use super::todo::TodoEntity;

/// The full in-memory entity store for one session.
///
/// Collections keep their insertion order; the view-model resolver's output
/// ordering is defined in terms of these collections' order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub tags: Vec<TagEntity>,
    pub projects: Vec<ProjectEntity>,
    pub todos: Vec<TodoEntity>,
    pub tasks: Vec<TaskEntity>,
    pub reminders: Vec<ReminderEntity>,
    pub sessions: Vec<PomodoroSession>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
            && self.projects.is_empty()
            && self.todos.is_empty()
            && self.tasks.is_empty()
            && self.reminders.is_empty()
            && self.sessions.is_empty()
    }
}
