//! Entity → view-model joins.
//!
//! Entities reference each other by id; the UI wants the related records
//! embedded by value. These functions perform that denormalization as
//! best-effort joins: a foreign key with no matching entity is silently
//! dropped (empty list / `None`) rather than an error, so the UI always has
//! something to render. View-models are rebuilt from scratch on every call;
//! nothing here caches.

use serde::{Deserialize, Serialize};

use crate::model::{
    Priority, ProjectEntity, ProjectId, ReminderEntity, ReminderId, ReminderLoop, TagEntity,
    TagId, TaskEntity, TaskId, TodoEntity, TodoId,
};

/// A task with its tags embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskViewModel {
    pub id: TaskId,
    pub todo_id: TodoId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub estimated_pomodoros: u32,
    pub completed_pomodoros: u32,
    pub is_completed: bool,
    pub tags: Vec<TagEntity>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A todo with tags, tasks, and project embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoViewModel {
    pub id: TodoId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub start_date: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    pub tags: Vec<TagEntity>,
    pub tasks: Vec<TaskViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectEntity>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A reminder with tags and referenced tasks embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderViewModel {
    pub id: ReminderId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub loop_rule: Option<ReminderLoop>,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    pub tags: Vec<TagEntity>,
    pub tasks: Vec<TaskViewModel>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Projects carry no relations; the view-model is the entity as-is.
pub type ProjectViewModel = ProjectEntity;

// ---------------------------------------------------------------------------
// Tag resolution
// ---------------------------------------------------------------------------

/// Resolve a list of tag ids against the tag collection.
///
/// Returns every tag whose id appears in `tag_ids`, in **`all_tags` order**
/// (not `tag_ids` order — membership filter over the catalog, each matching
/// tag exactly once). Unknown ids are dropped; `None` or empty input yields
/// an empty vec.
pub fn resolve_tags(tag_ids: Option<&[TagId]>, all_tags: &[TagEntity]) -> Vec<TagEntity> {
    let Some(tag_ids) = tag_ids else {
        return Vec::new();
    };
    if tag_ids.is_empty() {
        return Vec::new();
    }
    all_tags
        .iter()
        .filter(|tag| tag_ids.contains(&tag.id))
        .cloned()
        .collect()
}

/// Look up a single project by id. `None` when absent or unmatched.
pub fn resolve_project(
    project_id: Option<&ProjectId>,
    all_projects: &[ProjectEntity],
) -> Option<ProjectEntity> {
    let project_id = project_id?;
    all_projects.iter().find(|p| p.id == *project_id).cloned()
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

pub fn to_task_view_model(entity: &TaskEntity, all_tags: &[TagEntity]) -> TaskViewModel {
    TaskViewModel {
        id: entity.id.clone(),
        todo_id: entity.todo_id.clone(),
        title: entity.title.clone(),
        description: entity.description.clone(),
        estimated_pomodoros: entity.estimated_pomodoros,
        completed_pomodoros: entity.completed_pomodoros,
        is_completed: entity.is_completed,
        tags: resolve_tags(entity.tag_ids.as_deref(), all_tags),
        created_at: entity.created_at,
        updated_at: entity.updated_at,
    }
}

// ---------------------------------------------------------------------------
// Todo
// ---------------------------------------------------------------------------

/// Join a todo with its tasks (every task whose `todo_id` matches, in
/// `all_tasks` order), its tags, and its project.
pub fn to_todo_view_model(
    entity: &TodoEntity,
    all_tasks: &[TaskEntity],
    all_tags: &[TagEntity],
    all_projects: &[ProjectEntity],
) -> TodoViewModel {
    let tasks = all_tasks
        .iter()
        .filter(|t| t.todo_id == entity.id)
        .map(|t| to_task_view_model(t, all_tags))
        .collect();

    TodoViewModel {
        id: entity.id.clone(),
        title: entity.title.clone(),
        description: entity.description.clone(),
        priority: entity.priority,
        start_date: entity.start_date,
        due_date: entity.due_date,
        tags: resolve_tags(entity.tag_ids.as_deref(), all_tags),
        tasks,
        project: resolve_project(entity.project_id.as_ref(), all_projects),
        created_at: entity.created_at,
        updated_at: entity.updated_at,
    }
}

// ---------------------------------------------------------------------------
// Reminder
// ---------------------------------------------------------------------------

/// Join a reminder with its referenced tasks (membership filter over
/// `all_tasks`, in `all_tasks` order) and its tags.
pub fn to_reminder_view_model(
    entity: &ReminderEntity,
    all_tasks: &[TaskEntity],
    all_tags: &[TagEntity],
) -> ReminderViewModel {
    let tasks = match &entity.task_ids {
        Some(task_ids) => all_tasks
            .iter()
            .filter(|t| task_ids.contains(&t.id))
            .map(|t| to_task_view_model(t, all_tags))
            .collect(),
        None => Vec::new(),
    };

    ReminderViewModel {
        id: entity.id.clone(),
        title: entity.title.clone(),
        description: entity.description.clone(),
        loop_rule: entity.loop_rule.clone(),
        time: entity.time.clone(),
        place: entity.place.clone(),
        tags: resolve_tags(entity.tag_ids.as_deref(), all_tags),
        tasks,
        created_at: entity.created_at,
        updated_at: entity.updated_at,
    }
}

pub fn to_project_view_model(entity: &ProjectEntity) -> ProjectViewModel {
    entity.clone()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
