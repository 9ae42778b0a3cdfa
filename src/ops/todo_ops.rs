use chrono::{Local, TimeZone};

use crate::model::{ProjectId, TagId};
use crate::vm::{ReminderViewModel, TodoViewModel};

/// Epoch milliseconds for the local start of today (00:00:00).
pub fn start_of_today_ms() -> i64 {
    Local::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| Local.from_local_datetime(&midnight).earliest())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Todos due today or later, high priority first, then by nearest due date.
///
/// Todos without a due date are excluded. Ties keep input order (stable sort).
pub fn today_todos(todos: &[TodoViewModel]) -> Vec<TodoViewModel> {
    today_todos_at(todos, start_of_today_ms())
}

/// [`today_todos`] with an explicit day boundary, for testing.
pub fn today_todos_at(todos: &[TodoViewModel], today_start: i64) -> Vec<TodoViewModel> {
    let mut result: Vec<TodoViewModel> = todos
        .iter()
        .filter(|todo| todo.due_date.is_some_and(|due| due >= today_start))
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        a.priority
            .rank()
            .cmp(&b.priority.rank())
            .then_with(|| a.due_date.cmp(&b.due_date))
    });
    result
}

/// Todos carrying the given tag, in input order.
pub fn todos_with_tag(tag_id: &TagId, todos: &[TodoViewModel]) -> Vec<TodoViewModel> {
    todos
        .iter()
        .filter(|todo| todo.tags.iter().any(|tag| tag.id == *tag_id))
        .cloned()
        .collect()
}

/// Reminders carrying the given tag, in input order.
pub fn reminders_with_tag(
    tag_id: &TagId,
    reminders: &[ReminderViewModel],
) -> Vec<ReminderViewModel> {
    reminders
        .iter()
        .filter(|reminder| reminder.tags.iter().any(|tag| tag.id == *tag_id))
        .cloned()
        .collect()
}

/// Todos assigned to the given project, in input order.
pub fn todos_in_project(project_id: &ProjectId, todos: &[TodoViewModel]) -> Vec<TodoViewModel> {
    todos
        .iter()
        .filter(|todo| {
            todo.project
                .as_ref()
                .is_some_and(|project| project.id == *project_id)
        })
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, ProjectEntity, TagEntity};

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    fn tag(id: &str) -> TagEntity {
        TagEntity {
            id: id.into(),
            text: id.to_uppercase(),
            color: "#3b82f6".to_string(),
            created_at: 0,
            updated_at: 0,
        }
    }

    fn todo_vm(id: &str, priority: Priority, due_date: Option<i64>) -> TodoViewModel {
        TodoViewModel {
            id: id.into(),
            title: format!("todo {id}"),
            description: None,
            priority,
            start_date: 0,
            due_date,
            tags: Vec::new(),
            tasks: Vec::new(),
            project: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_today_excludes_past_and_undated() {
        let today = 100 * DAY_MS;
        let todos = vec![
            todo_vm("past", Priority::High, Some(today - DAY_MS)),
            todo_vm("undated", Priority::High, None),
            todo_vm("today", Priority::Normal, Some(today)),
            todo_vm("future", Priority::Normal, Some(today + DAY_MS)),
        ];
        let result = today_todos_at(&todos, today);
        let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["today", "future"]);
    }

    #[test]
    fn test_today_high_priority_first() {
        let today = 100 * DAY_MS;
        let todos = vec![
            todo_vm("n1", Priority::Normal, Some(today)),
            todo_vm("h1", Priority::High, Some(today + 2 * DAY_MS)),
        ];
        let result = today_todos_at(&todos, today);
        let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["h1", "n1"]);
    }

    #[test]
    fn test_today_same_priority_sorted_by_due_date() {
        let today = 100 * DAY_MS;
        let todos = vec![
            todo_vm("later", Priority::Normal, Some(today + 3 * DAY_MS)),
            todo_vm("sooner", Priority::Normal, Some(today + DAY_MS)),
        ];
        let result = today_todos_at(&todos, today);
        let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["sooner", "later"]);
    }

    #[test]
    fn test_todos_with_tag() {
        let mut tagged = todo_vm("d1", Priority::Normal, None);
        tagged.tags.push(tag("t1"));
        let todos = vec![tagged, todo_vm("d2", Priority::Normal, None)];

        let result = todos_with_tag(&"t1".into(), &todos);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "d1");

        assert!(todos_with_tag(&"missing".into(), &todos).is_empty());
    }

    #[test]
    fn test_todos_in_project() {
        let project = ProjectEntity {
            id: "p1".into(),
            project_name: "Hackathon App".to_string(),
            color: "#06b6d4".to_string(),
            created_at: 0,
            updated_at: 0,
        };
        let mut assigned = todo_vm("d1", Priority::Normal, None);
        assigned.project = Some(project);
        let todos = vec![assigned, todo_vm("d2", Priority::Normal, None)];

        let result = todos_in_project(&"p1".into(), &todos);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "d1");
    }
}
