use regex::Regex;

use crate::vm::{ReminderViewModel, TodoViewModel};

/// Compile a user-typed search pattern, case-insensitive.
///
/// Tried as a regex first; if that fails to compile, the pattern is matched
/// as an escaped literal instead. Returns `None` only for an empty pattern.
pub fn compile_query(pattern: &str) -> Option<Regex> {
    if pattern.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){pattern}"))
        .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
        .ok()
}

/// Search todos by title, description, tag text, and task titles.
/// Each matching todo appears once, in input order.
pub fn search_todos(re: &Regex, todos: &[TodoViewModel]) -> Vec<TodoViewModel> {
    todos
        .iter()
        .filter(|todo| todo_matches(re, todo))
        .cloned()
        .collect()
}

/// Search reminders by title, description, place, and tag text.
/// Each matching reminder appears once, in input order.
pub fn search_reminders(re: &Regex, reminders: &[ReminderViewModel]) -> Vec<ReminderViewModel> {
    reminders
        .iter()
        .filter(|reminder| reminder_matches(re, reminder))
        .cloned()
        .collect()
}

fn todo_matches(re: &Regex, todo: &TodoViewModel) -> bool {
    if re.is_match(&todo.title) {
        return true;
    }
    if let Some(description) = &todo.description {
        if re.is_match(description) {
            return true;
        }
    }
    if todo.tags.iter().any(|tag| re.is_match(&tag.text)) {
        return true;
    }
    todo.tasks.iter().any(|task| re.is_match(&task.title))
}

fn reminder_matches(re: &Regex, reminder: &ReminderViewModel) -> bool {
    if re.is_match(&reminder.title) {
        return true;
    }
    if let Some(description) = &reminder.description {
        if re.is_match(description) {
            return true;
        }
    }
    if let Some(place) = &reminder.place {
        if re.is_match(place) {
            return true;
        }
    }
    reminder.tags.iter().any(|tag| re.is_match(&tag.text))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, TagEntity};
    use crate::vm::TaskViewModel;

    fn tag(text: &str) -> TagEntity {
        TagEntity {
            id: text.to_lowercase().into(),
            text: text.to_string(),
            color: "#3b82f6".to_string(),
            created_at: 0,
            updated_at: 0,
        }
    }

    fn task_vm(todo_id: &str, title: &str) -> TaskViewModel {
        TaskViewModel {
            id: format!("{todo_id}-{title}").as_str().into(),
            todo_id: todo_id.into(),
            title: title.to_string(),
            description: None,
            estimated_pomodoros: 2,
            completed_pomodoros: 0,
            is_completed: false,
            tags: Vec::new(),
            created_at: 0,
            updated_at: 0,
        }
    }

    fn todo_vm(
        id: &str,
        title: &str,
        description: Option<&str>,
        tags: Vec<TagEntity>,
        tasks: Vec<TaskViewModel>,
    ) -> TodoViewModel {
        TodoViewModel {
            id: id.into(),
            title: title.to_string(),
            description: description.map(str::to_string),
            priority: Priority::Normal,
            start_date: 0,
            due_date: None,
            tags,
            tasks,
            project: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn reminder_vm(
        id: &str,
        title: &str,
        place: Option<&str>,
        tags: Vec<TagEntity>,
    ) -> ReminderViewModel {
        ReminderViewModel {
            id: id.into(),
            title: title.to_string(),
            description: None,
            loop_rule: None,
            time: "09:00".to_string(),
            place: place.map(str::to_string),
            tags,
            tasks: Vec::new(),
            created_at: 0,
            updated_at: 0,
        }
    }

    fn sample_todos() -> Vec<TodoViewModel> {
        vec![
            todo_vm(
                "d1",
                "Design the landing page",
                Some("hero section and pricing"),
                vec![tag("UI")],
                vec![task_vm("d1", "Wireframe"), task_vm("d1", "Polish colors")],
            ),
            todo_vm(
                "d2",
                "Set up CI",
                None,
                vec![tag("Backend")],
                vec![task_vm("d2", "Write pipeline config")],
            ),
            todo_vm("d3", "Plan sprint", None, Vec::new(), Vec::new()),
        ]
    }

    fn sample_reminders() -> Vec<ReminderViewModel> {
        vec![
            reminder_vm("r1", "Standup", Some("office"), vec![tag("Meeting")]),
            reminder_vm("r2", "Water the plants", None, Vec::new()),
        ]
    }

    #[test]
    fn test_compile_query_empty_is_none() {
        assert!(compile_query("").is_none());
    }

    #[test]
    fn test_compile_query_case_insensitive() {
        let re = compile_query("LANDING").unwrap();
        assert!(re.is_match("Design the landing page"));
    }

    #[test]
    fn test_compile_query_invalid_regex_falls_back_to_literal() {
        let re = compile_query("what(").unwrap();
        assert!(re.is_match("what( an odd title"));
        assert!(!re.is_match("what an odd title"));
    }

    #[test]
    fn test_search_todos_by_title() {
        let re = compile_query("landing").unwrap();
        let hits = search_todos(&re, &sample_todos());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "d1");
    }

    #[test]
    fn test_search_todos_by_description() {
        let re = compile_query("pricing").unwrap();
        let hits = search_todos(&re, &sample_todos());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "d1");
    }

    #[test]
    fn test_search_todos_by_tag_text() {
        let re = compile_query("backend").unwrap();
        let hits = search_todos(&re, &sample_todos());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "d2");
    }

    #[test]
    fn test_search_todos_by_task_title() {
        let re = compile_query("wireframe").unwrap();
        let hits = search_todos(&re, &sample_todos());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "d1");
    }

    #[test]
    fn test_search_todos_no_match_is_empty() {
        let re = compile_query("zzzznotfound").unwrap();
        assert!(search_todos(&re, &sample_todos()).is_empty());
    }

    #[test]
    fn test_search_todos_each_hit_once() {
        // d1 matches on title, description, tag, and task title — one hit.
        let re = compile_query("i").unwrap();
        let hits = search_todos(&re, &sample_todos());
        let d1_hits = hits.iter().filter(|t| t.id.as_str() == "d1").count();
        assert_eq!(d1_hits, 1);
    }

    #[test]
    fn test_search_preserves_input_order() {
        let re = compile_query(".").unwrap();
        let hits = search_todos(&re, &sample_todos());
        let ids: Vec<&str> = hits.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d2", "d3"]);
    }

    #[test]
    fn test_search_reminders_by_place() {
        let re = compile_query("office").unwrap();
        let hits = search_reminders(&re, &sample_reminders());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "r1");
    }

    #[test]
    fn test_search_reminders_by_title_and_tag() {
        let re = compile_query("plants").unwrap();
        let hits = search_reminders(&re, &sample_reminders());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "r2");

        let re = compile_query("meeting").unwrap();
        let hits = search_reminders(&re, &sample_reminders());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "r1");
    }
}
