//! Built-in sample dataset.
//!
//! Used when no `--data` file is given, so the TUI and CLI have something
//! real to show. The data is deterministic apart from being anchored to the
//! current time (due dates land relative to "now"), and referentially
//! intact: every foreign key resolves.

use chrono::{Duration, Local};

use crate::model::{
    Dataset, PomodoroSession, Priority, ProjectEntity, ReminderEntity, ReminderLoop,
    SessionStatus, TagEntity, TaskEntity, TodoEntity, Weekday,
};

fn now_ms() -> i64 {
    Local::now().timestamp_millis()
}

fn days_from_now(days: i64) -> i64 {
    (Local::now() + Duration::days(days)).timestamp_millis()
}

fn tag(id: &str, text: &str, color: &str, now: i64) -> TagEntity {
    TagEntity {
        id: id.into(),
        text: text.to_string(),
        color: color.to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn project(id: &str, name: &str, color: &str, now: i64) -> ProjectEntity {
    ProjectEntity {
        id: id.into(),
        project_name: name.to_string(),
        color: color.to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    todo_id: &str,
    title: &str,
    estimated: u32,
    completed: u32,
    is_completed: bool,
    tag_ids: &[&str],
    now: i64,
) -> TaskEntity {
    TaskEntity {
        id: id.into(),
        todo_id: todo_id.into(),
        title: title.to_string(),
        description: None,
        estimated_pomodoros: estimated,
        completed_pomodoros: completed,
        is_completed,
        tag_ids: if tag_ids.is_empty() {
            None
        } else {
            Some(tag_ids.iter().map(|&t| t.into()).collect())
        },
        created_at: now,
        updated_at: now,
    }
}

fn session(
    id: &str,
    task_id: &str,
    offset_minutes: i64,
    duration: u32,
    status: SessionStatus,
    now: i64,
) -> PomodoroSession {
    let start_time = now - offset_minutes * 60 * 1000;
    PomodoroSession {
        id: id.into(),
        task_id: task_id.into(),
        start_time,
        end_time: start_time + duration as i64 * 60 * 1000,
        duration,
        status,
        created_at: now,
    }
}

/// Build the sample dataset.
pub fn sample_dataset() -> Dataset {
    let now = now_ms();

    let tags = vec![
        tag("t1", "UI", "#3b82f6", now),
        tag("t2", "Backend", "#10b981", now),
        tag("t3", "Planning", "#f59e0b", now),
        tag("t4", "Research", "#8b5cf6", now),
        tag("t5", "Testing", "#ef4444", now),
        tag("t6", "Meeting", "#f97316", now),
    ];

    let projects = vec![
        project("p1", "Hackathon App", "#06b6d4", now),
        project("p2", "Study React", "#3b82f6", now),
        project("p3", "Personal Goals", "#10b981", now),
    ];

    let todos = vec![
        TodoEntity {
            id: "d1".into(),
            title: "Design the landing page".to_string(),
            description: Some("Hero section, pricing table, and footer".to_string()),
            priority: Priority::High,
            start_date: days_from_now(-1),
            due_date: Some(days_from_now(1)),
            tag_ids: Some(vec!["t1".into(), "t3".into()]),
            project_id: Some("p1".into()),
            created_at: now,
            updated_at: now,
        },
        TodoEntity {
            id: "d2".into(),
            title: "Wire up the API".to_string(),
            description: None,
            priority: Priority::Normal,
            start_date: days_from_now(0),
            due_date: Some(days_from_now(3)),
            tag_ids: Some(vec!["t2".into()]),
            project_id: Some("p1".into()),
            created_at: now,
            updated_at: now,
        },
        TodoEntity {
            id: "d3".into(),
            title: "Read the hooks chapter".to_string(),
            description: Some("useEffect and custom hooks".to_string()),
            priority: Priority::Normal,
            start_date: days_from_now(0),
            due_date: Some(days_from_now(5)),
            tag_ids: Some(vec!["t4".into()]),
            project_id: Some("p2".into()),
            created_at: now,
            updated_at: now,
        },
        TodoEntity {
            id: "d4".into(),
            title: "Morning run schedule".to_string(),
            description: None,
            priority: Priority::Normal,
            start_date: days_from_now(-7),
            due_date: None,
            tag_ids: None,
            project_id: Some("p3".into()),
            created_at: now,
            updated_at: now,
        },
        TodoEntity {
            id: "d5".into(),
            title: "Prepare demo script".to_string(),
            description: Some("Five-minute walkthrough for the judges".to_string()),
            priority: Priority::High,
            start_date: days_from_now(0),
            due_date: Some(days_from_now(2)),
            tag_ids: Some(vec!["t3".into(), "t6".into()]),
            project_id: Some("p1".into()),
            created_at: now,
            updated_at: now,
        },
    ];

    let tasks = vec![
        task("k1", "d1", "Sketch wireframes", 2, 2, true, &["t1"], now),
        task("k2", "d1", "Build hero section", 4, 1, false, &["t1"], now),
        task("k3", "d1", "Pick color palette", 1, 0, false, &[], now),
        task("k4", "d2", "Define endpoints", 3, 3, true, &["t2", "t3"], now),
        task("k5", "d2", "Hook up fetch layer", 4, 2, false, &["t2"], now),
        task("k6", "d2", "Write integration tests", 3, 0, false, &["t5"], now),
        task("k7", "d3", "Take chapter notes", 2, 1, false, &["t4"], now),
        task("k8", "d5", "Outline the story", 1, 1, true, &["t3"], now),
        task("k9", "d5", "Rehearse out loud", 2, 0, false, &[], now),
    ];

    let reminders = vec![
        ReminderEntity {
            id: "r1".into(),
            title: "Team standup".to_string(),
            description: Some("Share yesterday's progress".to_string()),
            loop_rule: Some(ReminderLoop::Weekly {
                days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
            }),
            time: "09:00".to_string(),
            place: Some("office".to_string()),
            tag_ids: Some(vec!["t6".into()]),
            task_ids: None,
            created_at: now,
            updated_at: now,
        },
        ReminderEntity {
            id: "r2".into(),
            title: "Review API progress".to_string(),
            description: None,
            loop_rule: Some(ReminderLoop::Daily),
            time: "16:30".to_string(),
            place: None,
            tag_ids: Some(vec!["t2".into()]),
            task_ids: Some(vec!["k4".into(), "k5".into()]),
            created_at: now,
            updated_at: now,
        },
        ReminderEntity {
            id: "r3".into(),
            title: "Pay rent".to_string(),
            description: None,
            loop_rule: Some(ReminderLoop::Monthly { dates: vec![1] }),
            time: "10:00".to_string(),
            place: None,
            tag_ids: None,
            task_ids: None,
            created_at: now,
            updated_at: now,
        },
    ];

    let sessions = vec![
        session("s1", "k1", 240, 25, SessionStatus::Completed, now),
        session("s2", "k2", 180, 25, SessionStatus::Completed, now),
        session("s3", "k5", 60, 25, SessionStatus::Interrupted, now),
        session("s4", "k7", 30, 25, SessionStatus::Paused, now),
        session("s5", "k9", 10, 25, SessionStatus::Running, now),
    ];

    Dataset {
        tags,
        projects,
        todos,
        tasks,
        reminders,
        sessions,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
