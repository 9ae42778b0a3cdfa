//! Completion percentages derived from pomodoro counts.

use super::mappers::{TaskViewModel, TodoViewModel};

/// Percentage of a task's estimated pomodoros completed, 0–100.
///
/// A task with no estimate reports 0: nothing estimated means nothing to
/// complete. Counts past the estimate clamp at 100.
pub fn task_progress(task: &TaskViewModel) -> u8 {
    ratio_percent(task.completed_pomodoros, task.estimated_pomodoros)
}

/// Percentage of a todo's estimated pomodoros completed, aggregated across
/// all its tasks, 0–100. A todo with no tasks (or no estimates) reports 0.
pub fn todo_progress(todo: &TodoViewModel) -> u8 {
    let total_estimated: u32 = todo.tasks.iter().map(|t| t.estimated_pomodoros).sum();
    let total_completed: u32 = todo.tasks.iter().map(|t| t.completed_pomodoros).sum();
    ratio_percent(total_completed, total_estimated)
}

fn ratio_percent(completed: u32, estimated: u32) -> u8 {
    if estimated == 0 {
        return 0;
    }
    let percent = (completed as f64 / estimated as f64 * 100.0).round();
    percent.min(100.0) as u8
}
