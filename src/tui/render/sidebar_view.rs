use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::{Priority, ProjectEntity, TagEntity};
use crate::tui::app::App;
use crate::tui::sidebar::SidebarContent;
use crate::tui::theme::{Theme, hex_to_color};
use crate::vm::{ReminderViewModel, TodoViewModel, task_progress, todo_progress};

use super::helpers::{format_date, loop_label, progress_bar, tag_spans};

/// Render the right-hand detail panel for the current sidebar content.
pub fn render_sidebar(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme.clone();
    let bg = theme.background;

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(theme.highlight).bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(""));

    match &app.sidebar.content {
        SidebarContent::Closed => return,
        SidebarContent::Tag {
            tag,
            todos,
            reminders,
        } => tag_lines(&theme, tag, todos, reminders, &mut lines),
        SidebarContent::Project { project, todos } => {
            project_lines(&theme, project, todos, &mut lines)
        }
        SidebarContent::TodoDetail { todo } => todo_detail_lines(&theme, todo, &mut lines),
        SidebarContent::ReminderDetail { reminder } => {
            reminder_detail_lines(&theme, reminder, &mut lines)
        }
        SidebarContent::SearchResults {
            query,
            todos,
            reminders,
        } => search_lines(&theme, query, todos, reminders, &mut lines),
    }

    // Back hint when there is history to pop
    if !app.sidebar.history.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" esc: back ({})", app.sidebar.history.len()),
            Style::default().fg(theme.dim).bg(bg),
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn header(theme: &Theme, text: String) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {text}"),
        Style::default()
            .fg(theme.text_bright)
            .bg(theme.background)
            .add_modifier(Modifier::BOLD),
    ))
}

fn dim(theme: &Theme, text: String) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {text}"),
        Style::default().fg(theme.dim).bg(theme.background),
    ))
}

fn todo_row(theme: &Theme, todo: &TodoViewModel) -> Line<'static> {
    let percent = todo_progress(todo);
    let mut spans = vec![
        Span::styled(
            if todo.priority == Priority::High {
                " ! "
            } else {
                "   "
            },
            Style::default().fg(theme.red).bg(theme.background),
        ),
        Span::styled(
            format!("{} ", todo.title),
            Style::default().fg(theme.text).bg(theme.background),
        ),
        Span::styled(
            format!("{:>3}% ", percent),
            Style::default().fg(theme.green).bg(theme.background),
        ),
    ];
    if let Some(due) = todo.due_date {
        spans.push(Span::styled(
            format!("due {}", format_date(due)),
            Style::default().fg(theme.yellow).bg(theme.background),
        ));
    }
    Line::from(spans)
}

fn reminder_row(theme: &Theme, reminder: &ReminderViewModel) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("   {} ", reminder.time),
            Style::default().fg(theme.cyan).bg(theme.background),
        ),
        Span::styled(
            reminder.title.clone(),
            Style::default().fg(theme.text).bg(theme.background),
        ),
    ];
    if let Some(rule) = &reminder.loop_rule {
        spans.push(Span::styled(
            format!(" ({})", loop_label(rule)),
            Style::default().fg(theme.dim).bg(theme.background),
        ));
    }
    Line::from(spans)
}

fn tag_lines(
    theme: &Theme,
    tag: &TagEntity,
    todos: &[TodoViewModel],
    reminders: &[ReminderViewModel],
    lines: &mut Vec<Line<'static>>,
) {
    let mut title = vec![Span::raw(" ")];
    title.extend(tag_spans(std::slice::from_ref(tag), theme));
    lines.push(Line::from(title));
    lines.push(Line::from(""));

    lines.push(dim(theme, format!("todos ({})", todos.len())));
    for todo in todos {
        lines.push(todo_row(theme, todo));
    }
    lines.push(Line::from(""));
    lines.push(dim(theme, format!("reminders ({})", reminders.len())));
    for reminder in reminders {
        lines.push(reminder_row(theme, reminder));
    }
}

fn project_lines(
    theme: &Theme,
    project: &ProjectEntity,
    todos: &[TodoViewModel],
    lines: &mut Vec<Line<'static>>,
) {
    let color = hex_to_color(&project.color).unwrap_or(theme.cyan);
    lines.push(Line::from(vec![
        Span::styled(" ● ", Style::default().fg(color).bg(theme.background)),
        Span::styled(
            project.project_name.clone(),
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(dim(theme, format!("todos ({})", todos.len())));
    for todo in todos {
        lines.push(todo_row(theme, todo));
    }
}

fn todo_detail_lines(theme: &Theme, todo: &TodoViewModel, lines: &mut Vec<Line<'static>>) {
    lines.push(header(theme, todo.title.clone()));

    if let Some(description) = &todo.description {
        lines.push(dim(theme, description.clone()));
    }
    lines.push(Line::from(""));

    let percent = todo_progress(todo);
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {} ", progress_bar(percent, 12)),
            Style::default().fg(theme.green).bg(theme.background),
        ),
        Span::styled(
            format!("{percent}%"),
            Style::default().fg(theme.text).bg(theme.background),
        ),
    ]));

    let priority_color = hex_to_color(todo.priority.color()).unwrap_or(theme.dim);
    let mut meta: Vec<Span> = vec![Span::styled(
        match todo.priority {
            Priority::High => " priority: high ",
            Priority::Normal => " priority: normal ",
        },
        Style::default().fg(priority_color).bg(theme.background),
    )];
    if let Some(due) = todo.due_date {
        meta.push(Span::styled(
            format!("due {} ", format_date(due)),
            Style::default().fg(theme.yellow).bg(theme.background),
        ));
    }
    if let Some(project) = &todo.project {
        meta.push(Span::styled(
            project.project_name.clone(),
            Style::default().fg(theme.cyan).bg(theme.background),
        ));
    }
    lines.push(Line::from(meta));

    if !todo.tags.is_empty() {
        let mut spans = vec![Span::raw(" ")];
        spans.extend(tag_spans(&todo.tags, theme));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(dim(theme, format!("tasks ({})", todo.tasks.len())));
    for task in &todo.tasks {
        let checkbox = if task.is_completed { "[x]" } else { "[ ]" };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {checkbox} "),
                Style::default()
                    .fg(if task.is_completed {
                        theme.green
                    } else {
                        theme.dim
                    })
                    .bg(theme.background),
            ),
            Span::styled(
                format!("{} ", task.title),
                Style::default().fg(theme.text).bg(theme.background),
            ),
            Span::styled(
                format!(
                    "{}/{} ({}%)",
                    task.completed_pomodoros,
                    task.estimated_pomodoros,
                    task_progress(task)
                ),
                Style::default().fg(theme.dim).bg(theme.background),
            ),
        ]));
    }
}

fn reminder_detail_lines(
    theme: &Theme,
    reminder: &ReminderViewModel,
    lines: &mut Vec<Line<'static>>,
) {
    lines.push(header(theme, reminder.title.clone()));
    if let Some(description) = &reminder.description {
        lines.push(dim(theme, description.clone()));
    }
    lines.push(Line::from(""));

    let mut meta = vec![Span::styled(
        format!(" at {} ", reminder.time),
        Style::default().fg(theme.cyan).bg(theme.background),
    )];
    if let Some(place) = &reminder.place {
        meta.push(Span::styled(
            format!("@ {place} "),
            Style::default().fg(theme.yellow).bg(theme.background),
        ));
    }
    if let Some(rule) = &reminder.loop_rule {
        meta.push(Span::styled(
            loop_label(rule),
            Style::default().fg(theme.dim).bg(theme.background),
        ));
    }
    lines.push(Line::from(meta));

    if !reminder.tags.is_empty() {
        let mut spans = vec![Span::raw(" ")];
        spans.extend(tag_spans(&reminder.tags, theme));
        lines.push(Line::from(spans));
    }

    if !reminder.tasks.is_empty() {
        lines.push(Line::from(""));
        lines.push(dim(theme, format!("linked tasks ({})", reminder.tasks.len())));
        for task in &reminder.tasks {
            let checkbox = if task.is_completed { "[x]" } else { "[ ]" };
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {checkbox} "),
                    Style::default().fg(theme.dim).bg(theme.background),
                ),
                Span::styled(
                    task.title.clone(),
                    Style::default().fg(theme.text).bg(theme.background),
                ),
            ]));
        }
    }
}

fn search_lines(
    theme: &Theme,
    query: &str,
    todos: &[TodoViewModel],
    reminders: &[ReminderViewModel],
    lines: &mut Vec<Line<'static>>,
) {
    lines.push(header(theme, format!("Search: {query}")));
    lines.push(Line::from(""));

    if todos.is_empty() && reminders.is_empty() {
        lines.push(dim(theme, "no matches".to_string()));
        return;
    }

    lines.push(dim(theme, format!("todos ({})", todos.len())));
    for todo in todos {
        lines.push(todo_row(theme, todo));
    }
    lines.push(Line::from(""));
    lines.push(dim(theme, format!("reminders ({})", reminders.len())));
    for reminder in reminders {
        lines.push(reminder_row(theme, reminder));
    }
}
