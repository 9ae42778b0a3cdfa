use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Priority;
use crate::tui::app::{App, Entry};
use crate::util::text::truncate_to_width;
use crate::vm::todo_progress;

use super::helpers::{format_date, loop_label, progress_bar, tag_spans};

/// Render the main list: todos, then reminders, with the cursor row
/// highlighted.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let todos = app.todos();
    let reminders = app.reminders();
    let entries = app.entries();

    let bg = app.theme.background;
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    // Map each entry to a rendered line, remembering section breaks
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut entry_rows: Vec<usize> = Vec::new();

    lines.push(Line::from(Span::styled(" Todos", dim_style)));
    for (idx, entry) in entries.iter().enumerate() {
        if *entry == Entry::Reminder(0) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(" Reminders", dim_style)));
        }
        let selected = idx == app.cursor;
        let line = match entry {
            Entry::Todo(i) => todos.get(*i).map(|t| todo_line(app, t, selected, area)),
            Entry::Reminder(i) => reminders
                .get(*i)
                .map(|r| reminder_line(app, r, selected, area)),
        };
        if let Some(line) = line {
            entry_rows.push(lines.len());
            lines.push(line);
        }
    }

    if todos.is_empty() && reminders.is_empty() {
        lines.push(Line::from(Span::styled("  nothing here yet", dim_style)));
    }

    // Keep the cursor row visible
    let visible = area.height as usize;
    if let Some(&cursor_row) = entry_rows.get(app.cursor) {
        if cursor_row < app.scroll_offset {
            app.scroll_offset = cursor_row;
        } else if visible > 0 && cursor_row >= app.scroll_offset + visible {
            app.scroll_offset = cursor_row + 1 - visible;
        }
    }

    let paragraph = Paragraph::new(lines).scroll((app.scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

fn todo_line(app: &App, todo: &crate::vm::TodoViewModel, selected: bool, area: Rect) -> Line<'static> {
    let theme = &app.theme;
    let bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(
        if selected { "▌" } else { " " },
        Style::default().fg(theme.highlight).bg(bg),
    ));

    let priority_style = match todo.priority {
        Priority::High => Style::default().fg(theme.red).bg(bg),
        Priority::Normal => Style::default().fg(theme.dim).bg(bg),
    };
    spans.push(Span::styled(
        match todo.priority {
            Priority::High => "! ",
            Priority::Normal => "  ",
        },
        priority_style,
    ));

    let title_width = (area.width as usize).saturating_sub(30).max(10);
    let title_style = Style::default()
        .fg(if selected {
            theme.text_bright
        } else {
            theme.text
        })
        .bg(bg);
    let title_style = if selected {
        title_style.add_modifier(Modifier::BOLD)
    } else {
        title_style
    };
    spans.push(Span::styled(
        format!("{:<w$} ", truncate_to_width(&todo.title, title_width), w = title_width),
        title_style,
    ));

    let percent = todo_progress(todo);
    spans.push(Span::styled(
        format!("{} {:>3}% ", progress_bar(percent, 6), percent),
        Style::default().fg(theme.green).bg(bg),
    ));

    if let Some(due) = todo.due_date {
        spans.push(Span::styled(
            format!("due {} ", format_date(due)),
            Style::default().fg(theme.yellow).bg(bg),
        ));
    }

    if let Some(project) = &todo.project {
        spans.push(Span::styled(
            format!("{} ", project.project_name),
            Style::default().fg(theme.cyan).bg(bg),
        ));
    }

    spans.extend(tag_spans(&todo.tags, theme));
    Line::from(spans)
}

fn reminder_line(
    app: &App,
    reminder: &crate::vm::ReminderViewModel,
    selected: bool,
    area: Rect,
) -> Line<'static> {
    let theme = &app.theme;
    let bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(
        if selected { "▌" } else { " " },
        Style::default().fg(theme.highlight).bg(bg),
    ));
    spans.push(Span::styled(
        format!("{} ", reminder.time),
        Style::default().fg(theme.cyan).bg(bg),
    ));

    let title_width = (area.width as usize).saturating_sub(30).max(10);
    spans.push(Span::styled(
        format!("{:<w$} ", truncate_to_width(&reminder.title, title_width), w = title_width),
        Style::default()
            .fg(if selected {
                theme.text_bright
            } else {
                theme.text
            })
            .bg(bg),
    ));

    if let Some(rule) = &reminder.loop_rule {
        spans.push(Span::styled(
            format!("{} ", loop_label(rule)),
            Style::default().fg(theme.dim).bg(bg),
        ));
    }

    spans.extend(tag_spans(&reminder.tags, theme));
    Line::from(spans)
}
