use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const HELP_ROWS: &[(&str, &str)] = &[
    ("j / ↓, k / ↑", "move cursor"),
    ("g / G", "jump to top / bottom"),
    ("enter", "open details for the selected item"),
    ("t", "open tag view for the item's first tag"),
    ("p", "open project view for the item's project"),
    ("/", "search todos and reminders"),
    ("esc / backspace", "go back (closes when no history)"),
    ("x", "close the detail panel"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Centered help popup listing the key bindings.
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let width = 52.min(area.width);
    let height = (HELP_ROWS.len() as u16 + 4).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight).bg(theme.background))
        .title(Span::styled(
            " keys ",
            Style::default()
                .fg(theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.background));

    let mut lines: Vec<Line<'static>> = vec![Line::from("")];
    for (keys, action) in HELP_ROWS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {keys:<18}"),
                Style::default().fg(theme.cyan).bg(theme.background),
            ),
            Span::styled(
                action.to_string(),
                Style::default().fg(theme.text).bg(theme.background),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
