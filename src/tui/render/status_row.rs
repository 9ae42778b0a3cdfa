use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Bottom status row: search input in search mode, key hints otherwise.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let line = match app.mode {
        Mode::Search => Line::from(vec![
            Span::styled(" /", Style::default().fg(theme.highlight).bg(bg)),
            Span::styled(
                app.search_input.clone(),
                Style::default().fg(theme.text_bright).bg(bg),
            ),
            Span::styled("▏", Style::default().fg(theme.highlight).bg(bg)),
        ]),
        Mode::Navigate => {
            let hints = if app.config.ui.show_key_hints {
                " j/k move · enter open · t tag · p project · / search · esc back · x close · ? help · q quit"
            } else {
                " ? help"
            };
            Line::from(Span::styled(hints, Style::default().fg(theme.dim).bg(bg)))
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}
