use chrono::{Local, TimeZone};
use ratatui::text::Span;

use crate::model::{ReminderLoop, TagEntity};
use crate::tui::theme::Theme;

/// Fixed-width progress bar like `▓▓▓▓░░░░░░`
pub(super) fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (percent as usize * width) / 100;
    let mut bar = String::with_capacity(width * 3);
    for i in 0..width {
        bar.push(if i < filled { '▓' } else { '░' });
    }
    bar
}

/// Short date label for an epoch-millisecond timestamp ("May 14")
pub(super) fn format_date(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).earliest() {
        Some(dt) => dt.format("%b %-d").to_string(),
        None => "?".to_string(),
    }
}

/// Human label for a reminder's recurrence rule
pub(super) fn loop_label(rule: &ReminderLoop) -> String {
    match rule {
        ReminderLoop::Daily => "daily".to_string(),
        ReminderLoop::Weekly { days } => {
            let days: Vec<&str> = days.iter().map(|d| d.label()).collect();
            format!("weekly: {}", days.join(", "))
        }
        ReminderLoop::Monthly { dates } => {
            let dates: Vec<String> = dates.iter().map(u8::to_string).collect();
            format!("monthly: {}", dates.join(", "))
        }
    }
}

/// Colored chip spans for a list of tags, separated by single spaces
pub(super) fn tag_spans(tags: &[TagEntity], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for tag in tags {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", tag.text),
            theme.tag_style(&tag.color),
        ));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Weekday;

    #[test]
    fn test_progress_bar_fill() {
        assert_eq!(progress_bar(0, 4), "░░░░");
        assert_eq!(progress_bar(50, 4), "▓▓░░");
        assert_eq!(progress_bar(100, 4), "▓▓▓▓");
    }

    #[test]
    fn test_loop_labels() {
        assert_eq!(loop_label(&ReminderLoop::Daily), "daily");
        assert_eq!(
            loop_label(&ReminderLoop::Weekly {
                days: vec![Weekday::Mon, Weekday::Fri]
            }),
            "weekly: Mon, Fri"
        );
        assert_eq!(
            loop_label(&ReminderLoop::Monthly { dates: vec![1, 15] }),
            "monthly: 1, 15"
        );
    }

    #[test]
    fn test_tag_spans_spacing() {
        let theme = Theme::default();
        let tags = vec![
            TagEntity {
                id: "t1".into(),
                text: "UI".to_string(),
                color: "#3b82f6".to_string(),
                created_at: 0,
                updated_at: 0,
            },
            TagEntity {
                id: "t2".into(),
                text: "Backend".to_string(),
                color: "#10b981".to_string(),
                created_at: 0,
                updated_at: 0,
            },
        ];
        let spans = tag_spans(&tags, &theme);
        assert_eq!(spans.len(), 3); // chip, separator, chip
        assert_eq!(spans[0].content, " UI ");
    }
}
