use ratatui::style::{Color, Style};

use crate::model::UiConfig;
use crate::util::color::{contrast_color, parse_hex_rgb};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x14, 0x0D, 0x20),
            text: Color::Rgb(0xC8, 0xC2, 0xE8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xA8),
            red: Color::Rgb(0xFB, 0x2C, 0x36),
            yellow: Color::Rgb(0xF5, 0x9E, 0x0B),
            green: Color::Rgb(0x10, 0xB9, 0x81),
            cyan: Color::Rgb(0x06, 0xB6, 0xD4),
            selection_bg: Color::Rgb(0x31, 0x22, 0x4A),
        }
    }
}

/// Parse a hex color string like "#FB4196" into an RGB Color
pub fn hex_to_color(hex: &str) -> Option<Color> {
    parse_hex_rgb(hex).map(|(r, g, b)| Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = hex_to_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Chip style for a tag: the tag's own color as background, with a
    /// contrast-derived foreground. Unparsable colors fall back to dim.
    pub fn tag_style(&self, tag_color: &str) -> Style {
        match hex_to_color(tag_color) {
            Some(bg) => {
                let fg = match contrast_color(tag_color) {
                    "#000000" => Color::Black,
                    _ => Color::White,
                };
                Style::default().fg(fg).bg(bg)
            }
            None => Style::default().fg(self.text).bg(self.dim),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_from_config_overrides() {
        let mut colors = IndexMap::new();
        colors.insert("highlight".to_string(), "#FF00FF".to_string());
        colors.insert("bogus_key".to_string(), "#FF00FF".to_string());
        colors.insert("dim".to_string(), "not-a-color".to_string());
        let ui = UiConfig {
            show_key_hints: false,
            colors,
        };

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.highlight, Color::Rgb(0xFF, 0x00, 0xFF));
        // Unknown keys and bad values leave defaults in place
        assert_eq!(theme.dim, Theme::default().dim);
    }

    #[test]
    fn test_tag_style_contrast() {
        let theme = Theme::default();
        let dark = theme.tag_style("#3b82f6");
        assert_eq!(dark.fg, Some(Color::White));
        let light = theme.tag_style("#ffd700");
        assert_eq!(light.fg, Some(Color::Black));
    }
}
