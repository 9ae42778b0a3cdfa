use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration from tomo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pomodoro: PomodoroConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroConfig {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        PomodoroConfig {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
        }
    }
}

fn default_work_minutes() -> u32 {
    25
}

fn default_short_break_minutes() -> u32 {
    5
}

fn default_long_break_minutes() -> u32 {
    15
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub show_key_hints: bool,
    /// Theme color overrides, e.g. `highlight = "#FB4196"`.
    /// Applied in file order, later keys win.
    #[serde(default)]
    pub colors: IndexMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.pomodoro.work_minutes, 25);
        assert_eq!(config.pomodoro.short_break_minutes, 5);
        assert_eq!(config.pomodoro.long_break_minutes, 15);
        assert!(!config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn test_partial_override() {
        let config: AppConfig = toml::from_str(
            "\
[pomodoro]
work_minutes = 50

[ui]
show_key_hints = true

[ui.colors]
highlight = \"#FF00FF\"
",
        )
        .unwrap();
        assert_eq!(config.pomodoro.work_minutes, 50);
        assert_eq!(config.pomodoro.short_break_minutes, 5);
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FF00FF");
    }
}
