//! Prompt theming.
//!
//! A [`Theme`] is a passive record of glyphs, ANSI style fragments, and
//! margins consumed by the renderer exactly as given; the core performs
//! no validation on it. There is no process-wide default: callers pass a
//! theme into each prompt configuration, with [`Theme::default`] as the
//! usual starting point.
//!
//! # Theme file
//!
//! A theme can be loaded from a TOML file; absent keys fall back to the
//! defaults:
//!
//! ```toml
//! prompt_marker = "> "
//! selected_mark = "[x] "
//! unselected_mark = "[ ] "
//! margin_bottom = 2
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    /// Marker drawn before the highlighted option.
    pub prompt_marker: String,
    /// Mark drawn before selected options in multi-select.
    pub selected_mark: String,
    /// Mark drawn before unselected options in multi-select.
    pub unselected_mark: String,
    /// ANSI prefix for the input placeholder (reset is appended).
    pub placeholder_style: String,
    /// ANSI prefix for input validation errors (reset is appended).
    pub error_style: String,
    /// Help line for the single-select prompt; empty disables the bar.
    pub select_help: String,
    /// Help line for the multi-select prompt; empty disables the bar.
    pub multi_select_help: String,
    /// Blank lines printed above the prompt.
    pub margin_top: usize,
    /// Blank lines printed below the prompt.
    pub margin_bottom: usize,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            prompt_marker: "\x1b[32m❯\x1b[0m ".to_string(),
            selected_mark: "\x1b[34m✓\x1b[0m ".to_string(),
            unselected_mark: "• ".to_string(),
            placeholder_style: "\x1b[38;5;241m".to_string(),
            error_style: "\x1b[31m".to_string(),
            select_help: "\x1b[38;5;245m[↑↓] navigate • [enter] confirm\x1b[0m".to_string(),
            multi_select_help:
                "\x1b[38;5;245m[↑↓] navigate • [space] select • [enter] confirm\x1b[0m".to_string(),
            margin_top: 0,
            margin_bottom: 1,
        }
    }
}

impl Theme {
    /// Load a theme from a TOML file, falling back to the default when
    /// the file is missing or unparsable.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                if let Ok(theme) = toml::from_str(&content) {
                    return theme;
                }
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_theme_file_keeps_defaults_for_absent_keys() {
        let theme: Theme = toml::from_str("prompt_marker = \"> \"").unwrap();
        assert_eq!(theme.prompt_marker, "> ");
        assert_eq!(theme.unselected_mark, Theme::default().unselected_mark);
        assert_eq!(theme.margin_bottom, 1);
    }

    #[test]
    fn theme_round_trips_through_toml() {
        let theme = Theme {
            prompt_marker: "-> ".into(),
            margin_top: 3,
            ..Default::default()
        };
        let encoded = toml::to_string(&theme).unwrap();
        let decoded: Theme = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, theme);
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let theme = Theme::load(Path::new("/nonexistent/promptline-theme.toml"));
        assert_eq!(theme, Theme::default());
    }
}
