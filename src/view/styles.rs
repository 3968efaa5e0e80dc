//! Calendar styling configuration.
//!
//! Today and selected days get distinct cell styles; when both apply, the
//! today style is shown.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CalendarStyles =====

/// Styles for every part of the calendar screen.
///
/// Without colors, today is bold and underlined and selected days are shown
/// reversed, so both stay distinguishable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarStyles {
    /// Month title.
    pub header: Style,
    /// Previous and next month arrows.
    pub arrow: Style,
    /// Weekday labels.
    pub weekday: Style,
    /// Ordinary day cell.
    pub day: Style,
    /// Today's cell.
    pub today: Style,
    /// Selected day cell.
    pub selected: Style,
    /// Status bar while idle.
    pub status: Style,
    /// Status bar during a drag.
    pub status_dragging: Style,
    /// Help overlay border.
    pub help_border: Style,
    /// Help overlay category headings.
    pub help_section: Style,
    /// Key column in the help overlay.
    pub help_key: Style,
    /// Description column in the help overlay.
    pub help_description: Style,
    /// De-emphasized hints.
    pub muted: Style,
}

impl CalendarStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                arrow: Style::default().fg(Color::Yellow),
                weekday: Style::default().fg(Color::DarkGray),
                day: Style::default(),
                today: Style::default().bg(Color::Gray).fg(Color::White),
                selected: Style::default().bg(Color::Red).fg(Color::White),
                status: Style::default().fg(Color::Gray),
                status_dragging: Style::default().fg(Color::Yellow),
                help_border: Style::default().fg(Color::Cyan),
                help_section: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                help_key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                help_description: Style::default().fg(Color::White),
                muted: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            }
        } else {
            let bold = Style::default().add_modifier(Modifier::BOLD);
            Self {
                header: bold,
                arrow: Style::default(),
                weekday: Style::default(),
                day: Style::default(),
                today: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                status: Style::default(),
                status_dragging: bold,
                help_border: Style::default(),
                help_section: bold,
                help_key: bold,
                help_description: Style::default(),
                muted: Style::default(),
            }
        }
    }

    /// Cell style for a day. Today's style takes precedence over selection.
    pub fn day_style(&self, is_today: bool, is_selected: bool) -> Style {
        if is_today {
            self.today
        } else if is_selected {
            self.selected
        } else {
            self.day
        }
    }
}

impl Default for CalendarStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
