//! Help overlay widget displaying keyboard and mouse controls.
//!
//! Shows a centered modal overlay with all controls grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::CalendarStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Width of the key column, in cells.
const KEY_COLUMN_WIDTH: usize = 16;

/// Control groups shown in the overlay: (category, [(keys, description)]).
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Months",
        &[
            ("h/←/p/PgUp", "Previous month"),
            ("l/→/n/PgDn", "Next month"),
            ("t", "Jump to today's month"),
            ("click ◀ ▶", "Previous / next month"),
        ],
    ),
    (
        "Selection",
        &[
            ("click", "Toggle a day"),
            ("drag", "Select a run of days"),
            ("Esc", "Cancel drag (keeps days)"),
            ("c", "Clear every selection"),
            ("wheel", "Scroll a clipped grid"),
        ],
    ),
    (
        "Application",
        &[("?", "Show / hide this help"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &CalendarStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);
    if popup_area.is_empty() {
        return;
    }

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Controls ")
                .borders(Borders::ALL)
                .border_style(styles.help_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint sits on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles.muted,
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let popup_height = (u32::from(area.height) * u32::from(percent_y) / 100) as u16;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(styles: &CalendarStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (category, entries)) in HELP_SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, styles.help_section)));
        for (keys, description) in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {keys:<width$}", width = KEY_COLUMN_WIDTH),
                    styles.help_key,
                ),
                Span::styled(*description, styles.help_description),
            ]));
        }
    }
    lines
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
