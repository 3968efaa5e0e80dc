//! Screen layout: header, weekday row, day grid, status bar.
//!
//! Pure layout logic. Area calculation is separate from rendering so the
//! event loop can keep the same rectangles for mouse hit-testing.

use super::calendar_grid::{self, CalendarGrid};
use super::constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT, WEEKDAY_ROW_HEIGHT};
use super::help::render_help_overlay;
use super::styles::CalendarStyles;
use crate::state::{AppState, DragState};
use crate::view_state::{GridGeometry, DAYS_PER_WEEK};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Keyboard hints appended to the status bar.
const STATUS_HINTS: &str = "←/→ month | t today | c clear | ? help | q quit";

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarAreas {
    /// Month title with navigation arrows.
    pub header: Rect,
    /// Weekday labels.
    pub weekdays: Rect,
    /// Day cells.
    pub grid: Rect,
    /// Selection summary and key hints.
    pub status: Rect,
}

/// Split the frame into calendar regions.
///
/// The calendar rows are narrowed to a multiple of seven columns so every
/// day cell has the same width; the status bar keeps the full width.
pub fn calculate_areas(area: Rect) -> CalendarAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(WEEKDAY_ROW_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let columns = DAYS_PER_WEEK as u16;
    let calendar_width = if area.width >= columns {
        area.width - area.width % columns
    } else {
        area.width
    };
    let narrow = |rect: Rect| Rect {
        width: calendar_width,
        ..rect
    };

    CalendarAreas {
        header: narrow(chunks[0]),
        weekdays: narrow(chunks[1]),
        grid: narrow(chunks[2]),
        status: chunks[3],
    }
}

/// Render one full frame.
///
/// `grid` must have been built from `areas.grid` and the state's current
/// layout and scroll offset.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    areas: &CalendarAreas,
    grid: &GridGeometry,
    styles: &CalendarStyles,
) {
    let label = state.cursor().year_month_label();
    calendar_grid::render_header(frame.buffer_mut(), areas.header, &label, styles);
    calendar_grid::render_weekdays(
        frame.buffer_mut(),
        areas.weekdays,
        grid.cell_width(),
        state.week_start(),
        styles,
    );
    frame.render_widget(CalendarGrid::new(state, grid, styles), grid.area());
    render_status_bar(frame, areas.status, state, styles);

    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}

/// Status line: drag progress or selection count, then key hints.
pub fn status_text(state: &AppState) -> String {
    let summary = match state.selection().drag_state() {
        DragState::Dragging { anchor, current } => {
            let (low, high) = if anchor <= current {
                (anchor, current)
            } else {
                (current, anchor)
            };
            format!("Dragging {low}-{high} (Esc cancels)")
        }
        DragState::Idle => match state.selected_dates().len() {
            0 => "No days selected".to_string(),
            1 => "1 day selected".to_string(),
            n => format!("{n} days selected"),
        },
    };
    format!("{summary} | {STATUS_HINTS}")
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &CalendarStyles) {
    let style = if state.selection().is_dragging() {
        styles.status_dragging
    } else {
        styles.status
    };
    let paragraph = Paragraph::new(Line::from(status_text(state))).style(style);
    frame.render_widget(paragraph, area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
