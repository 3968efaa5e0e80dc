//! Month header, weekday row, and day grid rendering.
//!
//! Geometry comes from [`GridGeometry`] and [`header_geometry`] so what is
//! drawn and what the mouse hits always agree.

use super::constants::{NEXT_ARROW, PREVIOUS_ARROW};
use super::styles::CalendarStyles;
use crate::model::WeekStart;
use crate::state::AppState;
use crate::view_state::{DayCell, GridGeometry, HeaderGeometry};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use unicode_width::UnicodeWidthStr;

// ===== Header =====

/// Column where the centered header text starts, and its total width.
fn header_span(area: Rect, label: &str) -> (u16, u16) {
    let text_width =
        (PREVIOUS_ARROW.width() + 1 + label.width() + 1 + NEXT_ARROW.width()) as u16;
    let x = area.x + area.width.saturating_sub(text_width) / 2;
    (x, text_width)
}

/// Clickable arrow rectangles for a header showing `label` in `area`.
pub fn header_geometry(area: Rect, label: &str) -> HeaderGeometry {
    let (x, text_width) = header_span(area, label);
    let previous_width = PREVIOUS_ARROW.width() as u16;
    let next_width = NEXT_ARROW.width() as u16;

    let previous = Rect::new(x, area.y, previous_width, area.height.min(1));
    let next = Rect::new(
        x + text_width - next_width,
        area.y,
        next_width,
        area.height.min(1),
    );
    HeaderGeometry::new(previous.intersection(area), next.intersection(area))
}

/// Draw `◀ label ▶` centered on the first line of `area`.
pub fn render_header(buf: &mut Buffer, area: Rect, label: &str, styles: &CalendarStyles) {
    if area.is_empty() {
        return;
    }
    let (mut x, _) = header_span(area, label);
    let right = area.right();

    for (text, style) in [
        (PREVIOUS_ARROW, styles.arrow),
        (" ", styles.header),
        (label, styles.header),
        (" ", styles.header),
        (NEXT_ARROW, styles.arrow),
    ] {
        if x >= right {
            break;
        }
        let (end, _) = buf.set_stringn(x, area.y, text, usize::from(right - x), style);
        x = end;
    }
}

// ===== Weekday row =====

/// Draw the seven weekday labels, one per grid column.
pub fn render_weekdays(
    buf: &mut Buffer,
    area: Rect,
    cell_width: u16,
    week_start: WeekStart,
    styles: &CalendarStyles,
) {
    if area.is_empty() {
        return;
    }
    for (col, label) in week_start.weekday_labels().iter().enumerate() {
        let cell = Rect::new(area.x + col as u16 * cell_width, area.y, cell_width, 1)
            .intersection(area);
        if cell.is_empty() {
            break;
        }
        write_centered(buf, cell, label, styles.weekday);
    }
}

// ===== Day grid =====

/// Day grid widget. Blank slots stay empty.
pub struct CalendarGrid<'a> {
    state: &'a AppState,
    geometry: &'a GridGeometry,
    styles: &'a CalendarStyles,
}

impl<'a> CalendarGrid<'a> {
    /// Grid for `state`, laid out by `geometry`.
    pub fn new(state: &'a AppState, geometry: &'a GridGeometry, styles: &'a CalendarStyles) -> Self {
        Self {
            state,
            geometry,
            styles,
        }
    }
}

impl Widget for CalendarGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let today = self.state.today();
        let selection = self.state.selection();
        let selecting = selection.in_selection_mode();

        for (slot, cell) in self.state.layout().cells().iter().enumerate() {
            let DayCell::Day { index, date } = cell else {
                continue;
            };
            let Some(rect) = self.geometry.cell_rect(slot).map(|r| r.intersection(area)) else {
                continue;
            };
            if rect.is_empty() {
                continue;
            }

            let style = self
                .styles
                .day_style(*date == today, selecting && selection.is_selected(*index));
            buf.set_style(rect, style);

            let label_row = Rect::new(rect.x, rect.y + (rect.height - 1) / 2, rect.width, 1);
            write_centered(buf, label_row, &index.to_string(), style);
        }
    }
}

fn write_centered(buf: &mut Buffer, row: Rect, text: &str, style: ratatui::style::Style) {
    let width = usize::from(row.width);
    let padded = format!("{text:^width$}");
    buf.set_stringn(row.x, row.y, padded, width, style);
}

#[cfg(test)]
#[path = "calendar_grid_tests.rs"]
mod tests;
