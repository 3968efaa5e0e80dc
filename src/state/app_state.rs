//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Transitions are
//! plain methods with no I/O; the TUI shell calls them and redraws.

use super::navigator::{MonthNavigator, NavigationCommand};
use super::selection::{GestureEvent, SelectionEngine, SelectionOutcome, SelectionSet};
use crate::model::{CalendarDate, WeekStart};
use crate::view_state::{HitTester, MonthLayout};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # Selection across months
///
/// The selection engine works on bare day indices of the displayed month.
/// When the user navigates away, that month's indices are parked under the
/// month's first day and restored when the user comes back, so day 15 of
/// March is never shown as day 15 of April. Nothing is discarded by
/// navigation.
#[derive(Debug, Clone)]
pub struct AppState {
    navigator: MonthNavigator,
    week_start: WeekStart,
    layout: MonthLayout,
    selection: SelectionEngine,
    /// Selections of months not currently displayed, keyed by first day.
    parked: BTreeMap<CalendarDate, SelectionSet>,
    today: CalendarDate,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Rows the grid is scrolled down when the terminal is too short for it.
    pub grid_scroll: u16,
}

impl AppState {
    /// State showing `initial_month`, with `today` marked.
    pub fn new(today: CalendarDate, initial_month: CalendarDate, week_start: WeekStart) -> Self {
        let navigator = MonthNavigator::new(initial_month);
        let layout = MonthLayout::compute(navigator.cursor(), week_start);
        let selection = SelectionEngine::new(layout.day_count());
        Self {
            navigator,
            week_start,
            layout,
            selection,
            parked: BTreeMap::new(),
            today,
            help_visible: false,
            grid_scroll: 0,
        }
    }

    /// First day of the displayed month.
    pub fn cursor(&self) -> CalendarDate {
        self.navigator.cursor()
    }

    /// Day grid of the displayed month.
    pub fn layout(&self) -> &MonthLayout {
        &self.layout
    }

    /// Selection engine for the displayed month.
    pub fn selection(&self) -> &SelectionEngine {
        &self.selection
    }

    /// Date marked as today.
    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// Week-start convention of the grid.
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Whether the displayed month contains today.
    pub fn is_today_visible(&self) -> bool {
        self.today.same_month(self.cursor())
    }

    // ===== Navigation =====

    /// Show the previous or next month.
    pub fn navigate(&mut self, command: NavigationCommand) {
        let mut navigator = self.navigator;
        let target = navigator.apply(command);
        self.show_month(target);
    }

    /// Show the month containing today. Returns whether the month changed.
    pub fn go_to_today(&mut self) -> bool {
        if self.is_today_visible() {
            return false;
        }
        self.show_month(self.today);
        true
    }

    /// Update the today marker (e.g. after midnight). Returns whether it moved.
    pub fn set_today(&mut self, today: CalendarDate) -> bool {
        if self.today == today {
            return false;
        }
        debug!(%today, "Today marker moved");
        self.today = today;
        true
    }

    fn show_month(&mut self, month: CalendarDate) {
        let month = month.first_of_month();
        let leaving = self.cursor();
        if month == leaving {
            return;
        }

        self.navigator.jump_to(month);
        self.layout = MonthLayout::compute(month, self.week_start);
        let incoming = self.parked.remove(&month).unwrap_or_default();
        let outgoing = self.selection.replace_month(self.layout.day_count(), incoming);
        if !outgoing.is_empty() {
            self.parked.insert(leaving, outgoing);
        }
        self.grid_scroll = 0;
        debug!(%leaving, %month, parked_months = self.parked.len(), "Displayed month changed");
    }

    // ===== Selection =====

    /// Feed one gesture event to the selection engine.
    pub fn apply_gesture(
        &mut self,
        event: GestureEvent,
        hit_tester: &impl HitTester,
    ) -> SelectionOutcome {
        self.selection.handle(event, hit_tester)
    }

    /// Deselect every day in every month.
    pub fn clear_selection(&mut self) -> SelectionOutcome {
        let parked = if self.parked.is_empty() {
            SelectionOutcome::Unchanged
        } else {
            self.parked.clear();
            SelectionOutcome::Changed
        };
        self.selection.clear().or(parked)
    }

    /// Cancel an in-progress drag, keeping what it selected.
    pub fn cancel_drag(&mut self) -> SelectionOutcome {
        self.selection.drag_cancel()
    }

    /// Every selected date across all months, ascending.
    pub fn selected_dates(&self) -> Vec<CalendarDate> {
        let current = (self.cursor(), self.selection.selection());
        let parked = self.parked.iter().map(|(month, set)| (*month, set));
        std::iter::once(current)
            .chain(parked)
            .flat_map(|(month, set)| set.iter().filter_map(move |index| month.with_day(*index)))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    // ===== View =====

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Scroll the grid by one row, clamped to `0..=max_scroll`.
    pub fn scroll_grid(&mut self, up: bool, max_scroll: u16) {
        self.grid_scroll = if up {
            self.grid_scroll.saturating_sub(1)
        } else {
            self.grid_scroll.saturating_add(1).min(max_scroll)
        };
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
