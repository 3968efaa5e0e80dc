//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.
//! Day positions are looked up from the last rendered frame, so tests speak in
//! days rather than screen coordinates.

use crate::model::{CalendarDate, DayIndex, WeekStart};
use crate::state::AppState;
use crate::view::TuiApp;
use crate::view_state::HitTester;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Position;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct CalendarTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

#[allow(dead_code)] // Not every scenario uses every helper
impl CalendarTestHarness {
    /// Show `month` on a default 28x12 terminal with Sunday-start weeks.
    pub fn new(today: CalendarDate, month: CalendarDate) -> Self {
        Self::with_options(today, month, WeekStart::Sunday, 28, 12)
    }

    /// Full control over week start and terminal size.
    pub fn with_options(
        today: CalendarDate,
        month: CalendarDate,
        week_start: WeekStart,
        width: u16,
        height: u16,
    ) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal never fails");
        let state = AppState::new(today, month, week_start);
        let mut app = TuiApp::new_for_test(terminal, state);
        app.render_test().expect("Rendering should succeed in test harness");

        Self { app, running: true }
    }

    // ===== Keyboard =====

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        } else {
            self.redraw();
        }
        quit
    }

    /// Send a sequence of keys, stopping early if one quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    // ===== Mouse =====

    /// Screen point in the middle of `day`'s cell in the last frame.
    ///
    /// # Panics
    /// Panics if the day is not visible.
    pub fn point_of(&self, day: u32) -> (u16, u16) {
        let index = DayIndex::new(day).expect("day in 1..=31");
        let slot = self
            .state()
            .layout()
            .slot_of(index)
            .unwrap_or_else(|| panic!("day {day} not in displayed month"));
        let rect = self
            .app
            .last_grid()
            .and_then(|grid| grid.cell_rect(slot))
            .unwrap_or_else(|| panic!("day {day} not on screen"));
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    /// Day under a screen point in the last frame.
    pub fn day_at(&self, column: u16, row: u16) -> Option<DayIndex> {
        self.app
            .last_grid()
            .and_then(|grid| grid.hit_test(Position::new(column, row)))
    }

    pub fn mouse_down_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    pub fn mouse_drag_to(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Drag(MouseButton::Left), column, row);
    }

    pub fn mouse_up_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }

    /// Press and release on the same point.
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.mouse_down_at(column, row);
        self.mouse_up_at(column, row);
    }

    /// Click in the middle of `day`'s cell.
    pub fn tap_day(&mut self, day: u32) {
        let (column, row) = self.point_of(day);
        self.click_at(column, row);
    }

    /// Press on `path[0]`, drag through the remaining days, then release.
    pub fn drag_days(&mut self, path: &[u32]) {
        self.press_and_drag(path);
        if let Some(&last) = path.last() {
            let (column, row) = self.point_of(last);
            self.mouse_up_at(column, row);
        }
    }

    /// Like [`Self::drag_days`] but leaves the button held.
    pub fn press_and_drag(&mut self, path: &[u32]) {
        let Some((&first, rest)) = path.split_first() else {
            return;
        };
        let (column, row) = self.point_of(first);
        self.mouse_down_at(column, row);
        for &day in rest {
            let (column, row) = self.point_of(day);
            self.mouse_drag_to(column, row);
        }
    }

    pub fn scroll_down(&mut self) {
        self.mouse(MouseEventKind::ScrollDown, 0, 0);
    }

    pub fn lose_focus(&mut self) {
        self.app.handle_focus_lost_test();
        self.redraw();
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return;
        }
        self.app.handle_mouse_test(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        self.redraw();
    }

    // ===== Inspection =====

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Selected days of the displayed month, ascending.
    pub fn selected_days(&self) -> Vec<u32> {
        self.state()
            .selection()
            .selection()
            .iter()
            .map(|d| u32::from(d.get()))
            .collect()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    pub fn render_to_string(&mut self) -> String {
        self.redraw();
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Every event is followed by a frame, as in the real event loop.
    fn redraw(&mut self) {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
    }
}
