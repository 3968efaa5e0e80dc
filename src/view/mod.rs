//! Terminal UI: rendering and the event loop.

pub mod calendar_grid;
pub mod constants;
pub mod help;
pub mod layout;
pub mod styles;

pub use calendar_grid::{header_geometry, CalendarGrid};
pub use help::render_help_overlay;
pub use layout::{calculate_areas, render_layout, status_text, CalendarAreas};
pub use styles::{CalendarStyles, ColorConfig};

use crate::config::KeyBindings;
use crate::model::{CalendarDate, KeyAction, WeekStart};
use crate::state::{AppState, GestureRecognizer, NavigationCommand};
use crate::view_state::{GridGeometry, HeaderGeometry};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Position, Rect},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    gestures: GestureRecognizer,
    styles: CalendarStyles,
    /// Grid geometry of the last frame (for mouse hit-testing)
    last_grid: Option<GridGeometry>,
    /// Header arrow positions of the last frame
    last_header: Option<HeaderGeometry>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen, mouse capture and
    /// focus reporting.
    pub fn new(app_state: AppState, styles: CalendarStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        stdout.execute(EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, app_state, styles))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Input events redraw
    /// immediately; the timer only redraws when the date rolls over.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TIMER_INTERVAL: Duration = Duration::from_millis(500);

        self.draw()?;

        loop {
            if !event::poll(TIMER_INTERVAL)? {
                if self.app_state.set_today(CalendarDate::today()) {
                    self.draw()?;
                }
                continue;
            }

            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::FocusLost => self.handle_focus_lost(),
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(terminal: Terminal<B>, app_state: AppState, styles: CalendarStyles) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            gestures: GestureRecognizer::new(),
            styles,
            last_grid: None,
            last_header: None,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "Key action");

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => {
                // Mouse input is swallowed while help is open
                self.abort_gesture();
                self.app_state.toggle_help();
            }
            KeyAction::Cancel => {
                if self.app_state.help_visible {
                    self.app_state.help_visible = false;
                } else {
                    self.abort_gesture();
                }
            }
            KeyAction::PreviousMonth => self.navigate(NavigationCommand::Previous),
            KeyAction::NextMonth => self.navigate(NavigationCommand::Next),
            KeyAction::GoToToday => {
                self.abort_gesture();
                self.app_state.go_to_today();
            }
            KeyAction::ClearSelection => {
                self.abort_gesture();
                if self.app_state.clear_selection().is_changed() {
                    info!("Selection cleared");
                }
            }
        }
        false
    }

    /// Handle a single mouse event
    ///
    /// Header arrows and the scroll wheel are handled here; everything else
    /// goes through the gesture recognizer to the selection engine.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let point = Position::new(mouse.column, mouse.row);

        if self.app_state.help_visible {
            // Any click dismisses the overlay; nothing reaches the grid underneath
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.app_state.help_visible = false;
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                if let Some(grid) = &self.last_grid {
                    let up = mouse.kind == MouseEventKind::ScrollUp;
                    self.app_state.scroll_grid(up, grid.max_scroll());
                }
                return;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let command = self
                    .last_header
                    .and_then(|header| header.command_at(point));
                if let Some(command) = command {
                    self.navigate(command);
                    return;
                }
            }
            _ => {}
        }

        let Some(grid) = self.last_grid.as_ref() else {
            return;
        };
        for gesture in self.gestures.on_mouse(mouse, grid) {
            let outcome = self.app_state.apply_gesture(gesture, grid);
            if outcome.is_changed() {
                debug!(
                    ?gesture,
                    revision = self.app_state.selection().revision(),
                    "Selection changed"
                );
            }
        }
    }

    /// The terminal lost focus; a release may never arrive.
    fn handle_focus_lost(&mut self) {
        debug!("Focus lost");
        self.abort_gesture();
    }

    fn navigate(&mut self, command: NavigationCommand) {
        self.abort_gesture();
        self.app_state.navigate(command);
    }

    /// Drop any half-finished gesture, keeping what a drag already selected.
    fn abort_gesture(&mut self) {
        if self.gestures.abort().is_some() && self.app_state.cancel_drag().is_changed() {
            debug!(
                revision = self.app_state.selection().revision(),
                "Gesture aborted, drag cancelled"
            );
        }
    }

    /// Render the current frame
    ///
    /// Areas are computed before drawing and kept for mouse hit-testing.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        let areas = calculate_areas(frame_area);

        let grid = GridGeometry::new(areas.grid, self.app_state.layout(), self.app_state.grid_scroll);
        self.app_state.grid_scroll = grid.scroll_rows();
        let header = header_geometry(areas.header, &self.app_state.cursor().year_month_label());

        self.terminal.draw(|frame| {
            render_layout(frame, &self.app_state, &areas, &grid, &self.styles);
        })?;

        self.last_grid = Some(grid);
        self.last_header = Some(header);
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not every helper is used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self::with_terminal(terminal, app_state, CalendarStyles::default())
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event. Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    pub(crate) fn handle_focus_lost_test(&mut self) {
        self.handle_focus_lost()
    }

    /// Render a single frame to the backend.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(crate) fn last_grid(&self) -> Option<&GridGeometry> {
        self.last_grid.as_ref()
    }
}

/// Startup options for [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Month shown first (any day of it).
    pub initial_month: CalendarDate,
    /// First column of the grid.
    pub week_start: WeekStart,
    /// Open with the help overlay visible.
    pub show_help: bool,
    /// Whether to draw in color.
    pub color: ColorConfig,
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
/// Returns every selected date, ascending.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(options: RunOptions) -> Result<Vec<CalendarDate>, TuiError> {
    let mut app_state = AppState::new(
        CalendarDate::today(),
        options.initial_month,
        options.week_start,
    );
    app_state.help_visible = options.show_help;

    let styles = CalendarStyles::with_color_config(options.color);
    let mut app = match TuiApp::new(app_state, styles) {
        Ok(app) => app,
        Err(e) => {
            let _ = restore_terminal();
            return Err(e);
        }
    };

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result.map(|()| app.app_state.selected_dates())
}

/// Restore terminal to normal state
///
/// Disables raw mode, focus reporting, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(DisableFocusChange)?;
    stdout.execute(DisableMouseCapture)?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
