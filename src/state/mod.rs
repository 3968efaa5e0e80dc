//! UI state machine (pure).
//!
//! All state transitions are plain functions testable without a terminal.

pub mod app_state;
pub mod mouse_handler;
pub mod navigator;
pub mod selection;

// Re-export for convenience
pub use app_state::AppState;
pub use mouse_handler::GestureRecognizer;
pub use navigator::{MonthNavigator, NavigationCommand};
pub use selection::{DragState, GestureEvent, SelectionEngine, SelectionOutcome, SelectionSet};
