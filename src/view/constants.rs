//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the month header (`◀ YYYY-MM ▶`) in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the weekday label row in lines.
pub const WEEKDAY_ROW_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for the selection summary and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Glyph drawn for the previous-month control.
pub const PREVIOUS_ARROW: &str = "◀";

/// Glyph drawn for the next-month control.
pub const NEXT_ARROW: &str = "▶";

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
