//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Month navigation
    /// Show the previous month. Default: h/←/p/Page Up
    PreviousMonth,
    /// Show the next month. Default: l/→/n/Page Down
    NextMonth,
    /// Jump back to the month containing today. Default: t
    GoToToday,

    // Selection
    /// Deselect every day. Default: c
    ClearSelection,
    /// Cancel an active drag, or close the help overlay. Default: Esc
    Cancel,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
