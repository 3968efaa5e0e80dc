//! Mouse gesture recognition.
//!
//! Terminals report left-button `Down`, `Drag` and `Up` events rather than
//! taps and long-presses. `GestureRecognizer` folds that raw stream into the
//! [`GestureEvent`]s the selection engine consumes:
//!
//! - `Down` remembers the press point and emits nothing.
//! - The first `Drag` after a press emits `DragStart(press)` then `DragMove(now)`;
//!   later drags emit `DragMove(now)`.
//! - `Up` emits `DragEnd` after a drag, otherwise `Tap(day)` when press and
//!   release land on the same day.

use super::selection::GestureEvent;
use crate::view_state::HitTester;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tracing::trace;

/// Pointer gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Released,
    Pressed(Position),
    Dragging,
}

/// Turns raw mouse events into tap and drag gestures.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    phase: Phase,
}

impl GestureRecognizer {
    /// Recognizer with no gesture in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag has been recognized and not yet released.
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Feed one mouse event. Taps are resolved through `hit_tester`; drag
    /// points are passed through unresolved.
    pub fn on_mouse(&mut self, mouse: MouseEvent, hit_tester: &impl HitTester) -> Vec<GestureEvent> {
        let point = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // A press while dragging means the release was lost; close the old drag.
                let pending = self.abort();
                self.phase = Phase::Pressed(point);
                pending.into_iter().collect()
            }
            MouseEventKind::Drag(MouseButton::Left) => match self.phase {
                Phase::Pressed(press) => {
                    trace!(?press, ?point, "Drag recognized");
                    self.phase = Phase::Dragging;
                    vec![GestureEvent::DragStart(press), GestureEvent::DragMove(point)]
                }
                Phase::Dragging => vec![GestureEvent::DragMove(point)],
                // drag that began outside the terminal
                Phase::Released => Vec::new(),
            },
            MouseEventKind::Up(MouseButton::Left) => {
                match std::mem::take(&mut self.phase) {
                    Phase::Dragging => vec![GestureEvent::DragEnd],
                    Phase::Pressed(press) => {
                        match (hit_tester.hit_test(press), hit_tester.hit_test(point)) {
                            (Some(pressed), Some(released)) if pressed == released => {
                                vec![GestureEvent::Tap(pressed)]
                            }
                            _ => Vec::new(),
                        }
                    }
                    Phase::Released => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    /// Abandon the current gesture (Esc, focus loss, month change).
    ///
    /// Returns `DragCancel` if a drag was in progress.
    pub fn abort(&mut self) -> Option<GestureEvent> {
        match std::mem::take(&mut self.phase) {
            Phase::Dragging => Some(GestureEvent::DragCancel),
            Phase::Pressed(_) | Phase::Released => None,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
