//! Multi-day selection engine.
//!
//! Owns the selected day indices of the displayed month and the drag anchor.
//! Gesture events arrive one at a time on the UI thread; every transition is
//! synchronous and reports whether observable state changed so the shell knows
//! when to redraw.
//!
//! # State Machine
//!
//! - `Idle` --Tap(k)--> `Idle` (toggle k)
//! - `Idle` --DragStart on unselected k--> `Dragging { anchor: k, current: k }`
//! - `Idle` --DragStart on selected k, or on a miss--> `Idle`
//! - `Dragging` --DragMove onto k != current--> `Dragging { anchor, current: k }`
//! - `Dragging` --DragEnd | DragCancel--> `Idle` (selection kept)
//!
//! While dragging, the selection always covers `[anchor, current]`. Each move
//! removes the previous span before adding the new one, so a day selected
//! before the drag is deselected once the drag has swept over it and moved
//! away again. Days the drag never covered keep their state.

use crate::model::DayIndex;
use crate::view_state::HitTester;
use ratatui::layout::Position;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Selected day indices, ordered for deterministic rendering.
pub type SelectionSet = BTreeSet<DayIndex>;

/// Drag gesture progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag began on `anchor` and is currently over `current`.
    Dragging {
        /// Day the drag started on.
        anchor: DayIndex,
        /// Day currently under the pointer.
        current: DayIndex,
    },
}

/// Input to the selection engine, produced by the gesture layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// Single tap on a day. Never emitted while a drag is in progress.
    Tap(DayIndex),
    /// Press-and-drag began at this point.
    DragStart(Position),
    /// Pointer moved to this point during a drag.
    DragMove(Position),
    /// Pointer released.
    DragEnd,
    /// Gesture aborted (Esc, focus loss, month change).
    DragCancel,
}

/// Whether a transition changed the selection or the drag state.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The selection or the drag state changed; redraw.
    Changed,
    /// Nothing observable changed.
    Unchanged,
}

impl SelectionOutcome {
    /// Whether the transition changed anything.
    pub fn is_changed(self) -> bool {
        self == SelectionOutcome::Changed
    }

    /// `Changed` if either outcome is.
    pub fn or(self, other: SelectionOutcome) -> SelectionOutcome {
        if self.is_changed() || other.is_changed() {
            SelectionOutcome::Changed
        } else {
            SelectionOutcome::Unchanged
        }
    }
}

/// Selection state for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEngine {
    selection: SelectionSet,
    drag: DragState,
    /// Days in the displayed month; larger indices are rejected.
    day_count: u8,
    revision: u64,
}

impl SelectionEngine {
    /// Empty selection for a month with `day_count` days.
    pub fn new(day_count: u8) -> Self {
        Self {
            selection: SelectionSet::new(),
            drag: DragState::Idle,
            day_count,
            revision: 0,
        }
    }

    /// Selected days of the displayed month.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Current drag progress.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Whether `index` is selected.
    pub fn is_selected(&self, index: DayIndex) -> bool {
        self.selection.contains(&index)
    }

    /// True while anything is selected. Computed from the set, never cached.
    pub fn in_selection_mode(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Days in the displayed month.
    pub fn day_count(&self) -> u8 {
        self.day_count
    }

    /// Bumped on every `Changed` transition.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Dispatch a gesture event, resolving points through `hit_tester`.
    pub fn handle(
        &mut self,
        event: GestureEvent,
        hit_tester: &impl HitTester,
    ) -> SelectionOutcome {
        match event {
            GestureEvent::Tap(index) => self.tap(index),
            GestureEvent::DragStart(point) => self.drag_start(hit_tester.hit_test(point)),
            GestureEvent::DragMove(point) => self.drag_move(hit_tester.hit_test(point)),
            GestureEvent::DragEnd => self.drag_end(),
            GestureEvent::DragCancel => self.drag_cancel(),
        }
    }

    /// Toggle `index`.
    ///
    /// Precondition: no drag in progress (the gesture layer suppresses taps
    /// during drags). A tap that arrives anyway is ignored.
    pub fn tap(&mut self, index: DayIndex) -> SelectionOutcome {
        if self.is_dragging() {
            debug!(%index, "Ignoring tap during drag");
            return SelectionOutcome::Unchanged;
        }
        if !self.accepts(index) {
            return SelectionOutcome::Unchanged;
        }

        if !self.selection.remove(&index) {
            self.selection.insert(index);
        }
        debug!(%index, selected = self.is_selected(index), "Tap toggled day");
        self.changed()
    }

    /// Begin a drag on the day under the pointer.
    ///
    /// Starts only on an unselected day; a miss or an already-selected day
    /// leaves the engine idle.
    pub fn drag_start(&mut self, hit: Option<DayIndex>) -> SelectionOutcome {
        if self.is_dragging() {
            debug!("Drag already in progress, ignoring drag start");
            return SelectionOutcome::Unchanged;
        }
        let Some(index) = hit else {
            debug!("Drag started outside any day");
            return SelectionOutcome::Unchanged;
        };
        if !self.accepts(index) || self.is_selected(index) {
            debug!(%index, "Drag start on unavailable or selected day, staying idle");
            return SelectionOutcome::Unchanged;
        }

        self.selection.insert(index);
        self.drag = DragState::Dragging {
            anchor: index,
            current: index,
        };
        debug!(anchor = %index, "Drag started");
        self.changed()
    }

    /// Extend the drag to the day under the pointer.
    ///
    /// Removes the previous `[anchor, current]` span and adds
    /// `[anchor, new]`, so reversing direction past the anchor leaves nothing
    /// stale behind.
    pub fn drag_move(&mut self, hit: Option<DayIndex>) -> SelectionOutcome {
        let DragState::Dragging { anchor, current } = self.drag else {
            return SelectionOutcome::Unchanged;
        };
        let Some(target) = hit else {
            return SelectionOutcome::Unchanged;
        };
        if target == current || !self.accepts(target) {
            return SelectionOutcome::Unchanged;
        }

        for index in DayIndex::range_inclusive(anchor, current) {
            self.selection.remove(&index);
        }
        self.selection
            .extend(DayIndex::range_inclusive(anchor, target));
        self.drag = DragState::Dragging {
            anchor,
            current: target,
        };
        debug!(%anchor, %target, "Drag moved");
        self.changed()
    }

    /// Finish the drag, keeping the selected span.
    pub fn drag_end(&mut self) -> SelectionOutcome {
        self.finish_drag("Drag ended")
    }

    /// Abort the drag. The span selected so far is kept, same as `drag_end`.
    pub fn drag_cancel(&mut self) -> SelectionOutcome {
        self.finish_drag("Drag cancelled")
    }

    /// Deselect everything and drop any drag.
    pub fn clear(&mut self) -> SelectionOutcome {
        if self.selection.is_empty() && !self.is_dragging() {
            return SelectionOutcome::Unchanged;
        }
        self.selection.clear();
        self.drag = DragState::Idle;
        debug!("Selection cleared");
        self.changed()
    }

    /// Switch to another month: install its `selection` and day count, and
    /// hand back the selection of the month being left.
    ///
    /// An active drag is cancelled first; indices above `day_count` are
    /// dropped from the incoming set.
    pub fn replace_month(&mut self, day_count: u8, mut selection: SelectionSet) -> SelectionSet {
        if self.drag_cancel().is_changed() {
            debug!("Drag cancelled by month change");
        }
        selection.retain(|index| index.get() <= day_count);
        self.day_count = day_count;
        self.revision += 1;
        std::mem::replace(&mut self.selection, selection)
    }

    fn finish_drag(&mut self, message: &str) -> SelectionOutcome {
        if !self.is_dragging() {
            return SelectionOutcome::Unchanged;
        }
        self.drag = DragState::Idle;
        debug!(selected = self.selection.len(), "{message}");
        self.changed()
    }

    /// Whether `index` exists in the displayed month.
    fn accepts(&self, index: DayIndex) -> bool {
        let ok = index.get() <= self.day_count;
        if !ok {
            warn!(%index, day_count = self.day_count, "Rejecting day outside displayed month");
        }
        ok
    }

    fn changed(&mut self) -> SelectionOutcome {
        self.revision += 1;
        SelectionOutcome::Changed
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
