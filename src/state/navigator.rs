//! Displayed-month cursor with previous/next transitions.

use crate::model::CalendarDate;
use tracing::debug;

/// Month-navigation command from the header arrows or the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    /// One month back.
    Previous,
    /// One month forward.
    Next,
}

/// Tracks the currently displayed year-month.
///
/// Invariant: `cursor.day() == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthNavigator {
    cursor: CalendarDate,
}

impl MonthNavigator {
    /// Start at the month containing `date`.
    pub fn new(date: CalendarDate) -> Self {
        Self {
            cursor: date.first_of_month(),
        }
    }

    /// First day of the displayed month.
    pub fn cursor(&self) -> CalendarDate {
        self.cursor
    }

    /// Advance one month.
    pub fn next(&mut self) -> CalendarDate {
        self.shift(1)
    }

    /// Go back one month.
    pub fn previous(&mut self) -> CalendarDate {
        self.shift(-1)
    }

    /// Move one month in the direction of `command`.
    pub fn apply(&mut self, command: NavigationCommand) -> CalendarDate {
        match command {
            NavigationCommand::Previous => self.previous(),
            NavigationCommand::Next => self.next(),
        }
    }

    /// Show the month containing `date`.
    pub fn jump_to(&mut self, date: CalendarDate) -> CalendarDate {
        self.cursor = date.first_of_month();
        debug!(cursor = %self.cursor, "Jumped to month");
        self.cursor
    }

    fn shift(&mut self, months: i32) -> CalendarDate {
        self.cursor = self.cursor.add_months(months).first_of_month();
        debug!(cursor = %self.cursor, months, "Navigated month");
        self.cursor
    }
}
