//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod calendar_date;
pub mod day_index;
pub mod error;
pub mod key_action;
pub mod week_start;

// Re-export for convenience
pub use calendar_date::CalendarDate;
pub use day_index::DayIndex;
pub use error::{DateError, InvalidDayIndex, InvalidWeekStart};
pub use key_action::KeyAction;
pub use week_start::WeekStart;
