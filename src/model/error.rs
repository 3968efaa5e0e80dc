//! Error types for dragcal's domain values.
//!
//! Calendar arithmetic, layout and selection are total over valid values, so the
//! only fallible operations are the smart constructors that turn raw numbers or
//! user-typed strings into [`CalendarDate`](super::CalendarDate),
//! [`DayIndex`](super::DayIndex) and [`WeekStart`](super::WeekStart).

use thiserror::Error;

/// Failure to build or parse a [`CalendarDate`](super::CalendarDate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Components do not name a real civil date (e.g. February 30th).
    #[error("Invalid calendar date {year:04}-{month:02}-{day:02}")]
    OutOfRange {
        /// Year component as given.
        year: i32,
        /// Month component as given (expected 1-12).
        month: u32,
        /// Day component as given.
        day: u32,
    },

    /// Text is neither `YYYY-MM` nor `YYYY-MM-DD`.
    #[error("Unrecognized date {0:?}, expected YYYY-MM or YYYY-MM-DD")]
    Unparsable(String),
}

/// A day-of-month number outside `1..=31`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Day index {0} is outside 1..=31")]
pub struct InvalidDayIndex(pub u32);

/// Unknown week-start name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown week start {0:?}, expected \"sunday\" or \"monday\"")]
pub struct InvalidWeekStart(pub String);
