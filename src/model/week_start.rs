//! Week-start convention: which weekday occupies the grid's first column.

use super::error::InvalidWeekStart;
use chrono::Weekday;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Which weekday the calendar grid starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Sunday in column 0, Saturday in column 6.
    #[default]
    Sunday,
    /// Monday in column 0, Sunday in column 6.
    Monday,
}

impl WeekStart {
    /// Column (0-6) that `weekday` occupies under this convention.
    pub fn weekday_index(self, weekday: Weekday) -> u8 {
        let offset = match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        };
        // num_days_from_* is always 0..=6
        offset as u8
    }

    /// Column headers, left to right.
    pub fn weekday_labels(self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
            WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        }
    }

    /// Lowercase name, as written in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            WeekStart::Sunday => "sunday",
            WeekStart::Monday => "monday",
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekStart {
    type Err = InvalidWeekStart;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            _ => Err(InvalidWeekStart(s.to_string())),
        }
    }
}
