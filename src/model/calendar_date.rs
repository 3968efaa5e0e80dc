//! Civil calendar date value and the month arithmetic the calendar needs.

use super::day_index::DayIndex;
use super::error::DateError;
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;

/// An immutable, always-valid (year, month, day) civil date.
///
/// Thin wrapper over [`chrono::NaiveDate`]; every derived operation returns a
/// new value and has no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Smart constructor: rejects components that do not form a real date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::OutOfRange { year, month, day })
    }

    /// Today's date in the local time zone.
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Calendar year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month number, 1-12.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of month, 1-31.
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Day of the week.
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// The first day of this date's month.
    pub fn first_of_month(self) -> Self {
        Self(self.0 - Days::new(u64::from(self.0.day0())))
    }

    /// Shift by `months` (negative goes back), clamping the day to the
    /// target month's length. Saturates at chrono's representable range.
    pub fn add_months(self, months: i32) -> Self {
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        Self(shifted.unwrap_or(self.0))
    }

    /// Number of days in this date's month (28-31).
    pub fn days_in_month(self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// The date with the same year and month at day `index`, or `None` if the
    /// month is shorter than `index`.
    pub fn with_day(self, index: DayIndex) -> Option<Self> {
        self.0.with_day(u32::from(index.get())).map(Self)
    }

    /// Whether both dates fall in the same year and month.
    pub fn same_month(self, other: Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Header title, `YYYY-MM`.
    pub fn year_month_label(self) -> String {
        self.0.format("%Y-%m").to_string()
    }

    /// The underlying chrono date.
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Accepts `YYYY-MM-DD` or `YYYY-MM` (which resolves to day 1).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self(date));
        }
        NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DateError::Unparsable(s.to_string()))
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in `month` of `year`. Months outside 1-12 yield 0.
pub fn days_in_month(year: i32, month: u32) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).expect("valid date")
    }

    mod construction {
        use super::*;

        #[test]
        fn accepts_leap_day_in_leap_year() {
            assert!(CalendarDate::new(2024, 2, 29).is_ok());
        }

        #[test]
        fn rejects_leap_day_in_common_year() {
            assert_eq!(
                CalendarDate::new(2023, 2, 29),
                Err(DateError::OutOfRange {
                    year: 2023,
                    month: 2,
                    day: 29
                })
            );
        }

        #[test]
        fn rejects_month_thirteen() {
            assert!(CalendarDate::new(2024, 13, 1).is_err());
        }
    }

    mod month_arithmetic {
        use super::*;

        #[test]
        fn first_of_month_resets_day() {
            assert_eq!(date(2024, 5, 31).first_of_month(), date(2024, 5, 1));
            assert_eq!(date(2024, 5, 1).first_of_month(), date(2024, 5, 1));
        }

        #[test]
        fn add_months_crosses_year_boundary() {
            assert_eq!(date(2024, 12, 1).add_months(1), date(2025, 1, 1));
            assert_eq!(date(2025, 1, 1).add_months(-1), date(2024, 12, 1));
        }

        #[test]
        fn add_months_clamps_to_shorter_month() {
            assert_eq!(date(2024, 1, 31).add_months(1), date(2024, 2, 29));
            assert_eq!(date(2023, 3, 31).add_months(-1), date(2023, 2, 28));
        }

        #[test]
        fn add_zero_months_is_identity() {
            assert_eq!(date(2024, 7, 15).add_months(0), date(2024, 7, 15));
        }
    }

    mod days_in_month {
        use super::*;

        #[test]
        fn february_follows_leap_rule() {
            assert_eq!(date(2024, 2, 1).days_in_month(), 29);
            assert_eq!(date(2023, 2, 1).days_in_month(), 28);
            assert_eq!(date(1900, 2, 1).days_in_month(), 28);
            assert_eq!(date(2000, 2, 1).days_in_month(), 29);
        }

        #[test]
        fn thirty_and_thirty_one_day_months() {
            assert_eq!(date(2024, 4, 1).days_in_month(), 30);
            assert_eq!(date(2024, 12, 1).days_in_month(), 31);
        }

        #[test]
        fn invalid_month_has_no_days() {
            assert_eq!(super::super::days_in_month(2024, 0), 0);
        }
    }

    #[test]
    fn with_day_respects_month_length() {
        let feb = date(2023, 2, 1);
        let d28 = DayIndex::new(28).expect("valid");
        let d30 = DayIndex::new(30).expect("valid");
        assert_eq!(feb.with_day(d28), Some(date(2023, 2, 28)));
        assert_eq!(feb.with_day(d30), None);
    }

    #[test]
    fn weekday_of_known_date() {
        assert_eq!(date(2024, 5, 1).weekday(), Weekday::Wed);
    }

    #[test]
    fn same_month_ignores_day() {
        assert!(date(2024, 5, 1).same_month(date(2024, 5, 31)));
        assert!(!date(2024, 5, 1).same_month(date(2023, 5, 1)));
    }

    mod formatting {
        use super::*;

        #[test]
        fn display_is_iso() {
            assert_eq!(date(2024, 3, 9).to_string(), "2024-03-09");
        }

        #[test]
        fn year_month_label() {
            assert_eq!(date(2024, 3, 9).year_month_label(), "2024-03");
        }

        #[test]
        fn parses_full_date() {
            assert_eq!("2024-03-09".parse::<CalendarDate>(), Ok(date(2024, 3, 9)));
        }

        #[test]
        fn parses_year_month_as_first_day() {
            assert_eq!("2024-03".parse::<CalendarDate>(), Ok(date(2024, 3, 1)));
        }

        #[test]
        fn rejects_garbage() {
            assert_eq!(
                "march".parse::<CalendarDate>(),
                Err(DateError::Unparsable("march".to_string()))
            );
        }
    }
}
