//! Day grid for a single month.
//!
//! Pure computation: leading blanks up to the weekday of day 1, then one cell
//! per day in ascending order. Recomputed whenever the displayed month or the
//! week-start convention changes.

use crate::model::{CalendarDate, DayIndex, WeekStart};

/// Columns in the grid (one per weekday).
pub const DAYS_PER_WEEK: usize = 7;

/// One slot of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before day 1.
    Blank,
    /// A real day of the month.
    Day {
        /// Day number, 1..=days in month.
        index: DayIndex,
        /// The full date this cell stands for.
        date: CalendarDate,
    },
}

impl DayCell {
    /// Day index if this is a real day.
    pub fn index(&self) -> Option<DayIndex> {
        match self {
            DayCell::Blank => None,
            DayCell::Day { index, .. } => Some(*index),
        }
    }

    /// Full date if this is a real day.
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            DayCell::Blank => None,
            DayCell::Day { date, .. } => Some(*date),
        }
    }
}

/// Ordered cells of one month's grid.
///
/// Invariant: `cells.len() == leading_blank_count + day_count`, and the first
/// `leading_blank_count` cells are blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLayout {
    month: CalendarDate,
    week_start: WeekStart,
    leading_blank_count: u8,
    day_count: u8,
    cells: Vec<DayCell>,
}

impl MonthLayout {
    /// Compute the grid for the month containing `month`.
    pub fn compute(month: CalendarDate, week_start: WeekStart) -> Self {
        let first = month.first_of_month();
        let leading_blank_count = week_start.weekday_index(first.weekday());
        let day_count = first.days_in_month();

        let blanks = std::iter::repeat(DayCell::Blank).take(usize::from(leading_blank_count));
        let days = (1..=u32::from(day_count)).filter_map(|day| {
            let index = DayIndex::new(day).ok()?;
            let date = first.with_day(index)?;
            Some(DayCell::Day { index, date })
        });

        Self {
            month: first,
            week_start,
            leading_blank_count,
            day_count,
            cells: blanks.chain(days).collect(),
        }
    }

    /// First day of the month this grid shows.
    pub fn month(&self) -> CalendarDate {
        self.month
    }

    /// Week-start convention the grid was computed for.
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Blanks before day 1, in `0..=6`.
    pub fn leading_blank_count(&self) -> u8 {
        self.leading_blank_count
    }

    /// Days in the month (28-31).
    pub fn day_count(&self) -> u8 {
        self.day_count
    }

    /// Every slot in grid order.
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Blanks plus days.
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Grid rows needed to show every cell (4-6).
    pub fn row_count(&self) -> u16 {
        // at most 37 cells, so at most 6 rows
        self.cells.len().div_ceil(DAYS_PER_WEEK) as u16
    }

    /// Cell at grid slot `slot` (`row * 7 + column`).
    pub fn cell_at(&self, slot: usize) -> Option<&DayCell> {
        self.cells.get(slot)
    }

    /// Grid slot of day `index`, if the month has that day.
    pub fn slot_of(&self, index: DayIndex) -> Option<usize> {
        (index.get() <= self.day_count)
            .then(|| usize::from(self.leading_blank_count) + usize::from(index.get()) - 1)
    }
}

/// Compute the day grid for `month` under `week_start`.
pub fn compute_layout(month: CalendarDate, week_start: WeekStart) -> MonthLayout {
    MonthLayout::compute(month, week_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(y: i32, m: u32) -> CalendarDate {
        CalendarDate::new(y, m, 1).expect("valid month")
    }

    fn day(n: u32) -> DayIndex {
        DayIndex::new(n).expect("valid day")
    }

    mod leading_blanks {
        use super::*;

        #[test]
        fn month_starting_on_sunday_has_no_blanks() {
            // 2026-02-01 is a Sunday
            let layout = compute_layout(month(2026, 2), WeekStart::Sunday);
            assert_eq!(layout.leading_blank_count(), 0);
        }

        #[test]
        fn same_month_has_six_blanks_when_week_starts_monday() {
            let layout = compute_layout(month(2026, 2), WeekStart::Monday);
            assert_eq!(layout.leading_blank_count(), 6);
        }

        #[test]
        fn may_2024_starts_on_wednesday() {
            let layout = compute_layout(month(2024, 5), WeekStart::Sunday);
            assert_eq!(layout.leading_blank_count(), 3);
            assert!(layout.cells()[..3].iter().all(|c| *c == DayCell::Blank));
            assert_eq!(layout.cells()[3].index(), Some(day(1)));
        }
    }

    mod day_cells {
        use super::*;

        #[test]
        fn leap_february_has_29_days() {
            let layout = compute_layout(month(2024, 2), WeekStart::Sunday);
            assert_eq!(layout.day_count(), 29);
            assert_eq!(
                layout.total_cells(),
                usize::from(layout.leading_blank_count()) + 29
            );
        }

        #[test]
        fn common_february_has_28_days() {
            let layout = compute_layout(month(2023, 2), WeekStart::Sunday);
            assert_eq!(layout.day_count(), 28);
        }

        #[test]
        fn days_are_ascending_and_dated() {
            let layout = compute_layout(month(2024, 7), WeekStart::Sunday);
            let days: Vec<_> = layout.cells().iter().filter_map(DayCell::date).collect();
            assert_eq!(days.len(), 31);
            for (i, date) in days.iter().enumerate() {
                assert_eq!(date.day() as usize, i + 1);
                assert!(date.same_month(month(2024, 7)));
            }
        }

        #[test]
        fn layout_normalizes_mid_month_input() {
            let mid = CalendarDate::new(2024, 7, 19).expect("valid");
            assert_eq!(compute_layout(mid, WeekStart::Sunday).month(), month(2024, 7));
        }
    }

    mod slots {
        use super::*;

        #[test]
        fn slot_of_accounts_for_blanks() {
            let layout = compute_layout(month(2024, 5), WeekStart::Sunday);
            assert_eq!(layout.slot_of(day(1)), Some(3));
            assert_eq!(layout.slot_of(day(31)), Some(33));
        }

        #[test]
        fn slot_of_missing_day_is_none() {
            let layout = compute_layout(month(2023, 2), WeekStart::Sunday);
            assert_eq!(layout.slot_of(day(30)), None);
            assert_eq!(layout.slot_of(day(29)), None);
        }

        #[test]
        fn cell_at_past_end_is_none() {
            let layout = compute_layout(month(2026, 2), WeekStart::Sunday);
            assert_eq!(layout.cell_at(28), None);
        }
    }

    #[test]
    fn row_count_covers_every_cell() {
        assert_eq!(compute_layout(month(2026, 2), WeekStart::Sunday).row_count(), 4);
        assert_eq!(compute_layout(month(2024, 5), WeekStart::Sunday).row_count(), 5);
        // 2024-03-01 is a Friday: 5 blanks + 31 days = 36 cells
        assert_eq!(compute_layout(month(2024, 3), WeekStart::Sunday).row_count(), 6);
    }
}
