//! Tests for grid and header hit-testing.

use super::*;
use crate::model::{CalendarDate, WeekStart};
use crate::view_state::month_layout::compute_layout;

// ===== Test Helpers =====

fn day(n: u32) -> DayIndex {
    DayIndex::new(n).expect("valid day")
}

/// February 2026 starts on Sunday: 28 days in exactly 4 rows, no blanks.
fn february_2026() -> MonthLayout {
    compute_layout(
        CalendarDate::new(2026, 2, 1).expect("valid"),
        WeekStart::Sunday,
    )
}

/// May 2024 starts on Wednesday: 3 blanks, 5 rows.
fn may_2024() -> MonthLayout {
    compute_layout(
        CalendarDate::new(2024, 5, 1).expect("valid"),
        WeekStart::Sunday,
    )
}

fn at(x: u16, y: u16) -> Position {
    Position::new(x, y)
}

mod grid_geometry {
    use super::*;

    #[test]
    fn cells_split_area_evenly() {
        let geometry = GridGeometry::new(Rect::new(0, 0, 28, 8), &february_2026(), 0);
        assert_eq!(geometry.cell_width(), 4);
        assert_eq!(geometry.cell_height(), 2);
        assert_eq!(geometry.visible_rows(), 4);
        assert_eq!(geometry.max_scroll(), 0);
    }

    #[test]
    fn cell_height_is_capped() {
        let geometry = GridGeometry::new(Rect::new(0, 0, 28, 40), &february_2026(), 0);
        assert_eq!(geometry.cell_height(), MAX_CELL_HEIGHT);
    }

    #[test]
    fn short_area_allows_scrolling() {
        let geometry = GridGeometry::new(Rect::new(0, 0, 28, 3), &may_2024(), 0);
        assert_eq!(geometry.cell_height(), 1);
        assert_eq!(geometry.visible_rows(), 3);
        assert_eq!(geometry.max_scroll(), 2);
    }

    #[test]
    fn scroll_offset_is_clamped() {
        let geometry = GridGeometry::new(Rect::new(0, 0, 28, 3), &may_2024(), 10);
        assert_eq!(geometry.scroll_rows(), 2);
    }

    #[test]
    fn cell_rect_is_offset_by_area_origin() {
        let geometry = GridGeometry::new(Rect::new(2, 5, 28, 4), &february_2026(), 0);
        assert_eq!(geometry.cell_rect(8), Some(Rect::new(6, 6, 4, 1)));
    }

    #[test]
    fn cell_rect_hidden_when_scrolled_away() {
        let geometry = GridGeometry::new(Rect::new(0, 0, 28, 3), &may_2024(), 1);
        assert_eq!(geometry.cell_rect(0), None);
        assert_eq!(geometry.cell_rect(7), Some(Rect::new(0, 0, 4, 1)));
    }

    #[test]
    fn cell_rect_past_last_slot_is_none() {
        let geometry = GridGeometry::new(Rect::new(0, 0, 28, 4), &february_2026(), 0);
        assert_eq!(geometry.cell_rect(28), None);
    }
}

mod hit_testing {
    use super::*;

    #[test]
    fn hits_first_and_last_day() {
        let geometry = GridGeometry::new(Rect::new(0, 0, 28, 4), &february_2026(), 0);
        assert_eq!(geometry.hit_test(at(0, 0)), Some(day(1)));
        assert_eq!(geometry.hit_test(at(27, 3)), Some(day(28)));
    }

    #[test]
    fn every_column_of_a_cell_hits_same_day() {
        let geometry = GridGeometry::new(Rect::new(0, 0, 28, 4), &february_2026(), 0);
        for x in 4..8 {
            assert_eq!(geometry.hit_test(at(x, 1)), Some(day(9)));
        }
    }

    #[test]
    fn blank_cells_miss() {
        let geometry = GridGeometry::new(Rect::new(0, 0, 28, 5), &may_2024(), 0);
        assert_eq!(geometry.hit_test(at(0, 0)), None);
        assert_eq!(geometry.hit_test(at(12, 0)), Some(day(1)));
    }

    #[test]
    fn trailing_slots_after_last_day_miss() {
        let geometry = GridGeometry::new(Rect::new(0, 0, 28, 5), &may_2024(), 0);
        // slot 34 (row 4, col 6) is past May 31st
        assert_eq!(geometry.hit_test(at(24, 4)), None);
    }

    #[test]
    fn points_outside_area_miss() {
        let geometry = GridGeometry::new(Rect::new(10, 10, 28, 4), &february_2026(), 0);
        assert_eq!(geometry.hit_test(at(9, 10)), None);
        assert_eq!(geometry.hit_test(at(10, 9)), None);
        assert_eq!(geometry.hit_test(at(38, 10)), None);
        assert_eq!(geometry.hit_test(at(10, 14)), None);
    }

    #[test]
    fn leftover_columns_right_of_grid_miss() {
        // 30 columns: 7 cells of 4 plus 2 spare columns
        let geometry = GridGeometry::new(Rect::new(0, 0, 30, 4), &february_2026(), 0);
        assert_eq!(geometry.hit_test(at(28, 0)), None);
    }

    #[test]
    fn leftover_rows_below_grid_miss() {
        // 9 rows for 4 grid rows of height 2 leaves one spare row
        let geometry = GridGeometry::new(Rect::new(0, 0, 28, 9), &february_2026(), 0);
        assert_eq!(geometry.hit_test(at(0, 8)), None);
    }

    #[test]
    fn hit_accounts_for_scroll_offset() {
        let geometry = GridGeometry::new(Rect::new(0, 0, 28, 3), &may_2024(), 2);
        // top visible row is grid row 2: May 12..18
        assert_eq!(geometry.hit_test(at(0, 0)), Some(day(12)));
    }

    #[test]
    fn closures_are_hit_testers() {
        let fixed = |_: Position| Some(day(4));
        assert_eq!(fixed.hit_test(at(99, 99)), Some(day(4)));
    }
}

mod header_geometry {
    use super::*;

    #[test]
    fn arrows_map_to_navigation() {
        let header = HeaderGeometry::new(Rect::new(20, 0, 2, 1), Rect::new(23, 0, 2, 1));
        assert_eq!(header.command_at(at(20, 0)), Some(NavigationCommand::Previous));
        assert_eq!(header.command_at(at(24, 0)), Some(NavigationCommand::Next));
        assert_eq!(header.command_at(at(22, 0)), None);
        assert_eq!(header.command_at(at(0, 0)), None);
    }
}
