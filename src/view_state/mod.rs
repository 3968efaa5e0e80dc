//! Derived, render-ready calendar layout (pure).
//!
//! `MonthLayout` turns a month into ordered grid cells; `GridGeometry` places
//! those cells on screen and answers hit-tests against them.

pub mod month_layout;

pub use hit_test::{GridGeometry, HeaderGeometry, HitTester, MAX_CELL_HEIGHT};
pub use month_layout::{compute_layout, DayCell, MonthLayout, DAYS_PER_WEEK};
