//! Day-of-month identifier used by the selection engine.

use super::error::InvalidDayIndex;
use std::fmt;

/// Day number within the currently displayed month.
///
/// Always in `1..=31`. Whether it exists in a particular month (e.g. 30 in
/// February) is checked by the consumer against that month's day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayIndex(u8);

impl DayIndex {
    /// Smallest valid index.
    pub const MIN: u8 = 1;
    /// Largest valid index.
    pub const MAX: u8 = 31;

    /// Smart constructor: rejects values outside `1..=31`.
    pub fn new(raw: u32) -> Result<Self, InvalidDayIndex> {
        match u8::try_from(raw) {
            Ok(day) if (Self::MIN..=Self::MAX).contains(&day) => Ok(Self(day)),
            _ => Err(InvalidDayIndex(raw)),
        }
    }

    /// The day number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Every index in the closed span between `a` and `b`, ascending,
    /// whichever of the two is larger.
    pub fn range_inclusive(a: DayIndex, b: DayIndex) -> impl Iterator<Item = DayIndex> {
        let (lo, hi) = if a <= b { (a.0, b.0) } else { (b.0, a.0) };
        (lo..=hi).map(DayIndex)
    }
}

impl fmt::Display for DayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
