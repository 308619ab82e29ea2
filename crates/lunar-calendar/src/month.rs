//! `LunarMonth` — a regular month or the leap occurrence of a month.

use std::cmp::Ordering;

use lunar_core::errors::Result;
use lunar_core::{ensure, MonthNumber};

/// Month of a lunar year.
///
/// A leap month repeats the number of the regular month it follows, so the
/// two are distinguished by variant rather than by number.  Ordering follows
/// the calendar: `Regular(n) < Leap(n) < Regular(n + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LunarMonth {
    /// A regular month, 1–12.
    Regular(MonthNumber),
    /// The leap month inserted after regular month `n`, 1–12.
    Leap(MonthNumber),
}

impl LunarMonth {
    /// Construct a regular month, checking `n` is in 1–12.
    pub fn regular(n: MonthNumber) -> Result<Self> {
        ensure!((1..=12).contains(&n), "lunar month {n} not in 1..=12");
        Ok(LunarMonth::Regular(n))
    }

    /// Construct a leap month, checking `n` is in 1–12.
    pub fn leap(n: MonthNumber) -> Result<Self> {
        ensure!((1..=12).contains(&n), "lunar leap month {n} not in 1..=12");
        Ok(LunarMonth::Leap(n))
    }

    /// Return the month number, whether regular or leap.
    pub fn number(&self) -> MonthNumber {
        match *self {
            LunarMonth::Regular(n) | LunarMonth::Leap(n) => n,
        }
    }

    /// `true` for the leap occurrence of a month.
    pub fn is_leap(&self) -> bool {
        matches!(self, LunarMonth::Leap(_))
    }

    /// Traditional name of the month, e.g. `"正月"` or `"闰二月"`.
    pub fn name(&self) -> String {
        crate::fmt::month(*self)
    }

    fn sort_key(&self) -> (MonthNumber, bool) {
        (self.number(), self.is_leap())
    }
}

impl PartialOrd for LunarMonth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LunarMonth {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl std::fmt::Display for LunarMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}
