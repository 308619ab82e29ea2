//! `LunarDate` — the result of a solar → lunar conversion.

use lunar_core::{Day, MonthNumber, Year};

use crate::festival::{festival, Festival};
use crate::month::LunarMonth;

/// A date in the Chinese lunisolar calendar.
///
/// `leap_month_of_year` describes the *year*: it is the regular month that
/// the year's leap month follows (0 if none), whether or not this date lies
/// in the leap month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    year: Year,
    month: LunarMonth,
    day: Day,
    leap_month_of_year: MonthNumber,
}

impl LunarDate {
    pub(crate) fn new(
        year: Year,
        month: LunarMonth,
        day: Day,
        leap_month_of_year: MonthNumber,
    ) -> Self {
        debug_assert!((1..=30).contains(&day), "lunar day {day}");
        debug_assert!(leap_month_of_year <= 12);
        Self {
            year,
            month,
            day,
            leap_month_of_year,
        }
    }

    /// Lunar year (1969–2100).
    pub fn year(&self) -> Year {
        self.year
    }

    /// Lunar month, regular or leap.
    pub fn month(&self) -> LunarMonth {
        self.month
    }

    /// Day of the lunar month (1–30).
    pub fn day(&self) -> Day {
        self.day
    }

    /// The regular month followed by this year's leap month, or 0.
    pub fn leap_month_of_year(&self) -> MonthNumber {
        self.leap_month_of_year
    }

    /// `true` if this date lies in the year's leap month.
    pub fn is_leap_month(&self) -> bool {
        self.month.is_leap()
    }

    /// Traditional month name, e.g. `"闰二月"`.
    pub fn month_name(&self) -> String {
        crate::fmt::month(self.month)
    }

    /// Traditional day name, e.g. `"初一"`.
    pub fn day_name(&self) -> String {
        crate::fmt::day(self.day)
    }

    /// The festival falling on this date, if any.
    pub fn festival(&self) -> Option<Festival> {
        festival(self.year, self.month, self.day)
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}年{}{}", self.year, self.month_name(), self.day_name())
    }
}
