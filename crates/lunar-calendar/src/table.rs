//! `LunarTable` — the encoded per-year lunar data and the conversion epoch.
//!
//! Each lunar year from 1969 to 2100 is packed into one integer:
//!
//! | bits   | meaning                                                         |
//! |--------|-----------------------------------------------------------------|
//! | 0–3    | leap month number (0 or 15 = none, 1–12 = leap after that month) |
//! | 4–15   | month sizes, month 1 at bit 15 … month 12 at bit 4 (1 = 30 days) |
//! | 16     | leap month size (1 = 30 days), only meaningful with a leap month |
//!
//! Year 1969 is a truncated stub: only the tail of its eleventh month and
//! its twelfth month are modelled, enough to reach the epoch.

use lunar_core::errors::Result;
use lunar_core::{fail, Day, MonthNumber, Year};
use lunar_time::SolarDate;

/// First tabulated lunar year (truncated).
pub const MIN_YEAR: Year = 1969;

/// Last tabulated lunar year.
pub const MAX_YEAR: Year = 2100;

/// Lunar month containing the epoch day.
pub const EPOCH_MONTH: MonthNumber = 11;

/// Lunar day of the epoch day.
pub const EPOCH_DAY: Day = 24;

/// Days of lunar 1969 modelled by the table.
pub const EPOCH_YEAR_DAYS: u32 = 35;

/// Days of the eleventh month of 1969 modelled by the table.
pub const EPOCH_MONTH_DAYS: u32 = 6;

/// First convertible solar date: 1970-01-01, lunar 1969-11-24.
pub const MIN_DATE: SolarDate = SolarDate::from_ymd_const(1970, 1, 1);

/// Last convertible solar date: 2100-12-31, lunar 2100-12-01.
pub const MAX_DATE: SolarDate = SolarDate::from_ymd_const(2100, 12, 31);

#[rustfmt::skip]
const LUNAR_INFO: [u32; (MAX_YEAR - MIN_YEAR + 1) as usize] = [
    0x00020, // 1969
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970-1979
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980-1989
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990-1999
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000-2009
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010-2019
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020-2029
    0x05aa0, 0x076a3, 0x096d0, 0x026fb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030-2039
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040-2049
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06aa0, 0x1a6c4, 0x0aae0, // 2050-2059
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060-2069
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070-2079
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080-2089
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090-2099
    0x0d520, // 2100
];

/// Read-only access to an encoded lunar table.
///
/// The decoding functions in [`crate::decoder`] work against this type, so a
/// table other than [`LunarTable::STANDARD`] can be substituted in tests.
#[derive(Debug, Clone, Copy)]
pub struct LunarTable {
    first_year: Year,
    entries: &'static [u32],
}

impl LunarTable {
    /// The built-in table covering lunar 1969–2100.
    pub const STANDARD: LunarTable = LunarTable {
        first_year: MIN_YEAR,
        entries: &LUNAR_INFO,
    };

    /// Build a table whose first entry describes `first_year`.
    pub const fn new(first_year: Year, entries: &'static [u32]) -> Self {
        Self {
            first_year,
            entries,
        }
    }

    /// First lunar year described by the table.
    pub fn first_year(&self) -> Year {
        self.first_year
    }

    /// Last lunar year described by the table.
    pub fn last_year(&self) -> Year {
        self.first_year + self.entries.len() as Year - 1
    }

    /// Return `true` if the table has an entry for `year`.
    pub fn contains(&self, year: Year) -> bool {
        (self.first_year..=self.last_year()).contains(&year)
    }

    /// Return the encoded entry for `year`.
    pub fn entry(&self, year: Year) -> Result<u32> {
        if !self.contains(year) {
            fail!(
                "lunar year {year} not tabulated [{}, {}]",
                self.first_year,
                self.last_year()
            );
        }
        Ok(self.entries[(year - self.first_year) as usize])
    }
}

impl Default for LunarTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
