//! `YearDecoder` — derives month lengths and leap-month placement from the
//! encoded entries of a [`LunarTable`].
//!
//! All functions are pure; the only failure modes are an untabulated year
//! ([`Error::OutOfRange`]) and a malformed entry ([`Error::DataCorruption`]).

use lunar_core::errors::{Error, Result};
use lunar_core::{ensure, MonthNumber, Year};
use tracing::error;

use crate::table::{LunarTable, EPOCH_MONTH, EPOCH_MONTH_DAYS, EPOCH_YEAR_DAYS, MIN_YEAR};

/// Days in a small (29-day) month.
pub const SMALL_MONTH_DAYS: u32 = 29;

/// Days in a big (30-day) month.
pub const BIG_MONTH_DAYS: u32 = 30;

const LEAP_MONTH_MASK: u32 = 0xf;
const NO_LEAP_SENTINEL: u32 = 0xf;
const LEAP_SIZE_BIT: u32 = 0x1_0000;

/// Decodes month and year lengths from a lunar table.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearDecoder {
    table: LunarTable,
}

impl YearDecoder {
    /// Decoder over the built-in table.
    pub const STANDARD: YearDecoder = YearDecoder {
        table: LunarTable::STANDARD,
    };

    /// Decoder over an arbitrary table.
    pub const fn new(table: LunarTable) -> Self {
        Self { table }
    }

    /// The table being decoded.
    pub fn table(&self) -> &LunarTable {
        &self.table
    }

    /// Which regular month of `year` is followed by a leap month, or 0 if
    /// the year has none.
    ///
    /// A nibble of 15 is a "no leap month" sentinel.  Any other value above
    /// 12 means the table entry is corrupt.
    pub fn leap_month(&self, year: Year) -> Result<MonthNumber> {
        let bits = self.table.entry(year)?;
        let raw = match bits & LEAP_MONTH_MASK {
            NO_LEAP_SENTINEL => 0,
            n => n,
        };
        if raw > 12 {
            error!(year, bits, "leap month nibble {raw} exceeds 12");
            return Err(Error::DataCorruption { year, bits });
        }
        Ok(raw as MonthNumber)
    }

    /// Days in the leap month of `year`: 0 without a leap month, else 29 or 30.
    pub fn leap_month_days(&self, year: Year) -> Result<u32> {
        if self.leap_month(year)? == 0 {
            return Ok(0);
        }
        let bits = self.table.entry(year)?;
        Ok(if bits & LEAP_SIZE_BIT != 0 {
            BIG_MONTH_DAYS
        } else {
            SMALL_MONTH_DAYS
        })
    }

    /// Days in the regular (non-leap) `month` of `year`.
    ///
    /// The eleventh month of 1969 reports only the days modelled before the
    /// epoch window closes.
    pub fn month_days(&self, year: Year, month: MonthNumber) -> Result<u32> {
        ensure!((1..=12).contains(&month), "month {month} not in 1..=12");
        if year == MIN_YEAR && month == EPOCH_MONTH {
            return Ok(EPOCH_MONTH_DAYS);
        }
        let bits = self.table.entry(year)?;
        Ok(if bits & (LEAP_SIZE_BIT >> month) != 0 {
            BIG_MONTH_DAYS
        } else {
            SMALL_MONTH_DAYS
        })
    }

    /// Total days in lunar `year`, leap month included.
    pub fn year_days(&self, year: Year) -> Result<u32> {
        if year == MIN_YEAR {
            return Ok(EPOCH_YEAR_DAYS);
        }
        let bits = self.table.entry(year)?;
        let big_months = (bits & 0xfff0).count_ones();
        Ok(12 * SMALL_MONTH_DAYS + big_months + self.leap_month_days(year)?)
    }
}

// ── Convenience functions over the built-in table ────────────────────────────

/// [`YearDecoder::leap_month`] over the built-in table.
pub fn leap_month(year: Year) -> Result<MonthNumber> {
    YearDecoder::STANDARD.leap_month(year)
}

/// [`YearDecoder::leap_month_days`] over the built-in table.
pub fn leap_month_days(year: Year) -> Result<u32> {
    YearDecoder::STANDARD.leap_month_days(year)
}

/// [`YearDecoder::month_days`] over the built-in table.
pub fn month_days(year: Year, month: MonthNumber) -> Result<u32> {
    YearDecoder::STANDARD.month_days(year, month)
}

/// [`YearDecoder::year_days`] over the built-in table.
pub fn year_days(year: Year) -> Result<u32> {
    YearDecoder::STANDARD.year_days(year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::MAX_YEAR;

    #[test]
    fn leap_months_of_known_years() {
        assert_eq!(leap_month(2017).unwrap(), 6);
        assert_eq!(leap_month(2020).unwrap(), 4);
        assert_eq!(leap_month(2023).unwrap(), 2);
        assert_eq!(leap_month(2033).unwrap(), 11);
        assert_eq!(leap_month(2024).unwrap(), 0);
        assert_eq!(leap_month(1969).unwrap(), 0);
    }

    #[test]
    fn leap_month_sizes() {
        // 2017 carries the leap-size bit
        assert_eq!(leap_month_days(2017).unwrap(), 30);
        assert_eq!(leap_month_days(2023).unwrap(), 29);
        assert_eq!(leap_month_days(2024).unwrap(), 0);
    }

    #[test]
    fn regular_month_sizes() {
        // 2024 = 0x04b60: 0100 1011 0110 for months 1..=12
        let expected = [29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29];
        for (i, &days) in expected.iter().enumerate() {
            assert_eq!(month_days(2024, i as u8 + 1).unwrap(), days, "month {}", i + 1);
        }
        assert!(month_days(2024, 0).is_err());
        assert!(month_days(2024, 13).is_err());
    }

    #[test]
    fn truncated_epoch_year() {
        assert_eq!(year_days(1969).unwrap(), 35);
        assert_eq!(month_days(1969, 11).unwrap(), 6);
        assert_eq!(month_days(1969, 12).unwrap(), 29);
    }

    #[test]
    fn year_lengths() {
        assert_eq!(year_days(2023).unwrap(), 384);
        assert_eq!(year_days(2024).unwrap(), 354);
    }

    #[test]
    fn leap_month_never_corrupt_in_standard_table() {
        for year in MIN_YEAR..=MAX_YEAR {
            let leap = leap_month(year).unwrap();
            assert!(leap <= 12, "{year}: {leap}");
        }
    }

    #[test]
    fn full_years_have_12_or_13_months() {
        for year in MIN_YEAR + 1..=MAX_YEAR {
            let days = year_days(year).unwrap();
            assert!((353..=385).contains(&days), "{year}: {days}");
        }
    }

    #[test]
    fn sentinel_and_corrupt_nibbles() {
        static ENTRIES: [u32; 3] = [0x0a4df, 0x0a4dd, 0x1a4d3];
        let decoder = YearDecoder::new(LunarTable::new(3000, &ENTRIES));
        assert_eq!(decoder.leap_month(3000).unwrap(), 0);
        assert_eq!(decoder.leap_month_days(3000).unwrap(), 0);
        assert_eq!(
            decoder.leap_month(3001),
            Err(Error::DataCorruption {
                year: 3001,
                bits: 0x0a4dd
            })
        );
        assert!(decoder.year_days(3001).is_err());
        assert_eq!(decoder.leap_month(3002).unwrap(), 3);
        assert_eq!(decoder.leap_month_days(3002).unwrap(), 30);
    }

    #[test]
    fn untabulated_year() {
        assert!(matches!(year_days(2101), Err(Error::OutOfRange(_))));
        assert!(matches!(leap_month(1968), Err(Error::OutOfRange(_))));
    }
}
