//! `DateConverter` — walks the lunar table forward from the epoch to locate
//! the lunar date of a solar date.
//!
//! The walk works on a day `offset` counted from 1970-01-01 (lunar
//! 1969-11-24).  Whole lunar years are peeled off first, then months in
//! order, with a year's leap month visited straight after the regular month
//! it repeats.  Whatever remains is the day of the month.
//!
//! Instants are reduced to a civil date first, in an explicit [`Zone`] or in
//! the zone held by [`Settings`].

use chrono::{DateTime, NaiveDate, Utc};
use lunar_core::errors::{Error, Result};
use lunar_core::{Day, Settings, Zone};
use lunar_time::{civil, SolarDate};
use tracing::{debug, trace, warn};

use crate::decoder::YearDecoder;
use crate::lunar_date::LunarDate;
use crate::month::LunarMonth;
use crate::table::{EPOCH_DAY, EPOCH_MONTH, MAX_DATE, MIN_DATE, MIN_YEAR};

/// Converts solar dates to lunar dates against a lunar table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateConverter {
    decoder: YearDecoder,
}

impl DateConverter {
    /// Converter over the built-in table.
    pub const STANDARD: DateConverter = DateConverter {
        decoder: YearDecoder::STANDARD,
    };

    /// Converter over an arbitrary decoder.
    pub const fn new(decoder: YearDecoder) -> Self {
        Self { decoder }
    }

    /// The decoder backing this converter.
    pub fn decoder(&self) -> &YearDecoder {
        &self.decoder
    }

    /// Convert a solar date in `[1970-01-01, 2100-12-31]`.
    pub fn convert(&self, date: SolarDate) -> Result<LunarDate> {
        if date < MIN_DATE || date > MAX_DATE {
            warn!(solar = %date, "solar date outside lunar conversion range");
            return Err(out_of_range(date));
        }
        let offset = MIN_DATE.days_between(date) as u32;
        let lunar = self.walk(offset)?;
        debug!(
            solar = %date,
            offset,
            year = lunar.year(),
            month = %lunar.month(),
            day = lunar.day(),
            "converted solar date"
        );
        Ok(lunar)
    }

    /// Convert a `chrono` civil date.
    pub fn convert_naive(&self, date: NaiveDate) -> Result<LunarDate> {
        if date < NaiveDate::from(MIN_DATE) || date > NaiveDate::from(MAX_DATE) {
            warn!(solar = %date, "solar date outside lunar conversion range");
            return Err(out_of_range(date));
        }
        self.convert(SolarDate::try_from(date)?)
    }

    /// Convert the civil date on which `instant` falls in `zone`.
    pub fn convert_instant_in(&self, instant: DateTime<Utc>, zone: Zone) -> Result<LunarDate> {
        self.convert_naive(civil::civil_naive_date(instant, zone)?)
    }

    fn walk(&self, mut offset: u32) -> Result<LunarDate> {
        let decoder = &self.decoder;

        let mut year = MIN_YEAR;
        loop {
            let days = decoder.year_days(year)?;
            if offset <= days {
                break;
            }
            offset -= days;
            year += 1;
            trace!(year, offset, "entered lunar year");
        }

        let leap_month = decoder.leap_month(year)?;
        let mut number = if year == MIN_YEAR { EPOCH_MONTH } else { 1 };
        let month = loop {
            if number > 12 {
                // The year's months do not add up to its length
                let bits = decoder.table().entry(year)?;
                return Err(Error::DataCorruption { year, bits });
            }
            let days = decoder.month_days(year, number)?;
            if offset <= days {
                break LunarMonth::Regular(number);
            }
            offset -= days;
            if number == leap_month {
                let leap_days = decoder.leap_month_days(year)?;
                if offset <= leap_days {
                    break LunarMonth::Leap(number);
                }
                offset -= leap_days;
            }
            number += 1;
            trace!(year, month = number, offset, "entered lunar month");
        };

        // Only the tail of the epoch month is tabulated, starting on its 24th
        let day = if year == MIN_YEAR && month == LunarMonth::Regular(EPOCH_MONTH) {
            EPOCH_DAY + offset as Day
        } else {
            offset as Day
        };
        Ok(LunarDate::new(year, month, day, leap_month))
    }
}

fn out_of_range(date: impl std::fmt::Display) -> Error {
    Error::OutOfRange(format!(
        "{date} outside lunar conversion range [{MIN_DATE}, {MAX_DATE}]"
    ))
}

// ── Convenience functions over the built-in table ────────────────────────────

/// Convert a solar date in `[1970-01-01, 2100-12-31]` to its lunar date.
///
/// ```
/// use lunar_calendar::{convert, LunarMonth};
/// use lunar_time::SolarDate;
///
/// let lunar = convert(SolarDate::from_ymd(2024, 2, 10).unwrap()).unwrap();
/// assert_eq!((lunar.year(), lunar.month(), lunar.day()), (2024, LunarMonth::Regular(1), 1));
/// ```
pub fn convert(date: SolarDate) -> Result<LunarDate> {
    DateConverter::STANDARD.convert(date)
}

/// Convert a `chrono` civil date.
pub fn convert_naive(date: NaiveDate) -> Result<LunarDate> {
    DateConverter::STANDARD.convert_naive(date)
}

/// Convert an instant, reading its civil date in the [`Settings`] zone.
pub fn convert_instant(instant: DateTime<Utc>) -> Result<LunarDate> {
    convert_instant_in(instant, Settings::instance().zone())
}

/// Convert an instant, reading its civil date in `zone`.
pub fn convert_instant_in(instant: DateTime<Utc>, zone: Zone) -> Result<LunarDate> {
    DateConverter::STANDARD.convert_instant_in(instant, zone)
}

/// Convert a Unix timestamp in milliseconds, reading its civil date in the
/// [`Settings`] zone.
pub fn convert_timestamp_millis(millis: i64) -> Result<LunarDate> {
    convert_instant(civil::instant_from_millis(millis)?)
}

/// First and last convertible instants in `zone`: local
/// 1970-01-01T00:00:00 and local 2100-12-31T23:59:59.999.
pub fn instant_bounds(zone: Zone) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    Ok((
        civil::start_of_day(MIN_DATE, zone)?,
        civil::end_of_day(MAX_DATE, zone)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::LunarTable;

    fn date(y: u16, m: u8, d: u8) -> SolarDate {
        SolarDate::from_ymd(y, m, d).unwrap()
    }

    fn ymd(lunar: LunarDate) -> (u16, LunarMonth, u8) {
        (lunar.year(), lunar.month(), lunar.day())
    }

    #[test]
    fn epoch_day() {
        let lunar = convert(date(1970, 1, 1)).unwrap();
        assert_eq!(ymd(lunar), (1969, LunarMonth::Regular(11), 24));
        assert_eq!(lunar.leap_month_of_year(), 0);
    }

    #[test]
    fn epoch_month_tail_and_year_turn() {
        assert_eq!(ymd(convert(date(1970, 1, 7)).unwrap()), (1969, LunarMonth::Regular(11), 30));
        assert_eq!(ymd(convert(date(1970, 1, 8)).unwrap()), (1969, LunarMonth::Regular(12), 1));
        assert_eq!(ymd(convert(date(1970, 2, 5)).unwrap()), (1969, LunarMonth::Regular(12), 29));
        assert_eq!(ymd(convert(date(1970, 2, 6)).unwrap()), (1970, LunarMonth::Regular(1), 1));
    }

    #[test]
    fn last_day() {
        let lunar = convert(date(2100, 12, 31)).unwrap();
        assert_eq!(ymd(lunar), (2100, LunarMonth::Regular(12), 1));
    }

    #[test]
    fn out_of_range_dates() {
        assert!(matches!(convert(date(1969, 12, 31)), Err(Error::OutOfRange(_))));
        assert!(matches!(convert(date(2101, 1, 1)), Err(Error::OutOfRange(_))));
        let far = NaiveDate::from_ymd_opt(1066, 10, 14).unwrap();
        assert!(matches!(convert_naive(far), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn leap_month_boundaries() {
        // 2023 repeats its second month
        assert_eq!(ymd(convert(date(2023, 3, 21)).unwrap()), (2023, LunarMonth::Regular(2), 30));
        assert_eq!(ymd(convert(date(2023, 3, 22)).unwrap()), (2023, LunarMonth::Leap(2), 1));
        assert_eq!(ymd(convert(date(2023, 4, 19)).unwrap()), (2023, LunarMonth::Leap(2), 29));
        assert_eq!(ymd(convert(date(2023, 4, 20)).unwrap()), (2023, LunarMonth::Regular(3), 1));
    }

    #[test]
    fn walk_past_table_end_is_out_of_range() {
        static ENTRIES: [u32; 2] = [0x00020, 0x096d0];
        let converter = DateConverter::new(YearDecoder::new(LunarTable::new(1969, &ENTRIES)));
        assert!(converter.convert(date(1970, 2, 6)).is_ok());
        assert!(matches!(
            converter.convert(date(1971, 6, 1)),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn corrupt_entry_fails_the_conversion() {
        static ENTRIES: [u32; 2] = [0x00020, 0x096dd];
        let converter = DateConverter::new(YearDecoder::new(LunarTable::new(1969, &ENTRIES)));
        assert_eq!(
            converter.convert(date(1970, 3, 1)),
            Err(Error::DataCorruption {
                year: 1970,
                bits: 0x096dd
            })
        );
    }
}
