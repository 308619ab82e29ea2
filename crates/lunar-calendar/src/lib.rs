//! # lunar-calendar
//!
//! Table-driven conversion from Gregorian dates to the Chinese lunisolar
//! calendar, valid from 1970-01-01 (lunar 1969-11-24) to 2100-12-31 (lunar
//! 2100-12-01), plus traditional festival lookup and month/day naming.
//!
//! ```
//! use lunar_calendar::{convert, Festival, LunarMonth};
//! use lunar_time::SolarDate;
//!
//! let lunar = convert(SolarDate::from_ymd(2023, 3, 22).unwrap()).unwrap();
//! assert_eq!(lunar.month(), LunarMonth::Leap(2));
//! assert_eq!(lunar.to_string(), "2023年闰二月初一");
//!
//! let eve = convert(SolarDate::from_ymd(2025, 1, 28).unwrap()).unwrap();
//! assert_eq!(eve.festival(), Some(Festival::NewYearsEve));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Solar → lunar date walking.
pub mod converter;

/// Month and year lengths decoded from the table.
pub mod decoder;

/// Traditional festivals.
pub mod festival;

/// Traditional month and day names.
pub mod fmt;

/// `LunarDate` result type.
pub mod lunar_date;

/// `LunarMonth` — regular or leap month.
pub mod month;

/// Encoded lunar year table and epoch constants.
pub mod table;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use converter::{
    convert, convert_instant, convert_instant_in, convert_naive, convert_timestamp_millis,
    instant_bounds, DateConverter,
};
pub use decoder::YearDecoder;
pub use festival::{festival, Festival};
pub use lunar_date::LunarDate;
pub use month::LunarMonth;
pub use table::{LunarTable, MAX_DATE, MIN_DATE};
