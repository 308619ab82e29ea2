//! # lunar
//!
//! Conversion from Gregorian dates to the traditional Chinese lunisolar
//! calendar for 1970-01-01 through 2100-12-31, with festival lookup and
//! traditional month/day names.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `lunar-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use lunar::prelude::*;
//!
//! let lunar = convert(SolarDate::from_ymd(2024, 9, 17)?)?;
//! assert_eq!(lunar.to_string(), "2024年八月十五");
//! assert_eq!(lunar.festival(), Some(Festival::MidAutumnFestival));
//! # Ok::<(), lunar::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions, settings, and the conversion zone.
pub use lunar_core as core;

/// Gregorian dates and civil-time resolution.
pub use lunar_time as time;

/// Lunar table, conversion, festivals, and naming.
pub use lunar_calendar as calendar;

/// Commonly used items.
pub mod prelude {
    pub use lunar_calendar::{
        convert, convert_instant, convert_instant_in, convert_naive, festival, Festival,
        LunarDate, LunarMonth,
    };
    pub use lunar_core::{Error, Result, ScopedZone, Settings, Zone};
    pub use lunar_time::SolarDate;
}
