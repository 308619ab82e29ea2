//! Traditional festivals keyed on lunar month and day.

use lunar_core::{Day, Year};

use crate::decoder::YearDecoder;
use crate::month::LunarMonth;

/// A traditional festival falling on a fixed lunar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Festival {
    /// 1st day of the 1st month.
    SpringFestival,
    /// 15th day of the 1st month.
    LanternFestival,
    /// 5th day of the 5th month.
    DragonBoatFestival,
    /// 7th day of the 7th month.
    Qixi,
    /// 15th day of the 8th month.
    MidAutumnFestival,
    /// 9th day of the 9th month.
    DoubleNinthFestival,
    /// 8th day of the 12th month.
    LabaFestival,
    /// Last day of the 12th month (29th or 30th).
    NewYearsEve,
}

impl Festival {
    /// Chinese name (`"春节"`, `"中秋节"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            Festival::SpringFestival => "春节",
            Festival::LanternFestival => "元宵节",
            Festival::DragonBoatFestival => "端午节",
            Festival::Qixi => "七夕",
            Festival::MidAutumnFestival => "中秋节",
            Festival::DoubleNinthFestival => "重阳节",
            Festival::LabaFestival => "腊八节",
            Festival::NewYearsEve => "除夕",
        }
    }

    /// English name (`"Spring Festival"`, …).
    pub fn english_name(&self) -> &'static str {
        match self {
            Festival::SpringFestival => "Spring Festival",
            Festival::LanternFestival => "Lantern Festival",
            Festival::DragonBoatFestival => "Dragon Boat Festival",
            Festival::Qixi => "Qixi Festival",
            Festival::MidAutumnFestival => "Mid-Autumn Festival",
            Festival::DoubleNinthFestival => "Double Ninth Festival",
            Festival::LabaFestival => "Laba Festival",
            Festival::NewYearsEve => "New Year's Eve",
        }
    }
}

impl std::fmt::Display for Festival {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Return the festival on lunar `year`/`month`/`day`, if any.
///
/// Leap months carry no festivals.  New Year's Eve depends on whether the
/// twelfth month of `year` has 29 or 30 days, so it never matches for a
/// year outside the table.
///
/// ```
/// use lunar_calendar::{festival, Festival, LunarMonth};
///
/// assert_eq!(festival(2024, LunarMonth::Regular(8), 15), Some(Festival::MidAutumnFestival));
/// assert_eq!(festival(2023, LunarMonth::Leap(2), 1), None);
/// ```
pub fn festival(year: Year, month: LunarMonth, day: Day) -> Option<Festival> {
    festival_with(&YearDecoder::STANDARD, year, month, day)
}

/// [`festival`] against an arbitrary decoder.
pub fn festival_with(
    decoder: &YearDecoder,
    year: Year,
    month: LunarMonth,
    day: Day,
) -> Option<Festival> {
    let LunarMonth::Regular(m) = month else {
        return None;
    };
    match (m, day) {
        (1, 1) => Some(Festival::SpringFestival),
        (1, 15) => Some(Festival::LanternFestival),
        (5, 5) => Some(Festival::DragonBoatFestival),
        (7, 7) => Some(Festival::Qixi),
        (8, 15) => Some(Festival::MidAutumnFestival),
        (9, 9) => Some(Festival::DoubleNinthFestival),
        (12, 8) => Some(Festival::LabaFestival),
        (12, d) => match decoder.month_days(year, 12) {
            Ok(last) if u32::from(d) == last => Some(Festival::NewYearsEve),
            _ => None,
        },
        _ => None,
    }
}
