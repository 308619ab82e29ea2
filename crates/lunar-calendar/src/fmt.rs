//! Traditional Chinese rendering of lunar months and days.

use lunar_core::Day;

use crate::month::LunarMonth;

/// Month names, index 0 = first month (正月) … 11 = twelfth month (腊月).
pub const MONTH_NAMES: [&str; 12] = ["正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊"];

/// Tens prefixes for day names: 初 (1–10), 十 (11–19), 廿 (21–29), 卅.
pub const DAY_TENS: [&str; 4] = ["初", "十", "廿", "卅"];

/// Chinese numerals, index 0 = 一 … 9 = 十.
pub const NUMERALS: [&str; 10] = ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

/// Name of a lunar month, with 闰 prepended for a leap month.
///
/// ```
/// use lunar_calendar::{fmt, LunarMonth};
///
/// assert_eq!("冬月", fmt::month(LunarMonth::Regular(11)));
/// assert_eq!("闰二月", fmt::month(LunarMonth::Leap(2)));
/// ```
///
/// # Panics
///
/// Panics if the month number is not in `1..=12`.
pub fn month(m: LunarMonth) -> String {
    let num = m.number();
    assert!((1..=12).contains(&num), "month {num} not in 1..=12");
    let prefix = if m.is_leap() { "闰" } else { "" };
    format!("{prefix}{}月", MONTH_NAMES[num as usize - 1])
}

/// Name of a lunar day: 初一…初十, 十一…十九, 二十, 廿一…廿九, 三十.
///
/// Round tens stand alone: 初十, 二十, 三十.
///
/// ```
/// use lunar_calendar::fmt;
///
/// assert_eq!("初十", fmt::day(10));
/// assert_eq!("十一", fmt::day(11));
/// assert_eq!("二十", fmt::day(20));
/// ```
///
/// # Panics
///
/// Panics if `d` is not in `1..=30`.
pub fn day(d: Day) -> String {
    assert!((1..=30).contains(&d), "day {d} not in 1..=30");
    let (tens, ones) = (d / 10, d % 10);
    match (tens, ones) {
        (1, 0) => format!("{}{}", DAY_TENS[0], NUMERALS[9]),
        (t, 0) => format!("{}{}", NUMERALS[t as usize - 1], NUMERALS[9]),
        (t, o) => format!("{}{}", DAY_TENS[t as usize], NUMERALS[o as usize - 1]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day() {
        for (expected, d) in [
            ("初一", 1),
            ("初九", 9),
            ("初十", 10),
            ("十一", 11),
            ("十九", 19),
            ("二十", 20),
            ("廿一", 21),
            ("廿九", 29),
            ("三十", 30),
        ] {
            assert_eq!(expected, day(d));
        }
    }

    #[test]
    fn test_month() {
        assert_eq!("正月", month(LunarMonth::Regular(1)));
        assert_eq!("十月", month(LunarMonth::Regular(10)));
        assert_eq!("腊月", month(LunarMonth::Regular(12)));
        assert_eq!("闰六月", month(LunarMonth::Leap(6)));
    }

    #[test]
    #[should_panic]
    fn day_out_of_range() {
        day(31);
    }
}
