//! Range-wide properties of the conversion, checked with `proptest`.

use lunar_calendar::{convert, LunarMonth, MAX_DATE, MIN_DATE};
use lunar_time::SolarDate;
use proptest::prelude::*;

fn in_range() -> impl Strategy<Value = SolarDate> {
    (MIN_DATE.serial()..=MAX_DATE.serial()).prop_map(|s| SolarDate::from_serial(s).unwrap())
}

proptest! {
    #[test]
    fn conversion_is_monotonic(a in in_range(), b in in_range()) {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let l1 = convert(earlier).unwrap();
        let l2 = convert(later).unwrap();
        prop_assert!(l1 <= l2, "{earlier} -> {l1}, {later} -> {l2}");
        prop_assert_eq!(earlier == later, l1 == l2);
    }

    #[test]
    fn result_fields_in_range(d in in_range()) {
        let l = convert(d).unwrap();
        prop_assert!((1969..=2100).contains(&l.year()));
        prop_assert!((1..=12).contains(&l.month().number()));
        prop_assert!((1..=30).contains(&l.day()));
        prop_assert!(l.leap_month_of_year() <= 12);
        if let LunarMonth::Leap(n) = l.month() {
            prop_assert_eq!(n, l.leap_month_of_year());
        }
    }

    #[test]
    fn next_day_advances_by_one(d in in_range()) {
        prop_assume!(d < MAX_DATE);
        let today = convert(d).unwrap();
        let tomorrow = convert(d + 1).unwrap();
        if tomorrow.day() != 1 {
            prop_assert_eq!(tomorrow.year(), today.year());
            prop_assert_eq!(tomorrow.month(), today.month());
            prop_assert_eq!(tomorrow.day(), today.day() + 1);
        } else {
            prop_assert!(today.day() >= 29, "{d}: month ended on day {}", today.day());
        }
    }
}
