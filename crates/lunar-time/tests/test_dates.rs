//! Integration tests for `SolarDate` and civil-date resolution.

use chrono::{DateTime, Utc};
use lunar_time::date::{days_in_month, is_leap_year};
use lunar_time::{civil_date, end_of_day, start_of_day, SolarDate, Zone};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> SolarDate {
    SolarDate::from_ymd(y, m, d).unwrap()
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2100, 2), 28);
}

#[test]
fn consecutive_dates() {
    // Walk every day of the supported range and check fields advance by one
    let mut d = SolarDate::MIN;
    let (mut y, mut m, mut dd) = d.ymd();
    while d < SolarDate::MAX {
        let next = d + 1;
        let (ny, nm, nd) = next.ymd();
        if dd < days_in_month(y, m) {
            assert_eq!((ny, nm, nd), (y, m, dd + 1), "after {d}");
        } else if m < 12 {
            assert_eq!((ny, nm, nd), (y, m + 1, 1), "after {d}");
        } else {
            assert_eq!((ny, nm, nd), (y + 1, 1, 1), "after {d}");
        }
        assert_eq!(SolarDate::from_ymd(ny, nm, nd).unwrap(), next);
        d = next;
        (y, m, dd) = (ny, nm, nd);
    }
}

#[test]
fn epoch_instant_in_zones() {
    let epoch: DateTime<Utc> = DateTime::from_timestamp_millis(0).unwrap();
    assert_eq!(civil_date(epoch, Zone::Utc).unwrap(), date(1970, 1, 1));
    assert_eq!(
        civil_date(epoch, Zone::Fixed { offset_seconds: -3600 }).unwrap(),
        date(1969, 12, 31)
    );
}

#[test]
fn day_bounds_bracket_the_day() {
    for zone in [Zone::Utc, Zone::CHINA_STANDARD_TIME, Zone::Local] {
        let d = date(2100, 12, 31);
        let start = start_of_day(d, zone).unwrap();
        let end = end_of_day(d, zone).unwrap();
        assert!(start < end);
        assert_eq!(civil_date(start, zone).unwrap(), d);
        assert_eq!(civil_date(end, zone).unwrap(), d);
    }
}

proptest! {
    #[test]
    fn serial_roundtrip(serial in SolarDate::MIN.serial()..=SolarDate::MAX.serial()) {
        let d = SolarDate::from_serial(serial).unwrap();
        let (y, m, dd) = d.ymd();
        prop_assert_eq!(SolarDate::from_ymd(y, m, dd).unwrap(), d);
    }
}
