//! End-to-end use through the façade crate.

use chrono::NaiveDate;
use lunar::prelude::*;

#[test]
fn naive_date_round_trip_through_facade() {
    let d = NaiveDate::from_ymd_opt(2017, 7, 23).unwrap();
    let l = convert_naive(d).unwrap();
    assert_eq!(l.month(), LunarMonth::Leap(6));
    assert_eq!(l.to_string(), "2017年闰六月初一");
}

#[test]
fn festival_lookup_without_conversion() {
    assert_eq!(
        festival(2030, LunarMonth::Regular(5), 5).map(|f| f.name()),
        Some("端午节")
    );
    assert_eq!(festival(2030, LunarMonth::Regular(5), 6), None);
}

#[test]
fn errors_are_typed() {
    let err = convert(SolarDate::from_ymd(1969, 12, 31).unwrap()).unwrap_err();
    assert!(matches!(err, Error::OutOfRange(_)));
    assert!(err.to_string().starts_with("out of range: 1969-12-31"));
}
