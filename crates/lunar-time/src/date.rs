//! `SolarDate` — a Gregorian civil date.
//!
//! Dates are stored as a serial number of days since the Unix epoch.
//!
//! # Serial number convention
//! * Serial 0 = January 1, 1970.
//! * Dates before the epoch have negative serials.
//! * The valid date range is 1900-01-01 to 2199-12-31.

use chrono::{Datelike, NaiveDate};
use lunar_core::errors::{Error, Result};
use lunar_core::{Day, DayCount, MonthNumber, Year};

/// A Gregorian calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarDate(DayCount);

// ── Constants ─────────────────────────────────────────────────────────────────

impl SolarDate {
    /// The Unix epoch, January 1, 1970 (serial 0).
    pub const EPOCH: SolarDate = SolarDate(0);

    /// Minimum valid date: January 1, 1900.
    pub const MIN: SolarDate = SolarDate(-25_567);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: SolarDate = SolarDate(84_005);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: DayCount) -> Result<Self> {
        let d = SolarDate(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: MonthNumber, day: Day) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(SolarDate(serial_from_ymd(year, month, day)))
    }

    /// Create a date in a constant context.
    ///
    /// # Panics
    /// Panics (at compile time when used in a `const`) if the fields do not
    /// form a valid date in 1900–2199.
    pub const fn from_ymd_const(year: Year, month: MonthNumber, day: Day) -> Self {
        assert!(year >= 1900 && year <= 2199, "year out of range [1900, 2199]");
        assert!(month >= 1 && month <= 12, "month out of range [1, 12]");
        assert!(
            day >= 1 && day <= days_in_month(year, month),
            "day out of range for month"
        );
        SolarDate(serial_from_ymd(year, month, day))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number (days since 1970-01-01).
    pub fn serial(&self) -> DayCount {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> MonthNumber {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> Day {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (Year, MonthNumber, Day) {
        ymd_from_serial(self.0)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: DayCount) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: SolarDate) -> DayCount {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<DayCount> for SolarDate {
    type Output = Self;
    fn add(self, rhs: DayCount) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<DayCount> for SolarDate {
    type Output = Self;
    fn sub(self, rhs: DayCount) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<SolarDate> for SolarDate {
    type Output = DayCount;
    fn sub(self, rhs: SolarDate) -> DayCount {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<DayCount> for SolarDate {
    fn add_assign(&mut self, rhs: DayCount) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

impl TryFrom<NaiveDate> for SolarDate {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        let year = Year::try_from(date.year())
            .map_err(|_| Error::Date(format!("year {} out of range [1900, 2199]", date.year())))?;
        // chrono guarantees month in 1..=12 and day in 1..=31
        Self::from_ymd(year, date.month() as MonthNumber, date.day() as Day)
    }
}

impl From<SolarDate> for NaiveDate {
    fn from(date: SolarDate) -> NaiveDate {
        let (y, m, d) = date.ymd();
        NaiveDate::from_ymd_opt(y.into(), m.into(), d.into())
            .expect("every SolarDate is representable as a NaiveDate")
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolarDate({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub const fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub const fn days_in_month(year: Year, month: MonthNumber) -> Day {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Leap years in `[1, year)`.
const fn leap_years_before(year: i32) -> i32 {
    let y = year - 1;
    y / 4 - y / 100 + y / 400
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 0 = 1970-01-01.
const fn serial_from_ymd(year: Year, month: MonthNumber, day: Day) -> DayCount {
    let y = year as i32;
    let mut serial = (y - 1970) * 365 + leap_years_before(y) - leap_years_before(1970);
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32 - 1
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: DayCount) -> (Year, MonthNumber, Day) {
    // Estimate, then adjust until serial falls within the year
    let mut y = (1970 + serial.div_euclid(365)) as Year;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as Day)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
