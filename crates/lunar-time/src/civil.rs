//! Mapping absolute instants onto civil dates in a [`Zone`].

use chrono::{DateTime, Duration, FixedOffset, Local, LocalResult, NaiveDate, TimeZone, Utc};
use lunar_core::errors::{Error, Result};
use lunar_core::Zone;

use crate::date::SolarDate;

/// Resolve a [`Zone::Fixed`] offset into a `chrono` offset.
///
/// Fails if the offset is not strictly within ±24 hours.
pub fn fixed_offset(offset_seconds: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(offset_seconds).ok_or_else(|| {
        Error::InvalidArgument(format!(
            "fixed offset {offset_seconds}s outside (-86400, 86400)"
        ))
    })
}

/// Return the civil date on which `instant` falls when observed from `zone`,
/// without restricting it to the [`SolarDate`] range.
pub fn civil_naive_date(instant: DateTime<Utc>, zone: Zone) -> Result<NaiveDate> {
    Ok(match zone {
        Zone::Local => instant.with_timezone(&Local).date_naive(),
        Zone::Utc => instant.date_naive(),
        Zone::Fixed { offset_seconds } => instant
            .with_timezone(&fixed_offset(offset_seconds)?)
            .date_naive(),
    })
}

/// Return the civil date on which `instant` falls when observed from `zone`.
pub fn civil_date(instant: DateTime<Utc>, zone: Zone) -> Result<SolarDate> {
    SolarDate::try_from(civil_naive_date(instant, zone)?)
}

/// Return the first instant of `date` in `zone` (its civil midnight).
///
/// When a daylight-saving transition skips midnight, the first existing
/// instant of the day is returned.
pub fn start_of_day(date: SolarDate, zone: Zone) -> Result<DateTime<Utc>> {
    let midnight = NaiveDate::from(date)
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::Date(format!("{date} has no midnight")))?;
    let start = match zone {
        Zone::Utc => Some(midnight.and_utc()),
        Zone::Fixed { offset_seconds } => {
            earliest(fixed_offset(offset_seconds)?.from_local_datetime(&midnight))
        }
        // Midnight skipped by a DST gap; the day starts an hour later
        Zone::Local => earliest(Local.from_local_datetime(&midnight)).or_else(|| {
            earliest(Local.from_local_datetime(&(midnight + Duration::hours(1))))
        }),
    };
    start.ok_or_else(|| Error::Date(format!("{date} has no resolvable start in {zone}")))
}

/// Return the last millisecond of `date` in `zone`.
pub fn end_of_day(date: SolarDate, zone: Zone) -> Result<DateTime<Utc>> {
    let next = start_of_day(date.add_days(1)?, zone)?;
    Ok(next - Duration::milliseconds(1))
}

/// Interpret a Unix timestamp in milliseconds as an instant.
pub fn instant_from_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| Error::Date(format!("timestamp {millis}ms not representable")))
}

fn earliest<Tz: TimeZone>(local: LocalResult<DateTime<Tz>>) -> Option<DateTime<Utc>> {
    local.earliest().map(|dt| dt.with_timezone(&Utc))
}
