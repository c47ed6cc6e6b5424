//! Conversions between stored timestamps, calendar dates and the instants used
//! for date filtering.
//!
//! Timestamps are stored as UTC Unix milliseconds. Calendar dates supplied by
//! clients are interpreted in the server's configured time zone.

use time::{
    Date, Duration, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset,
    format_description::well_known::Rfc3339,
    macros::{format_description, time},
};
use time_tz::{Offset, TimeZone, Tz};

use crate::{Error, stores::StoreError};

/// Look up a time zone by its canonical name, e.g. "Pacific/Auckland".
///
/// # Errors
///
/// Returns [Error::InvalidTimezone] if `canonical_timezone` is not a known
/// time zone.
pub fn resolve_timezone(canonical_timezone: &str) -> Result<&'static Tz, Error> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezone(canonical_timezone.to_owned()))
}

/// The UTC offset of `timezone` at `instant`.
fn offset_at(timezone: &Tz, instant: OffsetDateTime) -> UtcOffset {
    timezone.get_offset_utc(&instant).to_utc()
}

/// The instant that `local` names in `timezone`.
///
/// When clocks go back, `local` happens twice and the earlier instant is
/// used. When clocks go forward past `local`, it never happens and the first
/// instant after the gap is used instead.
fn local_to_instant(local: PrimitiveDateTime, timezone: &Tz) -> OffsetDateTime {
    let as_utc = local.assume_utc();
    let offset_before = offset_at(timezone, as_utc - Duration::DAY);
    let offset_after = offset_at(timezone, as_utc + Duration::DAY);

    [offset_before, offset_after]
        .into_iter()
        .map(|offset| local.assume_offset(offset))
        .filter(|instant| offset_at(timezone, *instant) == instant.offset())
        .min()
        .unwrap_or_else(|| local.assume_offset(offset_before))
}

/// The first instant of `date` in `timezone`.
pub fn start_of_day(date: Date, timezone: &Tz) -> OffsetDateTime {
    local_to_instant(PrimitiveDateTime::new(date, Time::MIDNIGHT), timezone)
}

/// The last millisecond of `date` in `timezone`.
pub fn end_of_day(date: Date, timezone: &Tz) -> OffsetDateTime {
    local_to_instant(PrimitiveDateTime::new(date, time!(23:59:59.999)), timezone)
}

/// Express `instant` in the local time of `timezone`.
pub fn to_local(instant: OffsetDateTime, timezone: &Tz) -> OffsetDateTime {
    instant.to_offset(offset_at(timezone, instant))
}

/// Parse a calendar date in the format `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Parse the date of an expense.
///
/// A plain calendar date (`YYYY-MM-DD`) is taken to be midnight in
/// `timezone`. Anything else must be an RFC 3339 date-time.
///
/// # Errors
///
/// Returns [Error::InvalidDate] if `raw` is neither format.
pub fn parse_expense_date(raw: &str, timezone: &Tz) -> Result<OffsetDateTime, Error> {
    if let Some(date) = parse_date(raw) {
        return Ok(start_of_day(date, timezone));
    }

    OffsetDateTime::parse(raw.trim(), &Rfc3339).map_err(|_| Error::InvalidDate(raw.to_owned()))
}

/// Convert `instant` to the representation used in storage, rounding down
/// to the millisecond.
pub fn to_millis(instant: OffsetDateTime) -> i64 {
    let millis = instant.unix_timestamp_nanos().div_euclid(1_000_000);

    // Every date `time` supports fits, so the clamp never applies in practice.
    i64::try_from(millis).unwrap_or(if millis < 0 { i64::MIN } else { i64::MAX })
}

/// Convert a stored timestamp back into an instant in UTC.
///
/// # Errors
///
/// Returns [StoreError::Unknown] if `millis` is outside the supported range of dates.
pub fn from_millis(millis: i64) -> Result<OffsetDateTime, StoreError> {
    OffsetDateTime::from_unix_timestamp_nanos(millis as i128 * 1_000_000)
        .map_err(|error| StoreError::Unknown(format!("invalid stored timestamp {millis}: {error}")))
}
