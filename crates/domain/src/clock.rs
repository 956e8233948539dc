// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timestamp parsing and display-timezone conversions.
//!
//! Instants are carried as `time::OffsetDateTime`. Wall-clock values typed by
//! an operator (no offset) are interpreted in the declared display timezone,
//! which is resolved through `chrono-tz`.
//!
//! ## Accepted timestamp forms
//!
//! - RFC 3339 (`2099-01-01T09:00:00Z`, `2099-01-01T09:00:00+08:00`)
//! - Date only (`2099-01-01`), taken as midnight UTC
//! - Wall clock without offset (`2099-01-01T09:00`, `2099-01-01T09:00:00`),
//!   taken in the display timezone

use crate::error::DomainError;
use chrono::{NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime};

/// Parses an IANA timezone name.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the name is not known.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// Parses a calendar date in `YYYY-MM-DD` form.
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Parses a timestamp in any of the accepted forms.
///
/// Returns `None` for empty or unparseable input; callers treat that the same
/// as an absent value.
#[must_use]
pub fn parse_timestamp(raw: &str, tz: Tz) -> Option<OffsetDateTime> {
    let raw: &str = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }

    if let Some(date) = parse_date(raw) {
        return Some(date.midnight().assume_utc());
    }

    let naive: NaiveDateTime = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()?;

    // DST gaps have no local instant; overlaps take the earlier one
    let local = tz.from_local_datetime(&naive).earliest()?;
    let nanos: i64 = local.timestamp_nanos_opt()?;
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(nanos)).ok()
}

/// Converts an instant into a zoned `chrono` datetime.
fn to_zoned(ts: OffsetDateTime, tz: Tz) -> Option<chrono::DateTime<Tz>> {
    chrono::DateTime::from_timestamp(ts.unix_timestamp(), ts.nanosecond())
        .map(|utc| utc.with_timezone(&tz))
}

/// Returns the calendar date of `now` in the display timezone.
///
/// Falls back to the UTC date if the instant is outside chrono's range.
#[must_use]
pub fn local_date(now: OffsetDateTime, tz: Tz) -> Date {
    use chrono::Datelike;

    to_zoned(now, tz)
        .and_then(|zoned| {
            let month: Month = u8::try_from(zoned.month())
                .ok()
                .and_then(|m| Month::try_from(m).ok())?;
            let day: u8 = u8::try_from(zoned.day()).ok()?;
            Date::from_calendar_date(zoned.year(), month, day).ok()
        })
        .unwrap_or_else(|| now.date())
}

/// Formats an instant as `YYYY/MM/DD HH:MM` in the display timezone.
#[must_use]
pub fn format_local(ts: OffsetDateTime, tz: Tz) -> String {
    to_zoned(ts, tz).map_or_else(
        || ts.to_string(),
        |zoned| zoned.format("%Y/%m/%d %H:%M").to_string(),
    )
}
