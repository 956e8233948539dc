// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of the registration list.
//!
//! The file starts with a UTF-8 byte order mark so spreadsheet software
//! detects the encoding, and every field is quoted.

use afterclass_domain::{RegistrationSummary, format_local, parse_timestamp};
use chrono_tz::Tz;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use time::Date;
use time::macros::format_description;

const BOM: &[u8] = "\u{FEFF}".as_bytes();

/// Export column headers.
pub const EXPORT_HEADERS: [&str; 9] = [
    "ID",
    "Student Name",
    "Birthday",
    "Class",
    "Courses",
    "Supplies",
    "Payment",
    "Registered At",
    "Updated At",
];

/// Returns the export file name for `today`, e.g. `registrations_2026-03-10.csv`.
#[must_use]
pub fn export_file_name(today: Date) -> String {
    let format = format_description!("[year]-[month]-[day]");
    let date: String = today
        .format(&format)
        .unwrap_or_else(|_| today.to_string());
    format!("registrations_{date}.csv")
}

/// Renders registrations as CSV.
///
/// # Errors
///
/// Returns an error if a record cannot be written.
pub fn export_registrations_csv(
    registrations: &[RegistrationSummary],
    tz: Tz,
) -> Result<Vec<u8>, csv::Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(BOM.to_vec());

    writer.write_record(EXPORT_HEADERS)?;
    for reg in registrations {
        writer.write_record([
            reg.id.to_string(),
            reg.student_name.clone(),
            reg.birthday.clone().unwrap_or_default(),
            reg.class_name
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| String::from("Unassigned")),
            reg.course_count.to_string(),
            reg.supply_count.to_string(),
            String::from(if reg.is_paid { "Paid" } else { "Unpaid" }),
            export_timestamp(reg.created_at.as_deref(), tz),
            export_timestamp(reg.updated_at.as_deref(), tz),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Formats a stored timestamp as `YYYY/MM/DD HH:MM` in `tz`.
///
/// Missing values become `-`; values that do not parse are kept as stored.
fn export_timestamp(raw: Option<&str>, tz: Tz) -> String {
    match raw.filter(|r| !r.trim().is_empty()) {
        None => String::from("-"),
        Some(raw) => parse_timestamp(raw, tz).map_or_else(|| raw.to_string(), |ts| format_local(ts, tz)),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use time::macros::date;

    fn registration(id: i64, class: Option<&str>, paid: bool) -> RegistrationSummary {
        RegistrationSummary {
            id,
            student_name: String::from("Amy \"Mei\" Chen"),
            birthday: Some(String::from("2020-05-17")),
            class_name: class.map(String::from),
            course_count: 2,
            supply_count: 1,
            is_paid: paid,
            created_at: Some(String::from("2026-03-01T17:05:00Z")),
            updated_at: None,
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            export_file_name(date!(2026 - 03 - 10)),
            "registrations_2026-03-10.csv"
        );
    }

    #[test]
    fn test_export_starts_with_bom_and_quotes_everything() {
        let bytes = export_registrations_csv(
            &[registration(1, None, true), registration(2, Some("Rose"), false)],
            chrono_tz::Asia::Taipei,
        )
        .unwrap();

        assert!(bytes.starts_with(BOM));
        let text = String::from_utf8(bytes[BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("\"ID\",\"Student Name\""));
        assert_eq!(
            lines[1],
            "\"1\",\"Amy \"\"Mei\"\" Chen\",\"2020-05-17\",\"Unassigned\",\"2\",\"1\",\"Paid\",\"2026/03/02 01:05\",\"-\""
        );
        assert!(lines[2].contains("\"Rose\""));
        assert!(lines[2].contains("\"Unpaid\""));
    }

    #[test]
    fn test_unparseable_timestamp_is_kept() {
        assert_eq!(
            export_timestamp(Some("yesterday"), chrono_tz::Asia::Taipei),
            "yesterday"
        );
        assert_eq!(export_timestamp(None, chrono_tz::Asia::Taipei), "-");
    }
}
