// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Back-office records and operator input rules.
//!
//! Records are the backend's JSON shapes. Operator input is validated here
//! before any request is made.

use crate::clock::parse_timestamp;
use crate::error::DomainError;
use crate::types::LineItem;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Course names containing this marker are materials-fee rows, hidden from
/// the course table.
pub const MATERIALS_FEE_MARKER: &str = "教材費";

/// Capacity used when a course draft leaves it blank.
const DEFAULT_CAPACITY: u32 = 30;

/// Remaining seats at or below this count are flagged as low.
const LOW_REMAINING_THRESHOLD: i64 = 5;

/// One row of the registration list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationSummary {
    /// The registration identifier.
    pub id: i64,
    /// The student's name.
    pub student_name: String,
    /// The student's birthday.
    #[serde(default)]
    pub birthday: Option<String>,
    /// The student's class.
    #[serde(default)]
    pub class_name: Option<String>,
    /// Number of courses registered.
    #[serde(default)]
    pub course_count: u32,
    /// Number of supplies ordered.
    #[serde(default)]
    pub supply_count: u32,
    /// Whether the registration has been paid.
    #[serde(default)]
    pub is_paid: bool,
    /// Creation time (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update time (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Aggregate counts shown above the registration list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationStatistics {
    /// Number of registrations.
    pub total_registrations: u32,
    /// Number of distinct students.
    pub total_students: u32,
    /// Number of course enrollments across all registrations.
    pub total_course_enrollments: u32,
    /// Number of supply orders across all registrations.
    pub total_supply_orders: u32,
}

/// A registration with its line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDetail {
    /// The registration identifier.
    pub id: i64,
    /// The student's name.
    pub student_name: String,
    /// The student's birthday.
    #[serde(default)]
    pub birthday: Option<String>,
    /// The student's class.
    #[serde(default)]
    pub class_name: Option<String>,
    /// Whether the registration has been paid.
    #[serde(default)]
    pub is_paid: bool,
    /// Registered courses.
    #[serde(default)]
    pub courses: Vec<LineItem>,
    /// Ordered supplies.
    #[serde(default)]
    pub supplies: Vec<LineItem>,
    /// Creation time (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update time (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl RegistrationDetail {
    /// Sums the prices of all courses and supplies.
    ///
    /// Prices that are not whole numbers are skipped.
    #[must_use]
    pub fn total_cost(&self) -> u64 {
        self.courses
            .iter()
            .chain(self.supplies.iter())
            .filter_map(|item| item.price.amount())
            .map(u64::from)
            .sum()
    }
}

/// Filters registrations by a case-insensitive search term.
///
/// A registration matches if its student name or class name contains the
/// term. An empty term matches everything.
#[must_use]
pub fn filter_registrations<'a>(
    registrations: &'a [RegistrationSummary],
    term: &str,
) -> Vec<&'a RegistrationSummary> {
    let term: String = term.trim().to_lowercase();
    registrations
        .iter()
        .filter(|reg| {
            reg.student_name.to_lowercase().contains(&term)
                || reg
                    .class_name
                    .as_deref()
                    .is_some_and(|class| class.to_lowercase().contains(&term))
        })
        .collect()
}

/// A course as managed in the back office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCourse {
    /// The course identifier.
    pub id: i64,
    /// The course name.
    pub name: String,
    /// Price in whole dollars.
    pub price: u32,
    /// Number of sessions.
    #[serde(default)]
    pub sessions: Option<u32>,
    /// Meeting frequency.
    #[serde(default)]
    pub frequency: Option<String>,
    /// Seat capacity.
    #[serde(default)]
    pub capacity: u32,
    /// Seats taken.
    #[serde(default)]
    pub used: u32,
    /// Seats remaining (may be negative or the hard-closed sentinel).
    #[serde(default)]
    pub remaining: i64,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Preview video URL.
    #[serde(default)]
    pub video_url: Option<String>,
}

/// How close a course is to capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityLevel {
    /// No seats remain.
    Full,
    /// Five or fewer seats remain.
    Low,
    /// Plenty of seats remain.
    Ok,
}

impl AdminCourse {
    /// Returns true for materials-fee rows.
    #[must_use]
    pub fn is_materials_fee(&self) -> bool {
        self.name.contains(MATERIALS_FEE_MARKER)
    }

    /// Classifies the remaining seats for the course table.
    #[must_use]
    pub const fn capacity_level(&self) -> CapacityLevel {
        if self.remaining <= 0 {
            CapacityLevel::Full
        } else if self.remaining <= LOW_REMAINING_THRESHOLD {
            CapacityLevel::Low
        } else {
            CapacityLevel::Ok
        }
    }

    /// Returns the remaining-seat cell text.
    #[must_use]
    pub fn remaining_label(&self) -> String {
        if self.remaining <= 0 {
            String::from("Full")
        } else {
            self.remaining.to_string()
        }
    }
}

/// Returns the courses shown in the course table, hiding materials fees.
#[must_use]
pub fn visible_courses(courses: &[AdminCourse]) -> Vec<&AdminCourse> {
    courses.iter().filter(|c| !c.is_materials_fee()).collect()
}

/// Parses a capacity typed by an operator.
///
/// # Errors
///
/// Returns `DomainError::InvalidCapacity` unless the input is a whole number
/// of zero or more.
pub fn parse_capacity(raw: &str) -> Result<u32, DomainError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| DomainError::InvalidCapacity(raw.to_string()))
}

/// Raw course form input, as typed by an operator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseDraftInput<'a> {
    /// Course name.
    pub name: &'a str,
    /// Price.
    pub price: &'a str,
    /// Number of sessions; blank for none.
    pub sessions: &'a str,
    /// Meeting frequency.
    pub frequency: &'a str,
    /// Capacity; blank for the default of 30.
    pub capacity: &'a str,
    /// Description.
    pub description: &'a str,
    /// Preview video URL.
    pub video_url: &'a str,
}

/// A validated course create/update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    /// Course name.
    pub name: String,
    /// Price in whole dollars.
    pub price: u32,
    /// Number of sessions.
    pub sessions: Option<u32>,
    /// Meeting frequency.
    pub frequency: String,
    /// Seat capacity.
    pub capacity: u32,
    /// Description.
    pub description: String,
    /// Preview video URL.
    pub video_url: String,
}

impl CourseDraft {
    /// Validates course form input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCourseDraft` if the name is empty or a
    /// numeric field is not a whole number.
    pub fn parse(input: &CourseDraftInput<'_>) -> Result<Self, DomainError> {
        let name: &str = input.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidCourseDraft {
                field: "name",
                reason: String::from("a course name is required"),
            });
        }

        let price: u32 = parse_whole(input.price, "price")?;

        let sessions: Option<u32> = if input.sessions.trim().is_empty() {
            None
        } else {
            Some(parse_whole(input.sessions, "sessions")?)
        };

        let capacity: u32 = if input.capacity.trim().is_empty() {
            DEFAULT_CAPACITY
        } else {
            parse_whole(input.capacity, "capacity")?
        };

        Ok(Self {
            name: name.to_string(),
            price,
            sessions,
            frequency: input.frequency.trim().to_string(),
            capacity,
            description: input.description.trim().to_string(),
            video_url: input.video_url.trim().to_string(),
        })
    }
}

fn parse_whole(raw: &str, field: &'static str) -> Result<u32, DomainError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| DomainError::InvalidCourseDraft {
            field,
            reason: format!("'{raw}' is not a whole number"),
        })
}

/// A validated registration-window update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowUpdate {
    /// Start, as typed.
    pub start: String,
    /// End, as typed.
    pub end: String,
}

/// Validates a registration window typed by an operator.
///
/// The values are sent as typed; they are parsed only to check them.
///
/// # Errors
///
/// Returns an error if either bound is missing or unparseable, or if the end
/// is not strictly after the start.
pub fn validate_window_update(start: &str, end: &str, tz: Tz) -> Result<WindowUpdate, DomainError> {
    let start: &str = start.trim();
    let end: &str = end.trim();
    if start.is_empty() || end.is_empty() {
        return Err(DomainError::MissingWindowBound);
    }

    let start_ts = parse_timestamp(start, tz).ok_or_else(|| DomainError::InvalidTimestamp {
        value: start.to_string(),
    })?;
    let end_ts = parse_timestamp(end, tz).ok_or_else(|| DomainError::InvalidTimestamp {
        value: end.to_string(),
    })?;

    if start_ts >= end_ts {
        return Err(DomainError::InvalidWindowRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(WindowUpdate {
        start: start.to_string(),
        end: end.to_string(),
    })
}
