// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised by local validation before anything is sent to the backend.
///
/// Registration form gating has its own reason codes (`ReasonCode`); this
/// type covers the remaining client-side checks: inquiries, admin input,
/// selections made against the rendered catalog, and configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required inquiry field is empty after trimming.
    MissingInquiryField {
        /// The name of the missing field.
        field: &'static str,
    },
    /// The phone number is not a mobile number of the form `09xxxxxxxx`.
    InvalidPhone(String),
    /// The registration window is missing its start or end.
    MissingWindowBound,
    /// A timestamp could not be parsed.
    InvalidTimestamp {
        /// The raw value that failed to parse.
        value: String,
    },
    /// The registration window does not end after it starts.
    InvalidWindowRange {
        /// The raw start value.
        start: String,
        /// The raw end value.
        end: String,
    },
    /// A capacity value is not a non-negative integer.
    InvalidCapacity(String),
    /// A course draft field is invalid.
    InvalidCourseDraft {
        /// The offending field.
        field: &'static str,
        /// A human-readable description of the problem.
        reason: String,
    },
    /// The named course is not part of the loaded catalog.
    UnknownCourse(String),
    /// The named course is hard-closed and cannot be selected.
    CourseClosed(String),
    /// The named supply is not part of the supply catalog.
    UnknownSupply(String),
    /// The named class is not one of the offered classes.
    UnknownClass(String),
    /// The display timezone name is not a known IANA timezone.
    InvalidTimezone(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInquiryField { field } => write!(f, "Please enter your {field}"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid mobile number '{phone}': expected 10 digits starting with 09 (e.g. 0912345678)"
            ),
            Self::MissingWindowBound => {
                write!(f, "Both a start time and an end time must be set")
            }
            Self::InvalidTimestamp { value } => write!(f, "Invalid timestamp: '{value}'"),
            Self::InvalidWindowRange { start, end } => write!(
                f,
                "Registration end time ({end}) must be later than the start time ({start})"
            ),
            Self::InvalidCapacity(value) => write!(
                f,
                "Invalid capacity '{value}': must be a whole number of zero or more"
            ),
            Self::InvalidCourseDraft { field, reason } => {
                write!(f, "Invalid course {field}: {reason}")
            }
            Self::UnknownCourse(name) => write!(f, "Course '{name}' is not offered"),
            Self::CourseClosed(name) => {
                write!(f, "Course '{name}' is full and not accepting a waitlist")
            }
            Self::UnknownSupply(name) => write!(f, "Supply '{name}' is not offered"),
            Self::UnknownClass(name) => write!(f, "Class '{name}' is not offered"),
            Self::InvalidTimezone(name) => write!(f, "Unknown timezone: '{name}'"),
        }
    }
}

impl std::error::Error for DomainError {}
