// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submit gating for the registration form.
//!
//! The gate combines the window state with what the user has filled in and
//! surfaces at most one reason. Reasons are checked in a fixed order:
//!
//! 1. Window (not yet open, closed)
//! 2. Missing required field (name, birthday, class)
//! 3. Birthday in the future
//! 4. No course selected
//!
//! A user learns the form is closed before being told which field is missing.

use crate::clock::parse_date;
use crate::page::FormSnapshot;
use crate::registration_window::WindowState;
use serde::{Deserialize, Serialize};
use time::Date;

/// Why a submission is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// The registration window has not opened.
    WindowNotYetOpen,
    /// The registration window has ended.
    WindowClosed,
    /// Name, birthday, or class is missing.
    MissingRequiredField,
    /// The birthday is after today.
    FutureBirthday,
    /// No course is checked. Supplies alone do not count.
    NoCourseSelected,
}

impl ReasonCode {
    /// Returns the stable string form of this reason.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WindowNotYetOpen => "window_not_yet_open",
            Self::WindowClosed => "window_closed",
            Self::MissingRequiredField => "missing_required_field",
            Self::FutureBirthday => "future_birthday",
            Self::NoCourseSelected => "no_course_selected",
        }
    }

    /// Returns the message shown to the user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::WindowNotYetOpen => "Registration is not open yet",
            Self::WindowClosed => "Registration has closed",
            Self::MissingRequiredField => {
                "Please fill in the student's name, birthday and class"
            }
            Self::FutureBirthday => "Invalid birthday: the date cannot be in the future",
            Self::NoCourseSelected => "Please select at least one course",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// What the gate needs to know about the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormFacts {
    /// Name, birthday, and class are all present.
    pub has_required_fields: bool,
    /// The birthday is strictly after today's date.
    pub birthday_in_future: bool,
    /// At least one course is checked.
    pub has_course: bool,
}

impl FormFacts {
    /// Derives the facts from a form snapshot.
    ///
    /// A birthday that is not a valid `YYYY-MM-DD` date counts as missing.
    /// Only the calendar date is compared; `today` is the caller's local date.
    #[must_use]
    pub fn from_snapshot(snapshot: &FormSnapshot, today: Date) -> Self {
        let birthday: Option<Date> = parse_date(&snapshot.birthday);
        let has_class: bool = snapshot
            .class
            .as_deref()
            .is_some_and(|class| !class.trim().is_empty());

        Self {
            has_required_fields: !snapshot.name.trim().is_empty()
                && birthday.is_some()
                && has_class,
            birthday_in_future: birthday.is_some_and(|date| date > today),
            has_course: snapshot.checked_course_count() > 0,
        }
    }
}

/// Outcome of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The form may be submitted.
    Allowed,
    /// The form may not be submitted, for the first applicable reason.
    Blocked(ReasonCode),
}

impl GateDecision {
    /// Returns true if submission is allowed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns the blocking reason, if any.
    #[must_use]
    pub const fn reason(&self) -> Option<ReasonCode> {
        match self {
            Self::Allowed => None,
            Self::Blocked(reason) => Some(*reason),
        }
    }
}

/// Decides whether the form may be submitted.
#[must_use]
pub const fn can_submit(window: &WindowState, facts: &FormFacts) -> GateDecision {
    match window {
        WindowState::NotYetOpen { .. } => return GateDecision::Blocked(ReasonCode::WindowNotYetOpen),
        WindowState::Closed => return GateDecision::Blocked(ReasonCode::WindowClosed),
        WindowState::Open | WindowState::NotConfigured => {}
    }

    if !facts.has_required_fields {
        return GateDecision::Blocked(ReasonCode::MissingRequiredField);
    }

    if facts.birthday_in_future {
        return GateDecision::Blocked(ReasonCode::FutureBirthday);
    }

    if !facts.has_course {
        return GateDecision::Blocked(ReasonCode::NoCourseSelected);
    }

    GateDecision::Allowed
}
