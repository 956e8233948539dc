// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration window evaluation.
//!
//! The backend publishes an optional start and end for the period during
//! which registrations are accepted. This module turns that pair and the
//! current time into a `WindowState`, and maps the state to the posture of
//! the registration form.
//!
//! ## Invariants
//!
//! - Evaluation is total: every `(now, start, end)` yields exactly one state
//! - A missing or unparseable bound yields `NotConfigured`
//! - `NotYetOpen` always reports at least one day left (ceiling, not floor)
//! - Both bounds are inclusive: `now == start` and `now == end` are `Open`
//! - `start < end` is enforced when an operator saves the window, not here

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::clock::{format_local, parse_timestamp};

const NANOS_PER_DAY: i128 = 86_400_000_000_000;

/// The configured registration period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistrationWindow {
    /// When registration opens.
    pub start: Option<OffsetDateTime>,
    /// When registration closes.
    pub end: Option<OffsetDateTime>,
}

impl RegistrationWindow {
    /// Creates a window from already-parsed bounds.
    #[must_use]
    pub const fn new(start: Option<OffsetDateTime>, end: Option<OffsetDateTime>) -> Self {
        Self { start, end }
    }

    /// Builds a window from the raw strings published by the backend.
    ///
    /// A bound that is absent, empty, or unparseable becomes `None`.
    #[must_use]
    pub fn parse(start: Option<&str>, end: Option<&str>, tz: Tz) -> Self {
        Self {
            start: start.and_then(|raw| parse_timestamp(raw, tz)),
            end: end.and_then(|raw| parse_timestamp(raw, tz)),
        }
    }

    /// Evaluates this window at `now`.
    #[must_use]
    pub fn evaluate(&self, now: OffsetDateTime) -> WindowState {
        evaluate_window(now, self)
    }
}

/// The state of the registration window at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WindowState {
    /// No usable window is configured; treated as open.
    NotConfigured,
    /// The window has not opened yet.
    NotYetOpen {
        /// Whole days until opening, rounded up. Always at least 1.
        days_left: u64,
    },
    /// Registrations are accepted.
    Open,
    /// The window has ended.
    Closed,
}

/// Evaluates the registration window at `now`.
#[must_use]
pub fn evaluate_window(now: OffsetDateTime, window: &RegistrationWindow) -> WindowState {
    let (Some(start), Some(end)) = (window.start, window.end) else {
        return WindowState::NotConfigured;
    };

    if now < start {
        return WindowState::NotYetOpen {
            days_left: days_until(now, start),
        };
    }

    if now > end {
        return WindowState::Closed;
    }

    WindowState::Open
}

/// Whole days from `now` until `later`, rounded up.
fn days_until(now: OffsetDateTime, later: OffsetDateTime) -> u64 {
    let gap: i128 = (later - now).whole_nanoseconds();
    let days: i128 = (gap + NANOS_PER_DAY - 1) / NANOS_PER_DAY;
    u64::try_from(days.max(1)).unwrap_or(u64::MAX)
}

impl WindowState {
    /// Returns true if the window permits a submission.
    ///
    /// `NotConfigured` is treated optimistically as open.
    #[must_use]
    pub const fn accepts_submissions(&self) -> bool {
        matches!(self, Self::Open | Self::NotConfigured)
    }

    /// Maps this state to the posture of the registration form.
    ///
    /// `window` supplies the opening time shown in the countdown notice.
    #[must_use]
    pub const fn posture(&self, window: &RegistrationWindow) -> WindowPosture {
        match self {
            Self::NotConfigured | Self::Open => WindowPosture {
                notice: None,
                submit_enabled: true,
                submit_label: "Submit registration",
            },
            Self::NotYetOpen { days_left } => WindowPosture {
                notice: Some(WindowNotice::Countdown {
                    opens_at: window.start,
                    days_left: *days_left,
                }),
                submit_enabled: false,
                submit_label: "Registration not open yet",
            },
            Self::Closed => WindowPosture {
                notice: Some(WindowNotice::Closed),
                submit_enabled: false,
                submit_label: "Registration closed",
            },
        }
    }

    /// Returns the status badge shown in the admin back office.
    #[must_use]
    pub fn admin_status(&self) -> AdminWindowStatus {
        match self {
            Self::NotConfigured => AdminWindowStatus {
                label: String::from("Registration time not configured"),
                tone: StatusTone::Warning,
            },
            Self::NotYetOpen { days_left } => AdminWindowStatus {
                label: format!("Registration not open yet ({days_left} days left)"),
                tone: StatusTone::Warning,
            },
            Self::Closed => AdminWindowStatus {
                label: String::from("Registration closed"),
                tone: StatusTone::Danger,
            },
            Self::Open => AdminWindowStatus {
                label: String::from("Registration open"),
                tone: StatusTone::Success,
            },
        }
    }
}

/// The form posture derived from a window state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPosture {
    /// The notice to display, or `None` when the notice is hidden.
    pub notice: Option<WindowNotice>,
    /// Whether the submit control is enabled.
    pub submit_enabled: bool,
    /// The label on the submit control.
    pub submit_label: &'static str,
}

/// A visible window notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowNotice {
    /// Registration opens later.
    Countdown {
        /// The opening instant.
        opens_at: Option<OffsetDateTime>,
        /// Whole days until opening, rounded up.
        days_left: u64,
    },
    /// Registration has ended.
    Closed,
}

impl WindowNotice {
    /// Renders the notice text, showing times in the display timezone.
    #[must_use]
    pub fn message(&self, tz: Tz) -> String {
        match self {
            Self::Countdown {
                opens_at,
                days_left,
            } => {
                let opens: String =
                    opens_at.map_or_else(|| String::from("-"), |ts| format_local(ts, tz));
                format!(
                    "Registration is not open yet. Opens at {opens} | {days_left} day(s) to go"
                )
            }
            Self::Closed => String::from(
                "Registration has closed. Thank you for your interest, this term's registration is over",
            ),
        }
    }
}

/// Tone of an admin status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Attention needed.
    Warning,
    /// Closed or failed.
    Danger,
    /// Active.
    Success,
}

/// The admin-side registration status badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminWindowStatus {
    /// Badge text.
    pub label: String,
    /// Badge tone.
    pub tone: StatusTone,
}
