// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Course availability classification.
//!
//! The backend reports a remaining-seat count per course name. The count is
//! authoritative only at fetch time, so every refresh classifies every course
//! again from scratch.
//!
//! `-1` is a sentinel meaning "full, no waitlist". Any other value at or
//! below zero means "full, waitlist accepted". Collapsing the two would let
//! users attempt waitlisting on courses the backend has hard-closed.

use crate::page::CourseControl;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Remaining-seat value marking a course as full with no waitlist.
pub const HARD_CLOSED_SENTINEL: i64 = -1;

/// Per-course capacity signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "seats", rename_all = "snake_case")]
pub enum AvailabilitySignal {
    /// Seats remain. The count is always positive.
    Seats(u32),
    /// Full, but new selections join a waitlist.
    FullWaitlistable,
    /// Full and closed; the course cannot be selected.
    FullNoWaitlist,
}

/// Classifies a remaining-seat count.
#[must_use]
pub fn classify(remaining: i64) -> AvailabilitySignal {
    if remaining == HARD_CLOSED_SENTINEL {
        AvailabilitySignal::FullNoWaitlist
    } else if remaining <= 0 {
        AvailabilitySignal::FullWaitlistable
    } else {
        AvailabilitySignal::Seats(u32::try_from(remaining).unwrap_or(u32::MAX))
    }
}

impl AvailabilitySignal {
    /// Returns true if the course control stays selectable.
    #[must_use]
    pub const fn allows_selection(&self) -> bool {
        !matches!(self, Self::FullNoWaitlist)
    }

    /// Returns the annotation shown next to the course.
    #[must_use]
    pub fn note(&self) -> String {
        match self {
            Self::Seats(n) => format!("(remaining: {n})"),
            Self::FullWaitlistable => String::from("(full, waitlist)"),
            Self::FullNoWaitlist => String::from("(full)"),
        }
    }
}

/// Availability signals for one fetch, keyed by course name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityIndex {
    signals: HashMap<String, AvailabilitySignal>,
}

impl AvailabilityIndex {
    /// Classifies every entry of a remaining-seat map.
    #[must_use]
    pub fn from_remaining(remaining: &HashMap<String, i64>) -> Self {
        let signals: HashMap<String, AvailabilitySignal> = remaining
            .iter()
            .map(|(name, count)| (name.clone(), classify(*count)))
            .collect();
        Self { signals }
    }

    /// Returns the signal for a course, if the fetch reported it.
    #[must_use]
    pub fn signal(&self, course: &str) -> Option<AvailabilitySignal> {
        self.signals.get(course).copied()
    }

    /// Number of courses in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Returns true if the fetch reported no courses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Annotates course controls with their signals.
    ///
    /// Controls for courses missing from the index are left untouched.
    /// Returns the number of controls annotated.
    pub fn apply_to(&self, controls: &mut [CourseControl]) -> usize {
        let mut applied: usize = 0;
        for control in controls.iter_mut() {
            if let Some(signal) = self.signal(&control.name) {
                control.apply_signal(signal);
                applied += 1;
            }
        }
        applied
    }
}
