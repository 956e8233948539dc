// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration form view-model.
//!
//! Controls mirror what the form shows: one checkable control per course and
//! per supply, in catalog order. Rendering reads these; the assembler reads
//! their `checked` flags at submit time.

use crate::availability::AvailabilitySignal;
use crate::error::DomainError;
use crate::types::{CourseOffering, PriceTag, Supply};
use std::collections::HashMap;

/// A course checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseControl {
    /// The backend course identifier.
    pub course_id: i64,
    /// The course name.
    pub name: String,
    /// The price carried by the control.
    pub price: PriceTag,
    /// Number of sessions, if published.
    pub sessions: Option<u32>,
    /// Meeting frequency, if published.
    pub frequency: Option<String>,
    /// Whether the control is checked.
    pub checked: bool,
    /// Whether the control refuses interaction.
    pub disabled: bool,
    /// Whether the control's container is dimmed.
    pub dimmed: bool,
    /// The most recent availability signal.
    pub availability: Option<AvailabilitySignal>,
    /// The preview video attached to this course.
    pub video_url: Option<String>,
}

impl CourseControl {
    /// Creates an unchecked, enabled control for a catalog entry.
    #[must_use]
    pub fn from_offering(offering: &CourseOffering) -> Self {
        Self {
            course_id: offering.id,
            name: offering.name.clone(),
            price: PriceTag::from_amount(offering.price),
            sessions: offering.sessions,
            frequency: offering.frequency.clone(),
            checked: false,
            disabled: false,
            dimmed: false,
            availability: None,
            video_url: None,
        }
    }

    /// Updates the control for a fresh availability signal.
    ///
    /// A hard-closed course is disabled, unchecked, and dimmed; any prior
    /// check is discarded. Every other signal re-enables the control.
    pub const fn apply_signal(&mut self, signal: AvailabilitySignal) {
        self.availability = Some(signal);
        if signal.allows_selection() {
            self.disabled = false;
            self.dimmed = false;
        } else {
            self.disabled = true;
            self.checked = false;
            self.dimmed = true;
        }
    }

    /// Returns the descriptive label, e.g. `Ballet 12 sessions $3600 weekly`.
    #[must_use]
    pub fn label(&self) -> String {
        let mut label: String = self.name.clone();
        match self.sessions {
            Some(sessions) => label.push_str(&format!(" {sessions} sessions {}", self.price)),
            None => label.push_str(&format!(" {}", self.price)),
        }
        if let Some(frequency) = self.frequency.as_deref().filter(|f| !f.is_empty()) {
            label.push(' ');
            label.push_str(frequency);
        }
        label
    }
}

/// Replaces the preview videos on course controls.
///
/// Any previously attached video is removed first, then the mapping is
/// applied by course name. Returns the number of controls with a video.
pub fn attach_videos(controls: &mut [CourseControl], videos: &HashMap<String, String>) -> usize {
    let mut attached: usize = 0;
    for control in controls.iter_mut() {
        control.video_url = videos
            .get(&control.name)
            .filter(|url| !url.trim().is_empty())
            .cloned();
        if control.video_url.is_some() {
            attached += 1;
        }
    }
    attached
}

/// A supply checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyControl {
    /// The supply name.
    pub name: String,
    /// The price carried by the control.
    pub price: PriceTag,
    /// Whether the control is checked.
    pub checked: bool,
}

impl SupplyControl {
    /// Creates an unchecked control for a supply.
    #[must_use]
    pub fn from_supply(supply: &Supply) -> Self {
        Self {
            name: supply.name.to_string(),
            price: PriceTag::from_amount(supply.price),
            checked: false,
        }
    }
}

/// The state of the registration form at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    /// The student's name as typed.
    pub name: String,
    /// The student's birthday as typed (`YYYY-MM-DD`).
    pub birthday: String,
    /// The selected class, if any.
    pub class: Option<String>,
    /// Course controls in declaration order.
    pub courses: Vec<CourseControl>,
    /// Supply controls in declaration order.
    pub supplies: Vec<SupplyControl>,
}

impl FormSnapshot {
    /// Checks the named course.
    ///
    /// # Errors
    ///
    /// Returns an error if the course is not rendered or its control is
    /// disabled.
    pub fn check_course(&mut self, name: &str) -> Result<(), DomainError> {
        let control: &mut CourseControl = self
            .courses
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| DomainError::UnknownCourse(name.to_string()))?;

        if control.disabled {
            return Err(DomainError::CourseClosed(name.to_string()));
        }

        control.checked = true;
        Ok(())
    }

    /// Checks the named supply.
    ///
    /// # Errors
    ///
    /// Returns an error if the supply is not rendered.
    pub fn check_supply(&mut self, name: &str) -> Result<(), DomainError> {
        let control: &mut SupplyControl = self
            .supplies
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| DomainError::UnknownSupply(name.to_string()))?;
        control.checked = true;
        Ok(())
    }

    /// Returns the number of checked courses.
    #[must_use]
    pub fn checked_course_count(&self) -> usize {
        self.courses.iter().filter(|c| c.checked).count()
    }

    /// Clears every input, as after a successful submission.
    pub fn reset(&mut self) {
        self.name.clear();
        self.birthday.clear();
        self.class = None;
        for course in &mut self.courses {
            course.checked = false;
        }
        for supply in &mut self.supplies {
            supply.checked = false;
        }
    }
}
