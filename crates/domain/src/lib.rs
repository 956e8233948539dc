// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod admin;
mod availability;
mod clock;
mod error;
mod gate;
mod inquiry;
mod notification;
mod page;
mod registration_window;
mod submission;
mod types;
mod video;

#[cfg(test)]
mod tests;

pub use admin::{
    AdminCourse, CapacityLevel, CourseDraft, CourseDraftInput, MATERIALS_FEE_MARKER,
    RegistrationDetail, RegistrationStatistics, RegistrationSummary, WindowUpdate,
    filter_registrations, parse_capacity, validate_window_update, visible_courses,
};
pub use availability::{AvailabilityIndex, AvailabilitySignal, HARD_CLOSED_SENTINEL, classify};
pub use clock::{format_local, local_date, parse_date, parse_timestamp, parse_timezone};
pub use error::DomainError;
pub use gate::{FormFacts, GateDecision, ReasonCode, can_submit};
pub use inquiry::{Inquiry, validate_inquiry};
pub use notification::{Notification, NotificationKind};
pub use page::{CourseControl, FormSnapshot, SupplyControl, attach_videos};
pub use registration_window::{
    AdminWindowStatus, RegistrationWindow, StatusTone, WindowNotice, WindowPosture, WindowState,
    evaluate_window,
};
pub use submission::{AssembleError, NetworkStatus, SubmissionPayload, assemble};

// Re-export public types
pub use types::{CourseOffering, LineItem, PriceTag, Supply, default_supplies};
pub use video::VideoEmbed;
