// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Page synchronization.
//!
//! Loading runs in two phases. Phase one fetches the catalog, classes,
//! registration window and course videos concurrently and waits for every
//! one of them to settle. Phase two runs only after that barrier: it needs
//! the course controls built from phase one to fetch and apply availability
//! and to attach video previews.
//!
//! A phase-one failure does not stop phase two. The partially built page is
//! returned together with a report naming each resource that failed.

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::request_response::RawWindow;
use afterclass_domain::{
    AvailabilityIndex, CourseControl, CourseOffering, FormSnapshot, Notification,
    NotificationKind, RegistrationWindow, SupplyControl, WindowState, attach_videos,
    default_supplies, evaluate_window,
};
use std::collections::HashMap;
use time::OffsetDateTime;
use tracing::{error, info, warn};

/// A resource loaded during page synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncResource {
    /// The course catalog.
    Courses,
    /// The class list.
    Classes,
    /// The registration window.
    RegistrationWindow,
    /// Course preview videos.
    Videos,
}

impl SyncResource {
    /// Returns the resource name used in reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Courses => "courses",
            Self::Classes => "classes",
            Self::RegistrationWindow => "registration window",
            Self::Videos => "course videos",
        }
    }
}

impl std::fmt::Display for SyncResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed phase-one fetch.
#[derive(Debug)]
pub struct SyncFailure {
    /// The resource that failed to load.
    pub resource: SyncResource,
    /// Why it failed.
    pub error: ClientError,
}

/// Aggregate result of phase one.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Every phase-one fetch that failed, in launch order.
    pub failures: Vec<SyncFailure>,
}

impl SyncReport {
    /// Returns true if every phase-one fetch succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns true if the named resource failed to load.
    #[must_use]
    pub fn failed(&self, resource: SyncResource) -> bool {
        self.failures.iter().any(|f| f.resource == resource)
    }

    /// Returns the notification to show, if anything failed.
    #[must_use]
    pub fn notification(&self) -> Option<Notification> {
        if self.is_ok() {
            return None;
        }
        let names: Vec<&str> = self.failures.iter().map(|f| f.resource.as_str()).collect();
        Some(Notification::new(
            format!(
                "Page initialization failed ({}), please reload",
                names.join(", ")
            ),
            NotificationKind::Error,
        ))
    }

    fn record<T: Default>(
        &mut self,
        resource: SyncResource,
        result: Result<T, ClientError>,
    ) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                error!(resource = %resource, error = %e, "Failed to load resource");
                self.failures.push(SyncFailure { resource, error: e });
                T::default()
            }
        }
    }
}

/// Everything the registration page shows, as loaded by one sync.
///
/// Each field is written by exactly one fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Course controls in catalog order.
    pub courses: Vec<CourseControl>,
    /// Supply controls in catalog order.
    pub supplies: Vec<SupplyControl>,
    /// Offered class names.
    pub classes: Vec<String>,
    /// The registration window.
    pub window: RegistrationWindow,
    /// Preview video URLs by course name.
    pub videos: HashMap<String, String>,
    /// The last availability fetch, if it succeeded.
    pub availability: Option<AvailabilityIndex>,
}

impl PageContext {
    /// Evaluates the registration window at `now`.
    #[must_use]
    pub fn window_state(&self, now: OffsetDateTime) -> WindowState {
        evaluate_window(now, &self.window)
    }

    /// Returns an empty form over this page's controls.
    ///
    /// Availability already applied to the controls is kept.
    #[must_use]
    pub fn blank_form(&self) -> FormSnapshot {
        let mut form = FormSnapshot {
            courses: self.courses.clone(),
            supplies: self.supplies.clone(),
            ..FormSnapshot::default()
        };
        form.reset();
        form
    }
}

/// Outcome of a page sync.
#[derive(Debug)]
pub struct SyncOutcome {
    /// The page, complete or partial.
    pub context: PageContext,
    /// Phase-one failures.
    pub report: SyncReport,
}

/// Loads the registration page.
pub async fn sync_page(client: &ApiClient) -> SyncOutcome {
    let (courses, classes, window, videos) = futures::join!(
        client.courses(),
        client.classes(),
        client.registration_time(),
        client.course_videos(),
    );

    let mut report = SyncReport::default();
    let courses: Vec<CourseOffering> = report.record(SyncResource::Courses, courses);
    let classes: Vec<String> = report.record(SyncResource::Classes, classes);
    let window: RawWindow = report.record(SyncResource::RegistrationWindow, window);
    let videos: HashMap<String, String> = report.record(SyncResource::Videos, videos);

    let mut context = PageContext {
        courses: courses.iter().map(CourseControl::from_offering).collect(),
        supplies: default_supplies()
            .iter()
            .map(SupplyControl::from_supply)
            .collect(),
        classes,
        window: RegistrationWindow::parse(
            window.start.as_deref(),
            window.end.as_deref(),
            client.config().display_timezone,
        ),
        videos,
        availability: None,
    };

    // Phase two. Only runs once every phase-one fetch has settled.
    context.availability = refresh_availability(client, &mut context.courses)
        .await
        .ok();
    let attached: usize = attach_videos(&mut context.courses, &context.videos);

    info!(
        courses = context.courses.len(),
        classes = context.classes.len(),
        videos = attached,
        failures = report.failures.len(),
        "Page synchronized"
    );

    SyncOutcome { context, report }
}

/// Fetches availability and applies it to the course controls.
///
/// On failure the controls are left as they were.
///
/// # Errors
///
/// Returns the fetch error after logging it.
pub async fn refresh_availability(
    client: &ApiClient,
    controls: &mut [CourseControl],
) -> Result<AvailabilityIndex, ClientError> {
    match client.availability().await {
        Ok(remaining) => {
            let index = AvailabilityIndex::from_remaining(&remaining);
            let applied: usize = index.apply_to(controls);
            info!(reported = index.len(), applied, "Applied course availability");
            Ok(index)
        }
        Err(e) => {
            warn!(error = %e, "Failed to fetch course availability");
            Err(e)
        }
    }
}
