// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assembly of the registration payload from a form snapshot.
//!
//! ## Invariants
//!
//! - Connectivity is checked before any field is read; being offline is its
//!   own failure kind, distinct from validation
//! - Validation reuses the gate's reason codes and ordering
//! - Courses and supplies keep control declaration order (never sorted)
//! - Prices are copied verbatim from the controls
//! - The payload is immutable once built

use crate::gate::{FormFacts, GateDecision, ReasonCode, can_submit};
use crate::page::FormSnapshot;
use crate::registration_window::WindowState;
use crate::types::LineItem;
use serde::{Deserialize, Serialize};
use time::Date;

/// Whether the client currently has network connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStatus {
    /// The backend is reachable.
    Online,
    /// No connectivity was detected.
    Offline,
}

/// Why a payload could not be assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssembleError {
    /// The client is offline; no field was read.
    Offline,
    /// A local precondition failed.
    Rejected(ReasonCode),
}

impl std::fmt::Display for AssembleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Offline => write!(
                f,
                "Network connection failed, the registration cannot be sent. Please check your connection"
            ),
            Self::Rejected(reason) => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for AssembleError {}

/// The registration sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    name: String,
    birthday: String,
    #[serde(rename = "class")]
    class_name: String,
    courses: Vec<LineItem>,
    supplies: Vec<LineItem>,
}

impl SubmissionPayload {
    /// The student's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The student's birthday (`YYYY-MM-DD`).
    #[must_use]
    pub fn birthday(&self) -> &str {
        &self.birthday
    }

    /// The selected class.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Selected courses in control order.
    #[must_use]
    pub fn courses(&self) -> &[LineItem] {
        &self.courses
    }

    /// Selected supplies in control order.
    #[must_use]
    pub fn supplies(&self) -> &[LineItem] {
        &self.supplies
    }
}

/// Builds the registration payload.
///
/// # Arguments
///
/// * `snapshot` - The form as it is now
/// * `window` - The evaluated registration window
/// * `today` - The local calendar date
/// * `network` - The connectivity detected just before submitting
///
/// # Errors
///
/// Returns `AssembleError::Offline` if `network` is offline, otherwise
/// `AssembleError::Rejected` with the first gate reason that applies.
pub fn assemble(
    snapshot: &FormSnapshot,
    window: &WindowState,
    today: Date,
    network: NetworkStatus,
) -> Result<SubmissionPayload, AssembleError> {
    if network == NetworkStatus::Offline {
        return Err(AssembleError::Offline);
    }

    let facts: FormFacts = FormFacts::from_snapshot(snapshot, today);
    if let GateDecision::Blocked(reason) = can_submit(window, &facts) {
        return Err(AssembleError::Rejected(reason));
    }

    let courses: Vec<LineItem> = snapshot
        .courses
        .iter()
        .filter(|c| c.checked)
        .map(|c| LineItem::new(c.name.clone(), c.price.clone()))
        .collect();

    let supplies: Vec<LineItem> = snapshot
        .supplies
        .iter()
        .filter(|s| s.checked)
        .map(|s| LineItem::new(s.name.clone(), s.price.clone()))
        .collect();

    Ok(SubmissionPayload {
        name: snapshot.name.clone(),
        birthday: snapshot.birthday.clone(),
        // the gate guarantees a class is present
        class_name: snapshot.class.clone().unwrap_or_default(),
        courses,
        supplies,
    })
}
