// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire shapes exchanged with the registration backend.

use afterclass_domain::{AdminCourse, RegistrationStatistics, RegistrationSummary};
use serde::{Deserialize, Serialize};

/// The registration window as the backend stores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawWindow {
    /// Opening time, as stored.
    pub start: Option<String>,
    /// Closing time, as stored.
    pub end: Option<String>,
}

/// The `{message}` body most endpoints answer with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    /// The server's message, if any.
    pub message: Option<String>,
}

/// Admin login request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The admin password.
    pub password: String,
}

/// Admin login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for later admin requests.
    pub token: String,
}

/// Response of `GET /admin/courses`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminCoursesResponse {
    /// Every course, materials-fee rows included.
    pub courses: Vec<AdminCourse>,
}

/// Response of `GET /admin/registrations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationsResponse {
    /// Every registration.
    pub registrations: Vec<RegistrationSummary>,
    /// Aggregate counts.
    pub statistics: RegistrationStatistics,
}

/// Payment status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentUpdate {
    /// The new payment status.
    pub paid: bool,
}

/// Capacity-only course update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityUpdate {
    /// The new capacity.
    pub capacity: u32,
}
