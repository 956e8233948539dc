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
mod client;
mod config;
mod error;
mod export;
mod probe;
mod request_response;
mod submit;
mod sync;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_PROBE_TIMEOUT, DEFAULT_REQUEST_TIMEOUT,
};
pub use error::{
    ClientError, MALFORMED_RESPONSE_MESSAGE, NETWORK_FAILURE_MESSAGE, ValidationError,
};
pub use export::{EXPORT_HEADERS, export_file_name, export_registrations_csv};
pub use probe::detect_network;
pub use request_response::{
    AdminCoursesResponse, CapacityUpdate, LoginRequest, LoginResponse, MessageResponse,
    PaymentUpdate, RawWindow, RegistrationsResponse,
};
pub use submit::{
    INQUIRY_FAILURE_MESSAGE, INQUIRY_SUCCESS_MESSAGE, REGISTRATION_FAILURE_MESSAGE,
    REGISTRATION_SUCCESS_MESSAGE, submit_inquiry, submit_registration,
};
pub use sync::{
    PageContext, SyncFailure, SyncOutcome, SyncReport, SyncResource, refresh_availability,
    sync_page,
};
