// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Public submission flows: registration and contact inquiry.

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::probe::detect_network;
use crate::sync::{PageContext, refresh_availability};
use afterclass_domain::{
    FormSnapshot, Inquiry, NetworkStatus, SubmissionPayload, WindowState, assemble, local_date,
    validate_inquiry,
};
use time::OffsetDateTime;
use tracing::{info, warn};

/// Shown after a registration when the server sends no message.
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful!";

/// Shown when a registration is rejected without a server message.
pub const REGISTRATION_FAILURE_MESSAGE: &str = "Registration failed, please try again later";

/// Shown after an inquiry when the server sends no message.
pub const INQUIRY_SUCCESS_MESSAGE: &str =
    "Thank you for your question, we will get back to you as soon as possible!";

/// Shown when an inquiry is rejected without a server message.
pub const INQUIRY_FAILURE_MESSAGE: &str = "Submission failed, please try again later";

/// Submits the registration form.
///
/// Connectivity is probed first, then the payload is assembled against the
/// window as evaluated at `now`. After the backend accepts the registration
/// availability is fetched again and re-applied to the page's controls, and
/// `form` is replaced by a blank form built from them.
///
/// Returns the message to show the user.
///
/// # Errors
///
/// Returns `ClientError::Network` when offline, `ClientError::Validation`
/// when the form gate refuses the submission, and the transport error if
/// the request itself fails.
pub async fn submit_registration(
    client: &ApiClient,
    page: &mut PageContext,
    form: &mut FormSnapshot,
    now: OffsetDateTime,
) -> Result<String, ClientError> {
    let network: NetworkStatus = detect_network(client.config()).await;
    let window: WindowState = page.window_state(now);
    let today = local_date(now, client.config().display_timezone);

    let payload: SubmissionPayload = assemble(form, &window, today, network)?;
    info!(
        courses = payload.courses().len(),
        supplies = payload.supplies().len(),
        "Submitting registration"
    );

    let message: Option<String> = client.submit_registration(&payload).await?;

    match refresh_availability(client, &mut page.courses).await {
        Ok(index) => page.availability = Some(index),
        Err(e) => warn!(error = %e, "Availability refresh after submit failed"),
    }
    // The cleared form takes the refreshed controls
    *form = page.blank_form();

    Ok(message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| String::from(REGISTRATION_SUCCESS_MESSAGE)))
}

/// Validates and submits a contact inquiry.
///
/// Returns the message to show the user.
///
/// # Errors
///
/// Returns `ClientError::Validation` if a field is missing or the phone
/// number is not a mobile number; nothing is sent in that case.
pub async fn submit_inquiry(
    client: &ApiClient,
    name: &str,
    phone: &str,
    question: &str,
) -> Result<String, ClientError> {
    let inquiry: Inquiry = validate_inquiry(name, phone, question)?;
    let message: Option<String> = client.submit_inquiry(&inquiry).await?;
    Ok(message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| String::from(INQUIRY_SUCCESS_MESSAGE)))
}
