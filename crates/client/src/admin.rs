// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Back-office operations.
//!
//! Every operation here needs the bearer token obtained from `login`. A
//! rejected or expired token surfaces as `ClientError::Backend` with status
//! 401 (`ClientError::is_unauthorized`).

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::request_response::{
    AdminCoursesResponse, CapacityUpdate, LoginRequest, LoginResponse, MessageResponse,
    PaymentUpdate, RawWindow, RegistrationsResponse,
};
use afterclass_domain::{
    AdminCourse, AdminWindowStatus, CourseDraft, RegistrationDetail, RegistrationWindow,
    WindowUpdate, parse_capacity, validate_window_update,
};
use reqwest::Method;
use time::OffsetDateTime;
use tracing::info;

impl ApiClient {
    /// Logs in and keeps the returned token for later requests.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Backend` if the password is rejected.
    pub async fn login(&mut self, password: &str) -> Result<String, ClientError> {
        let request = LoginRequest {
            password: password.to_string(),
        };
        let response: LoginResponse = self.send(Method::POST, "/admin/login", &request).await?;
        info!("Admin login succeeded");
        self.set_token(Some(response.token.clone()));
        Ok(response.token)
    }

    /// Forgets the admin token.
    pub fn logout(&mut self) {
        self.set_token(None);
    }

    /// Fetches the stored registration window, parsed for display.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn registration_window(&self) -> Result<RegistrationWindow, ClientError> {
        let raw: RawWindow = self.registration_time().await?;
        Ok(RegistrationWindow::parse(
            raw.start.as_deref(),
            raw.end.as_deref(),
            self.config().display_timezone,
        ))
    }

    /// Validates and saves a registration window.
    ///
    /// Returns the status badge recomputed from the saved values at `now`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` if a bound is missing or unparseable,
    /// or the end is not after the start; nothing is sent in that case.
    pub async fn save_registration_window(
        &self,
        start: &str,
        end: &str,
        now: OffsetDateTime,
    ) -> Result<AdminWindowStatus, ClientError> {
        let tz = self.config().display_timezone;
        let update: WindowUpdate = validate_window_update(start, end, tz)?;
        let _: MessageResponse = self
            .send(Method::POST, "/admin/settings/registration-time", &update)
            .await?;
        info!(start = %update.start, end = %update.end, "Registration window saved");

        let window = RegistrationWindow::parse(Some(&update.start), Some(&update.end), tz);
        Ok(window.evaluate(now).admin_status())
    }

    /// Fetches every course, materials-fee rows included.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn admin_courses(&self) -> Result<Vec<AdminCourse>, ClientError> {
        let response: AdminCoursesResponse = self.fetch(Method::GET, "/admin/courses").await?;
        Ok(response.courses)
    }

    /// Creates a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn create_course(&self, draft: &CourseDraft) -> Result<Option<String>, ClientError> {
        let response: MessageResponse = self.send(Method::POST, "/admin/course", draft).await?;
        Ok(response.message)
    }

    /// Replaces a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn update_course(
        &self,
        id: i64,
        draft: &CourseDraft,
    ) -> Result<Option<String>, ClientError> {
        let response: MessageResponse = self
            .send(Method::PUT, &format!("/admin/course/{id}"), draft)
            .await?;
        Ok(response.message)
    }

    /// Updates only the capacity of a course.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` unless `capacity` is a whole number
    /// of zero or more; nothing is sent in that case.
    pub async fn update_capacity(
        &self,
        id: i64,
        capacity: &str,
    ) -> Result<Option<String>, ClientError> {
        let update = CapacityUpdate {
            capacity: parse_capacity(capacity)?,
        };
        let response: MessageResponse = self
            .send(Method::PUT, &format!("/admin/course/{id}"), &update)
            .await?;
        Ok(response.message)
    }

    /// Deletes a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn delete_course(&self, id: i64) -> Result<Option<String>, ClientError> {
        let response: MessageResponse = self
            .fetch(Method::DELETE, &format!("/admin/course/{id}"))
            .await?;
        Ok(response.message)
    }

    /// Fetches every registration with aggregate statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn registrations(&self) -> Result<RegistrationsResponse, ClientError> {
        self.fetch(Method::GET, "/admin/registrations").await
    }

    /// Fetches one registration with its line items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn registration_detail(&self, id: i64) -> Result<RegistrationDetail, ClientError> {
        self.fetch(Method::GET, &format!("/admin/registration/{id}"))
            .await
    }

    /// Deletes a registration.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn delete_registration(&self, id: i64) -> Result<Option<String>, ClientError> {
        let response: MessageResponse = self
            .fetch(Method::DELETE, &format!("/admin/registration/{id}"))
            .await?;
        Ok(response.message)
    }

    /// Flips the payment status of a registration.
    ///
    /// `currently_paid` is the status as last displayed; its negation is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn toggle_payment(
        &self,
        id: i64,
        currently_paid: bool,
    ) -> Result<Option<String>, ClientError> {
        let update = PaymentUpdate {
            paid: !currently_paid,
        };
        let response: MessageResponse = self
            .send(
                Method::PUT,
                &format!("/admin/registration/{id}/payment"),
                &update,
            )
            .await?;
        Ok(response.message)
    }
}
