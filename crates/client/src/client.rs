// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP transport for the registration backend.
//!
//! Every request carries `Content-Type: application/json` and, once a token
//! is held, `Authorization: Bearer <token>`. Responses are classified here:
//! a non-2xx status becomes `ClientError::Backend` carrying the body's
//! `message` when it has one, and a 2xx body that does not decode becomes
//! `ClientError::MalformedResponse`. An empty 2xx body is read as `{}`, so
//! message-only replies succeed without a message.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::request_response::{MessageResponse, RawWindow};
use afterclass_domain::{CourseOffering, Inquiry, SubmissionPayload};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Client for the registration backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http: reqwest::Client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        let token: Option<String> = config.admin_token.clone();
        Ok(Self {
            http,
            config,
            token,
        })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The bearer token currently held, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Replaces the bearer token.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn request(&self, method: Method, target: &str) -> RequestBuilder {
        let url: String = self.config.resolve_url(target);
        debug!(%method, url = %url, "Sending request");

        let builder: RequestBuilder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        match self.token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request without a body and decodes the JSON response.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        target: &str,
    ) -> Result<T, ClientError> {
        let response: Response = self.request(method, target).send().await?;
        read_json(response).await
    }

    /// Sends a JSON body and decodes the JSON response.
    pub(crate) async fn send<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        method: Method,
        target: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response: Response = self.request(method, target).json(body).send().await?;
        read_json(response).await
    }

    /// Fetches the course catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a course list.
    pub async fn courses(&self) -> Result<Vec<CourseOffering>, ClientError> {
        self.fetch(Method::GET, "/api/courses").await
    }

    /// Fetches the offered class names.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a string list.
    pub async fn classes(&self) -> Result<Vec<String>, ClientError> {
        self.fetch(Method::GET, "/api/classes").await
    }

    /// Fetches the stored registration window.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn registration_time(&self) -> Result<RawWindow, ClientError> {
        self.fetch(Method::GET, "/api/settings/registration-time")
            .await
    }

    /// Fetches remaining seats per course name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn availability(&self) -> Result<HashMap<String, i64>, ClientError> {
        self.fetch(Method::GET, "/api/courses/availability").await
    }

    /// Fetches preview video URLs per course name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn course_videos(&self) -> Result<HashMap<String, String>, ClientError> {
        self.fetch(Method::GET, "/api/course-videos").await
    }

    /// Posts a registration.
    ///
    /// Returns the server's message, if it sent one.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn submit_registration(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<Option<String>, ClientError> {
        let response: MessageResponse = self
            .send(Method::POST, "/submit-registration", payload)
            .await?;
        Ok(response.message)
    }

    /// Posts a contact inquiry.
    ///
    /// Returns the server's message, if it sent one.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn submit_inquiry(&self, inquiry: &Inquiry) -> Result<Option<String>, ClientError> {
        let response: MessageResponse = self.send(Method::POST, "/api/inquiries", inquiry).await?;
        Ok(response.message)
    }
}

/// Classifies a response and decodes its JSON body.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message: Option<String> = serde_json::from_slice::<MessageResponse>(&body)
            .ok()
            .and_then(|m| m.message);
        warn!(status = status.as_u16(), message = ?message, "Backend rejected request");
        return Err(ClientError::Backend {
            status: status.as_u16(),
            message,
        });
    }

    // 204 and empty 200 replies decode as an empty object
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        &body
    };

    serde_json::from_slice(body).map_err(|e| ClientError::MalformedResponse {
        detail: e.to_string(),
    })
}
