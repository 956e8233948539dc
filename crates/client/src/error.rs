// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for talking to the registration backend.

use afterclass_domain::{AssembleError, DomainError, ReasonCode};
use thiserror::Error;

/// Message shown for any connectivity failure.
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Network connection failed, please check your connection and try again later";

/// Message shown when the backend answers with something unreadable.
pub const MALFORMED_RESPONSE_MESSAGE: &str =
    "The server sent an unexpected response, please try again later";

/// A client-side precondition that failed before any request was made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The registration form gate refused the submission.
    #[error("{0}")]
    Form(ReasonCode),
    /// Operator or inquiry input was rejected.
    #[error("{0}")]
    Input(DomainError),
}

/// Errors raised while talking to the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend could not be reached, or the request timed out.
    #[error("Network failure: {detail}")]
    Network {
        /// What went wrong, for logs.
        detail: String,
    },

    /// The backend answered with a non-2xx status.
    #[error("Backend returned status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Backend {
        /// The HTTP status code.
        status: u16,
        /// The `message` field of the response body, if there was one.
        message: Option<String>,
    },

    /// The response body was not the JSON that was expected.
    #[error("Malformed response: {detail}")]
    MalformedResponse {
        /// What failed to decode, for logs.
        detail: String,
    },

    /// A local check failed; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ClientError {
    /// Returns true if the backend rejected the admin credentials.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Backend { status: 401, .. })
    }

    /// Returns the message to show the user.
    ///
    /// `fallback` is used when the backend rejected the request without
    /// saying why.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Network { .. } => String::from(NETWORK_FAILURE_MESSAGE),
            Self::Backend { message, .. } => message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(fallback)
                .to_string(),
            Self::MalformedResponse { .. } => String::from(MALFORMED_RESPONSE_MESSAGE),
            Self::Validation(err) => err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse {
                detail: err.to_string(),
            }
        } else {
            Self::Network {
                detail: err.to_string(),
            }
        }
    }
}

impl From<DomainError> for ClientError {
    fn from(err: DomainError) -> Self {
        Self::Validation(ValidationError::Input(err))
    }
}

impl From<AssembleError> for ClientError {
    fn from(err: AssembleError) -> Self {
        match err {
            AssembleError::Offline => Self::Network {
                detail: String::from("connectivity probe reported offline"),
            },
            AssembleError::Rejected(reason) => Self::Validation(ValidationError::Form(reason)),
        }
    }
}
