// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use afterclass_domain::{AssembleError, DomainError, ReasonCode};

use crate::{ClientError, MALFORMED_RESPONSE_MESSAGE, ValidationError};

#[test]
fn test_backend_message_falls_back_when_blank() {
    let err = ClientError::Backend {
        status: 400,
        message: Some(String::from("  ")),
    };
    assert_eq!(err.user_message("Update failed"), "Update failed");
    assert!(!err.is_unauthorized());
}

#[test]
fn test_malformed_response_message() {
    let err = ClientError::MalformedResponse {
        detail: String::from("expected value at line 1 column 1"),
    };
    assert_eq!(err.user_message("ignored"), MALFORMED_RESPONSE_MESSAGE);
}

#[test]
fn test_assemble_errors_convert() {
    assert!(matches!(
        ClientError::from(AssembleError::Offline),
        ClientError::Network { .. }
    ));
    assert!(matches!(
        ClientError::from(AssembleError::Rejected(ReasonCode::FutureBirthday)),
        ClientError::Validation(ValidationError::Form(ReasonCode::FutureBirthday))
    ));
}

#[test]
fn test_domain_errors_convert() {
    let err = ClientError::from(DomainError::MissingWindowBound);
    assert_eq!(
        err.to_string(),
        "Both a start time and an end time must be set"
    );
}
