// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AssembleError, DomainError, ReasonCode};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::MissingInquiryField { field: "name" };
    assert_eq!(format!("{err}"), "Please enter your name");

    let err: DomainError = DomainError::MissingWindowBound;
    assert_eq!(
        format!("{err}"),
        "Both a start time and an end time must be set"
    );

    let err: DomainError = DomainError::InvalidCapacity(String::from("x"));
    assert_eq!(
        format!("{err}"),
        "Invalid capacity 'x': must be a whole number of zero or more"
    );

    let err: DomainError = DomainError::UnknownCourse(String::from("Tap"));
    assert_eq!(format!("{err}"), "Course 'Tap' is not offered");

    let err: DomainError = DomainError::CourseClosed(String::from("Ballet"));
    assert_eq!(
        format!("{err}"),
        "Course 'Ballet' is full and not accepting a waitlist"
    );

    let err: DomainError = DomainError::InvalidTimezone(String::from("Mars/Base"));
    assert_eq!(format!("{err}"), "Unknown timezone: 'Mars/Base'");
}

#[test]
fn test_assemble_error_display() {
    assert_eq!(
        AssembleError::Rejected(ReasonCode::NoCourseSelected).to_string(),
        "Please select at least one course"
    );
    assert!(AssembleError::Offline.to_string().starts_with("Network connection failed"));
}
