// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A contact inquiry from a parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    /// Contact name.
    pub name: String,
    /// Mobile number, as entered (dashes allowed).
    pub phone: String,
    /// The question.
    pub question: String,
}

/// Validates and normalizes a contact inquiry.
///
/// Fields are trimmed and checked in order: name, phone, question. The phone
/// must be a mobile number, `09` followed by eight digits, once dashes are
/// removed.
///
/// # Errors
///
/// Returns `DomainError::MissingInquiryField` for the first empty field, or
/// `DomainError::InvalidPhone` if the number is not a mobile number.
pub fn validate_inquiry(name: &str, phone: &str, question: &str) -> Result<Inquiry, DomainError> {
    let name: &str = name.trim();
    let phone: &str = phone.trim();
    let question: &str = question.trim();

    if name.is_empty() {
        return Err(DomainError::MissingInquiryField { field: "name" });
    }
    if phone.is_empty() {
        return Err(DomainError::MissingInquiryField {
            field: "phone number",
        });
    }
    if question.is_empty() {
        return Err(DomainError::MissingInquiryField { field: "question" });
    }

    if !is_mobile_number(phone) {
        return Err(DomainError::InvalidPhone(phone.to_string()));
    }

    Ok(Inquiry {
        name: name.to_string(),
        phone: phone.to_string(),
        question: question.to_string(),
    })
}

fn is_mobile_number(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| *c != '-').collect();
    digits.len() == 10 && digits.starts_with("09") && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_dashed_mobile_number() {
        let inquiry = validate_inquiry(" Amy ", "0912-345-678", " When? ").unwrap();
        assert_eq!(inquiry.name, "Amy");
        assert_eq!(inquiry.phone, "0912-345-678");
        assert_eq!(inquiry.question, "When?");
    }

    #[test]
    fn test_reports_first_missing_field() {
        assert_eq!(
            validate_inquiry("", "", ""),
            Err(DomainError::MissingInquiryField { field: "name" })
        );
        assert_eq!(
            validate_inquiry("Amy", "  ", ""),
            Err(DomainError::MissingInquiryField {
                field: "phone number"
            })
        );
        assert_eq!(
            validate_inquiry("Amy", "0912345678", ""),
            Err(DomainError::MissingInquiryField { field: "question" })
        );
    }

    #[test]
    fn test_rejects_non_mobile_numbers() {
        for phone in ["0212345678", "091234567", "09123456789", "09a2345678", "+886912345678"] {
            assert!(
                matches!(
                    validate_inquiry("Amy", phone, "Hi"),
                    Err(DomainError::InvalidPhone(_))
                ),
                "{phone} should be rejected"
            );
        }
    }
}
