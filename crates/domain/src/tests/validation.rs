// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::validate_email;

#[test]
fn test_valid_emails() {
    assert!(validate_email("alice@x.com").is_ok());
    assert!(validate_email("crew.member@airline.example").is_ok());
}

#[test]
fn test_invalid_emails() {
    for email in ["", "no-at-sign", "@missing.local", "missing.domain@", "a@b@c", " padded@x.com"] {
        assert_eq!(
            validate_email(email),
            Err(DomainError::InvalidEmail(email.to_string())),
            "expected '{email}' to be rejected"
        );
    }
}
