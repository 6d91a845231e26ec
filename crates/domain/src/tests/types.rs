// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{CrewMember, CrewStatus, Role};
use std::str::FromStr;

#[test]
fn test_role_round_trip() {
    assert_eq!(Role::from_str("Admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("CrewMember").unwrap(), Role::CrewMember);
    assert_eq!(Role::Admin.as_str(), "Admin");
    assert_eq!(Role::CrewMember.as_str(), "CrewMember");
}

#[test]
fn test_invalid_role_rejected() {
    let result = Role::from_str("Superuser");
    assert_eq!(
        result,
        Err(DomainError::InvalidRole(String::from("Superuser")))
    );
}

#[test]
fn test_crew_status_defaults_to_active() {
    assert_eq!(CrewStatus::default(), CrewStatus::Active);
}

#[test]
fn test_crew_status_round_trip() {
    for status in [
        CrewStatus::Active,
        CrewStatus::Inactive,
        CrewStatus::OnLeave,
        CrewStatus::Suspended,
    ] {
        assert_eq!(CrewStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_invalid_crew_status_rejected() {
    let result = CrewStatus::from_str("Retired");
    assert_eq!(
        result,
        Err(DomainError::InvalidStatus(String::from("Retired")))
    );
}

#[test]
fn test_crew_member_display_name() {
    let member = CrewMember {
        crew_id: 1,
        first_name: String::from("Alice"),
        last_name: String::from("Nguyen"),
        date_of_birth: String::from("1990-04-02"),
        crew_role: String::from("Pilot"),
        hire_date: String::from("2015-06-01"),
        email: String::from("alice@example.com"),
        phone_number: String::from("555-0001"),
        status: CrewStatus::Active,
    };
    assert_eq!(member.display_name(), "Alice Nguyen");
}
