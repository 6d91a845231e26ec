// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for authentication and account registration.

use super::{
    ADMIN_PASSWORD, CREW_PASSWORD, register_admin_request, register_crew_request, test_persistence,
};
use crate::{ApiError, AuthError, AuthenticationService, Session};
use crewops_domain::Role;

#[test]
fn test_register_and_login_admin() {
    let mut persistence = test_persistence();

    let request = register_admin_request("alice@crewops.test");
    let admin_id = AuthenticationService::register_admin(&mut persistence, &request).unwrap();

    let session = AuthenticationService::login(
        &mut persistence,
        Role::Admin,
        "alice@crewops.test",
        ADMIN_PASSWORD,
    )
    .unwrap();

    assert_eq!(
        session,
        Session::Authenticated {
            role: Role::Admin,
            principal_id: admin_id,
            display_name: String::from("Alice Ops"),
        }
    );
}

#[test]
fn test_register_and_login_crew_member() {
    let mut persistence = test_persistence();

    let request = register_crew_request("jordan@crewops.test");
    let crew_id = AuthenticationService::register_crew_member(&mut persistence, &request).unwrap();

    let session = AuthenticationService::login(
        &mut persistence,
        Role::CrewMember,
        "jordan@crewops.test",
        CREW_PASSWORD,
    )
    .unwrap();

    assert_eq!(
        session,
        Session::Authenticated {
            role: Role::CrewMember,
            principal_id: crew_id,
            display_name: String::from("Jordan Reyes"),
        }
    );
}

#[test]
fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let mut persistence = test_persistence();

    let request = register_admin_request("alice@crewops.test");
    AuthenticationService::register_admin(&mut persistence, &request).unwrap();

    let wrong_password = AuthenticationService::login(
        &mut persistence,
        Role::Admin,
        "alice@crewops.test",
        "not-the-password",
    )
    .unwrap_err();
    let unknown_email = AuthenticationService::login(
        &mut persistence,
        Role::Admin,
        "nobody@crewops.test",
        ADMIN_PASSWORD,
    )
    .unwrap_err();

    // Both failure modes must present the same error
    assert_eq!(wrong_password, unknown_email);
    assert!(matches!(
        wrong_password,
        AuthError::AuthenticationFailed { .. }
    ));
}

#[test]
fn test_admin_email_cannot_log_in_as_crew_member() {
    let mut persistence = test_persistence();

    let request = register_admin_request("alice@crewops.test");
    AuthenticationService::register_admin(&mut persistence, &request).unwrap();

    let result = AuthenticationService::login(
        &mut persistence,
        Role::CrewMember,
        "alice@crewops.test",
        ADMIN_PASSWORD,
    );
    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_register_admin_rejects_weak_password() {
    let mut persistence = test_persistence();

    let mut request = register_admin_request("alice@crewops.test");
    request.password = String::from("short");

    let result = AuthenticationService::register_admin(&mut persistence, &request);
    assert!(matches!(
        result,
        Err(ApiError::PasswordPolicyViolation { .. })
    ));
}

#[test]
fn test_register_admin_rejects_malformed_email() {
    let mut persistence = test_persistence();

    let mut request = register_admin_request("not-an-email");
    request.email = String::from("not-an-email");

    let result = AuthenticationService::register_admin(&mut persistence, &request);
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_register_crew_member_rejects_unknown_status() {
    let mut persistence = test_persistence();

    let mut request = register_crew_request("jordan@crewops.test");
    request.status = Some(String::from("Vacationing"));

    let result = AuthenticationService::register_crew_member(&mut persistence, &request);
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_register_crew_member_with_explicit_status() {
    let mut persistence = test_persistence();

    let mut request = register_crew_request("jordan@crewops.test");
    request.status = Some(String::from("OnLeave"));

    let crew_id = AuthenticationService::register_crew_member(&mut persistence, &request).unwrap();
    let member = persistence.get_crew_member_by_id(crew_id).unwrap().unwrap();
    assert_eq!(member.status, crewops_domain::CrewStatus::OnLeave);
}
