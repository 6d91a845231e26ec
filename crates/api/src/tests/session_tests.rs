// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for session state and the authorization matrix.

use crate::{AuthError, Operation, Session, SessionManager, authorize};
use crewops_domain::Role;

fn admin() -> Session {
    Session::Authenticated {
        role: Role::Admin,
        principal_id: 1,
        display_name: String::from("Alice Ops"),
    }
}

fn crew() -> Session {
    Session::Authenticated {
        role: Role::CrewMember,
        principal_id: 5,
        display_name: String::from("Jordan Reyes"),
    }
}

const MANAGE_OPERATIONS: [Operation; 8] = [
    Operation::ManageAdmins,
    Operation::ManageCrewMembers,
    Operation::ManageFlights,
    Operation::ManageAirports,
    Operation::ManageAssignments,
    Operation::ManageLeaves,
    Operation::ManageDutyLogs,
    Operation::ManageRegulations,
];

const SELF_VIEW_OPERATIONS: [Operation; 3] = [
    Operation::ViewOwnAssignments,
    Operation::ViewOwnLeaves,
    Operation::ViewOwnDutyLogs,
];

#[test]
fn test_admin_holds_all_manage_operations() {
    let session = admin();
    for operation in MANAGE_OPERATIONS {
        assert!(
            authorize(&session, operation).is_ok(),
            "admin should hold {operation:?}"
        );
    }
    assert!(authorize(&session, Operation::ViewRegulations).is_ok());
}

#[test]
fn test_admin_does_not_hold_self_views() {
    let session = admin();
    for operation in SELF_VIEW_OPERATIONS {
        assert!(
            matches!(
                authorize(&session, operation),
                Err(AuthError::Unauthorized { .. })
            ),
            "admin should not hold {operation:?}"
        );
    }
}

#[test]
fn test_crew_member_holds_only_self_views_and_regulations() {
    let session = crew();
    for operation in SELF_VIEW_OPERATIONS {
        assert!(
            authorize(&session, operation).is_ok(),
            "crew member should hold {operation:?}"
        );
    }
    assert!(authorize(&session, Operation::ViewRegulations).is_ok());

    for operation in MANAGE_OPERATIONS {
        assert!(
            matches!(
                authorize(&session, operation),
                Err(AuthError::Unauthorized { .. })
            ),
            "crew member should not hold {operation:?}"
        );
    }
}

#[test]
fn test_anonymous_holds_nothing() {
    let session = Session::Anonymous;
    for operation in MANAGE_OPERATIONS
        .into_iter()
        .chain(SELF_VIEW_OPERATIONS)
        .chain([Operation::ViewRegulations])
    {
        assert!(
            matches!(
                authorize(&session, operation),
                Err(AuthError::AuthenticationFailed { .. })
            ),
            "anonymous should not hold {operation:?}"
        );
    }
}

#[test]
fn test_session_accessors() {
    assert_eq!(Session::Anonymous.role(), None);
    assert_eq!(Session::Anonymous.principal_id(), None);
    assert_eq!(crew().role(), Some(Role::CrewMember));
    assert_eq!(crew().principal_id(), Some(5));
}

#[test]
fn test_session_manager_round_trip() {
    let mut manager = SessionManager::new();
    assert!(manager.is_empty());

    let token = manager.insert(crew());
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.resolve(&token), crew());

    assert!(manager.remove(&token));
    assert!(!manager.remove(&token));
    assert_eq!(manager.resolve(&token), Session::Anonymous);
}

#[test]
fn test_unknown_token_resolves_to_anonymous() {
    let manager = SessionManager::new();
    assert_eq!(manager.resolve("no-such-token"), Session::Anonymous);
}

#[test]
fn test_tokens_are_unique() {
    let mut manager = SessionManager::new();
    let first = manager.insert(crew());
    let second = manager.insert(crew());
    assert_ne!(first, second);
    assert_eq!(manager.len(), 2);
}
