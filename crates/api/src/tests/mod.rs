// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod auth_tests;
mod session_tests;

use crewops_domain::Role;
use crewops_persistence::Persistence;

use crate::{AuthenticationService, RegisterAdminRequest, RegisterCrewMemberRequest, Session};

pub const ADMIN_PASSWORD: &str = "Adm1nPass!";
pub const CREW_PASSWORD: &str = "Fly1ngHigh";

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn register_admin_request(email: &str) -> RegisterAdminRequest {
    RegisterAdminRequest {
        name: String::from("Alice Ops"),
        email: String::from(email),
        phone: String::from("555-0101"),
        password: String::from(ADMIN_PASSWORD),
    }
}

pub fn register_crew_request(email: &str) -> RegisterCrewMemberRequest {
    RegisterCrewMemberRequest {
        first_name: String::from("Jordan"),
        last_name: String::from("Reyes"),
        date_of_birth: String::from("1990-03-12"),
        crew_role: String::from("Pilot"),
        hire_date: String::from("2018-06-01"),
        email: String::from(email),
        phone_number: String::from("555-0100"),
        status: None,
        password: String::from(CREW_PASSWORD),
    }
}

/// Registers an admin and logs them in.
pub fn admin_session(persistence: &mut Persistence) -> Session {
    let request = register_admin_request("alice@crewops.test");
    AuthenticationService::register_admin(persistence, &request).expect("Failed to register admin");
    AuthenticationService::login(persistence, Role::Admin, "alice@crewops.test", ADMIN_PASSWORD)
        .expect("Failed to log in admin")
}

/// Registers a crew member and logs them in, returning their row ID and session.
pub fn crew_session(persistence: &mut Persistence, email: &str) -> (i64, Session) {
    let request = register_crew_request(email);
    let crew_id = AuthenticationService::register_crew_member(persistence, &request)
        .expect("Failed to register crew member");
    let session = AuthenticationService::login(persistence, Role::CrewMember, email, CREW_PASSWORD)
        .expect("Failed to log in crew member");
    (crew_id, session)
}
