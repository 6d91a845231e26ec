// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod assignment_tests;
mod backend_validation_tests;
mod delete_policy_tests;
mod duty_log_tests;
mod flight_airport_tests;
mod principal_tests;

use crate::NewCrewMember;

/// Creates a crew member profile for tests, keyed by email so multiple
/// crew members can coexist in one database.
pub fn sample_crew_profile(email: &str) -> NewCrewMember {
    NewCrewMember {
        first_name: String::from("Jordan"),
        last_name: String::from("Reyes"),
        date_of_birth: String::from("1990-03-12"),
        crew_role: String::from("Pilot"),
        hire_date: String::from("2018-06-01"),
        email: String::from(email),
        phone_number: String::from("555-0100"),
    }
}
