// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for crew assignment persistence operations.

use super::sample_crew_profile;
use crate::{Persistence, PersistenceError};

fn seed_crew_and_flight(persistence: &mut Persistence) -> (i64, i64) {
    let crew_id = persistence
        .create_crew_member(&sample_crew_profile("jordan@crewops.test"), "pw", None)
        .unwrap();
    let flight_id = persistence
        .create_flight("CO101", "SEA", "DEN", "Scheduled")
        .unwrap();
    (crew_id, flight_id)
}

#[test]
fn test_create_assignment_and_get_by_id() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (crew_id, flight_id) = seed_crew_and_flight(&mut persistence);

    let assignment_id = persistence
        .create_assignment(crew_id, flight_id, "2026-09-01")
        .unwrap();

    let assignment = persistence
        .get_assignment_by_id(assignment_id)
        .unwrap()
        .unwrap();
    assert_eq!(assignment.crew_id, crew_id);
    assert_eq!(assignment.flight_id, flight_id);
    assert_eq!(assignment.assignment_date, "2026-09-01");
}

#[test]
fn test_create_assignment_with_unknown_crew_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let flight_id = persistence
        .create_flight("CO101", "SEA", "DEN", "Scheduled")
        .unwrap();

    let result = persistence.create_assignment(9999, flight_id, "2026-09-01");
    assert!(matches!(
        result,
        Err(PersistenceError::ForeignKeyViolation(_))
    ));
}

#[test]
fn test_create_assignment_with_unknown_flight_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let crew_id = persistence
        .create_crew_member(&sample_crew_profile("jordan@crewops.test"), "pw", None)
        .unwrap();

    let result = persistence.create_assignment(crew_id, 9999, "2026-09-01");
    assert!(matches!(
        result,
        Err(PersistenceError::ForeignKeyViolation(_))
    ));
}

#[test]
fn test_list_assignments_scoped_to_crew_member() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (first_crew, flight_id) = seed_crew_and_flight(&mut persistence);
    let second_crew = persistence
        .create_crew_member(&sample_crew_profile("amara@crewops.test"), "pw", None)
        .unwrap();

    persistence
        .create_assignment(first_crew, flight_id, "2026-09-01")
        .unwrap();
    persistence
        .create_assignment(first_crew, flight_id, "2026-09-03")
        .unwrap();
    persistence
        .create_assignment(second_crew, flight_id, "2026-09-02")
        .unwrap();

    let all = persistence.list_assignments(None).unwrap();
    assert_eq!(all.len(), 3);
    // Ordered by assignment date
    assert_eq!(all[0].assignment_date, "2026-09-01");
    assert_eq!(all[1].assignment_date, "2026-09-02");
    assert_eq!(all[2].assignment_date, "2026-09-03");

    let first_only = persistence.list_assignments(Some(first_crew)).unwrap();
    assert_eq!(first_only.len(), 2);
    assert!(first_only.iter().all(|a| a.crew_id == first_crew));

    let second_only = persistence.list_assignments(Some(second_crew)).unwrap();
    assert_eq!(second_only.len(), 1);
    assert_eq!(second_only[0].assignment_date, "2026-09-02");
}

#[test]
fn test_update_assignment() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (crew_id, flight_id) = seed_crew_and_flight(&mut persistence);
    let other_flight = persistence
        .create_flight("CO202", "DEN", "ORD", "Scheduled")
        .unwrap();

    let assignment_id = persistence
        .create_assignment(crew_id, flight_id, "2026-09-01")
        .unwrap();

    persistence
        .update_assignment(assignment_id, crew_id, other_flight, "2026-09-05")
        .unwrap();

    let assignment = persistence
        .get_assignment_by_id(assignment_id)
        .unwrap()
        .unwrap();
    assert_eq!(assignment.flight_id, other_flight);
    assert_eq!(assignment.assignment_date, "2026-09-05");
}

#[test]
fn test_delete_assignment() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (crew_id, flight_id) = seed_crew_and_flight(&mut persistence);

    let assignment_id = persistence
        .create_assignment(crew_id, flight_id, "2026-09-01")
        .unwrap();

    persistence.delete_assignment(assignment_id).unwrap();
    assert!(
        persistence
            .get_assignment_by_id(assignment_id)
            .unwrap()
            .is_none()
    );

    let result = persistence.delete_assignment(assignment_id);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}
