// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for delete policy behavior on crew members and flights.

use super::sample_crew_profile;
use crate::{DeletePolicy, Persistence, PersistenceError};

fn seed_referenced_crew(persistence: &mut Persistence) -> (i64, i64) {
    let crew_id = persistence
        .create_crew_member(&sample_crew_profile("jordan@crewops.test"), "pw", None)
        .unwrap();
    let flight_id = persistence
        .create_flight("CO101", "SEA", "DEN", "Scheduled")
        .unwrap();
    persistence
        .create_assignment(crew_id, flight_id, "2026-09-01")
        .unwrap();
    persistence
        .create_leave(crew_id, "2026-10-01", "2026-10-07")
        .unwrap();
    persistence
        .create_duty_log(crew_id, flight_id, "2026-09-01", "Completed")
        .unwrap();
    (crew_id, flight_id)
}

#[test]
fn test_restrict_refuses_delete_of_referenced_crew_member() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (crew_id, _) = seed_referenced_crew(&mut persistence);

    let result = persistence.delete_crew_member(crew_id, DeletePolicy::Restrict);
    assert!(matches!(
        result,
        Err(PersistenceError::ReferencedRowExists { entity: "crew member", .. })
    ));

    // Nothing was deleted
    assert!(persistence.get_crew_member_by_id(crew_id).unwrap().is_some());
    assert_eq!(persistence.list_assignments(Some(crew_id)).unwrap().len(), 1);
}

#[test]
fn test_cascade_deletes_crew_member_and_dependents() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (crew_id, flight_id) = seed_referenced_crew(&mut persistence);

    persistence
        .delete_crew_member(crew_id, DeletePolicy::Cascade)
        .unwrap();

    assert!(persistence.get_crew_member_by_id(crew_id).unwrap().is_none());
    assert!(persistence.list_assignments(Some(crew_id)).unwrap().is_empty());
    assert!(persistence.list_leaves(Some(crew_id)).unwrap().is_empty());
    assert!(persistence.list_duty_logs(Some(crew_id)).unwrap().is_empty());

    // The flight itself is untouched
    assert!(persistence.get_flight_by_id(flight_id).unwrap().is_some());
}

#[test]
fn test_restrict_refuses_delete_of_referenced_flight() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (_, flight_id) = seed_referenced_crew(&mut persistence);

    let result = persistence.delete_flight(flight_id, DeletePolicy::Restrict);
    assert!(matches!(
        result,
        Err(PersistenceError::ReferencedRowExists { entity: "flight", .. })
    ));
    assert!(persistence.get_flight_by_id(flight_id).unwrap().is_some());
}

#[test]
fn test_cascade_deletes_flight_and_dependents() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (crew_id, flight_id) = seed_referenced_crew(&mut persistence);

    persistence
        .delete_flight(flight_id, DeletePolicy::Cascade)
        .unwrap();

    assert!(persistence.get_flight_by_id(flight_id).unwrap().is_none());
    assert!(persistence.list_assignments(None).unwrap().is_empty());
    assert!(persistence.list_duty_logs(None).unwrap().is_empty());

    // Leaves reference only the crew member and survive a flight cascade
    assert_eq!(persistence.list_leaves(Some(crew_id)).unwrap().len(), 1);
    assert!(persistence.get_crew_member_by_id(crew_id).unwrap().is_some());
}

#[test]
fn test_restrict_delete_of_missing_crew_member_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.delete_crew_member(9999, DeletePolicy::Restrict);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_cascade_delete_of_unreferenced_flight_succeeds() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let flight_id = persistence
        .create_flight("CO101", "SEA", "DEN", "Scheduled")
        .unwrap();

    persistence
        .delete_flight(flight_id, DeletePolicy::Cascade)
        .unwrap();
    assert!(persistence.get_flight_by_id(flight_id).unwrap().is_none());
}
