// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for duty log persistence operations.

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
fn test_create_duty_log_and_get_by_id() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (crew_id, flight_id) = seed_crew_and_flight(&mut persistence);

    let duty_log_id = persistence
        .create_duty_log(crew_id, flight_id, "2026-09-01", "Completed")
        .unwrap();

    let entry = persistence.get_duty_log_by_id(duty_log_id).unwrap().unwrap();
    assert_eq!(entry.crew_id, crew_id);
    assert_eq!(entry.flight_id, flight_id);
    assert_eq!(entry.duty_date, "2026-09-01");
    assert_eq!(entry.duty_status, "Completed");
}

#[test]
fn test_create_duty_log_with_unknown_flight_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let crew_id = persistence
        .create_crew_member(&sample_crew_profile("jordan@crewops.test"), "pw", None)
        .unwrap();

    let result = persistence.create_duty_log(crew_id, 9999, "2026-09-01", "Completed");
    assert!(matches!(
        result,
        Err(PersistenceError::ForeignKeyViolation(_))
    ));
}

#[test]
fn test_list_duty_logs_scoped_to_crew_member() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (first_crew, flight_id) = seed_crew_and_flight(&mut persistence);
    let second_crew = persistence
        .create_crew_member(&sample_crew_profile("amara@crewops.test"), "pw", None)
        .unwrap();

    persistence
        .create_duty_log(first_crew, flight_id, "2026-09-02", "Completed")
        .unwrap();
    persistence
        .create_duty_log(second_crew, flight_id, "2026-09-01", "Completed")
        .unwrap();

    let all = persistence.list_duty_logs(None).unwrap();
    assert_eq!(all.len(), 2);
    // Ordered by duty date
    assert_eq!(all[0].duty_date, "2026-09-01");

    let first_only = persistence.list_duty_logs(Some(first_crew)).unwrap();
    assert_eq!(first_only.len(), 1);
    assert_eq!(first_only[0].crew_id, first_crew);
}

#[test]
fn test_update_duty_log() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (crew_id, flight_id) = seed_crew_and_flight(&mut persistence);

    let duty_log_id = persistence
        .create_duty_log(crew_id, flight_id, "2026-09-01", "Scheduled")
        .unwrap();

    persistence
        .update_duty_log(duty_log_id, crew_id, flight_id, "2026-09-01", "Completed")
        .unwrap();

    let entry = persistence.get_duty_log_by_id(duty_log_id).unwrap().unwrap();
    assert_eq!(entry.duty_status, "Completed");
}

#[test]
fn test_delete_duty_log() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (crew_id, flight_id) = seed_crew_and_flight(&mut persistence);

    let duty_log_id = persistence
        .create_duty_log(crew_id, flight_id, "2026-09-01", "Completed")
        .unwrap();

    persistence.delete_duty_log(duty_log_id).unwrap();
    assert!(
        persistence
            .get_duty_log_by_id(duty_log_id)
            .unwrap()
            .is_none()
    );

    let result = persistence.delete_duty_log(duty_log_id);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}
