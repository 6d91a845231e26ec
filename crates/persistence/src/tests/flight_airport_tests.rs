// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for flight and airport persistence operations.

use crate::{Persistence, PersistenceError};

#[test]
fn test_create_flight_and_get_by_id() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let flight_id = persistence
        .create_flight("CO101", "SEA", "DEN", "Scheduled")
        .unwrap();

    let flight = persistence.get_flight_by_id(flight_id).unwrap().unwrap();
    assert_eq!(flight.flight_id, flight_id);
    assert_eq!(flight.flight_number, "CO101");
    assert_eq!(flight.departure, "SEA");
    assert_eq!(flight.arrival, "DEN");
    assert_eq!(flight.status, "Scheduled");
}

#[test]
fn test_get_missing_flight_returns_none() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    assert!(persistence.get_flight_by_id(9999).unwrap().is_none());
}

#[test]
fn test_update_flight() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let flight_id = persistence
        .create_flight("CO101", "SEA", "DEN", "Scheduled")
        .unwrap();

    persistence
        .update_flight(flight_id, "CO101", "SEA", "ORD", "Delayed")
        .unwrap();

    let flight = persistence.get_flight_by_id(flight_id).unwrap().unwrap();
    assert_eq!(flight.arrival, "ORD");
    assert_eq!(flight.status, "Delayed");
}

#[test]
fn test_update_missing_flight_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.update_flight(9999, "CO000", "SEA", "DEN", "Scheduled");
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_list_flights_ordered_by_flight_number() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence
        .create_flight("CO900", "LAX", "JFK", "Scheduled")
        .unwrap();
    persistence
        .create_flight("CO101", "SEA", "DEN", "Scheduled")
        .unwrap();

    let flights = persistence.list_flights().unwrap();
    assert_eq!(flights.len(), 2);
    assert_eq!(flights[0].flight_number, "CO101");
    assert_eq!(flights[1].flight_number, "CO900");
}

#[test]
fn test_create_airport_and_get_by_id() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let airport_id = persistence
        .create_airport("SEA", "Seattle-Tacoma International", "Seattle, WA")
        .unwrap();

    let airport = persistence.get_airport_by_id(airport_id).unwrap().unwrap();
    assert_eq!(airport.airport_code, "SEA");
    assert_eq!(airport.airport_name, "Seattle-Tacoma International");
    assert_eq!(airport.location, "Seattle, WA");
}

#[test]
fn test_update_airport() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let airport_id = persistence
        .create_airport("SEA", "Seattle-Tacoma", "Seattle, WA")
        .unwrap();

    persistence
        .update_airport(airport_id, "SEA", "Seattle-Tacoma International", "SeaTac, WA")
        .unwrap();

    let airport = persistence.get_airport_by_id(airport_id).unwrap().unwrap();
    assert_eq!(airport.airport_name, "Seattle-Tacoma International");
    assert_eq!(airport.location, "SeaTac, WA");
}

#[test]
fn test_delete_airport() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let airport_id = persistence
        .create_airport("SEA", "Seattle-Tacoma International", "Seattle, WA")
        .unwrap();

    persistence.delete_airport(airport_id).unwrap();
    assert!(persistence.get_airport_by_id(airport_id).unwrap().is_none());

    let result = persistence.delete_airport(airport_id);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_list_airports_ordered_by_code() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence
        .create_airport("SEA", "Seattle-Tacoma International", "Seattle, WA")
        .unwrap();
    persistence
        .create_airport("DEN", "Denver International", "Denver, CO")
        .unwrap();

    let airports = persistence.list_airports().unwrap();
    assert_eq!(airports.len(), 2);
    assert_eq!(airports[0].airport_code, "DEN");
    assert_eq!(airports[1].airport_code, "SEA");
}
