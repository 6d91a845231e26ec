// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flight queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crewops_domain::Flight;

use crate::diesel_schema::{crew_assignments, duty_logs, flights};
use crate::error::PersistenceError;

/// Diesel Queryable struct for flight rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = flights)]
struct FlightRow {
    flight_id: i64,
    flight_number: String,
    departure: String,
    arrival: String,
    status: String,
}

impl FlightRow {
    fn into_flight(self) -> Flight {
        Flight {
            flight_id: self.flight_id,
            flight_number: self.flight_number,
            departure: self.departure,
            arrival: self.arrival,
            status: self.status,
        }
    }
}

backend_fn! {
/// Retrieves a flight by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `flight_id` - The flight ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the flight is not found.
pub fn get_flight_by_id(conn: &mut _, flight_id: i64) -> Result<Option<Flight>, PersistenceError> {
    debug!("Looking up flight by ID: {}", flight_id);

    let result: Result<FlightRow, diesel::result::Error> = flights::table
        .filter(flights::flight_id.eq(flight_id))
        .select(FlightRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_flight())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all flights, ordered by flight number.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_flights(conn: &mut _) -> Result<Vec<Flight>, PersistenceError> {
    debug!("Listing all flights");

    let rows: Vec<FlightRow> = flights::table
        .select(FlightRow::as_select())
        .order_by(flights::flight_number.asc())
        .then_order_by(flights::flight_id.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(FlightRow::into_flight).collect())
}
}

backend_fn! {
/// Checks whether any assignment or duty log references a flight.
///
/// Used by the restrict delete policy before removing a flight.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `flight_id` - The flight ID to check
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn is_flight_referenced(conn: &mut _, flight_id: i64) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    debug!("Checking references to flight ID: {}", flight_id);

    let assignment_count: i64 = crew_assignments::table
        .filter(crew_assignments::flight_id.eq(flight_id))
        .select(count(crew_assignments::assignment_id))
        .first(conn)?;

    let duty_log_count: i64 = duty_logs::table
        .filter(duty_logs::flight_id.eq(flight_id))
        .select(count(duty_logs::duty_log_id))
        .first(conn)?;

    Ok(assignment_count > 0 || duty_log_count > 0)
}
}
