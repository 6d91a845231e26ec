// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flight mutations.

use diesel::prelude::*;
use diesel::{Connection, MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::DeletePolicy;
use crate::backend::PersistenceBackend;
use crate::diesel_schema::{crew_assignments, duty_logs, flights};
use crate::error::PersistenceError;
use crate::queries::flights::{is_flight_referenced_mysql, is_flight_referenced_sqlite};

backend_fn! {
/// Creates a new flight.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `flight_number` - The flight number
/// * `departure` - The departure location
/// * `arrival` - The arrival location
/// * `status` - The flight status
///
/// # Errors
///
/// Returns an error if the flight cannot be created.
pub fn create_flight(
    conn: &mut _,
    flight_number: &str,
    departure: &str,
    arrival: &str,
    status: &str,
) -> Result<i64, PersistenceError> {
    info!("Creating flight: {}", flight_number);

    diesel::insert_into(flights::table)
        .values((
            flights::flight_number.eq(flight_number),
            flights::departure.eq(departure),
            flights::arrival.eq(arrival),
            flights::status.eq(status),
        ))
        .execute(conn)?;

    let flight_id: i64 = conn.get_last_insert_rowid()?;

    info!(flight_id, "Flight created successfully");
    Ok(flight_id)
}
}

backend_fn! {
/// Updates a flight.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `flight_id` - The flight ID
/// * `flight_number` - The new flight number
/// * `departure` - The new departure location
/// * `arrival` - The new arrival location
/// * `status` - The new status
///
/// # Errors
///
/// Returns an error if the flight does not exist or the update fails.
pub fn update_flight(
    conn: &mut _,
    flight_id: i64,
    flight_number: &str,
    departure: &str,
    arrival: &str,
    status: &str,
) -> Result<(), PersistenceError> {
    debug!("Updating flight ID: {}", flight_id);

    let rows_affected: usize = diesel::update(flights::table)
        .filter(flights::flight_id.eq(flight_id))
        .set((
            flights::flight_number.eq(flight_number),
            flights::departure.eq(departure),
            flights::arrival.eq(arrival),
            flights::status.eq(status),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Flight with ID {flight_id} not found"
        )));
    }

    Ok(())
}
}

/// Deletes a flight under the given delete policy (`SQLite` version).
///
/// With `Restrict`, the delete fails if any assignment or duty log still
/// references the flight. With `Cascade`, dependent rows are removed in
/// the same transaction as the flight.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `flight_id` - The flight ID
/// * `policy` - The delete policy to apply
///
/// # Errors
///
/// Returns an error if:
/// - The policy is `Restrict` and dependent rows exist
/// - The flight does not exist
/// - The database operation fails
pub fn delete_flight_sqlite(
    conn: &mut SqliteConnection,
    flight_id: i64,
    policy: DeletePolicy,
) -> Result<(), PersistenceError> {
    info!(
        "Attempting to delete flight ID: {} with policy {:?}",
        flight_id, policy
    );

    match policy {
        DeletePolicy::Restrict => {
            if is_flight_referenced_sqlite(conn, flight_id)? {
                return Err(PersistenceError::ReferencedRowExists {
                    entity: "flight",
                    id: flight_id,
                });
            }

            let rows_affected: usize = diesel::delete(flights::table)
                .filter(flights::flight_id.eq(flight_id))
                .execute(conn)?;

            if rows_affected == 0 {
                return Err(PersistenceError::NotFound(format!(
                    "Flight with ID {flight_id} not found"
                )));
            }
        }
        DeletePolicy::Cascade => {
            conn.transaction::<_, PersistenceError, _>(|conn| {
                diesel::delete(crew_assignments::table)
                    .filter(crew_assignments::flight_id.eq(flight_id))
                    .execute(conn)?;
                diesel::delete(duty_logs::table)
                    .filter(duty_logs::flight_id.eq(flight_id))
                    .execute(conn)?;

                let rows_affected: usize = diesel::delete(flights::table)
                    .filter(flights::flight_id.eq(flight_id))
                    .execute(conn)?;

                if rows_affected == 0 {
                    return Err(PersistenceError::NotFound(format!(
                        "Flight with ID {flight_id} not found"
                    )));
                }

                Ok(())
            })?;
        }
    }

    info!("Deleted flight ID: {}", flight_id);
    Ok(())
}

/// Deletes a flight under the given delete policy (`MySQL` version).
///
/// See `delete_flight_sqlite` for policy semantics.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `flight_id` - The flight ID
/// * `policy` - The delete policy to apply
///
/// # Errors
///
/// Returns an error if:
/// - The policy is `Restrict` and dependent rows exist
/// - The flight does not exist
/// - The database operation fails
pub fn delete_flight_mysql(
    conn: &mut MysqlConnection,
    flight_id: i64,
    policy: DeletePolicy,
) -> Result<(), PersistenceError> {
    info!(
        "Attempting to delete flight ID: {} with policy {:?}",
        flight_id, policy
    );

    match policy {
        DeletePolicy::Restrict => {
            if is_flight_referenced_mysql(conn, flight_id)? {
                return Err(PersistenceError::ReferencedRowExists {
                    entity: "flight",
                    id: flight_id,
                });
            }

            let rows_affected: usize = diesel::delete(flights::table)
                .filter(flights::flight_id.eq(flight_id))
                .execute(conn)?;

            if rows_affected == 0 {
                return Err(PersistenceError::NotFound(format!(
                    "Flight with ID {flight_id} not found"
                )));
            }
        }
        DeletePolicy::Cascade => {
            conn.transaction::<_, PersistenceError, _>(|conn| {
                diesel::delete(crew_assignments::table)
                    .filter(crew_assignments::flight_id.eq(flight_id))
                    .execute(conn)?;
                diesel::delete(duty_logs::table)
                    .filter(duty_logs::flight_id.eq(flight_id))
                    .execute(conn)?;

                let rows_affected: usize = diesel::delete(flights::table)
                    .filter(flights::flight_id.eq(flight_id))
                    .execute(conn)?;

                if rows_affected == 0 {
                    return Err(PersistenceError::NotFound(format!(
                        "Flight with ID {flight_id} not found"
                    )));
                }

                Ok(())
            })?;
        }
    }

    info!("Deleted flight ID: {}", flight_id);
    Ok(())
}
